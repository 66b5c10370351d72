use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinPrice {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
}

impl CoinPrice {
    pub fn new(id: &str, name: &str, price: f64, change: f64) -> Self {
        CoinPrice {
            id: id.to_string(),
            name: name.to_string(),
            price,
            change,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethod {
    pub name: &'static str,
    pub number: &'static str,
}

pub static PAYMENT_METHODS: [PaymentMethod; 4] = [
    PaymentMethod { name: "bKash", number: "01917142350" },
    PaymentMethod { name: "Rocket", number: "01306755110" },
    PaymentMethod { name: "Nagad", number: "01865467486" },
    PaymentMethod { name: "Upay", number: "01865467486" },
];

pub fn initial_prices() -> Vec<CoinPrice> {
    vec![
        CoinPrice::new("btc", "Bitcoin (BTC)", 117926.99, 2.45),
        CoinPrice::new("eth", "Ethereum (ETH)", 3647.14, -0.59),
        CoinPrice::new("bnb", "BNB", 790.52, 4.25),
    ]
}
