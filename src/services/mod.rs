pub mod ledger;
pub mod password;
pub mod price_feed;
pub mod token;
