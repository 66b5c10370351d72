// config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub price_tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_dir: PathBuf::from("data"),
            jwt_secret: "your-secret-key-change-in-production".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            price_tick: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = AppConfig::default();

        let config = AppConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            jwt_secret: lookup("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_hours: parse_or(&lookup, "TOKEN_TTL_HOURS", defaults.token_ttl_hours)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
            price_tick: Duration::from_secs(parse_or(
                &lookup,
                "PRICE_TICK_SECS",
                defaults.price_tick.as_secs(),
            )?),
        };

        if !(4..=31).contains(&config.bcrypt_cost) {
            return Err(AppError::configuration(format!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                config.bcrypt_cost
            )));
        }
        if config.price_tick.is_zero() {
            return Err(AppError::configuration("PRICE_TICK_SECS must be positive"));
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn get_config_info(&self) -> serde_json::Value {
        serde_json::json!({
            "host": self.host,
            "port": self.port,
            "data_dir": self.data_dir.display().to_string(),
            "token_ttl_hours": self.token_ttl_hours,
            "bcrypt_cost": self.bcrypt_cost,
            "price_tick_secs": self.price_tick.as_secs(),
            "jwt_secret_set": self.jwt_secret != AppConfig::default().jwt_secret,
        })
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("{} must be a number, got '{}'", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.price_tick, Duration::from_secs(10));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("DATA_DIR", "/tmp/ax"),
            ("BCRYPT_COST", "6"),
            ("PRICE_TICK_SECS", "2"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ax"));
        assert_eq!(config.bcrypt_cost, 6);
        assert_eq!(config.price_tick, Duration::from_secs(2));
    }

    #[test]
    fn bad_numbers_are_configuration_errors() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));

        let err = AppConfig::from_lookup(lookup(&[("BCRYPT_COST", "2")])).unwrap_err();
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }
}
