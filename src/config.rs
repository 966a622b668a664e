//! Runtime configuration read from the environment (and `.env`)

use std::time::Duration;

use thiserror::Error;

pub const URL_VAR: &str = "MONEY_GRAPH_URL";
pub const TIMEOUT_VAR: &str = "MONEY_GRAPH_TIMEOUT_SECS";
pub const DEFAULT_URL: &str = "http://localhost:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("MONEY_GRAPH_URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
    #[error("MONEY_GRAPH_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(URL_VAR).unwrap_or_else(|| DEFAULT_URL.to_string());
        let base_url = base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(base_url));
        }

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Config { base_url, timeout })
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_custom_values() {
        let config = Config::from_lookup(lookup(&[
            (URL_VAR, " https://money.example.org "),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://money.example.org");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[(URL_VAR, "localhost:8080")])),
            Err(ConfigError::InvalidUrl("localhost:8080".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])),
            Err(ConfigError::InvalidTimeout("soon".to_string()))
        );
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_lookup(lookup(&[(URL_VAR, ""), (TIMEOUT_VAR, " ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_URL);
        assert_eq!(config.timeout, None);
    }
}
