use std::env;

use crate::ledger::constants::settings::{
    CURRENCY_SYMBOL_KEY, DECIMAL_PLACES_KEY, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_PLACES,
    MAX_DECIMAL_PLACES, SEED_FRIENDS_KEY,
};

/// Session settings, read from the environment (and `.env` via dotenv in `main`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub currency_symbol: String,
    pub decimal_places: u32,
    pub seed_friends: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_places: DEFAULT_DECIMAL_PLACES,
            seed_friends: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Invalid values fall back to the defaults, they never stop the session.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_KEY) {
            config.currency_symbol = symbol;
        }

        if let Some(places) = lookup(DECIMAL_PLACES_KEY) {
            match places.trim().parse::<u32>() {
                Ok(val) if val <= MAX_DECIMAL_PLACES => config.decimal_places = val,
                _ => log::warn!(
                    "Ignoring {}={:?}, expected 0 to {}",
                    DECIMAL_PLACES_KEY,
                    places,
                    MAX_DECIMAL_PLACES
                ),
            }
        }

        if let Some(seed) = lookup(SEED_FRIENDS_KEY) {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.seed_friends = true,
                "0" | "false" | "no" | "off" => config.seed_friends = false,
                _ => log::warn!("Ignoring {}={:?}, expected true or false", SEED_FRIENDS_KEY, seed),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_reads_all_settings() {
        let config = config_from(&[
            (CURRENCY_SYMBOL_KEY, "$"),
            (DECIMAL_PLACES_KEY, "0"),
            (SEED_FRIENDS_KEY, "off"),
        ]);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.decimal_places, 0);
        assert!(!config.seed_friends);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[(DECIMAL_PLACES_KEY, "12"), (SEED_FRIENDS_KEY, "maybe")]);
        assert_eq!(config.decimal_places, DEFAULT_DECIMAL_PLACES);
        assert!(config.seed_friends);
    }
}
