use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::server::ServerConfig;

pub mod dictionary;
pub mod server;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,

    /// Name reported by the health endpoint
    pub service_name: String,
    /// Carried for parity with deployments that set it, nothing signs with it yet
    #[serde(skip_serializing, default)]
    pub secret_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// `new()` reads the process environment through this, tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name =
            lookup("SERVICE_NAME").unwrap_or_else(|| "Kamus Modern 2025".to_string());

        let secret_key =
            lookup("SECRET_KEY").unwrap_or_else(|| "kamus-modern-2025-secret-key".to_string());

        Config {
            server: ServerConfig::from_lookup(&lookup),
            dictionary: DictionaryConfig::from_lookup(&lookup),

            service_name,
            secret_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
