use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_index_path() -> String {
    "index.html".to_string()
}

fn default_cors_permissive() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Front-end page served on `GET /`
    #[serde(default = "default_index_path")]
    pub index_path: String,
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            index_path: lookup("INDEX_PATH").unwrap_or(defaults.index_path),
            cors_permissive: lookup("CORS_PERMISSIVE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cors_permissive),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            index_path: default_index_path(),
            cors_permissive: default_cors_permissive(),
        }
    }
}
