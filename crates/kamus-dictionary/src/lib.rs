mod client;

pub use client::FreeDictionaryClient;

/// Raw entry data as returned by the provider, passed through untouched
pub type Entries = serde_json::Value;

/// Dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Look up a single word. Callers pass the word already trimmed,
    /// providers are responsible for case folding.
    async fn lookup(&self, word: &str) -> Result<Entries, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

/// Display text of each variant is what ends up in the `error` field of
/// the JSON response, keep it client-facing.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("word not found in dictionary")]
    NotFound { status: reqwest::StatusCode },

    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}
