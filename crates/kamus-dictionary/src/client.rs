use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::{DictionaryProvider, Entries, LookupError, ProviderMetadata};

/// Client for dictionaryapi.dev compatible endpoints: `GET {base}/{word}`
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn entry_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::Unexpected(format!("invalid dictionary URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Unexpected(format!("cannot append to URL {}", self.base_url))
            })?
            .pop_if_empty()
            .push(&word.to_lowercase());

        Ok(url)
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Entries, LookupError> {
        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("dictionary answered HTTP {} for '{}'", status, word);
            return Err(LookupError::NotFound { status });
        }

        response.json::<Entries>().await.map_err(|e| {
            if e.is_decode() {
                LookupError::Unexpected(format!("failed to parse response: {}", e))
            } else {
                LookupError::Connection(e)
            }
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}
