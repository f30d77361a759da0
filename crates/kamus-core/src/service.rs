use std::sync::Arc;

use kamus_dictionary::DictionaryProvider;
use tokio::sync::RwLock;

use crate::favorites::Favorites;
use crate::history::SearchHistory;
use crate::lookup::LookupResult;
use crate::word::Word;

/// Owns the search history and favorites; every mutation goes through here.
///
/// Created once at startup and shared behind an `Arc`. State lives only as
/// long as the process.
pub struct LookupService {
    provider: Arc<dyn DictionaryProvider>,
    history: RwLock<SearchHistory>,
    favorites: RwLock<Favorites>,
}

impl LookupService {
    pub fn new(provider: Arc<dyn DictionaryProvider>) -> Self {
        Self {
            provider,
            history: RwLock::new(SearchHistory::new()),
            favorites: RwLock::new(Favorites::new()),
        }
    }

    /// Validate, look the word up, and record it in history on success
    pub async fn search(&self, raw: &str) -> LookupResult {
        let word = match Word::parse(raw) {
            Ok(word) => word,
            Err(e) => {
                tracing::debug!("rejected search input: {}", e);
                return e.into();
            }
        };

        // No lock is held across the outbound call
        match self.provider.lookup(word.as_str()).await {
            Ok(entries) => {
                tracing::info!("lookup succeeded for '{}'", word);
                self.history.write().await.push(word);
                LookupResult::Entries(entries)
            }
            Err(e) => {
                tracing::warn!("lookup failed for '{}': {}", word, e);
                e.into()
            }
        }
    }

    pub async fn add_favorite(&self, raw: &str) -> Vec<String> {
        let mut favorites = self.favorites.write().await;
        if favorites.add(raw) {
            tracing::debug!("added favorite '{}'", raw.trim());
        }
        favorites.to_vec()
    }

    pub async fn remove_favorite(&self, raw: &str) -> Vec<String> {
        let mut favorites = self.favorites.write().await;
        if favorites.remove(raw) {
            tracing::debug!("removed favorite '{}'", raw.trim());
        }
        favorites.to_vec()
    }

    pub async fn favorites(&self) -> Vec<String> {
        self.favorites.read().await.to_vec()
    }

    /// Most recent successful lookups, oldest first
    pub async fn history(&self) -> Vec<Word> {
        self.history.read().await.recent()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use kamus_dictionary::{Entries, LookupError, ProviderMetadata};
    use serde_json::json;

    use super::*;
    use crate::history::HISTORY_CAPACITY;

    /// Answers every word except "missing", counting calls
    #[derive(Default)]
    struct StubProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DictionaryProvider for StubProvider {
        async fn lookup(&self, word: &str) -> Result<Entries, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if word == "missing" {
                return Err(LookupError::NotFound {
                    status: reqwest::StatusCode::NOT_FOUND,
                });
            }
            Ok(json!([{ "word": word.to_lowercase() }]))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "stub".to_string(),
                base_url: "stub://".to_string(),
            }
        }
    }

    fn service() -> (Arc<StubProvider>, LookupService) {
        let provider = Arc::new(StubProvider::default());
        let service = LookupService::new(provider.clone());
        (provider, service)
    }

    fn strings(words: Vec<Word>) -> Vec<String> {
        words.into_iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_search_success_records_trimmed_word() {
        let (_, service) = service();

        let result = service.search("  Hello ").await;

        assert_eq!(result, LookupResult::Entries(json!([{ "word": "hello" }])));
        assert_eq!(strings(service.history().await), vec!["Hello"]);
    }

    #[tokio::test]
    async fn test_search_blank_skips_provider() {
        let (provider, service) = service();

        for input in ["", "   "] {
            let result = service.search(input).await;
            assert_eq!(result, LookupResult::error("word cannot be empty"));
        }

        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(service.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_too_long_skips_provider() {
        let (provider, service) = service();

        let result = service.search(&"x".repeat(51)).await;

        assert_eq!(result, LookupResult::error("word is too long"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(service.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_not_found_leaves_history() {
        let (_, service) = service();
        service.search("kept").await;

        let result = service.search("missing").await;

        assert_eq!(result, LookupResult::error("word not found in dictionary"));
        assert_eq!(strings(service.history().await), vec!["kept"]);
    }

    #[tokio::test]
    async fn test_history_cap_and_recent_window() {
        let (_, service) = service();
        for i in 1..=HISTORY_CAPACITY + 1 {
            service.search(&format!("w{}", i)).await;
        }

        let full = service.history.read().await;
        assert_eq!(full.len(), HISTORY_CAPACITY);
        assert!(!full.contains("w1"));
        assert!(full.contains("w51"));
        drop(full);

        let expected: Vec<String> = (42..=51).map(|i| format!("w{}", i)).collect();
        assert_eq!(strings(service.history().await), expected);
    }

    #[tokio::test]
    async fn test_favorites_scenario() {
        let (_, service) = service();

        assert_eq!(service.add_favorite("Rumah").await, vec!["Rumah"]);
        assert_eq!(service.favorites().await, vec!["Rumah"]);
        assert_eq!(service.add_favorite("Rumah").await, vec!["Rumah"]);
        assert_eq!(service.remove_favorite("Rumah").await, Vec::<String>::new());
        assert!(service.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_favorite_returns_current() {
        let (_, service) = service();
        service.add_favorite("a").await;

        assert_eq!(service.remove_favorite("b").await, vec!["a"]);
    }

    #[tokio::test]
    async fn test_concurrent_favorites_lose_no_updates() {
        let (_, service) = service();
        let service = Arc::new(service);

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..32 {
            let service = service.clone();
            tasks.spawn(async move { service.add_favorite(&format!("f{}", i)).await });
        }
        while tasks.join_next().await.is_some() {}

        // Order across tasks is unspecified, only the count is
        assert_eq!(service.favorites().await.len(), 32);
    }
}
