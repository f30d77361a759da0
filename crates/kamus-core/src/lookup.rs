use kamus_dictionary::{Entries, LookupError};
use serde::Serialize;

use crate::word::WordError;

/// Outcome of a search: the provider's entries verbatim, or `{"error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Entries(Entries),
    Error { error: String },
}

impl LookupResult {
    pub fn error(message: impl Into<String>) -> Self {
        LookupResult::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LookupResult::Error { .. })
    }
}

impl From<WordError> for LookupResult {
    fn from(err: WordError) -> Self {
        LookupResult::error(err.to_string())
    }
}

impl From<LookupError> for LookupResult {
    fn from(err: LookupError) -> Self {
        LookupResult::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_entries_serialize_verbatim() {
        let data = json!([{ "word": "hello", "phonetic": "həˈləʊ" }]);
        let result = LookupResult::Entries(data.clone());

        assert_eq!(serde_json::to_value(&result).unwrap(), data);
    }

    #[test]
    fn test_error_serializes_as_error_field() {
        let result = LookupResult::from(WordError::Empty);

        assert!(result.is_error());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "error": "word cannot be empty" })
        );
    }
}
