use std::fmt;

use serde::Serialize;

/// Longest accepted lookup key, in characters
pub const MAX_WORD_LEN: usize = 50;

/// A trimmed, non-empty lookup key of at most [`MAX_WORD_LEN`] characters.
///
/// Casing is preserved; the dictionary client folds case on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn parse(raw: &str) -> Result<Self, WordError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let len = trimmed.chars().count();
        if len > MAX_WORD_LEN {
            return Err(WordError::TooLong { len });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word cannot be empty")]
    Empty,

    #[error("word is too long")]
    TooLong { len: usize },
}
