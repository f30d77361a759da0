use std::collections::VecDeque;

use crate::word::Word;

/// Maximum number of successful lookups kept
pub const HISTORY_CAPACITY: usize = 50;

/// Number of entries reported by [`SearchHistory::recent`]
pub const RECENT_LIMIT: usize = 10;

/// Successful lookups, oldest first, evicting from the front once full
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<Word>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, word: Word) {
        self.entries.push_back(word);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Last `limit` entries in chronological order
    pub fn last(&self, limit: usize) -> Vec<Word> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn recent(&self) -> Vec<Word> {
        self.last(RECENT_LIMIT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|w| w.as_str() == word)
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new()
    }
}
