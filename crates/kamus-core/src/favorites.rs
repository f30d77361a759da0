/// Insertion-ordered set of favorite words
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    words: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the word was inserted. Blank input and duplicates are ignored.
    pub fn add(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || self.contains(word) {
            return false;
        }

        self.words.push(word.to_string());
        true
    }

    /// Returns true if the word was present
    pub fn remove(&mut self, word: &str) -> bool {
        let word = word.trim();
        match self.words.iter().position(|w| w == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
