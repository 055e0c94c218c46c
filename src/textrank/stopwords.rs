//! English stopword filtering backed by the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{LANGUAGE, get};

#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English).iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Whether a lowercase token may become a graph node: not a stopword and
    /// not a bare number.
    pub fn is_candidate(&self, word: &str) -> bool {
        !word.is_empty() && !word.chars().all(char::is_numeric) && !self.is_stopword(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("compiler"));
    }

    #[test]
    fn test_candidates_exclude_numbers() {
        let filter = StopwordFilter::english();
        assert!(filter.is_candidate("bitcoin"));
        assert!(!filter.is_candidate("2021"));
        assert!(!filter.is_candidate("of"));
        assert!(!filter.is_candidate(""));
        assert!(filter.is_candidate("covid19"));
    }
}
