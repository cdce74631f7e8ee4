//! Stopword removal, normalization and stemming

use std::collections::HashSet;
use std::fmt;

use rust_stemmers::Stemmer;
use stop_words::get;
use unicode_segmentation::UnicodeSegmentation;

use super::Language;

/// Sentence transforms shared by both backends
pub struct TextCleaner {
    language: Language,
    /// Lowercase stopwords
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCleaner")
            .field("language", &self.language)
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl TextCleaner {
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stopword_language())
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self {
            language,
            stopwords,
            stemmer: Stemmer::create(language.stemmer_algorithm()),
        }
    }

    /// Check if a word is a stopword, ignoring case and surrounding punctuation
    pub fn is_stopword(&self, word: &str) -> bool {
        let core = word.trim_matches(|c: char| !c.is_alphanumeric());
        !core.is_empty() && self.stopwords.contains(&core.to_lowercase())
    }

    /// Drop whitespace-separated tokens whose word is a stopword
    ///
    /// Punctuation attached to a kept token stays attached.
    pub fn remove_stopwords(&self, sentence: &str) -> String {
        sentence
            .split_whitespace()
            .filter(|token| !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lowercase, drop punctuation and collapse whitespace
    pub fn normalize(&self, sentence: &str) -> String {
        let stripped: String = sentence
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Stem every word; punctuation is dropped
    pub fn stem(&self, sentence: &str) -> String {
        sentence
            .unicode_words()
            .map(|word| self.stemmer.stem(&word.to_lowercase()).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> TextCleaner {
        TextCleaner::new(Language::English)
    }

    #[test]
    fn test_remove_stopwords() {
        let cleaner = english();
        let cleaned = cleaner.remove_stopwords("The fox and the dog.");
        let tokens: Vec<&str> = cleaned.split(' ').collect();
        assert!(tokens.contains(&"fox"));
        assert!(tokens.contains(&"dog."));
        assert!(!tokens.iter().any(|t| cleaner.is_stopword(t)));
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        let cleaner = english();
        assert_eq!(cleaner.remove_stopwords("This is great!"), "great!");
        assert_eq!(
            cleaner.remove_stopwords("The quick brown fox jumps over the lazy dog."),
            "quick brown fox jumps lazy dog."
        );
        for word in ["good", "best", "new", "world", "state", "important", "run"] {
            assert!(!cleaner.is_stopword(word), "{word} should be kept");
        }
    }

    #[test]
    fn test_remove_stopwords_keeps_order() {
        let cleaner = english();
        let cleaned = cleaner.remove_stopwords("the fox is chasing the dog");
        let fox = cleaned.find("fox").unwrap();
        let dog = cleaned.find("dog").unwrap();
        assert!(fox < dog);
        assert!(!cleaned.contains("the"));
    }

    #[test]
    fn test_stopword_check_ignores_case_and_punctuation() {
        let cleaner = english();
        assert!(cleaner.is_stopword("The"));
        assert!(cleaner.is_stopword("(and,"));
        assert!(!cleaner.is_stopword("fox"));
        assert!(!cleaner.is_stopword("..."));
    }

    #[test]
    fn test_normalize() {
        let cleaner = english();
        assert_eq!(
            cleaner.normalize("  Hello,   WORLD!  It's   fine. "),
            "hello world its fine"
        );
    }

    #[test]
    fn test_normalize_unicode() {
        let cleaner = english();
        assert_eq!(cleaner.normalize("Café DÉJÀ-vu"), "café déjàvu");
    }

    #[test]
    fn test_stem() {
        let cleaner = english();
        assert_eq!(cleaner.stem("Running dogs jumped."), "run dog jump");
    }

    #[test]
    fn test_empty_inputs() {
        let cleaner = english();
        assert_eq!(cleaner.remove_stopwords(""), "");
        assert_eq!(cleaner.normalize(""), "");
        assert_eq!(cleaner.stem(""), "");
    }

    #[test]
    fn test_other_language() {
        let cleaner = TextCleaner::new(Language::French);
        assert!(cleaner.is_stopword("le"));
    }
}
