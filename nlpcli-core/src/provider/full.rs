//! Backend with punctuation-aware tokenization and entity recognition

use unicode_segmentation::UnicodeSegmentation;

use super::{
    BasicProvider, Capability, EntityMention, EntityRecognizer, Language, NlpProvider,
    SentimentScore,
};
use crate::error::Result;

#[derive(Debug)]
pub struct FullProvider {
    base: BasicProvider,
    recognizer: EntityRecognizer,
}

impl FullProvider {
    pub fn new(language: Language) -> std::result::Result<Self, regex::Error> {
        Ok(Self::from_parts(
            BasicProvider::new(language),
            EntityRecognizer::new()?,
        ))
    }

    /// Add entity recognition on top of `base`
    pub fn from_parts(base: BasicProvider, recognizer: EntityRecognizer) -> Self {
        Self { base, recognizer }
    }
}

impl NlpProvider for FullProvider {
    fn name(&self) -> &'static str {
        "full"
    }

    fn supports(&self, _capability: Capability) -> bool {
        true
    }

    /// Word-boundary segments, keeping punctuation and dropping whitespace
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn sentiment(&self, sentence: &str) -> SentimentScore {
        self.base.sentiment(sentence)
    }

    fn entities(&self, sentence: &str) -> Result<Vec<EntityMention>> {
        Ok(self.recognizer.recognize(sentence))
    }

    fn remove_stopwords(&self, sentence: &str) -> String {
        self.base.remove_stopwords(sentence)
    }

    fn normalize(&self, sentence: &str) -> String {
        self.base.normalize(sentence)
    }

    fn stem(&self, sentence: &str) -> String {
        self.base.stem(sentence)
    }
}
