//! Word-only backend without entity recognition

use unicode_segmentation::UnicodeSegmentation;

use super::{
    require, Capability, EntityMention, Language, NlpProvider, SentimentAnalyzer,
    SentimentScore, TextCleaner,
};
use crate::error::Result;

#[derive(Debug)]
pub struct BasicProvider {
    cleaner: TextCleaner,
    analyzer: SentimentAnalyzer,
}

impl BasicProvider {
    pub fn new(language: Language) -> Self {
        Self::with_analyzer(language, SentimentAnalyzer::new())
    }

    /// Provider scoring sentiment with a custom lexicon
    pub fn with_analyzer(language: Language, analyzer: SentimentAnalyzer) -> Self {
        Self {
            cleaner: TextCleaner::new(language),
            analyzer,
        }
    }
}

impl NlpProvider for BasicProvider {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn supports(&self, capability: Capability) -> bool {
        capability != Capability::Entities
    }

    /// Words only; punctuation is dropped
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence.unicode_words().map(str::to_string).collect()
    }

    fn sentiment(&self, sentence: &str) -> SentimentScore {
        self.analyzer.score(sentence)
    }

    fn entities(&self, _sentence: &str) -> Result<Vec<EntityMention>> {
        require(self, Capability::Entities)?;
        Ok(Vec::new())
    }

    fn remove_stopwords(&self, sentence: &str) -> String {
        self.cleaner.remove_stopwords(sentence)
    }

    fn normalize(&self, sentence: &str) -> String {
        self.cleaner.normalize(sentence)
    }

    fn stem(&self, sentence: &str) -> String {
        self.cleaner.stem(sentence)
    }
}
