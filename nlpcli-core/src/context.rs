//! Per-invocation shared context

use std::path::Path;

use crate::error::Result;
use crate::source::SentenceSource;

/// Sentences loaded for one run, shared read-only with every subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    sentences: Vec<String>,
    source_name: String,
}

impl InvocationContext {
    /// Create a context from already loaded sentences
    pub fn new(sentences: Vec<String>, source_name: impl Into<String>) -> Self {
        Self {
            sentences,
            source_name: source_name.into(),
        }
    }

    /// Load the sentence list at `path` and wrap it in a context
    pub fn from_file(path: &Path) -> Result<Self> {
        let sentences = SentenceSource::load(path)?;
        Ok(Self::new(sentences, path.display().to_string()))
    }

    /// Loaded sentences in file order
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Name of the file the sentences came from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
