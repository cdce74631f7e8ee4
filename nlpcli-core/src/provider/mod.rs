//! NLP providers
//!
//! Every subcommand talks to a [`NlpProvider`]. Two backends exist:
//!
//! - `full`: word-boundary tokenization keeping punctuation, plus rule-based
//!   named entity recognition (requires the `ner` feature)
//! - `basic`: word-only tokenization, no entity recognition
//!
//! Both share the lexicon sentiment analyzer and the text cleaner. The backend
//! is resolved once by [`resolve_provider`] and then passed around as
//! `&dyn NlpProvider`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod basic;
#[cfg(feature = "ner")]
pub mod entities;
#[cfg(feature = "ner")]
pub mod full;
pub mod language;
pub mod sentiment;
pub mod text;

pub use basic::BasicProvider;
#[cfg(feature = "ner")]
pub use entities::EntityRecognizer;
#[cfg(feature = "ner")]
pub use full::FullProvider;
pub use language::Language;
pub use sentiment::SentimentAnalyzer;
pub use text::TextCleaner;

/// Operations a provider may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Tokenize,
    Sentiment,
    Entities,
    StopwordRemoval,
    Normalize,
    Stem,
}

impl Capability {
    /// All capabilities, in subcommand order
    pub const ALL: [Capability; 6] = [
        Capability::Tokenize,
        Capability::Sentiment,
        Capability::Entities,
        Capability::StopwordRemoval,
        Capability::Normalize,
        Capability::Stem,
    ];

    /// How to obtain this capability when the current backend lacks it
    pub fn remediation(&self) -> &'static str {
        match self {
            Capability::Entities => {
                "Use the full backend: run with `--backend full` (or set \
                 `backend = \"full\"` under [provider] in the config file) with a build \
                 that enables the `ner` feature."
            }
            _ => "Every backend provides this capability.",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Tokenize => "Tokenization",
            Capability::Sentiment => "Sentiment analysis",
            Capability::Entities => "Named entity recognition",
            Capability::StopwordRemoval => "Stopword removal",
            Capability::Normalize => "Normalization",
            Capability::Stem => "Stemming",
        };
        f.write_str(name)
    }
}

/// Sentiment of a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScore {
    /// In [-1, 1], negative values mean negative sentiment
    pub polarity: f64,
    /// In [0, 1], 0 is objective and 1 is subjective
    pub subjectivity: f64,
}

/// Entity categories produced by the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Date,
    Money,
    Percent,
    Cardinal,
    Misc,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Date => "DATE",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Misc => "MISC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled span inside one sentence
///
/// Offsets count characters, not bytes; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// Capability set consumed by the subcommands
pub trait NlpProvider {
    /// Backend name for logs and notices
    fn name(&self) -> &'static str;

    /// Whether this backend can perform `capability`
    fn supports(&self, capability: Capability) -> bool;

    /// Split a sentence into ordered tokens
    fn tokenize(&self, sentence: &str) -> Vec<String>;

    /// Score polarity and subjectivity of a sentence
    fn sentiment(&self, sentence: &str) -> SentimentScore;

    /// Recognize named entities, or fail with `CapabilityUnavailable`
    fn entities(&self, sentence: &str) -> Result<Vec<EntityMention>>;

    /// Drop stopwords from a sentence
    fn remove_stopwords(&self, sentence: &str) -> String;

    /// Lowercase, strip punctuation and collapse whitespace
    fn normalize(&self, sentence: &str) -> String;

    /// Replace every word by its stem
    fn stem(&self, sentence: &str) -> String;
}

/// Fail with `CapabilityUnavailable` unless `provider` supports `capability`
pub fn require(provider: &dyn NlpProvider, capability: Capability) -> Result<()> {
    if provider.supports(capability) {
        Ok(())
    } else {
        Err(Error::CapabilityUnavailable {
            capability,
            remediation: capability.remediation().to_string(),
        })
    }
}

/// Requested backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `full` when compiled in, otherwise `basic`
    #[default]
    Auto,
    Full,
    Basic,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Full => "full",
            Backend::Basic => "basic",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "full" => Ok(Backend::Full),
            "basic" => Ok(Backend::Basic),
            other => Err(Error::Config(format!(
                "unknown backend '{other}' (expected auto, full or basic)"
            ))),
        }
    }
}

/// Pick the provider for this run
///
/// Called once at startup. A request for `full` that cannot be honored
/// degrades to `basic` with a warning instead of failing.
pub fn resolve_provider(backend: Backend, language: Language) -> Box<dyn NlpProvider> {
    resolve_provider_with(backend, language, SentimentAnalyzer::new())
}

/// Like [`resolve_provider`], scoring sentiment with `analyzer`
pub fn resolve_provider_with(
    backend: Backend,
    language: Language,
    analyzer: SentimentAnalyzer,
) -> Box<dyn NlpProvider> {
    let base = BasicProvider::with_analyzer(language, analyzer);
    let provider = match backend {
        Backend::Basic => Box::new(base) as Box<dyn NlpProvider>,
        Backend::Auto | Backend::Full => full_or_basic(backend, base),
    };
    log::info!(
        "Using {} backend ({} stopwords and stemmer)",
        provider.name(),
        language
    );
    provider
}

#[cfg(feature = "ner")]
fn full_or_basic(backend: Backend, base: BasicProvider) -> Box<dyn NlpProvider> {
    match EntityRecognizer::new() {
        Ok(recognizer) => Box::new(FullProvider::from_parts(base, recognizer)),
        Err(e) => {
            log::warn!("Full backend unavailable ({e}); requested {backend}, falling back to basic");
            Box::new(base)
        }
    }
}

#[cfg(not(feature = "ner"))]
fn full_or_basic(backend: Backend, base: BasicProvider) -> Box<dyn NlpProvider> {
    if backend == Backend::Full {
        log::warn!("Full backend was not compiled in (feature `ner`), falling back to basic");
    } else {
        log::debug!("Full backend not compiled in, using basic");
    }
    Box::new(base)
}
