//! Sentence loading, shared context and NLP providers for nlpcli
//!
//! A run loads one sentence list into an [`InvocationContext`], resolves an
//! [`NlpProvider`] once, and hands both to exactly one operation.
//!
//! # Example
//!
//! ```rust
//! use nlpcli_core::analysis::{score_all, AggregateScore};
//! use nlpcli_core::provider::{resolve_provider, Backend, Language};
//! use nlpcli_core::{InvocationContext, SentenceSource};
//!
//! let sentences = SentenceSource::parse(r#"["This is great!", "This is terrible."]"#).unwrap();
//! let ctx = InvocationContext::new(sentences, "inline");
//! let provider = resolve_provider(Backend::Basic, Language::English);
//!
//! let scores = score_all(&ctx, provider.as_ref(), || {});
//! let aggregate = AggregateScore::from_scores(&scores).unwrap();
//! assert_eq!(aggregate.label.as_str(), "neutral");
//! ```

pub mod analysis;
pub mod context;
pub mod error;
pub mod provider;
pub mod source;

pub use context::InvocationContext;
pub use error::{Error, Result};
pub use provider::{
    resolve_provider, resolve_provider_with, Backend, Capability, Language, NlpProvider,
    SentimentAnalyzer,
};
pub use source::SentenceSource;
