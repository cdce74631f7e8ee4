//! Aggregation rules shared by the subcommands
//!
//! Every function takes the frozen [`InvocationContext`] and the resolved
//! provider, plus a `tick` callback invoked once per processed sentence for
//! progress reporting. None of them modify the context; transforms return a
//! new list.

use std::fmt;

use crate::context::InvocationContext;
use crate::error::Result;
use crate::provider::{EntityMention, NlpProvider, SentimentScore};

/// Mean polarity above this is positive, below its negation negative
pub const LABEL_THRESHOLD: f64 = 0.1;

/// All tokens of the input, concatenated in sentence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSummary {
    pub tokens: Vec<String>,
    /// Token count of each sentence
    pub per_sentence: Vec<usize>,
}

impl TokenSummary {
    pub fn total(&self) -> usize {
        self.tokens.len()
    }
}

pub fn tokenize_all(
    ctx: &InvocationContext,
    provider: &dyn NlpProvider,
    mut tick: impl FnMut(),
) -> TokenSummary {
    let mut tokens = Vec::new();
    let mut per_sentence = Vec::with_capacity(ctx.len());
    for sentence in ctx.sentences() {
        let sentence_tokens = provider.tokenize(sentence);
        per_sentence.push(sentence_tokens.len());
        tokens.extend(sentence_tokens);
        tick();
    }
    TokenSummary {
        tokens,
        per_sentence,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label for a mean polarity; exactly ±0.1 is neutral
    pub fn classify(polarity: f64) -> Self {
        if polarity > LABEL_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -LABEL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean sentiment over all sentences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScore {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

impl AggregateScore {
    /// Arithmetic mean of `scores`; `None` for an empty slice
    pub fn from_scores(scores: &[SentimentScore]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let polarity = scores.iter().map(|s| s.polarity).sum::<f64>() / n;
        let subjectivity = scores.iter().map(|s| s.subjectivity).sum::<f64>() / n;
        Some(Self {
            polarity,
            subjectivity,
            label: SentimentLabel::classify(polarity),
        })
    }
}

/// Per-sentence scores, in sentence order
pub fn score_all(
    ctx: &InvocationContext,
    provider: &dyn NlpProvider,
    mut tick: impl FnMut(),
) -> Vec<SentimentScore> {
    ctx.sentences()
        .iter()
        .map(|sentence| {
            let score = provider.sentiment(sentence);
            tick();
            score
        })
        .collect()
}

/// Entities of all sentences flattened in order
pub fn collect_entities(
    ctx: &InvocationContext,
    provider: &dyn NlpProvider,
    mut tick: impl FnMut(),
) -> Result<Vec<EntityMention>> {
    let mut mentions = Vec::new();
    for sentence in ctx.sentences() {
        mentions.extend(provider.entities(sentence)?);
        tick();
    }
    Ok(mentions)
}

/// Sentence rewrites offered by the mutating subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    RemoveStopwords,
    Normalize,
    Stem,
}

impl Transform {
    pub fn apply(&self, provider: &dyn NlpProvider, sentence: &str) -> String {
        match self {
            Transform::RemoveStopwords => provider.remove_stopwords(sentence),
            Transform::Normalize => provider.normalize(sentence),
            Transform::Stem => provider.stem(sentence),
        }
    }
}

/// A sentence before and after a transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedSentence {
    pub original: String,
    pub transformed: String,
}

pub fn transform_all(
    ctx: &InvocationContext,
    provider: &dyn NlpProvider,
    transform: Transform,
    mut tick: impl FnMut(),
) -> Vec<TransformedSentence> {
    ctx.sentences()
        .iter()
        .map(|sentence| {
            let transformed = transform.apply(provider, sentence);
            tick();
            TransformedSentence {
                original: sentence.clone(),
                transformed,
            }
        })
        .collect()
}

/// The derived sentence list of a transform run
pub fn derived_list(results: &[TransformedSentence]) -> Vec<String> {
    results.iter().map(|r| r.transformed.clone()).collect()
}
