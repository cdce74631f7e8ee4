//! Lexicon-based sentiment scoring
//!
//! Each lexicon word found in a sentence contributes its polarity and
//! subjectivity. A directly preceding intensifier ("very", "slightly", ...)
//! scales both values, and a negator before that flips and halves the
//! polarity. The sentence score is the mean of all contributions.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use unicode_segmentation::UnicodeSegmentation;

use super::SentimentScore;
use crate::error::{Error, Result};

const BUNDLED_LEXICON: &str = include_str!("../../data/sentiment_lexicon.tsv");

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 0.9),
    ("fairly", 0.8),
    ("somewhat", 0.75),
    ("slightly", 0.5),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "hardly", "cannot",
];

/// Negation multiplier applied to polarity
const NEGATION: f64 = -0.5;

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: HashMap<String, SentimentScore>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Analyzer backed by the bundled English lexicon
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        for (line_no, line) in BUNDLED_LEXICON.lines().enumerate() {
            match parse_line(line) {
                Ok(Some((word, score))) => {
                    lexicon.insert(word, score);
                }
                Ok(None) => {}
                Err(e) => log::debug!("Skipping lexicon line {}: {e}", line_no + 1),
            }
        }
        Self { lexicon }
    }

    /// Analyzer backed by a tab-separated `word polarity subjectivity` lexicon
    pub fn from_lexicon(text: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (line_no, line) in text.lines().enumerate() {
            let parsed = parse_line(line).map_err(|e| {
                Error::Config(format!("sentiment lexicon line {}: {e}", line_no + 1))
            })?;
            if let Some((word, score)) = parsed {
                lexicon.insert(word, score);
            }
        }
        Ok(Self { lexicon })
    }

    /// Analyzer backed by a lexicon file in the `from_lexicon` format
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let analyzer = Self::from_lexicon(&text)?;
        if analyzer.is_empty() {
            log::warn!("Sentiment lexicon {} has no entries", path.display());
        } else {
            log::info!(
                "Loaded {} sentiment lexicon entries from {}",
                analyzer.len(),
                path.display()
            );
        }
        Ok(analyzer)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Score one sentence; (0, 0) when no lexicon word occurs
    pub fn score(&self, sentence: &str) -> SentimentScore {
        let words: Vec<String> = sentence
            .unicode_words()
            .map(|w| w.to_lowercase())
            .collect();

        let mut polarity = 0.0;
        let mut subjectivity = 0.0;
        let mut hits = 0usize;

        for (i, word) in words.iter().enumerate() {
            let Some(entry) = self.lexicon.get(word) else {
                continue;
            };

            let mut modifier_at = i;
            let mut multiplier = 1.0;
            if let Some(m) = i.checked_sub(1).and_then(|p| intensity(&words[p])) {
                multiplier = m;
                modifier_at = i - 1;
            }
            let negated = modifier_at
                .checked_sub(1)
                .is_some_and(|p| is_negator(&words[p]));

            let mut p = (entry.polarity * multiplier).clamp(-1.0, 1.0);
            if negated {
                p *= NEGATION;
            }
            polarity += p;
            subjectivity += (entry.subjectivity * multiplier).clamp(0.0, 1.0);
            hits += 1;
        }

        if hits == 0 {
            return SentimentScore::default();
        }
        SentimentScore {
            polarity: polarity / hits as f64,
            subjectivity: subjectivity / hits as f64,
        }
    }
}

fn parse_line(line: &str) -> std::result::Result<Option<(String, SentimentScore)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut fields = line.split_whitespace();
    let (Some(word), Some(polarity), Some(subjectivity)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("expected 3 fields in '{line}'"));
    };
    let polarity: f64 = polarity
        .parse()
        .map_err(|_| format!("invalid polarity '{polarity}'"))?;
    let subjectivity: f64 = subjectivity
        .parse()
        .map_err(|_| format!("invalid subjectivity '{subjectivity}'"))?;
    if !(-1.0..=1.0).contains(&polarity) || !(0.0..=1.0).contains(&subjectivity) {
        return Err(format!("scores out of range for '{word}'"));
    }
    Ok(Some((
        word.to_lowercase(),
        SentimentScore {
            polarity,
            subjectivity,
        },
    )))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, m)| *m)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}
