//! Sentiment command implementation

use std::io::Write;

use anyhow::Result;
use clap::Args;
use nlpcli_core::analysis::{score_all, AggregateScore, SentimentLabel};

use super::{Session, NOTHING_TO_PROCESS};
use crate::output::{Console, Tone};

/// Arguments for the sentiment command
#[derive(Debug, Clone, Default, Args)]
pub struct SentimentArgs {
    /// Also list the score of every sentence
    #[arg(long)]
    pub per_sentence: bool,
}

impl SentimentArgs {
    /// Print the composite label and the average scores
    pub fn execute<W: Write>(&self, session: &Session<'_>, console: &mut Console<W>) -> Result<()> {
        if session.ctx.is_empty() {
            return console.notice(NOTHING_TO_PROCESS);
        }

        let progress = session.progress("sentiment");
        let scores = score_all(session.ctx, session.provider, || progress.tick());
        progress.finish();

        if self.per_sentence {
            for (sentence, score) in session.ctx.sentences().iter().zip(&scores) {
                console.plain(&format!("Sentence: {sentence}"))?;
                console.plain(&format!(
                    "  Polarity: {:.3}  Subjectivity: {:.3}",
                    score.polarity, score.subjectivity
                ))?;
            }
            console.blank()?;
        }

        let Some(aggregate) = AggregateScore::from_scores(&scores) else {
            return console.notice(NOTHING_TO_PROCESS);
        };
        let tone = match aggregate.label {
            SentimentLabel::Positive => Tone::Green,
            SentimentLabel::Negative => Tone::Red,
            SentimentLabel::Neutral => Tone::Yellow,
        };
        console.line(&format!("Sentiment: {}", aggregate.label), tone)?;
        console.plain(&format!("Average Polarity: {:.3}", aggregate.polarity))?;
        console.plain(&format!(
            "Average Subjectivity: {:.3}",
            aggregate.subjectivity
        ))?;
        console.success("Sentiment analysis completed.")
    }
}
