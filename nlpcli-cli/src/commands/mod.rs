//! CLI command implementations

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Subcommand;
use nlpcli_core::{InvocationContext, NlpProvider};

use crate::config::CliConfig;
use crate::output::Console;
use crate::progress::ProgressReporter;

pub mod entity;
pub mod sentiment;
pub mod tokenize;
pub mod transform;

/// Notice printed by every subcommand for an empty sentence list
pub const NOTHING_TO_PROCESS: &str = "No sentences found; nothing to process.";

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tokenize each sentence and print all tokens
    Tokenize,

    /// Average polarity and subjectivity over all sentences
    Sentiment(sentiment::SentimentArgs),

    /// Recognize named entities in all sentences
    Entity(entity::EntityArgs),

    /// Remove stopwords from each sentence
    #[command(name = "remove_stop_words", alias = "remove-stop-words")]
    RemoveStopWords,

    /// Lowercase sentences and strip punctuation
    Normalize,

    /// Reduce every word to its stem
    Stem,
}

/// Everything a subcommand reads, fixed before dispatch
pub struct Session<'a> {
    pub ctx: &'a InvocationContext,
    pub provider: &'a dyn NlpProvider,
    pub config: &'a CliConfig,
    pub quiet: bool,
    /// Whether prompt answers come from a terminal, which echoes them
    pub interactive: bool,
}

impl Session<'_> {
    /// Progress reporter sized for this run's sentences
    pub fn progress(&self, operation: &str) -> ProgressReporter {
        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_sentences(self.ctx.len(), operation);
        reporter
    }
}

impl Commands {
    /// Run the command against the loaded sentences
    ///
    /// `input` answers interactive prompts of the mutating commands.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        session: &Session<'_>,
        console: &mut Console<W>,
        input: &mut R,
    ) -> Result<()> {
        log::debug!("Dispatching {:?} with {} backend", self, session.provider.name());
        match self {
            Commands::Tokenize => tokenize::execute(session, console),
            Commands::Sentiment(args) => args.execute(session, console),
            Commands::Entity(args) => args.execute(session, console),
            Commands::RemoveStopWords => {
                transform::execute(session, transform::Mode::RemoveStopwords, console, input)
            }
            Commands::Normalize => {
                transform::execute(session, transform::Mode::Normalize, console, input)
            }
            Commands::Stem => transform::execute(session, transform::Mode::Stem, console, input),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_subcommand_names() {
        for name in [
            "tokenize",
            "sentiment",
            "entity",
            "remove_stop_words",
            "remove-stop-words",
            "normalize",
            "stem",
        ] {
            assert!(
                Harness::try_parse_from(["nlpcli", name]).is_ok(),
                "{name} should parse"
            );
        }
    }

    #[test]
    fn test_entity_flag() {
        let harness = Harness::try_parse_from(["nlpcli", "entity", "--no-positions"]).unwrap();
        match harness.command {
            Commands::Entity(args) => assert!(args.no_positions),
            other => panic!("expected entity, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Harness::try_parse_from(["nlpcli", "lemmatize"]).is_err());
    }
}
