//! Save-or-discard flow for transformed sentences
//!
//! Two steps: ask whether to save, then (only on yes) ask for a directory.
//! Input is read line by line from any `BufRead`; end of input answers no.
//! Piped answers are not echoed, so a line break is written for them.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::output::Console;

/// Name of the file written inside the chosen directory
pub const OUTPUT_FILE_NAME: &str = "cleaned_sentences.txt";

const SAVE_PROMPT: &str = "Save cleaned sentences to a file? [yes/no]: ";

/// Operator's answer to the prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    Save { directory: PathBuf },
    Discard,
}

/// What happened to the transformed sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Absolute path of the written file
    Saved(PathBuf),
    Discarded,
}

pub struct InteractiveSave<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    console: &'a mut Console<W>,
    echo_line_breaks: bool,
}

impl<'a, R: BufRead, W: Write> InteractiveSave<'a, R, W> {
    pub fn new(input: &'a mut R, console: &'a mut Console<W>) -> Self {
        Self {
            input,
            console,
            echo_line_breaks: false,
        }
    }

    /// End the prompt line after each answer (input that is not a terminal)
    pub fn echo_line_breaks(mut self, enabled: bool) -> Self {
        self.echo_line_breaks = enabled;
        self
    }

    /// Prompt, then save or discard `sentences`, reporting the result
    ///
    /// A failed write is returned as an error after nothing was saved.
    pub fn run(&mut self, sentences: &[String]) -> Result<SaveOutcome> {
        match self.prompt()? {
            SaveDecision::Save { directory } => {
                let path = write_sentences(&directory, sentences)?;
                log::info!("Wrote {} sentences to {}", sentences.len(), path.display());
                self.console
                    .success(&format!("Cleaned sentences saved to {}", path.display()))?;
                Ok(SaveOutcome::Saved(path))
            }
            SaveDecision::Discard => {
                self.console.notice("Cleaned sentences not saved.")?;
                Ok(SaveOutcome::Discarded)
            }
        }
    }

    /// Ask the two questions and return the decision
    pub fn prompt(&mut self) -> Result<SaveDecision> {
        self.console.prompt(SAVE_PROMPT)?;
        let Some(answer) = self.read_answer()? else {
            self.console.blank()?;
            return Ok(SaveDecision::Discard);
        };
        if !is_affirmative(&answer) {
            return Ok(SaveDecision::Discard);
        }

        self.console
            .prompt(&format!("Directory to save {OUTPUT_FILE_NAME}: "))?;
        let Some(directory) = self.read_answer()? else {
            self.console.blank()?;
            return Ok(SaveDecision::Discard);
        };
        let directory = if directory.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(directory)
        };
        Ok(SaveDecision::Save { directory })
    }

    /// Next trimmed line, `None` at end of input
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if self.echo_line_breaks {
            self.console.blank()?;
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Write one sentence per line to `<directory>/cleaned_sentences.txt`
pub fn write_sentences(directory: &Path, sentences: &[String]) -> nlpcli_core::Result<PathBuf> {
    let directory =
        fs::canonicalize(directory).map_err(|e| nlpcli_core::Error::io(directory, e))?;
    let path = directory.join(OUTPUT_FILE_NAME);

    let mut content = sentences.join("\n");
    content.push('\n');
    fs::write(&path, content).map_err(|e| nlpcli_core::Error::io(&path, e))?;
    Ok(path)
}
