//! Console output
//!
//! Status lines are part of the observable contract: the phrases printed
//! here ("Total tokens:", "Sentiment:", ...) are asserted on by tests, so
//! color is applied around them and never inside.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use colorful::Colorful;
use serde::{Deserialize, Serialize};

pub mod table;

pub use table::EntityTable;

/// When to colorize output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Only when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide for a stream that may or may not be a terminal
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Color of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Green,
    Cyan,
    Yellow,
    Red,
}

/// Paint `text` with `tone` when `color` is set
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Green => text.green().to_string(),
        Tone::Cyan => text.cyan().to_string(),
        Tone::Yellow => text.yellow().to_string(),
        Tone::Red => text.red().to_string(),
    }
}

/// Line-oriented writer for subcommand output
pub struct Console<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> Console<W> {
    /// Create a console over any writer
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Write one line in the given tone
    pub fn line(&mut self, text: &str, tone: Tone) -> Result<()> {
        writeln!(self.writer, "{}", paint(text, tone, self.color))?;
        Ok(())
    }

    pub fn plain(&mut self, text: &str) -> Result<()> {
        self.line(text, Tone::Plain)
    }

    /// Neutral notice, e.g. nothing to process
    pub fn notice(&mut self, text: &str) -> Result<()> {
        self.line(text, Tone::Yellow)
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.line(text, Tone::Green)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.line(text, Tone::Red)
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Write a prompt without a line break and flush it
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Console<io::Stdout> {
    /// Console on stdout, colored according to `choice`
    pub fn stdout(choice: ColorChoice) -> Self {
        let stdout = io::stdout();
        let color = choice.enabled(stdout.is_terminal());
        Self::new(stdout, color)
    }
}
