//! Sentence-rewriting commands: remove_stop_words, normalize and stem
//!
//! Each lists every sentence before and after the rewrite, then offers to
//! save the derived list. The loaded sentences are never modified.

use std::io::{BufRead, Write};

use anyhow::Result;
use nlpcli_core::analysis::{derived_list, transform_all, Transform};

use super::{Session, NOTHING_TO_PROCESS};
use crate::output::Console;
use crate::save::InteractiveSave;

/// Which rewrite to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    RemoveStopwords,
    Normalize,
    Stem,
}

impl Mode {
    fn transform(&self) -> Transform {
        match self {
            Mode::RemoveStopwords => Transform::RemoveStopwords,
            Mode::Normalize => Transform::Normalize,
            Mode::Stem => Transform::Stem,
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            Mode::RemoveStopwords => "remove_stop_words",
            Mode::Normalize => "normalize",
            Mode::Stem => "stem",
        }
    }

    /// Label of the rewritten line
    fn after_label(&self) -> &'static str {
        match self {
            Mode::RemoveStopwords => "Cleaned",
            Mode::Normalize => "Normalized",
            Mode::Stem => "stemmed",
        }
    }

    fn completion(&self, count: usize) -> String {
        match self {
            Mode::RemoveStopwords => format!("Stopwords removed from {count} sentences."),
            Mode::Normalize => format!("Normalization completed for {count} sentences."),
            Mode::Stem => format!("Stemming completed for {count} sentences."),
        }
    }
}

/// Rewrite, list and optionally save the sentences
///
/// A failed save is reported and does not fail the command.
pub fn execute<R: BufRead, W: Write>(
    session: &Session<'_>,
    mode: Mode,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<()> {
    if session.ctx.is_empty() {
        return console.notice(NOTHING_TO_PROCESS);
    }

    let progress = session.progress(mode.operation());
    let results = transform_all(session.ctx, session.provider, mode.transform(), || {
        progress.tick()
    });
    progress.finish();

    for result in &results {
        console.plain(&format!("Original: {}", result.original))?;
        console.plain(&format!("{}: {}", mode.after_label(), result.transformed))?;
    }
    console.success(&mode.completion(results.len()))?;

    let derived = derived_list(&results);
    let saved = InteractiveSave::new(input, console)
        .echo_line_breaks(!session.interactive)
        .run(&derived);
    if let Err(e) = saved {
        log::warn!("Save failed: {e:#}");
        console.error(&format!("Cleaned sentences not saved: {e:#}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::run;
    use crate::commands::{Commands, NOTHING_TO_PROCESS};
    use crate::save::OUTPUT_FILE_NAME;
    use nlpcli_core::Backend;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_lists_and_discards() {
        let (result, output) = run(
            Commands::Normalize,
            &["Hello, World!", "Running FAST."],
            Backend::Basic,
            "no\n",
        );
        result.unwrap();
        assert!(output.contains("Original: Hello, World!\nNormalized: hello world\n"));
        assert!(output.contains("Original: Running FAST.\nNormalized: running fast\n"));
        assert!(output.contains("Normalization completed for 2 sentences."));
        assert!(output.contains("[yes/no]: \nCleaned sentences not saved."));
    }

    #[test]
    fn test_stem_uses_lowercase_label() {
        let (result, output) = run(
            Commands::Stem,
            &["Running dogs jumped."],
            Backend::Basic,
            "",
        );
        result.unwrap();
        assert!(output.contains("stemmed: run dog jump"));
        assert!(output.contains("Stemming completed for 1 sentences."));
    }

    #[test]
    fn test_remove_stop_words_saves_derived_list() {
        let temp_dir = TempDir::new().unwrap();
        let answers = format!("yes\n{}\n", temp_dir.path().display());
        let (result, output) = run(
            Commands::RemoveStopWords,
            &["The quick brown fox.", "A lazy dog."],
            Backend::Basic,
            &answers,
        );
        result.unwrap();
        assert!(output.contains("Original: The quick brown fox."));
        assert!(output.contains("Cleaned: "));
        assert!(output.contains("Stopwords removed from 2 sentences."));
        assert!(output.contains("Cleaned sentences saved to"));

        let saved = fs::read_to_string(temp_dir.path().join(OUTPUT_FILE_NAME)).unwrap();
        let lines: Vec<&str> = saved.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("fox."));
        assert!(!lines[0].contains("The"));
        assert!(lines[1].contains("dog."));
    }

    #[test]
    fn test_save_failure_is_reported_not_fatal() {
        let (result, output) = run(
            Commands::Normalize,
            &["Hello!"],
            Backend::Basic,
            "y\n/nonexistent/dir/for/nlpcli\n",
        );
        result.unwrap();
        assert!(output.contains("Cleaned sentences not saved: "));
        assert!(output.contains("/nonexistent/dir/for/nlpcli"));
    }

    #[test]
    fn test_empty_input_skips_prompt() {
        let (result, output) = run(Commands::Stem, &[], Backend::Basic, "yes\n");
        result.unwrap();
        assert!(output.contains(NOTHING_TO_PROCESS));
        assert!(!output.contains("[yes/no]"));
    }
}
