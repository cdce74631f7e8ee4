//! Tokenize command implementation

use std::io::Write;

use anyhow::Result;
use nlpcli_core::analysis::tokenize_all;

use super::{Session, NOTHING_TO_PROCESS};
use crate::output::{Console, Tone};

/// Print the total token count and every token in order
pub fn execute<W: Write>(session: &Session<'_>, console: &mut Console<W>) -> Result<()> {
    if session.ctx.is_empty() {
        return console.notice(NOTHING_TO_PROCESS);
    }

    let progress = session.progress("tokenize");
    let summary = tokenize_all(session.ctx, session.provider, || progress.tick());
    progress.finish();

    log::debug!("Tokens per sentence: {:?}", summary.per_sentence);
    console.line(&format!("Total tokens: {}", summary.total()), Tone::Cyan)?;
    console.plain(&format!("Tokens: {:?}", summary.tokens))
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::run;
    use crate::commands::{Commands, NOTHING_TO_PROCESS};
    use nlpcli_core::Backend;

    #[test]
    fn test_total_counts_all_sentences() {
        let (result, output) = run(
            Commands::Tokenize,
            &["This is great!", "This is terrible."],
            Backend::Basic,
            "",
        );
        result.unwrap();
        assert!(output.contains("Total tokens: 6"));
        assert!(output.contains(r#"Tokens: ["This", "is", "great", "This", "is", "terrible"]"#));
    }

    #[cfg(feature = "ner")]
    #[test]
    fn test_full_backend_keeps_punctuation() {
        let (result, output) = run(Commands::Tokenize, &["Hi there!"], Backend::Full, "");
        result.unwrap();
        assert!(output.contains("Total tokens: 3"));
        assert!(output.contains(r#"["Hi", "there", "!"]"#));
    }

    #[test]
    fn test_empty_input() {
        let (result, output) = run(Commands::Tokenize, &[], Backend::Basic, "");
        result.unwrap();
        assert!(output.contains(NOTHING_TO_PROCESS));
        assert!(!output.contains("Total tokens"));
    }
}
