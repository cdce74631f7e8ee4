//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Inputs shorter than this finish too fast for a bar to be useful
pub const MIN_SENTENCES_FOR_BAR: usize = 200;

/// Progress reporter for per-sentence processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar for `total` sentences
    pub fn init_sentences(&mut self, total: usize, operation: &str) {
        if self.quiet || total < MIN_SENTENCES_FOR_BAR {
            return;
        }

        let pb = ProgressBar::new(total as u64);
        // The template is static, a failure here only loses the styling
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sentences {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.set_message(operation.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one processed sentence
    pub fn tick(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Remove the bar before results are printed
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}
