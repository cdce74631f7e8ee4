//! nlpcli library
//!
//! Command-line front end over `nlpcli-core`: loads a sentence list once,
//! resolves the NLP backend once, then runs one analysis or transform
//! subcommand against it.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use nlpcli_core::{resolve_provider_with, Backend, InvocationContext, SentimentAnalyzer};

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod save;

pub use error::{CliError, CliResult};

use commands::{Commands, Session};
use config::CliConfig;
use output::{ColorChoice, Console};

/// Analyze or clean a list of sentences
#[derive(Debug, Parser)]
#[command(name = "nlpcli", version, about, long_about = None)]
pub struct Cli {
    /// File holding a list literal of sentences, e.g. ["One.", "Two."]
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Configuration file (default: nlpcli.toml next to the executable)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// NLP backend, overrides the config file
    #[arg(short, long, value_name = "BACKEND", global = true)]
    pub backend: Option<Backend>,

    /// When to colorize output, overrides the config file
    #[arg(long, value_enum, value_name = "WHEN", global = true)]
    pub color: Option<ColorChoice>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A second initialization (tests) keeps the first logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }

    /// Color choice for the final error line
    ///
    /// `--color` wins, then `[output] color` of a readable config file.
    pub fn error_color(&self) -> ColorChoice {
        self.color.unwrap_or_else(|| {
            CliConfig::resolve(self.config.as_deref())
                .map(|config| config.output.color)
                .unwrap_or_default()
        })
    }
}

/// Run one invocation end to end
pub fn run(cli: Cli) -> Result<()> {
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    let config = CliConfig::resolve(cli.config.as_deref())?;
    let mut console = Console::stdout(cli.color.unwrap_or(config.output.color));

    let ctx = InvocationContext::from_file(&cli.input_file)?;
    console.success(&format!(
        "Loaded {} sentences from {}",
        ctx.len(),
        ctx.source_name()
    ))?;

    let Some(command) = &cli.command else {
        console.blank()?;
        console.plain(&Cli::command().render_help().to_string())?;
        return Ok(());
    };

    let backend: Backend = cli.backend.unwrap_or(config.provider.backend);
    let analyzer = match &config.provider.lexicon {
        Some(path) => SentimentAnalyzer::from_file(path)?,
        None => SentimentAnalyzer::new(),
    };
    let provider = resolve_provider_with(backend, config.provider.language, analyzer);

    let stdin = io::stdin();
    let session = Session {
        ctx: &ctx,
        provider: provider.as_ref(),
        config: &config,
        quiet: cli.quiet,
        interactive: stdin.is_terminal(),
    };

    let mut input = stdin.lock();
    command.execute(&session, &mut console, &mut input)?;
    console.flush()
}
