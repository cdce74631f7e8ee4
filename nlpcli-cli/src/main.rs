//! nlpcli command-line entry point

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use nlpcli_cli::output::{paint, Tone};
use nlpcli_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = cli.error_color().enabled(io::stderr().is_terminal());

    match nlpcli_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", paint(&format!("Error: {err:#}"), Tone::Red, color));
            ExitCode::FAILURE
        }
    }
}
