//! camel-lens CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use camel_lens::commands::{self, CommandContext};
use camel_lens::{Cli, LensConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> camel_lens::Result<String> {
    let config = match &cli.config {
        Some(path) => LensConfig::load_from(path)?,
        None => LensConfig::load()?,
    };

    init_logging(cli.verbose, &config.logging.level);

    let ctx = CommandContext::new(cli.format, config);
    commands::run(cli, &ctx)
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level
fn init_logging(verbose: bool, level: &str) {
    let fallback = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
