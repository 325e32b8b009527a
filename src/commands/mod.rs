//! Command modules for the camel-lens CLI
//!
//! - `uri` - component name, query marker, language alias and wrapping helpers
//! - `scan` - route scan of a Java file
//!
//! All command handlers take their `Args` struct from `cli.rs` and a shared
//! `CommandContext`, and return the text to print.

pub mod scan;
pub mod uri;

pub use scan::run_scan;
pub use uri::{run_component, run_language, run_query_marker, run_wrap};

use serde_json::json;

use crate::cli::{Cli, Commands, ConfigArgs, OutputFormat};
use crate::config::LensConfig;
use crate::error::{LensError, Result};

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub config: LensConfig,
}

impl CommandContext {
    pub fn new(format: OutputFormat, config: LensConfig) -> Self {
        Self { format, config }
    }
}

/// Dispatch the parsed command line
pub fn run(cli: &Cli, ctx: &CommandContext) -> Result<String> {
    match &cli.command {
        Commands::Component(args) => run_component(args, ctx),
        Commands::QueryMarker(args) => run_query_marker(args, ctx),
        Commands::Language(args) => run_language(args, ctx),
        Commands::Wrap(args) => run_wrap(args, ctx),
        Commands::Scan(args) => run_scan(args, ctx),
        Commands::Config(args) => run_config(args, ctx),
    }
}

fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    let Some(key) = &args.key else {
        return match ctx.format {
            OutputFormat::Text => ctx.config.display(),
            OutputFormat::Json => to_json(&ctx.config),
        };
    };

    let value = ctx.config.get(key).ok_or_else(|| LensError::ConfigError {
        path: "<command line>".to_string(),
        message: format!("unknown configuration key: {}", key),
    })?;
    match ctx.format {
        OutputFormat::Text => Ok(format!("{}\n", value)),
        OutputFormat::Json => to_json(&json!({ "key": key, "value": value })),
    }
}

/// Pretty JSON with a trailing newline
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| LensError::Serialization {
            message: format!("JSON serialization failed: {}", e),
        })
}
