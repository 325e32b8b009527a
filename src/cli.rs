//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Camel DSL route inspector
#[derive(Parser, Debug)]
#[command(name = "camel-lens")]
#[command(about = "Finds Camel routes, endpoints and expressions in source files")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ~/.config/camel-lens/config.toml)
    #[arg(long, global = true, env = "CAMEL_LENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the component name of an endpoint URI
    Component(UriArgs),

    /// Tell whether an endpoint URI has query parameters
    QueryMarker(UriArgs),

    /// Print the canonical name of an expression language
    Language(LanguageArgs),

    /// Wrap a long endpoint URI at its parameter separators
    Wrap(WrapArgs),

    /// Scan a Java file for routes, endpoints and expressions
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    /// Show the effective configuration, or one value of it
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct UriArgs {
    /// Endpoint URI, e.g. `seda:foo?size=10`
    #[arg(value_name = "URI")]
    pub uri: String,
}

#[derive(Args, Debug)]
pub struct LanguageArgs {
    /// Language name or alias, e.g. `js` or `tokenizeXml`
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct WrapArgs {
    /// Text to wrap
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Maximum line width (defaults to display.wrap_width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Token separator (defaults to display.separator)
    #[arg(short, long)]
    pub separator: Option<String>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Java source file
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Key path such as `display.wrap_width`
    #[arg(value_name = "KEY")]
    pub key: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan() {
        let cli = Cli::parse_from(["camel-lens", "scan", "MyRoute.java", "-f", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Scan(args) => assert_eq!(args.path, PathBuf::from("MyRoute.java")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrap_options() {
        let cli = Cli::parse_from(["camel-lens", "wrap", "a&b", "--width", "10", "-s", "&"]);
        match cli.command {
            Commands::Wrap(args) => {
                assert_eq!(args.text, "a&b");
                assert_eq!(args.width, Some(10));
                assert_eq!(args.separator.as_deref(), Some("&"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_key() {
        let cli = Cli::parse_from(["camel-lens", "config", "display.wrap_width"]);
        match cli.command {
            Commands::Config(args) => assert_eq!(args.key.as_deref(), Some("display.wrap_width")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
