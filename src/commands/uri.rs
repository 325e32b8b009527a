//! Endpoint URI and language name helpers exposed on the command line

use serde_json::json;

use super::{to_json, CommandContext};
use crate::cli::{LanguageArgs, OutputFormat, UriArgs, WrapArgs};
use crate::error::Result;
use crate::strings::{canonical_language_name, component_name, has_query_marker, wrap_separator};

pub fn run_component(args: &UriArgs, ctx: &CommandContext) -> Result<String> {
    let component = component_name(&args.uri);
    match ctx.format {
        OutputFormat::Text => Ok(component.map(|c| format!("{}\n", c)).unwrap_or_default()),
        OutputFormat::Json => to_json(&json!({ "uri": args.uri, "component": component })),
    }
}

pub fn run_query_marker(args: &UriArgs, ctx: &CommandContext) -> Result<String> {
    let has_query = has_query_marker(args.uri.as_str());
    match ctx.format {
        OutputFormat::Text => Ok(format!("{}\n", has_query)),
        OutputFormat::Json => to_json(&json!({ "uri": args.uri, "has_query": has_query })),
    }
}

pub fn run_language(args: &LanguageArgs, ctx: &CommandContext) -> Result<String> {
    let canonical = canonical_language_name(&args.name);
    match ctx.format {
        OutputFormat::Text => Ok(format!("{}\n", canonical)),
        OutputFormat::Json => to_json(&json!({ "name": args.name, "canonical": canonical })),
    }
}

pub fn run_wrap(args: &WrapArgs, ctx: &CommandContext) -> Result<String> {
    let display = &ctx.config.display;
    let width = args.width.unwrap_or(display.wrap_width);
    let separator = args.separator.as_deref().unwrap_or(&display.separator);
    let wrapped = wrap_separator(&args.text, separator, &display.line_break, width);

    match ctx.format {
        OutputFormat::Text => Ok(format!("{}\n", wrapped)),
        OutputFormat::Json => {
            let lines: Vec<&str> = wrapped.split(display.line_break.as_str()).collect();
            to_json(&json!({ "width": width, "lines": lines }))
        }
    }
}
