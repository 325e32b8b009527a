//! Scan command handler

use std::fs;

use super::{to_json, CommandContext};
use crate::cli::{OutputFormat, ScanArgs};
use crate::error::{LensError, Result};
use crate::java::JavaSource;
use crate::lang::DslFileKind;
use crate::scan::scan_java;

/// Scan one file and render the report
pub fn run_scan(args: &ScanArgs, ctx: &CommandContext) -> Result<String> {
    let path = &args.path;
    if !path.exists() {
        return Err(LensError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let kind = DslFileKind::from_path(path)?;
    // XML routes are recognized but have no grammar yet
    if kind.tree_sitter_language().is_none() {
        return Err(LensError::UnsupportedLanguage {
            extension: kind.name().to_string(),
        });
    }

    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "scanning file");

    let source = JavaSource::parse(text)?;
    if source.has_syntax_errors() {
        tracing::warn!(path = %path.display(), "file has syntax errors, results may be partial");
    }

    let report = scan_java(&path.display().to_string(), &source, &ctx.config);
    match ctx.format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => to_json(&report),
    }
}
