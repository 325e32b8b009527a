//! Error types and exit codes for camel-lens
//!
//! Classification and string operations never fail; these errors only come
//! from the host side (reading files, parsing, configuration, reports).

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for camel-lens operations
#[derive(Error, Debug)]
pub enum LensError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Invalid configuration in {path}: {message}")]
    ConfigError { path: String, message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LensError {
    /// Convert error to a process exit code:
    /// - 1: File not found / IO error
    /// - 2: Unsupported language
    /// - 3: Parse failure
    /// - 4: Report serialization failure
    /// - 5: Configuration error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::UnsupportedLanguage { .. } => ExitCode::from(2),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::Serialization { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for camel-lens operations
pub type Result<T> = std::result::Result<T, LensError>;
