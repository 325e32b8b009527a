//! Detection of files that may contain Camel routes

use std::path::Path;
use tree_sitter::Language;

use crate::error::{LensError, Result};
use crate::strings::DSL_FILE_EXTENSIONS;

/// Source file kinds that can carry route definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DslFileKind {
    /// Java DSL (`RouteBuilder` subclasses)
    Java,
    /// XML DSL (Spring / Blueprint files)
    Xml,
}

impl DslFileKind {
    /// Detect file kind from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| LensError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect file kind from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "xml" => Ok(Self::Xml),
            _ => Err(LensError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Xml => "xml",
        }
    }

    /// Grammar for kinds this crate can parse; XML routes are not scanned yet
    pub fn tree_sitter_language(&self) -> Option<Language> {
        match self {
            Self::Java => Some(tree_sitter_java::LANGUAGE.into()),
            Self::Xml => None,
        }
    }
}

/// Does the path have one of the route-carrying extensions?
pub fn is_dsl_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            DSL_FILE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
