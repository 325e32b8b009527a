//! camel-lens: Camel DSL recognition for editor tooling
//!
//! This library recognizes Apache Camel route constructs embedded in source
//! files (route starts, endpoint URIs, expression languages) and normalizes
//! the strings that describe them.
//!
//! # Layout
//!
//! The classification core never parses anything; it works on nodes and
//! class descriptors the host hands over:
//!
//! - [`strings`]: endpoint URI, language alias and tabular value helpers
//! - [`hierarchy`]: class arena and expression/route-builder type checks
//! - [`recognizer`]: the pluggable [`Recognizer`] trait and its registry
//! - [`classifier`]: the [`DslClassifier`] facade
//!
//! Host side:
//!
//! - [`java`]: tree-sitter based Java DSL recognizer and class arena builder
//! - [`scan`]: whole-file route scan built on the classifier
//! - [`config`], [`lang`], [`cli`], [`commands`]: the `camel-lens` binary
//!
//! # Example
//!
//! ```ignore
//! use camel_lens::{scan_java, JavaSource, LensConfig};
//!
//! let source = JavaSource::parse(r#"
//! public class MyRoute extends RouteBuilder {
//!     public void configure() {
//!         from("timer:foo").to("log:bar");
//!     }
//! }
//! "#)?;
//!
//! let report = scan_java("MyRoute.java", &source, &LensConfig::default());
//! println!("{}", report.to_text());
//! ```

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod java;
pub mod lang;
pub mod recognizer;
pub mod scan;
pub mod strings;

// Re-export commonly used types
pub use classifier::DslClassifier;
pub use cli::{Cli, Commands, OutputFormat};
pub use config::LensConfig;
pub use error::{LensError, Result};
pub use hierarchy::{ClassArena, ClassId, ClassInfo, MethodDescriptor, TypeRef};
pub use java::{JavaDslRecognizer, JavaNode, JavaSource};
pub use lang::DslFileKind;
pub use recognizer::{DslQuery, Recognizer, RecognizerRegistry, SyntaxNode};
pub use scan::{scan_java, ScanReport};
pub use strings::{
    canonical_language_name, component_name, has_query_marker, safe_value, safe_value_in,
    wrap_separator, Row,
};
