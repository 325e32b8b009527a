//! Route scan of a Java source file
//!
//! Runs the classifier over every string literal and method call of a file
//! and collects what editor features would highlight: endpoints,
//! expressions, route starts, bean references and the file's classes that
//! matter to Camel.

use std::sync::Arc;

use serde::Serialize;

use crate::classifier::DslClassifier;
use crate::config::LensConfig;
use crate::hierarchy::{is_annotated_with_handler_marker, ClassInfo};
use crate::java::{build_class_index, JavaDslRecognizer, JavaNode, JavaSource};
use crate::recognizer::Recognizer;
use crate::strings::{canonical_language_name, component_name, has_query_marker, wrap_separator};

/// Whether an endpoint is consumed from or produced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    Consumer,
    Producer,
}

impl EndpointRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consumer => "consumer",
            Self::Producer => "producer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointEntry {
    pub line: usize,
    pub role: EndpointRole,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub has_query: bool,
    /// Written with `String.format` placeholders
    pub string_format: bool,
    /// False for values exempt from endpoint validation
    pub validate: bool,
    /// Part of a route start (`from(...)`)
    pub in_route_start: bool,
    /// URI wrapped at the configured width
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionEntry {
    pub line: usize,
    pub language: String,
    pub text: String,
    pub predicate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStartEntry {
    pub line: usize,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeanEntry {
    pub line: usize,
    pub class: String,
    /// Line of the bean's declaration when it is in the same file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_at: Option<usize>,
}

/// Everything found in one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub file: String,
    pub route_starts: Vec<RouteStartEntry>,
    pub endpoints: Vec<EndpointEntry>,
    pub expressions: Vec<ExpressionEntry>,
    pub beans: Vec<BeanEntry>,
    /// String literals skipped because they are built from complex code
    pub skipped_literals: usize,
    pub expression_classes: Vec<String>,
    pub route_builders: Vec<String>,
    /// `Class.method` for methods annotated as message handlers
    pub handler_methods: Vec<String>,
}

/// Scan a parsed Java file
pub fn scan_java(file: &str, source: &JavaSource, config: &LensConfig) -> ScanReport {
    let index = Arc::new(build_class_index(source));
    let arena = &index.arena;

    let java: Box<dyn Recognizer<JavaNode<'_>>> =
        Box::new(JavaDslRecognizer::new(&config.recognizers, Arc::clone(&index)));
    let classifier = DslClassifier::from_recognizers(vec![java]);

    let mut report = ScanReport {
        file: file.to_string(),
        ..ScanReport::default()
    };

    if classifier.registry().is_empty() {
        tracing::debug!(file, "no recognizer enabled, skipping route scan");
    }

    for node in source.nodes() {
        match node.kind() {
            "method_invocation" => {
                if classifier.is_route_start(&node) {
                    report.route_starts.push(RouteStartEntry {
                        line: node.line(),
                        method: node.field("name").map(|n| n.text()).unwrap_or("").to_string(),
                    });
                }
                if let Some(id) = classifier.bean_class_for(&node) {
                    report.beans.push(BeanEntry {
                        line: node.line(),
                        class: arena.get(id).map(display_name).unwrap_or_default(),
                        declared_at: classifier.bean_node_for(&node).map(|decl| decl.line()),
                    });
                }
            }
            "string_literal" => scan_literal(&classifier, &node, config, &mut report),
            _ => {}
        }
    }

    for id in &index.declared {
        let Some(info) = arena.get(*id) else {
            continue;
        };
        let name = display_name(info);
        if classifier.is_expression_or_language_type(arena, Some(*id)) {
            report.expression_classes.push(name.clone());
        }
        if classifier.implements_route_builder_capability(arena, *id) {
            report.route_builders.push(name.clone());
        }
        for method in &info.methods {
            if is_annotated_with_handler_marker(method) {
                report.handler_methods.push(format!("{}.{}", name, method.name));
            }
        }
    }

    tracing::debug!(
        file,
        endpoints = report.endpoints.len(),
        expressions = report.expressions.len(),
        route_starts = report.route_starts.len(),
        "scan finished"
    );
    report
}

fn display_name(info: &ClassInfo) -> String {
    info.qualified_name
        .clone()
        .unwrap_or_else(|| "<anonymous>".to_string())
}

fn scan_literal<'a>(
    classifier: &DslClassifier<JavaNode<'a>>,
    node: &JavaNode<'a>,
    config: &LensConfig,
    report: &mut ScanReport,
) {
    if !classifier.accept_for_inspection(node) {
        report.skipped_literals += 1;
        return;
    }
    let Some(value) = node.string_value() else {
        return;
    };

    let role = if classifier.is_consumer_endpoint(node) {
        Some(EndpointRole::Consumer)
    } else if classifier.is_producer_endpoint(node) {
        Some(EndpointRole::Producer)
    } else {
        None
    };
    if let Some(role) = role {
        let display = &config.display;
        report.endpoints.push(EndpointEntry {
            line: node.line(),
            role,
            uri: value.to_string(),
            component: component_name(value).map(str::to_string),
            has_query: has_query_marker(value),
            string_format: classifier.is_from_string_format_endpoint(node),
            validate: !classifier.skip_validation(node),
            in_route_start: classifier.is_route_start_expression(node),
            display: wrap_separator(
                value,
                &display.separator,
                &display.line_break,
                display.wrap_width,
            ),
        });
    }

    if let Some(language) = config
        .languages
        .known
        .iter()
        .find(|language| classifier.is_dsl_expression(node, language))
    {
        report.expressions.push(ExpressionEntry {
            line: node.line(),
            language: canonical_language_name(language).to_string(),
            text: value.to_string(),
            predicate: classifier.is_dsl_expression_as_predicate(node, language),
        });
    }
}

impl ScanReport {
    /// Human readable rendering
    pub fn to_text(&self) -> String {
        let mut out = format!("file: {}\n", self.file);

        if !self.route_starts.is_empty() {
            out.push_str("route starts:\n");
            for start in &self.route_starts {
                out.push_str(&format!("  {:>4}  {}\n", start.line, start.method));
            }
        }

        if !self.endpoints.is_empty() {
            out.push_str("endpoints:\n");
            for endpoint in &self.endpoints {
                let mut flags = Vec::new();
                if endpoint.string_format {
                    flags.push("format");
                }
                if !endpoint.validate {
                    flags.push("no-validate");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", flags.join(", "))
                };
                let display = endpoint.display.replace('\n', "\n              ");
                out.push_str(&format!(
                    "  {:>4}  {:<8}  {}{}\n",
                    endpoint.line,
                    endpoint.role.as_str(),
                    display,
                    flags
                ));
            }
        }

        if !self.expressions.is_empty() {
            out.push_str("expressions:\n");
            for expr in &self.expressions {
                let kind = if expr.predicate { "predicate" } else { "expression" };
                out.push_str(&format!(
                    "  {:>4}  {} {}: {}\n",
                    expr.line, expr.language, kind, expr.text
                ));
            }
        }

        if !self.beans.is_empty() {
            out.push_str("beans:\n");
            for bean in &self.beans {
                out.push_str(&format!("  {:>4}  {}", bean.line, bean.class));
                if let Some(at) = bean.declared_at {
                    out.push_str(&format!(" (line {})", at));
                }
                out.push('\n');
            }
        }

        for (title, names) in [
            ("expression classes", &self.expression_classes),
            ("route builders", &self.route_builders),
            ("handler methods", &self.handler_methods),
        ] {
            if !names.is_empty() {
                out.push_str(&format!("{}: {}\n", title, names.join(", ")));
            }
        }

        if self.skipped_literals > 0 {
            out.push_str(&format!("skipped literals: {}\n", self.skipped_literals));
        }
        out
    }
}
