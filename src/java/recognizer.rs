//! Recognizer for routes written in the Java DSL
//!
//! Works on the shapes a `RouteBuilder.configure()` body produces:
//!
//! ```text
//! from("timer:foo")                      route start, consumer endpoint
//!     .filter(simple("${body} != null"))  predicate expression
//!     .bean(MyBean.class, "process")      bean reference
//!     .to("log:bar");                     producer endpoint
//! ```

use std::sync::Arc;

use crate::config::RecognizerConfig;
use crate::hierarchy::ClassId;
use crate::recognizer::{Recognizer, SyntaxNode};
use crate::strings::canonical_language_name;

use super::classes::{is_type_declaration, ClassIndex};
use super::JavaNode;

const ROUTE_START_METHODS: &[&str] = &["from", "fromF"];

const CONSUMER_METHODS: &[&str] = &["from", "fromF", "interceptFrom", "pollEnrich"];

const PRODUCER_METHODS: &[&str] = &[
    "to",
    "toF",
    "toD",
    "interceptSendToEndpoint",
    "wireTap",
    "enrich",
];

const STRING_FORMAT_METHODS: &[&str] = &["fromF", "toF"];

/// EIPs whose expression argument is evaluated as a predicate
const PREDICATE_EIPS: &[&str] = &[
    "filter",
    "validate",
    "when",
    "onWhen",
    "loopDoWhile",
    "retryWhile",
    "handled",
    "continued",
];

const SKIP_VALIDATION_METHODS: &[&str] = &["brokerURL", "setBrokerURL"];

/// Java DSL recognizer
pub struct JavaDslRecognizer {
    enabled: bool,
    classes: Arc<ClassIndex>,
}

impl JavaDslRecognizer {
    /// `classes` is used to resolve `.bean(Foo.class)` references
    pub fn new(config: &RecognizerConfig, classes: Arc<ClassIndex>) -> Self {
        Self {
            enabled: config.java,
            classes,
        }
    }
}

/// The string literal a node stands for (the literal or its fragment)
fn literal_of<'a>(node: &JavaNode<'a>) -> Option<JavaNode<'a>> {
    match node.kind() {
        "string_literal" => Some(*node),
        "string_fragment" => node.parent().filter(|p| p.kind() == "string_literal"),
        _ => None,
    }
}

/// The method invocation a node is an argument of
fn invocation_taking<'a>(argument: &JavaNode<'a>) -> Option<JavaNode<'a>> {
    argument
        .parent()
        .filter(|p| p.kind() == "argument_list")?
        .parent()
        .filter(|p| p.kind() == "method_invocation")
}

/// The invocation for a node that is either the invocation or its name
fn invocation_at<'a>(node: &JavaNode<'a>) -> Option<JavaNode<'a>> {
    match node.kind() {
        "method_invocation" => Some(*node),
        "identifier" => node
            .parent()
            .filter(|p| p.kind() == "method_invocation")
            .filter(|p| p.field("name").as_ref() == Some(node)),
        _ => None,
    }
}

fn method_name<'a>(invocation: &JavaNode<'a>) -> Option<&'a str> {
    invocation.field("name").map(|n| n.text())
}

/// Literal `node` is an argument of a call to one of `methods`
fn is_literal_argument_of(node: &JavaNode<'_>, methods: &[&str]) -> bool {
    literal_of(node)
        .and_then(|literal| invocation_taking(&literal))
        .and_then(|inv| method_name(&inv))
        .is_some_and(|name| methods.contains(&name))
}

fn is_string_format_call(invocation: &JavaNode<'_>) -> bool {
    method_name(invocation) == Some("format")
        && invocation
            .field("object")
            .map_or(true, |object| object.text() == "String")
}

/// The language call a literal is the expression of, for `language`
fn language_call<'a>(node: &JavaNode<'a>, language: &str) -> Option<JavaNode<'a>> {
    let literal = literal_of(node)?;
    let invocation = invocation_taking(&literal)?;
    let name = method_name(&invocation)?;
    let wanted = canonical_language_name(language);

    if canonical_language_name(name) == wanted {
        return Some(invocation);
    }

    // language("groovy", "...") names the language in its first argument
    if name == "language" {
        let args = invocation.field("arguments")?.named_children();
        let declared = args.first()?.string_value()?;
        if args.len() > 1 && args[0] != literal && canonical_language_name(declared) == wanted {
            return Some(invocation);
        }
    }
    None
}

fn is_predicate_eip(invocation: &JavaNode<'_>) -> bool {
    method_name(invocation).is_some_and(|name| PREDICATE_EIPS.contains(&name))
}

/// The class named by `.bean(Foo.class, ...)` around the node
fn bean_type_name<'a>(node: &JavaNode<'a>) -> Option<&'a str> {
    let invocation = invocation_at(node)
        .or_else(|| literal_of(node).and_then(|literal| invocation_taking(&literal)))?;
    if method_name(&invocation) != Some("bean") {
        return None;
    }
    let class_literal = invocation
        .field("arguments")?
        .named_children()
        .into_iter()
        .find(|arg| arg.kind() == "class_literal")?;
    let written = class_literal.named_children().into_iter().next()?.text();
    Some(written.rsplit('.').next().unwrap_or(written))
}

impl<'a> Recognizer<JavaNode<'a>> for JavaDslRecognizer {
    fn name(&self) -> &str {
        "java"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_route_start(&self, node: &JavaNode<'a>) -> bool {
        invocation_at(node)
            .and_then(|inv| method_name(&inv))
            .is_some_and(|name| ROUTE_START_METHODS.contains(&name))
    }

    fn is_consumer_endpoint(&self, node: &JavaNode<'a>) -> bool {
        is_literal_argument_of(node, CONSUMER_METHODS)
    }

    fn is_producer_endpoint(&self, node: &JavaNode<'a>) -> bool {
        is_literal_argument_of(node, PRODUCER_METHODS)
    }

    fn is_from_string_format_endpoint(&self, node: &JavaNode<'a>) -> bool {
        if is_literal_argument_of(node, STRING_FORMAT_METHODS) {
            return true;
        }
        literal_of(node)
            .and_then(|literal| invocation_taking(&literal))
            .is_some_and(|inv| is_string_format_call(&inv))
    }

    fn is_expression(&self, node: &JavaNode<'a>, language: &str) -> bool {
        language_call(node, language).is_some()
    }

    fn is_expression_as_predicate(&self, node: &JavaNode<'a>, language: &str) -> bool {
        let Some(call) = language_call(node, language) else {
            return false;
        };
        // .filter(simple("..."))
        if invocation_taking(&call).is_some_and(|outer| is_predicate_eip(&outer)) {
            return true;
        }
        // .filter().simple("...")
        call.field("object")
            .filter(|object| object.kind() == "method_invocation")
            .is_some_and(|object| is_predicate_eip(&object))
    }

    fn skip_validation(&self, node: &JavaNode<'a>) -> bool {
        is_literal_argument_of(node, SKIP_VALIDATION_METHODS)
    }

    fn accept_for_inspection(&self, node: &JavaNode<'a>) -> bool {
        // concatenated values like "seda:" + name cannot be checked
        literal_of(node).is_some_and(|literal| {
            literal
                .parent()
                .map_or(true, |parent| parent.kind() != "binary_expression")
        })
    }

    // types declared in the file win over seeded and imported ones
    fn bean_class(&self, node: &JavaNode<'a>) -> Option<ClassId> {
        let name = bean_type_name(node)?;
        self.classes
            .find_declared(name)
            .or_else(|| self.classes.arena.find_by_simple_name(name))
    }

    // first declaration in document order, the same one `bean_class` picks
    fn bean_node(&self, node: &JavaNode<'a>) -> Option<JavaNode<'a>> {
        let name = bean_type_name(node)?;
        node.root().descendants().into_iter().find(|decl| {
            is_type_declaration(decl) && decl.field("name").is_some_and(|n| n.text() == name)
        })
    }
}
