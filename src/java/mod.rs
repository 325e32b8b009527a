//! Java DSL host adapter
//!
//! Parses Java sources with tree-sitter and exposes the result through the
//! host-side traits the classification core consumes:
//!
//! - [`JavaNode`]: a syntax node plus the source it came from, implementing
//!   [`SyntaxNode`]
//! - [`JavaDslRecognizer`]: the Java DSL flavour of [`Recognizer`](crate::recognizer::Recognizer)
//! - [`build_class_index`]: the file's type declarations as a
//!   [`ClassArena`](crate::hierarchy::ClassArena)

pub mod classes;
pub mod recognizer;

pub use classes::{build_class_index, ClassIndex};
pub use recognizer::JavaDslRecognizer;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{LensError, Result};
use crate::lang::DslFileKind;
use crate::recognizer::SyntaxNode;

/// A parsed Java compilation unit
pub struct JavaSource {
    text: String,
    tree: Tree,
}

impl JavaSource {
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let language = DslFileKind::Java.tree_sitter_language().ok_or_else(|| {
            LensError::UnsupportedLanguage {
                extension: DslFileKind::Java.name().to_string(),
            }
        })?;

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| LensError::ParseFailure {
                message: format!("Failed to load Java grammar: {}", e),
            })?;

        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| LensError::ParseFailure {
                message: "parser produced no tree".to_string(),
            })?;

        if tree.root_node().has_error() {
            tracing::debug!("Java source contains syntax errors, continuing with partial tree");
        }

        Ok(Self { text, tree })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> JavaNode<'_> {
        JavaNode {
            node: self.tree.root_node(),
            source: &self.text,
        }
    }

    pub fn has_syntax_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Every node of the tree in document order
    pub fn nodes(&self) -> Vec<JavaNode<'_>> {
        let mut nodes = Vec::new();
        visit_all(&self.tree.root_node(), |node| {
            nodes.push(JavaNode {
                node: *node,
                source: &self.text,
            })
        });
        nodes
    }

    pub fn nodes_of_kind(&self, kind: &str) -> Vec<JavaNode<'_>> {
        self.nodes()
            .into_iter()
            .filter(|node| node.kind() == kind)
            .collect()
    }
}

/// A Java syntax node together with the source text it points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> JavaNode<'a> {
    fn wrap(&self, node: Node<'a>) -> Self {
        Self {
            node,
            source: self.source,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    pub fn text(&self) -> &'a str {
        self.node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// 1-based line of the node start
    pub fn line(&self) -> usize {
        self.node.start_position().row + 1
    }

    pub fn field(&self, name: &str) -> Option<Self> {
        self.node.child_by_field_name(name).map(|n| self.wrap(n))
    }

    pub fn named_children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|n| self.wrap(n))
            .collect()
    }

    /// All children, anonymous tokens included
    pub fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .children(&mut cursor)
            .map(|n| self.wrap(n))
            .collect()
    }

    pub fn child_of_kind(&self, kind: &str) -> Option<Self> {
        self.named_children().into_iter().find(|c| c.kind() == kind)
    }

    /// Unquoted value of a string literal node
    pub fn string_value(&self) -> Option<&'a str> {
        if self.kind() != "string_literal" {
            return None;
        }
        let text = self.text();
        let quotes = if text.starts_with("\"\"\"") { 3 } else { 1 };
        if text.len() < quotes * 2 {
            return Some("");
        }
        Some(&text[quotes..text.len() - quotes])
    }

    /// Topmost ancestor, the compilation unit
    pub fn root(&self) -> Self {
        let mut current = *self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Descendants (including self) in document order
    pub fn descendants(&self) -> Vec<Self> {
        let mut nodes = Vec::new();
        visit_all(&self.node, |node| nodes.push(self.wrap(*node)));
        nodes
    }
}

impl SyntaxNode for JavaNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|n| self.wrap(n))
    }
}

/// Visit all nodes in a tree with a visitor function (iterative to avoid stack overflow)
fn visit_all<'a, F>(node: &Node<'a>, mut visitor: F)
where
    F: FnMut(&Node<'a>),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());

            if cursor.goto_first_child() {
                continue;
            }
        }

        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}
