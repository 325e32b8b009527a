//! Class arena built from a Java compilation unit
//!
//! Types declared in the file (classes, interfaces, enums and records) are
//! qualified with the package name and, for nested types, the names of the
//! enclosing types. Types referenced from `extends`/`implements` clauses are
//! resolved against the file's own declarations, its imports and a small
//! table of well-known Camel types. A reference that cannot be qualified
//! stays unresolved.

use std::collections::HashMap;

use crate::hierarchy::{ClassArena, ClassId, ClassInfo, MethodDescriptor, TypeRef};
use crate::recognizer::SyntaxNode;

use super::{JavaNode, JavaSource};

/// Well-known Camel types with their direct supertypes
const CAMEL_TYPES: &[(&str, &[&str])] = &[
    ("org.apache.camel.Expression", &[]),
    ("org.apache.camel.Predicate", &[]),
    ("org.apache.camel.RoutesBuilder", &[]),
    ("org.apache.camel.model.language.ExpressionDefinition", &[]),
    ("org.apache.camel.builder.ExpressionClause", &[]),
    (
        "org.apache.camel.builder.RouteBuilder",
        &["org.apache.camel.RoutesBuilder"],
    ),
    (
        "org.apache.camel.builder.ValueBuilder",
        &["org.apache.camel.Expression", "org.apache.camel.Predicate"],
    ),
    (
        "org.apache.camel.support.ExpressionAdapter",
        &["org.apache.camel.Expression"],
    ),
    (
        "org.apache.camel.support.ExpressionSupport",
        &["org.apache.camel.Expression", "org.apache.camel.Predicate"],
    ),
];

/// Node kinds that declare a named type
const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

pub(crate) fn is_type_declaration(node: &JavaNode<'_>) -> bool {
    TYPE_DECLARATIONS.contains(&node.kind())
}

/// Class arena for one file plus the ids of the classes it declares
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    pub arena: ClassArena,
    /// Classes declared in the file, in document order
    pub declared: Vec<ClassId>,
}

impl ClassIndex {
    /// First type declared in this file with the given simple name
    pub fn find_declared(&self, simple_name: &str) -> Option<ClassId> {
        self.declared.iter().copied().find(|id| {
            self.arena
                .get(*id)
                .is_some_and(|info| info.simple_name() == Some(simple_name))
        })
    }
}

/// Build the class arena for a parsed Java file
pub fn build_class_index(source: &JavaSource) -> ClassIndex {
    let root = source.root();
    let package = package_name(&root);
    let imports = imports(&root);

    let mut resolver = Resolver {
        arena: ClassArena::new(),
        imports,
        local: HashMap::new(),
    };
    resolver.seed_camel_types();

    let declarations: Vec<JavaNode<'_>> = root
        .descendants()
        .into_iter()
        .filter(is_type_declaration)
        .collect();

    // declare first so references between classes of the same file resolve
    let mut declared = Vec::with_capacity(declarations.len());
    for decl in &declarations {
        let Some(path) = nesting_path(decl) else {
            continue;
        };
        let nested = path.join(".");
        let qualified = match &package {
            Some(pkg) => format!("{}.{}", pkg, nested),
            None => nested,
        };
        let id = resolver.arena.add(ClassInfo::named(qualified));

        // `Inner`, `Outer.Inner`, ... all name the same local type
        for start in 0..path.len() {
            resolver
                .local
                .entry(path[start..].join("."))
                .or_insert(id);
        }
        declared.push((id, *decl));
    }

    for (id, decl) in &declared {
        let info = resolver.describe(decl);
        if let Some(slot) = resolver.arena.get_mut(*id) {
            let qualified_name = slot.qualified_name.take();
            *slot = ClassInfo {
                qualified_name,
                ..info
            };
        }
    }

    tracing::debug!(
        declared = declared.len(),
        total = resolver.arena.len(),
        "class arena built"
    );

    ClassIndex {
        arena: resolver.arena,
        declared: declared.into_iter().map(|(id, _)| id).collect(),
    }
}

fn package_name(root: &JavaNode<'_>) -> Option<String> {
    root.child_of_kind("package_declaration")?
        .named_children()
        .into_iter()
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .map(|c| c.text().to_string())
}

/// Names of the declaration and its enclosing type declarations, outermost first
fn nesting_path(decl: &JavaNode<'_>) -> Option<Vec<String>> {
    let mut path = vec![decl.field("name")?.text().to_string()];
    let mut current = decl.find_ancestor_matching(is_type_declaration);
    while let Some(outer) = current {
        path.push(outer.field("name")?.text().to_string());
        current = outer.find_ancestor_matching(is_type_declaration);
    }
    path.reverse();
    Some(path)
}

/// Simple name -> qualified name for single-type imports
///
/// Static imports name members rather than types and on-demand imports
/// name no type at all, so both are left out.
fn imports(root: &JavaNode<'_>) -> HashMap<String, String> {
    root.named_children()
        .into_iter()
        .filter(|c| c.kind() == "import_declaration")
        .filter(|import| {
            !import
                .children()
                .iter()
                .any(|c| matches!(c.kind(), "static" | "asterisk"))
        })
        .filter_map(|import| {
            let name = import
                .named_children()
                .into_iter()
                .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;
            let qualified: String = name.text().chars().filter(|c| !c.is_whitespace()).collect();
            let simple = qualified.rsplit('.').next()?.to_string();
            Some((simple, qualified))
        })
        .collect()
}

/// Written type name without generic arguments
fn type_name(node: &JavaNode<'_>) -> String {
    match node.kind() {
        "generic_type" => node
            .named_children()
            .first()
            .map(type_name)
            .unwrap_or_default(),
        _ => node.text().chars().filter(|c| !c.is_whitespace()).collect(),
    }
}

struct Resolver {
    arena: ClassArena,
    imports: HashMap<String, String>,
    local: HashMap<String, ClassId>,
}

impl Resolver {
    fn seed_camel_types(&mut self) {
        for (name, _) in CAMEL_TYPES {
            self.arena.add(ClassInfo::named(*name));
        }
        for (name, supers) in CAMEL_TYPES {
            let refs: Vec<TypeRef> = supers
                .iter()
                .filter_map(|s| self.arena.find(s))
                .map(TypeRef::Resolved)
                .collect();
            if let Some(id) = self.arena.find(name) {
                if let Some(info) = self.arena.get_mut(id) {
                    info.implements = refs;
                }
            }
        }
    }

    /// Resolve a written type name to a class handle
    fn resolve(&mut self, written: &str) -> TypeRef {
        if let Some(id) = self.local.get(written) {
            return TypeRef::Resolved(*id);
        }
        let qualified = match written.split_once('.') {
            // `Outer.Inner` where `Outer` is imported
            Some((outer, rest)) => Some(match self.imports.get(outer) {
                Some(import) => format!("{}.{}", import, rest),
                None => written.to_string(),
            }),
            None => self.imports.get(written).cloned(),
        };
        match qualified {
            Some(qualified) => {
                let id = match self.arena.find(&qualified) {
                    Some(id) => id,
                    None => self.arena.add(ClassInfo::named(qualified)),
                };
                TypeRef::Resolved(id)
            }
            None => TypeRef::Unresolved(written.to_string()),
        }
    }

    fn qualify_annotation(&self, written: &str) -> String {
        if written.contains('.') {
            return written.to_string();
        }
        self.imports
            .get(written)
            .cloned()
            .unwrap_or_else(|| written.to_string())
    }

    fn annotations(&self, owner: &JavaNode<'_>) -> Vec<String> {
        let Some(modifiers) = owner.child_of_kind("modifiers") else {
            return Vec::new();
        };
        modifiers
            .named_children()
            .into_iter()
            .filter(|m| matches!(m.kind(), "marker_annotation" | "annotation"))
            .filter_map(|m| m.field("name"))
            .map(|name| self.qualify_annotation(name.text()))
            .collect()
    }

    fn type_list(&mut self, holder: Option<JavaNode<'_>>) -> Vec<TypeRef> {
        let Some(list) = holder.and_then(|h| h.child_of_kind("type_list")) else {
            return Vec::new();
        };
        list.named_children()
            .iter()
            .map(|t| {
                let written = type_name(t);
                self.resolve(&written)
            })
            .collect()
    }

    fn describe(&mut self, decl: &JavaNode<'_>) -> ClassInfo {
        let mut info = ClassInfo {
            annotations: self.annotations(decl),
            ..ClassInfo::default()
        };

        match decl.kind() {
            "class_declaration" => {
                let superclass = decl
                    .field("superclass")
                    .and_then(|s| s.named_children().into_iter().next())
                    .map(|t| {
                        let written = type_name(&t);
                        self.resolve(&written)
                    });
                info.extends = superclass.iter().cloned().collect();
                info.superclass = superclass;
                info.implements = self.type_list(decl.field("interfaces"));
            }
            "interface_declaration" => {
                info.extends = self.type_list(decl.child_of_kind("extends_interfaces"));
            }
            "enum_declaration" | "record_declaration" => {
                info.implements = self.type_list(decl.field("interfaces"));
            }
            _ => {}
        }

        // enum methods sit after the constants
        let body = decl.field("body").map(|body| {
            body.child_of_kind("enum_body_declarations")
                .unwrap_or(body)
        });
        if let Some(body) = body {
            info.methods = body
                .named_children()
                .into_iter()
                .filter(|m| m.kind() == "method_declaration")
                .filter_map(|m| {
                    let name = m.field("name")?.text().to_string();
                    Some(MethodDescriptor {
                        name,
                        annotations: self.annotations(&m),
                    })
                })
                .collect();
        }

        info
    }
}
