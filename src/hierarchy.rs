//! Class descriptors and type hierarchy matching
//!
//! Hosts hand over their type graph as a [`ClassArena`]: a flat list of
//! [`ClassInfo`] entries addressed by [`ClassId`] handles. References between
//! classes are [`TypeRef`]s; a reference the host could not resolve is kept
//! as [`TypeRef::Unresolved`] and ends the search along that branch.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};

/// Base abstractions that make a class an expression or language type
pub const EXPRESSION_TYPES: &[&str] = &[
    "org.apache.camel.Expression",
    "org.apache.camel.Predicate",
    "org.apache.camel.model.language.ExpressionDefinition",
    "org.apache.camel.builder.ExpressionClause",
];

/// Annotation marking a bean method as the message handler
pub const HANDLER_ANNOTATION: &str = "org.apache.camel.Handler";

/// Interface implemented by classes that contribute routes
pub const ROUTES_BUILDER: &str = "org.apache.camel.RoutesBuilder";

/// Handle of a class inside a [`ClassArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub usize);

/// Reference from one class to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Resolved(ClassId),
    /// The name as written in source; the host could not find the class
    Unresolved(String),
}

impl TypeRef {
    pub fn resolved(&self) -> Option<ClassId> {
        match self {
            Self::Resolved(id) => Some(*id),
            Self::Unresolved(_) => None,
        }
    }
}

/// A method with the qualified names of its annotations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

/// Descriptor of a single class or interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Fully qualified name; anonymous classes have none
    #[serde(default)]
    pub qualified_name: Option<String>,
    /// Directly implemented interfaces, in declaration order
    #[serde(default)]
    pub implements: Vec<TypeRef>,
    /// Directly extended types, in declaration order
    #[serde(default)]
    pub extends: Vec<TypeRef>,
    /// Direct superclass, absent at the root
    #[serde(default)]
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassInfo {
    pub fn named(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: Some(qualified_name.into()),
            ..Self::default()
        }
    }

    /// Unqualified name, the last segment of the qualified name
    pub fn simple_name(&self) -> Option<&str> {
        self.qualified_name
            .as_deref()
            .map(|name| name.rsplit('.').next().unwrap_or(name))
    }

    /// Direct supertypes: superclass first, then implements and extends
    fn supers(&self) -> impl Iterator<Item = &TypeRef> {
        self.superclass
            .iter()
            .chain(self.implements.iter())
            .chain(self.extends.iter())
    }
}

/// Arena of class descriptors supplied by the host's type system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassArena {
    classes: Vec<ClassInfo>,
}

impl ClassArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an arena from its JSON form, a list of class descriptors
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LensError::Serialization {
            message: format!("invalid class arena: {}", e),
        })
    }

    pub fn add(&mut self, class: ClassInfo) -> ClassId {
        self.classes.push(class);
        ClassId(self.classes.len() - 1)
    }

    /// Look up a class; handles from another arena resolve to `None`
    pub fn get(&self, id: ClassId) -> Option<&ClassInfo> {
        self.classes.get(id.0)
    }

    pub fn get_mut(&mut self, id: ClassId) -> Option<&mut ClassInfo> {
        self.classes.get_mut(id.0)
    }

    pub fn find(&self, qualified_name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|c| c.qualified_name.as_deref() == Some(qualified_name))
            .map(ClassId)
    }

    pub fn find_by_simple_name(&self, simple_name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|c| c.simple_name() == Some(simple_name))
            .map(ClassId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassInfo)> {
        self.classes.iter().enumerate().map(|(i, c)| (ClassId(i), c))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Is the class, or anything it derives from, an expression or language type?
///
/// Depth first: implemented interfaces, then extended types, then the
/// superclass. A class already seen on this search is not entered again, so
/// diamonds are cheap and a cyclic host graph still terminates.
pub fn is_expression_or_language_type(arena: &ClassArena, class: Option<ClassId>) -> bool {
    let mut visited = HashSet::new();
    matches_expression_type(arena, class, &mut visited)
}

fn matches_expression_type(
    arena: &ClassArena,
    class: Option<ClassId>,
    visited: &mut HashSet<ClassId>,
) -> bool {
    let Some(id) = class else {
        return false;
    };
    if !visited.insert(id) {
        return false;
    }
    let Some(info) = arena.get(id) else {
        return false;
    };

    if info
        .qualified_name
        .as_deref()
        .is_some_and(|name| EXPRESSION_TYPES.contains(&name))
    {
        return true;
    }

    info.implements
        .iter()
        .any(|r| matches_expression_type(arena, r.resolved(), visited))
        || info
            .extends
            .iter()
            .any(|r| matches_expression_type(arena, r.resolved(), visited))
        || matches_expression_type(
            arena,
            info.superclass.as_ref().and_then(TypeRef::resolved),
            visited,
        )
}

pub fn is_annotated_with_handler_marker(method: &MethodDescriptor) -> bool {
    method.annotations.iter().any(|a| a == HANDLER_ANNOTATION)
}

/// Does any direct supertype (one level only) name the routes builder interface?
pub fn implements_route_builder_capability(arena: &ClassArena, class: ClassId) -> bool {
    let Some(info) = arena.get(class) else {
        return false;
    };
    info.supers()
        .filter_map(TypeRef::resolved)
        .filter_map(|id| arena.get(id))
        .any(|sup| sup.qualified_name.as_deref() == Some(ROUTES_BUILDER))
}
