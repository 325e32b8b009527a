//! Facade for DSL classification queries used by editor features

use crate::hierarchy::{self, ClassArena, ClassId, MethodDescriptor};
use crate::recognizer::{DslQuery, Recognizer, RecognizerRegistry, SyntaxNode};

/// Answers "what DSL role does this node play" for one host session
pub struct DslClassifier<N> {
    registry: RecognizerRegistry<N>,
}

impl<N: SyntaxNode> DslClassifier<N> {
    pub fn new(registry: RecognizerRegistry<N>) -> Self {
        Self { registry }
    }

    /// Build the registry from the candidate recognizers and wrap it
    pub fn from_recognizers(candidates: Vec<Box<dyn Recognizer<N>>>) -> Self {
        Self::new(RecognizerRegistry::new(candidates))
    }

    pub fn registry(&self) -> &RecognizerRegistry<N> {
        &self.registry
    }

    /// Is the node the start of a route, e.g. `from` or `<from>`?
    pub fn is_route_start(&self, node: &N) -> bool {
        self.registry.any_matches(DslQuery::RouteStart, node)
    }

    /// Is the node inside a route start expression, or a route start itself?
    ///
    /// Ancestors are searched first, starting at the parent.
    pub fn is_route_start_expression(&self, node: &N) -> bool {
        if node
            .find_ancestor_matching(|ancestor| self.is_route_start(ancestor))
            .is_some()
        {
            return true;
        }
        self.is_route_start(node)
    }

    /// Is the node an expression in `language`, e.g. `simple` or `jsonpath`?
    pub fn is_dsl_expression(&self, node: &N, language: &str) -> bool {
        self.registry
            .any_matches(DslQuery::Expression(language), node)
    }

    pub fn is_dsl_expression_as_predicate(&self, node: &N, language: &str) -> bool {
        self.registry
            .any_matches(DslQuery::ExpressionAsPredicate(language), node)
    }

    pub fn is_consumer_endpoint(&self, node: &N) -> bool {
        self.registry.any_matches(DslQuery::ConsumerEndpoint, node)
    }

    pub fn is_producer_endpoint(&self, node: &N) -> bool {
        self.registry.any_matches(DslQuery::ProducerEndpoint, node)
    }

    /// Endpoint written with `String.format` syntax and in need of special handling
    pub fn is_from_string_format_endpoint(&self, node: &N) -> bool {
        self.registry
            .any_matches(DslQuery::FromStringFormatEndpoint, node)
    }

    /// Elements such as a broker URL that look like endpoints but are not validated
    pub fn skip_validation(&self, node: &N) -> bool {
        self.registry.any_matches(DslQuery::SkipValidation, node)
    }

    /// Can annotators and inspections handle this node?
    ///
    /// Values assembled from complex code (string concatenation and the
    /// like) are skipped.
    pub fn accept_for_inspection(&self, node: &N) -> bool {
        self.registry.any_matches(DslQuery::AcceptForInspection, node)
    }

    pub fn bean_class_for(&self, node: &N) -> Option<ClassId> {
        self.registry.first_bean_class(node)
    }

    pub fn bean_node_for(&self, node: &N) -> Option<N> {
        self.registry.first_bean_node(node)
    }

    pub fn is_expression_or_language_type(
        &self,
        arena: &ClassArena,
        class: Option<ClassId>,
    ) -> bool {
        hierarchy::is_expression_or_language_type(arena, class)
    }

    pub fn is_annotated_with_handler_marker(&self, method: &MethodDescriptor) -> bool {
        hierarchy::is_annotated_with_handler_marker(method)
    }

    pub fn implements_route_builder_capability(&self, arena: &ClassArena, class: ClassId) -> bool {
        hierarchy::implements_route_builder_capability(arena, class)
    }
}
