//! Pluggable DSL recognizers and the registry that aggregates them
//!
//! A [`Recognizer`] knows one flavour of route definitions (Java DSL, XML
//! DSL, ...) and answers yes/no questions about nodes of the host syntax
//! tree. The [`RecognizerRegistry`] snapshots the enabled recognizers once and
//! answers each question with "does any of them say yes".

use crate::hierarchy::ClassId;

/// Handle into the host's syntax tree
///
/// Only parent lookup is required; the ancestor search is derived from it.
pub trait SyntaxNode: Sized {
    fn parent(&self) -> Option<Self>;

    /// Nearest ancestor matching `predicate`, starting at the parent
    fn find_ancestor_matching<P>(&self, mut predicate: P) -> Option<Self>
    where
        P: FnMut(&Self) -> bool,
    {
        let mut current = self.parent();
        while let Some(node) = current {
            if predicate(&node) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }
}

/// Boolean questions a recognizer can be asked about a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DslQuery<'a> {
    RouteStart,
    ConsumerEndpoint,
    ProducerEndpoint,
    FromStringFormatEndpoint,
    /// Expression written in the given language
    Expression(&'a str),
    /// Expression in the given language used where a predicate is expected
    ExpressionAsPredicate(&'a str),
    SkipValidation,
    AcceptForInspection,
}

impl DslQuery<'_> {
    fn ask<N>(self, recognizer: &dyn Recognizer<N>, node: &N) -> bool {
        match self {
            Self::RouteStart => recognizer.is_route_start(node),
            Self::ConsumerEndpoint => recognizer.is_consumer_endpoint(node),
            Self::ProducerEndpoint => recognizer.is_producer_endpoint(node),
            Self::FromStringFormatEndpoint => recognizer.is_from_string_format_endpoint(node),
            Self::Expression(language) => recognizer.is_expression(node, language),
            Self::ExpressionAsPredicate(language) => {
                recognizer.is_expression_as_predicate(node, language)
            }
            Self::SkipValidation => recognizer.skip_validation(node),
            Self::AcceptForInspection => recognizer.accept_for_inspection(node),
        }
    }
}

/// One DSL flavour's answers about syntax nodes of type `N`
pub trait Recognizer<N>: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Checked once, when a registry is built
    fn is_enabled(&self) -> bool;

    /// Start of a route, e.g. `from` or `<from>`
    fn is_route_start(&self, node: &N) -> bool;

    /// Endpoint consumed by `from`, `fromF`, `interceptFrom` or `pollEnrich`
    fn is_consumer_endpoint(&self, node: &N) -> bool;

    /// Endpoint produced to by `to`, `toF`, `interceptSendToEndpoint`, `wireTap` or `enrich`
    fn is_producer_endpoint(&self, node: &N) -> bool;

    /// Endpoint written with `String.format` placeholders (`fromF`, `toF`)
    fn is_from_string_format_endpoint(&self, node: &N) -> bool;

    fn is_expression(&self, node: &N, language: &str) -> bool;

    fn is_expression_as_predicate(&self, node: &N, language: &str) -> bool;

    /// Values that look like endpoints but must not be validated as such
    fn skip_validation(&self, node: &N) -> bool;

    /// Whether the node is simple enough for annotators and inspections
    fn accept_for_inspection(&self, node: &N) -> bool;

    fn bean_class(&self, node: &N) -> Option<ClassId>;

    fn bean_node(&self, node: &N) -> Option<N>;
}

/// Snapshot of the enabled recognizers, in registration order
pub struct RecognizerRegistry<N> {
    active: Vec<Box<dyn Recognizer<N>>>,
}

impl<N> RecognizerRegistry<N> {
    /// Keep the candidates that report enabled right now
    pub fn new(candidates: Vec<Box<dyn Recognizer<N>>>) -> Self {
        let total = candidates.len();
        let active: Vec<_> = candidates
            .into_iter()
            .filter(|recognizer| {
                let enabled = recognizer.is_enabled();
                if !enabled {
                    tracing::debug!(recognizer = recognizer.name(), "recognizer disabled");
                }
                enabled
            })
            .collect();

        tracing::debug!(active = active.len(), total, "recognizer registry built");
        Self { active }
    }

    /// Does any active recognizer answer yes? Stops at the first yes.
    pub fn any_matches(&self, query: DslQuery<'_>, node: &N) -> bool {
        self.active
            .iter()
            .any(|recognizer| query.ask(recognizer.as_ref(), node))
    }

    pub fn first_bean_class(&self, node: &N) -> Option<ClassId> {
        self.active
            .iter()
            .find_map(|recognizer| recognizer.bean_class(node))
    }

    pub fn first_bean_node(&self, node: &N) -> Option<N> {
        self.active
            .iter()
            .find_map(|recognizer| recognizer.bean_node(node))
    }

    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|recognizer| recognizer.name())
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::testing::*;
    use super::*;

    const ALL_QUERIES: [DslQuery<'static>; 8] = [
        DslQuery::RouteStart,
        DslQuery::ConsumerEndpoint,
        DslQuery::ProducerEndpoint,
        DslQuery::FromStringFormatEndpoint,
        DslQuery::Expression("simple"),
        DslQuery::ExpressionAsPredicate("simple"),
        DslQuery::SkipValidation,
        DslQuery::AcceptForInspection,
    ];

    fn everything_on(node: u32) -> TableRecognizer {
        TableRecognizer {
            route_starts: vec![node],
            consumers: vec![node],
            producers: vec![node],
            string_format: vec![node],
            expressions: vec![(node, "simple")],
            predicates: vec![(node, "simple")],
            skipped: vec![node],
            accepted: vec![node],
            beans: vec![(node, 0)],
            bean_nodes: vec![(node, 9)],
            ..TableRecognizer::default()
        }
    }

    #[test]
    fn test_empty_registry_matches_nothing() {
        let registry = RecognizerRegistry::<NumNode>::new(Vec::new());
        assert!(registry.is_empty());
        for query in ALL_QUERIES {
            assert!(!registry.any_matches(query, &NumNode(1)), "{:?}", query);
        }
        assert_eq!(registry.first_bean_class(&NumNode(1)), None);
        assert_eq!(registry.first_bean_node(&NumNode(1)), None);
    }

    #[test]
    fn test_disabled_recognizers_are_dropped() {
        let registry = RecognizerRegistry::new(boxed(vec![TableRecognizer {
            disabled: true,
            ..everything_on(1)
        }]));
        assert_eq!(registry.len(), 0);
        for query in ALL_QUERIES {
            assert!(!registry.any_matches(query, &NumNode(1)), "{:?}", query);
        }
        assert_eq!(registry.first_bean_class(&NumNode(1)), None);
    }

    #[test]
    fn test_any_enabled_recognizer_can_answer() {
        let registry = RecognizerRegistry::new(boxed(vec![
            TableRecognizer {
                name: "first",
                ..TableRecognizer::default()
            },
            TableRecognizer {
                name: "second",
                ..everything_on(5)
            },
        ]));
        assert_eq!(registry.active_names().collect::<Vec<_>>(), vec!["first", "second"]);
        for query in ALL_QUERIES {
            assert!(registry.any_matches(query, &NumNode(5)), "{:?}", query);
            assert!(!registry.any_matches(query, &NumNode(6)), "{:?}", query);
        }
        assert!(!registry.any_matches(DslQuery::Expression("xpath"), &NumNode(5)));
    }

    #[test]
    fn test_first_yes_short_circuits() {
        let first = everything_on(3);
        let second = TableRecognizer::default();
        let second_calls = second.calls.clone();
        let registry = RecognizerRegistry::new(boxed(vec![first, second]));

        assert!(registry.any_matches(DslQuery::RouteStart, &NumNode(3)));
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);

        assert!(!registry.any_matches(DslQuery::RouteStart, &NumNode(4)));
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_bean_lookups_take_first_present_answer() {
        let registry = RecognizerRegistry::new(boxed(vec![
            TableRecognizer {
                beans: vec![(2, 10)],
                ..TableRecognizer::default()
            },
            TableRecognizer {
                beans: vec![(1, 20), (2, 30)],
                bean_nodes: vec![(1, 77)],
                ..TableRecognizer::default()
            },
        ]));
        assert_eq!(registry.first_bean_class(&NumNode(1)), Some(ClassId(20)));
        assert_eq!(registry.first_bean_class(&NumNode(2)), Some(ClassId(10)));
        assert_eq!(registry.first_bean_class(&NumNode(3)), None);
        assert_eq!(registry.first_bean_node(&NumNode(1)), Some(NumNode(77)));
        assert_eq!(registry.first_bean_node(&NumNode(2)), None);
    }

    #[test]
    fn test_ancestor_search_starts_at_parent() {
        let node = NumNode(123);
        assert_eq!(node.find_ancestor_matching(|n| n.0 == 12), Some(NumNode(12)));
        assert_eq!(node.find_ancestor_matching(|n| n.0 == 1), Some(NumNode(1)));
        assert_eq!(node.find_ancestor_matching(|n| n.0 == 123), None);
        assert_eq!(NumNode(1).find_ancestor_matching(|_| true), None);
    }
}
