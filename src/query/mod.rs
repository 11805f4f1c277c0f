//! Query construction: context, errors, matched collections.

pub mod ops;
pub(crate) mod search;

use std::fmt;

use tracing::debug;

use crate::selector::parse_selector;
use crate::tree::{WidgetId, WidgetTree};

/// Errors surfaced while constructing queries.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The tree has no root; queries need a search origin.
    #[error("root widget is not set; insert a root before constructing queries")]
    RootNotSet,
    /// The context's root was removed from the tree.
    #[error("root widget no longer exists in the tree")]
    RootDetached,
}

/// Explicit query configuration: the search root and a debug flag.
///
/// Construction validates the root up front, so a missing root is reported
/// once, when the context is built, rather than on every query. The context
/// is plain data; independent trees (and tests) each build their own.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext {
    root: WidgetId,
    debug: bool,
}

impl QueryContext {
    /// Build a context rooted at the tree's root.
    pub fn new(tree: &WidgetTree) -> Result<Self, QueryError> {
        let root = tree.root().ok_or(QueryError::RootNotSet)?;
        Ok(Self { root, debug: false })
    }

    /// Build a context rooted at an explicit node, scoping every query to
    /// that subtree.
    pub fn for_root(tree: &WidgetTree, root: WidgetId) -> Result<Self, QueryError> {
        if !tree.contains(root) {
            return Err(QueryError::RootDetached);
        }
        Ok(Self { root, debug: false })
    }

    /// Enable or disable verbose logging of parse and match steps (builder).
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Run `selector` from the context root and return only the first match
    /// (the shallowest, left-most satisfying node), short-circuiting the
    /// traversal as soon as the chain completes.
    ///
    /// Fails with [`QueryError::RootDetached`] if the root was removed after
    /// the context was built.
    pub fn select_first(
        &self,
        tree: &WidgetTree,
        selector: &str,
    ) -> Result<Option<WidgetId>, QueryError> {
        if !tree.contains(self.root) {
            return Err(QueryError::RootDetached);
        }
        let parsed = parse_selector(selector);
        if self.debug {
            debug!(selector, parsed = %parsed, root = ?self.root, "running first-match query");
        }
        Ok(search::find_first(tree, self.root, &parsed, self.debug))
    }

    /// The configured search root.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Whether verbose match logging is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

/// An ordered collection of matched widgets.
///
/// A `Query` holds plain [`WidgetId`] keys, never references into the tree:
/// every operation that needs node data borrows the tree explicitly, so a
/// search can never overlap with structural mutation.
#[derive(Debug, Clone, Default)]
pub struct Query {
    nodes: Vec<WidgetId>,
    selector: Option<String>,
}

impl Query {
    /// Run `selector` from the context root and collect every match in
    /// breadth-first order (shallowest first, left-to-right within a level).
    ///
    /// Fails with [`QueryError::RootDetached`] if the context root was
    /// removed after the context was built. A selector matching nothing is
    /// not an error: it produces an empty query.
    pub fn from_selector(
        ctx: &QueryContext,
        tree: &WidgetTree,
        selector: &str,
    ) -> Result<Self, QueryError> {
        if !tree.contains(ctx.root) {
            return Err(QueryError::RootDetached);
        }
        let parsed = parse_selector(selector);
        if ctx.debug {
            debug!(selector, parsed = %parsed, root = ?ctx.root, "running selector query");
        }
        let nodes = search::find_all(tree, ctx.root, &parsed, ctx.debug);
        if ctx.debug {
            debug!(selector, matches = nodes.len(), "selector query finished");
        }
        Ok(Self {
            nodes,
            selector: Some(selector.to_owned()),
        })
    }

    /// Wrap an explicitly provided set of widgets. No search is performed and
    /// no root is required.
    pub fn from_collection(nodes: impl IntoIterator<Item = WidgetId>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            selector: None,
        }
    }

    /// The matched widget ids, in match order.
    pub fn nodes(&self) -> &[WidgetId] {
        &self.nodes
    }

    /// The selector this query was built from, if any.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Number of matched widgets.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first match (the shallowest, left-most satisfying node), if any.
    pub fn first(&self) -> Option<WidgetId> {
        self.nodes.first().copied()
    }

    /// The match at `index`, if any.
    pub fn get(&self, index: usize) -> Option<WidgetId> {
        self.nodes.get(index).copied()
    }

    /// Iterate over the matched ids.
    pub fn iter(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes.iter().copied()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Some(selector) => write!(f, "Query({selector:?}): {} match(es)", self.nodes.len()),
            None => write!(f, "Query(collection): {} widget(s)", self.nodes.len()),
        }
    }
}
