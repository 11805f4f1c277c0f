//! Collection operations: traversal, filtering, and tree edits applied to
//! every matched widget.
//!
//! Mutating operations borrow the tree mutably and skip matched ids that no
//! longer exist, so a stale query degrades to a no-op instead of panicking.

use std::collections::HashSet;

use super::search;
use super::Query;
use crate::selector::parse_selector;
use crate::tree::{WidgetData, WidgetId, WidgetTree};

/// Drop duplicate ids while preserving first-occurrence order.
fn dedup(nodes: Vec<WidgetId>) -> Vec<WidgetId> {
    let mut seen = HashSet::new();
    nodes.into_iter().filter(|id| seen.insert(*id)).collect()
}

impl Query {
    // ── Filtering ────────────────────────────────────────────────────

    /// Reduce the query to the single match at `index`. Out of bounds yields
    /// an empty query.
    pub fn eq(&self, index: usize) -> Query {
        Query {
            nodes: self.get(index).into_iter().collect(),
            selector: self.selector().map(str::to_owned),
        }
    }

    /// Apply `f` to every match, in match order.
    pub fn each(&self, mut f: impl FnMut(usize, WidgetId)) {
        for (i, id) in self.iter().enumerate() {
            f(i, id);
        }
    }

    // ── Traversal ────────────────────────────────────────────────────

    /// Search each matched widget's subtree (the widget itself excluded) and
    /// collect every node satisfying `selector`, deduplicated.
    pub fn find(&self, tree: &WidgetTree, selector: &str) -> Query {
        let parsed = parse_selector(selector);
        let mut nodes = Vec::new();
        for id in self.iter() {
            for &child in tree.children(id) {
                nodes.extend(search::find_all(tree, child, &parsed, false));
            }
        }
        Query::from_collection(dedup(nodes))
    }

    /// `true` if any matched widget itself satisfies `selector` (its ancestor
    /// chain is consulted for the selector's earlier steps).
    pub fn is(&self, tree: &WidgetTree, selector: &str) -> bool {
        let parsed = parse_selector(selector);
        self.iter()
            .any(|id| search::matches_ancestry(tree, id, &parsed))
    }

    /// For each matched widget, the nearest node (itself, then ancestors
    /// upward) satisfying `selector`. Widgets with no such node contribute
    /// nothing.
    pub fn closest(&self, tree: &WidgetTree, selector: &str) -> Query {
        let parsed = parse_selector(selector);
        let mut nodes = Vec::new();
        for id in self.iter() {
            let hit = std::iter::once(id)
                .chain(tree.ancestors(id))
                .find(|&candidate| search::matches_ancestry(tree, candidate, &parsed));
            nodes.extend(hit);
        }
        Query::from_collection(dedup(nodes))
    }

    /// The direct children of every matched widget, in match order.
    pub fn children(&self, tree: &WidgetTree) -> Query {
        let mut nodes = Vec::new();
        for id in self.iter() {
            nodes.extend_from_slice(tree.children(id));
        }
        Query::from_collection(dedup(nodes))
    }

    /// The parents of the matched widgets, deduplicated, in match order.
    pub fn parent(&self, tree: &WidgetTree) -> Query {
        let nodes = self.iter().filter_map(|id| tree.parent(id)).collect();
        Query::from_collection(dedup(nodes))
    }

    // ── Tree edits ───────────────────────────────────────────────────

    /// Append a new child (a clone of `data`) to every matched widget.
    /// Returns the ids of the inserted nodes.
    pub fn append(&self, tree: &mut WidgetTree, data: &WidgetData) -> Vec<WidgetId> {
        let mut added = Vec::new();
        for id in self.iter() {
            if tree.contains(id) {
                added.push(tree.insert_child(id, data.clone()));
            }
        }
        added
    }

    /// Prepend a new first child (a clone of `data`) to every matched widget.
    /// Returns the ids of the inserted nodes.
    pub fn prepend(&self, tree: &mut WidgetTree, data: &WidgetData) -> Vec<WidgetId> {
        let mut added = Vec::new();
        for id in self.iter() {
            if tree.contains(id) {
                added.push(tree.insert_child_at(id, 0, data.clone()));
            }
        }
        added
    }

    /// Insert a new node (a clone of `data`) as the immediately preceding
    /// sibling of every matched widget. Matches without a parent (the root)
    /// are skipped. Returns the ids of the inserted nodes.
    pub fn before(&self, tree: &mut WidgetTree, data: &WidgetData) -> Vec<WidgetId> {
        self.iter()
            .filter_map(|id| tree.insert_before(id, data.clone()))
            .collect()
    }

    /// Move every matched widget (subtree intact) to become the last child of
    /// `target`. A missing target makes this a no-op. Matches that are
    /// `target` itself or contain `target` in their subtree stay in place;
    /// moving them would create a parent cycle.
    pub fn append_to(&self, tree: &mut WidgetTree, target: WidgetId) {
        if !tree.contains(target) {
            return;
        }
        for id in self.iter() {
            if tree.contains(id) {
                tree.reparent(id, target);
            }
        }
    }

    /// Move every matched widget (subtree intact) to the front of `target`'s
    /// children. A missing target makes this a no-op. Matches that are
    /// `target` itself or contain `target` in their subtree stay in place.
    pub fn prepend_to(&self, tree: &mut WidgetTree, target: WidgetId) {
        if !tree.contains(target) {
            return;
        }
        // Reverse keeps the query's own order once everything is in front.
        for id in self.iter().collect::<Vec<_>>().into_iter().rev() {
            if tree.contains(id) {
                tree.reparent_at(id, target, 0);
            }
        }
    }

    /// Remove every matched widget and its subtree from the tree. Returns the
    /// number of matches actually removed (a match already gone because an
    /// earlier match contained it counts once, for the ancestor).
    pub fn remove(&self, tree: &mut WidgetTree) -> usize {
        self.iter().filter(|&id| tree.remove(id).is_some()).count()
    }

    /// Remove all children (and their subtrees) of every matched widget,
    /// keeping the matched widgets themselves.
    pub fn empty(&self, tree: &mut WidgetTree) {
        for id in self.iter() {
            tree.clear_children(id);
        }
    }

    // ── Class manipulation ───────────────────────────────────────────

    /// Add a CSS class to every matched widget.
    pub fn add_class(&self, tree: &mut WidgetTree, class: &str) {
        for id in self.iter() {
            if let Some(data) = tree.get_mut(id) {
                data.add_class(class);
            }
        }
    }

    /// Remove a CSS class from every matched widget.
    pub fn remove_class(&self, tree: &mut WidgetTree, class: &str) {
        for id in self.iter() {
            if let Some(data) = tree.get_mut(id) {
                data.remove_class(class);
            }
        }
    }

    /// Toggle a CSS class on every matched widget.
    pub fn toggle_class(&self, tree: &mut WidgetTree, class: &str) {
        for id in self.iter() {
            if let Some(data) = tree.get_mut(id) {
                data.toggle_class(class);
            }
        }
    }

    /// `true` if any matched widget has the given class.
    pub fn has_class(&self, tree: &WidgetTree, class: &str) -> bool {
        self.iter()
            .any(|id| tree.get(id).is_some_and(|data| data.has_class(class)))
    }

    // ── Content accessors ────────────────────────────────────────────

    /// The text content of the first match, if any.
    pub fn text(&self, tree: &WidgetTree) -> Option<String> {
        self.first()
            .and_then(|id| tree.get(id))
            .and_then(|data| data.text.clone())
    }

    /// Set the text content of every matched widget.
    pub fn set_text(&self, tree: &mut WidgetTree, text: &str) {
        for id in self.iter() {
            if let Some(data) = tree.get_mut(id) {
                data.text = Some(text.to_owned());
            }
        }
    }

    /// The data attribute `key` of the first match, if any.
    pub fn data(&self, tree: &WidgetTree, key: &str) -> Option<String> {
        self.first()
            .and_then(|id| tree.get(id))
            .and_then(|data| data.data.get(key).cloned())
    }

    /// Set the data attribute `key` on every matched widget.
    pub fn set_data(&self, tree: &mut WidgetTree, key: &str, value: &str) {
        for id in self.iter() {
            if let Some(data) = tree.get_mut(id) {
                data.data.insert(key.to_owned(), value.to_owned());
            }
        }
    }
}
