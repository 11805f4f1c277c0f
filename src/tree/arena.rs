//! Tree operations: insert, remove, reparent, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{WidgetData, WidgetId};

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

/// The widget tree, backed by a slotmap arena.
///
/// All nodes live in a single `SlotMap`. Parent/child relationships are stored
/// in secondary maps so that node removal is O(subtree size) and lookup is O(1).
/// The tree owns its nodes top-down; queries hold plain `WidgetId` keys into it.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, WidgetData>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    root: Option<WidgetId>,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a root-level node (no parent).
    ///
    /// If no root has been set yet, this node becomes the root.
    pub fn insert(&mut self, data: WidgetData) -> WidgetId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child(&mut self, parent: WidgetId, data: WidgetData) -> WidgetId {
        let index = self.children(parent).len();
        self.insert_child_at(parent, index, data)
    }

    /// Insert a node as a child of `parent` at the given position.
    ///
    /// An `index` past the end appends.
    ///
    /// # Panics
    ///
    /// Panics (debug) if `parent` does not exist in the tree.
    pub fn insert_child_at(&mut self, parent: WidgetId, index: usize, data: WidgetData) -> WidgetId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "parent node does not exist"
        );
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        let siblings = self
            .children
            .get_mut(parent)
            .expect("parent must have children vec");
        let index = index.min(siblings.len());
        siblings.insert(index, id);
        id
    }

    /// Insert a node as the immediately preceding sibling of `anchor`.
    ///
    /// Returns `None` if `anchor` does not exist or has no parent (the root
    /// cannot have siblings).
    pub fn insert_before(&mut self, anchor: WidgetId, data: WidgetData) -> Option<WidgetId> {
        let parent = self.parent(anchor)?;
        let index = self
            .children(parent)
            .iter()
            .position(|&child| child == anchor)?;
        Some(self.insert_child_at(parent, index, data))
    }

    /// Remove a node and all its descendants recursively.
    ///
    /// Returns the `WidgetData` for the removed node, or `None` if it didn't exist.
    pub fn remove(&mut self, id: WidgetId) -> Option<WidgetData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Detach from parent's children list.
        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        // Clear root if we're removing it.
        if self.root == Some(id) {
            self.root = None;
        }

        // Collect all descendants (BFS) to remove them.
        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root_data = None;

        while let Some(current) = to_remove.pop_front() {
            // Queue children before removing.
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    to_remove.push_back(child);
                }
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                removed_root_data = data;
            }
        }

        removed_root_data
    }

    /// Remove all children of `id` (and their subtrees), keeping `id` itself.
    ///
    /// Returns the number of direct children removed.
    pub fn clear_children(&mut self, id: WidgetId) -> usize {
        let kids: Vec<WidgetId> = self.children(id).to_vec();
        for child in &kids {
            self.remove(*child);
        }
        kids.len()
    }

    /// Move `node` to become the last child of `new_parent`.
    ///
    /// The node keeps its subtree intact. If `node` was previously a child of
    /// another parent, it is detached first. Returns `false` (and leaves the
    /// tree untouched) if `new_parent` is `node` itself or lies inside
    /// `node`'s subtree; such a move would create a parent cycle.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either `node` or `new_parent` does not exist.
    pub fn reparent(&mut self, node: WidgetId, new_parent: WidgetId) -> bool {
        let index = self.children(new_parent).len();
        self.reparent_at(node, new_parent, index)
    }

    /// Move `node` to become a child of `new_parent` at the given position.
    ///
    /// An `index` past the end appends. Returns `false` (and leaves the tree
    /// untouched) if `new_parent` is `node` itself or lies inside `node`'s
    /// subtree.
    ///
    /// # Panics
    ///
    /// Panics (debug) if either `node` or `new_parent` does not exist.
    pub fn reparent_at(&mut self, node: WidgetId, new_parent: WidgetId, index: usize) -> bool {
        debug_assert!(self.nodes.contains_key(node), "node does not exist");
        debug_assert!(
            self.nodes.contains_key(new_parent),
            "new_parent does not exist"
        );

        // A node must never end up below itself.
        if node == new_parent || self.ancestors(new_parent).contains(&node) {
            return false;
        }

        // Detach from old parent.
        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }

        // Attach to new parent.
        self.parent.insert(node, new_parent);
        let siblings = self
            .children
            .get_mut(new_parent)
            .expect("new_parent must have children vec");
        let index = index.min(siblings.len());
        siblings.insert(index, node);
        true
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no children
    /// or does not exist.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to a node's data.
    pub fn get(&self, id: WidgetId) -> Option<&WidgetData> {
        self.nodes.get(id)
    }

    /// Mutable access to a node's data.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetData> {
        self.nodes.get_mut(id)
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: WidgetId) {
        self.root = Some(id);
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree contains a node with the given id.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Breadth-first traversal starting from `start`: level by level, children
    /// in sibling order within each level.
    pub fn walk_breadth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            for &child in self.children(current) {
                queue.push_back(child);
            }
        }
        result
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}
