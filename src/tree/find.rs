//! Flat lookups: by id, class, type; generic predicate matching.

use super::arena::WidgetTree;
use super::node::{WidgetData, WidgetId};

impl WidgetTree {
    /// Find the first node carrying the given id, in breadth-first tree order
    /// from the root.
    ///
    /// Returns `None` if the tree has no root or no node carries the id.
    pub fn find_by_id(&self, id: &str) -> Option<WidgetId> {
        self.iter_tree_order()
            .find(|&node| self.get(node).is_some_and(|data| data.has_id(id)))
    }

    /// Find all nodes that have the given CSS class, in breadth-first tree order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<WidgetId> {
        self.iter_tree_order()
            .filter(|&node| self.get(node).is_some_and(|data| data.has_class(class)))
            .collect()
    }

    /// Find all nodes whose `widget_type` matches the given string, in
    /// breadth-first tree order.
    pub fn find_all_by_type(&self, widget_type: &str) -> Vec<WidgetId> {
        self.iter_tree_order()
            .filter(|&node| {
                self.get(node)
                    .is_some_and(|data| data.widget_type == widget_type)
            })
            .collect()
    }

    /// Find all nodes matching an arbitrary predicate, in breadth-first tree order.
    pub fn find_where(&self, predicate: impl Fn(&WidgetData) -> bool) -> Vec<WidgetId> {
        self.iter_tree_order()
            .filter(|&node| self.get(node).is_some_and(&predicate))
            .collect()
    }

    /// Iterate node ids in breadth-first order from the root.
    ///
    /// Nodes detached from the root (inserted but never parented under it)
    /// are not visited. An unrooted tree yields nothing.
    fn iter_tree_order(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.root()
            .map(|root| self.walk_breadth_first(root))
            .unwrap_or_default()
            .into_iter()
    }
}
