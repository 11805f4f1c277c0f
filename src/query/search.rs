//! Breadth-first selector search over the widget tree.
//!
//! The work queue holds `(WidgetId, step index)` pairs: the index points into
//! the selector's step sequence instead of carrying a truncated copy of it.
//! Because the queue is FIFO and each popped node only enqueues its children,
//! the first completed chain is the shallowest match, and among equally
//! shallow matches the one under the earlier-ordered sibling wins.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::selector::model::Selector;
use crate::tree::{WidgetId, WidgetTree};

/// Find the first node under `root` (inclusive) satisfying the full step
/// chain, in breadth-first order. Empty selectors match nothing.
pub(crate) fn find_first(
    tree: &WidgetTree,
    root: WidgetId,
    selector: &Selector,
    verbose: bool,
) -> Option<WidgetId> {
    search(tree, root, selector, true, verbose).into_iter().next()
}

/// Find every node under `root` (inclusive) satisfying the full step chain,
/// in breadth-first order.
pub(crate) fn find_all(
    tree: &WidgetTree,
    root: WidgetId,
    selector: &Selector,
    verbose: bool,
) -> Vec<WidgetId> {
    search(tree, root, selector, false, verbose)
}

fn search(
    tree: &WidgetTree,
    root: WidgetId,
    selector: &Selector,
    first_only: bool,
    verbose: bool,
) -> Vec<WidgetId> {
    let steps = &selector.steps;
    if steps.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut queue: VecDeque<(WidgetId, usize)> = VecDeque::new();
    // A slotmap arena enforces single parentage, so a well-formed tree never
    // enqueues the same (node, index) pair twice; the guard bounds the
    // traversal if a child list ever aliases a subtree.
    let mut seen: HashSet<(WidgetId, usize)> = HashSet::new();

    queue.push_back((root, 0));
    seen.insert((root, 0));

    while let Some((node, step_idx)) = queue.pop_front() {
        let Some(data) = tree.get(node) else {
            continue;
        };

        let matched = steps[step_idx].matches(data);
        if verbose {
            debug!(?node, step = step_idx, matched, "matcher visit");
        }

        if matched {
            if step_idx + 1 == steps.len() {
                // Full chain satisfied.
                if verbose {
                    debug!(?node, "selector matched");
                }
                results.push(node);
                if first_only {
                    return results;
                }
            } else {
                // The next step may be satisfied anywhere below this node.
                for &child in tree.children(node) {
                    if seen.insert((child, step_idx + 1)) {
                        queue.push_back((child, step_idx + 1));
                    }
                }
            }
        }

        // Regardless of the match, the current step may still be satisfied
        // deeper down (descendant, not direct-child, semantics).
        for &child in tree.children(node) {
            if seen.insert((child, step_idx)) {
                queue.push_back((child, step_idx));
            }
        }
    }

    results
}

/// Check whether `node` itself satisfies the selector, walking the step chain
/// right to left through its ancestors.
///
/// The last step must match `node`; each earlier step must match some strictly
/// higher ancestor, nearest first. With descendant-only chains the greedy
/// nearest-ancestor choice never rules out a valid match.
pub(crate) fn matches_ancestry(tree: &WidgetTree, node: WidgetId, selector: &Selector) -> bool {
    let steps = &selector.steps;
    let Some((last, rest)) = steps.split_last() else {
        return false;
    };

    let Some(data) = tree.get(node) else {
        return false;
    };
    if !last.matches(data) {
        return false;
    }

    let ancestors = tree.ancestors(node);
    let mut from = 0;
    for step in rest.iter().rev() {
        let found = ancestors[from..].iter().position(|&ancestor| {
            tree.get(ancestor).is_some_and(|data| step.matches(data))
        });
        match found {
            Some(offset) => from += offset + 1,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::parse_selector;
    use crate::tree::WidgetData;

    /// Build the test tree:
    /// ```text
    ///          root (#app)
    ///         /          \
    ///   header (#header)   main (.content)
    ///    /                  \
    ///  title (.title)       deep (#header .inner)
    ///                         \
    ///                        leaf (.title)
    /// ```
    fn build_tree() -> (WidgetTree, WidgetId, WidgetId, WidgetId, WidgetId, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetData::new("Container").with_id("app"));
        let header = tree.insert_child(root, WidgetData::new("Header").with_id("header"));
        let main = tree.insert_child(root, WidgetData::new("Panel").with_class("content"));
        let title = tree.insert_child(header, WidgetData::new("Label").with_class("title"));
        let deep = tree.insert_child(
            main,
            WidgetData::new("Panel").with_id("header").with_class("inner"),
        );
        let leaf = tree.insert_child(deep, WidgetData::new("Label").with_class("title"));
        (tree, root, header, main, title, deep, leaf)
    }

    fn first(tree: &WidgetTree, root: WidgetId, input: &str) -> Option<WidgetId> {
        find_first(tree, root, &parse_selector(input), false)
    }

    fn all(tree: &WidgetTree, root: WidgetId, input: &str) -> Vec<WidgetId> {
        find_all(tree, root, &parse_selector(input), false)
    }

    // ── Basic matching ───────────────────────────────────────────────

    #[test]
    fn single_step_matches_descendant() {
        let (tree, root, header, ..) = build_tree();
        assert_eq!(first(&tree, root, "#header"), Some(header));
    }

    #[test]
    fn single_step_matches_root_itself() {
        let (tree, root, ..) = build_tree();
        assert_eq!(first(&tree, root, "#app"), Some(root));
    }

    #[test]
    fn chain_matches_across_depth() {
        let (tree, root, _, _, title, ..) = build_tree();
        assert_eq!(first(&tree, root, "#header .title"), Some(title));
    }

    #[test]
    fn chain_with_missing_prefix_is_no_match() {
        let (tree, root, ..) = build_tree();
        assert_eq!(first(&tree, root, "#missing .title"), None);
    }

    #[test]
    fn no_match_returns_none_not_partial() {
        // ".content" matches main, but nothing below it carries "#app".
        let (tree, root, ..) = build_tree();
        assert_eq!(first(&tree, root, ".content #app"), None);
    }

    #[test]
    fn empty_selector_matches_nothing() {
        let (tree, root, ..) = build_tree();
        assert_eq!(first(&tree, root, ""), None);
        assert!(all(&tree, root, "").is_empty());
    }

    // ── Descendant (not direct-child) semantics ──────────────────────

    #[test]
    fn step_matches_below_intermediate_nodes() {
        // leaf is a grandchild of main: #app .content .title must still reach it.
        let (tree, root, _, _, _, _, leaf) = build_tree();
        assert_eq!(first(&tree, root, ".content .title"), Some(leaf));
        assert_eq!(first(&tree, root, "#app .content .title"), Some(leaf));
    }

    #[test]
    fn greater_than_behaves_as_descendant() {
        let (tree, root, _, _, _, _, leaf) = build_tree();
        assert_eq!(first(&tree, root, "#app > .content > .title"), Some(leaf));
    }

    // ── Ordering guarantees ──────────────────────────────────────────

    #[test]
    fn shallowest_match_wins() {
        // "#header" matches header (depth 1) and deep (depth 2).
        let (tree, root, header, ..) = build_tree();
        assert_eq!(first(&tree, root, "#header"), Some(header));
    }

    #[test]
    fn shallowest_title_wins() {
        // ".title" matches title (depth 2) and leaf (depth 3).
        let (tree, root, _, _, title, ..) = build_tree();
        assert_eq!(first(&tree, root, ".title"), Some(title));
    }

    #[test]
    fn left_to_right_tie_break() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(WidgetData::new("Container"));
        let left = tree.insert_child(root, WidgetData::new("Panel"));
        let right = tree.insert_child(root, WidgetData::new("Panel"));
        let in_left = tree.insert_child(left, WidgetData::new("Label").with_class("hit"));
        let _in_right = tree.insert_child(right, WidgetData::new("Label").with_class("hit"));
        assert_eq!(first(&tree, root, ".hit"), Some(in_left));
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let (tree, root, ..) = build_tree();
        let once = first(&tree, root, ".title");
        for _ in 0..10 {
            assert_eq!(first(&tree, root, ".title"), once);
        }
    }

    // ── find_all ─────────────────────────────────────────────────────

    #[test]
    fn find_all_collects_in_bfs_order() {
        let (tree, root, header, _, title, deep, _) = build_tree();
        assert_eq!(all(&tree, root, "#header"), vec![header, deep]);
        let titles = all(&tree, root, ".title");
        assert_eq!(titles[0], title);
        assert_eq!(titles.len(), 2);
    }

    #[test]
    fn find_all_chain_below_matched_ancestor() {
        // Both .title nodes complete a "#app .title" chain.
        let (tree, root, ..) = build_tree();
        assert_eq!(all(&tree, root, "#app .title").len(), 2);
    }

    #[test]
    fn find_all_no_duplicates() {
        // deep satisfies "#header" both as a fresh step-0 candidate and below
        // header; it must be reported once.
        let (tree, root, ..) = build_tree();
        let hits = all(&tree, root, "#header");
        let mut dedup = hits.clone();
        dedup.dedup();
        assert_eq!(hits, dedup);
    }

    #[test]
    fn search_from_subtree_root() {
        let (tree, _, _, main, _, _, leaf) = build_tree();
        assert_eq!(first(&tree, main, ".title"), Some(leaf));
        assert_eq!(first(&tree, main, "#app"), None);
    }

    #[test]
    fn compound_step_requires_all_fragments() {
        let (tree, root, _, _, _, deep, _) = build_tree();
        assert_eq!(first(&tree, root, "#header.inner"), Some(deep));
        assert_eq!(first(&tree, root, "#header.missing"), None);
    }

    // ── matches_ancestry ─────────────────────────────────────────────

    #[test]
    fn ancestry_single_step() {
        let (tree, _, header, _, title, ..) = build_tree();
        assert!(matches_ancestry(&tree, header, &parse_selector("#header")));
        assert!(!matches_ancestry(&tree, title, &parse_selector("#header")));
    }

    #[test]
    fn ancestry_chain() {
        let (tree, _, _, _, title, _, leaf) = build_tree();
        assert!(matches_ancestry(&tree, title, &parse_selector("#header .title")));
        assert!(matches_ancestry(&tree, leaf, &parse_selector("#app .content .title")));
        assert!(!matches_ancestry(&tree, leaf, &parse_selector("#missing .title")));
    }

    #[test]
    fn ancestry_earlier_steps_need_strict_ancestors() {
        // deep carries #header itself; "#header #header" needs a second
        // #header strictly above it, and there is none.
        let (tree, _, _, _, _, deep, _) = build_tree();
        assert!(!matches_ancestry(&tree, deep, &parse_selector("#header #header")));
        assert!(matches_ancestry(&tree, deep, &parse_selector(".content #header")));
        assert!(matches_ancestry(&tree, deep, &parse_selector("#app #header")));
    }

    #[test]
    fn ancestry_empty_selector_is_false() {
        let (tree, root, ..) = build_tree();
        assert!(!matches_ancestry(&tree, root, &Selector::new()));
    }
}
