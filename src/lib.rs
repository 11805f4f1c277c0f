//! # widget-query
//!
//! jQuery-style CSS selectors and traversal for retained widget trees.
//!
//! widget-query lets an application locate and manipulate widgets with
//! selector strings (`#id`, `.class`, descendant chains) instead of manual
//! tree walking. Matching is breadth-first: the first match is always the
//! shallowest node satisfying the selector, with left-to-right tie-breaking
//! among equally shallow candidates.
//!
//! ## Core Systems
//!
//! - **[`tree`]** — Slotmap-backed widget arena with tree edits and flat
//!   id/class/type lookups
//! - **[`selector`]** — Selector engine: logos tokenizer, step model, lenient
//!   parser
//! - **[`query`]** — [`QueryContext`] (explicit root + debug flag),
//!   [`Query`] collections, BFS matcher, and jQuery-style operations
//!   (`find`, `closest`, `append`, `remove`, class manipulation, ...)
//!
//! ## Example
//!
//! ```
//! use widget_query::{Query, QueryContext, WidgetData, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert(WidgetData::new("Container"));
//! let header = tree.insert_child(root, WidgetData::new("Header").with_id("header"));
//! let title = tree.insert_child(header, WidgetData::new("Label").with_class("title"));
//!
//! let ctx = QueryContext::new(&tree)?;
//! let q = Query::from_selector(&ctx, &tree, "#header .title")?;
//! assert_eq!(q.first(), Some(title));
//! # Ok::<(), widget_query::QueryError>(())
//! ```

pub mod query;
pub mod selector;
pub mod tree;

pub use query::{Query, QueryContext, QueryError};
pub use selector::{parse_selector, Selector, Step};
pub use tree::{WidgetData, WidgetId, WidgetTree};
