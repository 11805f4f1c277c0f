//! Widget tree: slotmap-backed arena with id/class lookups.

pub mod arena;
pub mod find;
pub mod node;

pub use arena::WidgetTree;
pub use node::{WidgetData, WidgetId};
