//! Selector engine: tokenizer, step model, parser.

pub mod model;
pub mod parser;
pub mod tokenizer;

pub use model::{Selector, Step};
pub use parser::parse_selector;
