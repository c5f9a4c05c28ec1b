//! Selectors: read-only accessors from a root state to a slice or one of its fields.

mod path;
mod set;

pub use path::Selector;
pub use set::{make_selector_set, SelectorSet, SELECT_SLICE};
