//! Slice builder for Redux-style state containers.
//!
//! A slice bundles three things generated from one descriptor:
//!
//! ```text
//! cases ──→ ActionCreators ──→ Action ──→ SliceReducer ──→ state
//!                                                            │
//!                                   SelectorSet ←────────────┘
//! ```
//!
//! - **Actions**: typed records whose `type` is derived from slice and case names
//! - **Reducer**: dispatches an action to the case registered for its type
//! - **Selectors**: read the slice (and each top-level field) out of a root state

pub mod action;
pub mod config;
pub mod logging;
pub mod reducer;
pub mod selector;
pub mod slice;

pub use action::{
    build_type, make_action, make_action_creators, screaming_snake_case, Action, ActionCreator,
    ActionCreators,
};
pub use config::{ConfigError, SliceManifest};
pub use reducer::{
    combine_reducers, make_reducer, CaseFn, Cases, CombinedReducer, Reducer, SliceReducer,
};
pub use selector::{make_selector_set, Selector, SelectorSet, SELECT_SLICE};
pub use slice::{create_slice, Slice, SliceBuilder, SliceDescriptor, SliceError};
