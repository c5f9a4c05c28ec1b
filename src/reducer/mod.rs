//! Reducers: slice reducers built from case handlers, and their composition.
//!
//! ```text
//! Action ──→ SliceReducer ──→ case(draft, payload) ──→ new state
//!                 │
//!                 └── unknown type ──→ previous state (same Arc)
//! ```

mod combine;
mod slice;
mod traits;

pub use combine::{combine_reducers, CombinedReducer};
pub use slice::{make_reducer, CaseFn, Cases, SliceReducer};
pub use traits::Reducer;
