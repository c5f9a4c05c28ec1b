//! Reducer trait shared by slice and combined reducers.

use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must behave as a pure function: (State, Action) -> State.
/// States are shared through `Arc` so an unchanged state can be handed
/// back without copying.
pub trait Reducer {
    /// Process an action and return the new state.
    ///
    /// `None` means the store has no state yet; the reducer substitutes its
    /// initial value before dispatching.
    fn reduce(&self, state: Option<Arc<Value>>, action: &Action) -> Arc<Value>;
}
