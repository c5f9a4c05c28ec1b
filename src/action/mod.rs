//! Actions, action creators and action-type derivation.

mod creator;
mod types;

pub use creator::{make_action, make_action_creators, Action, ActionCreator, ActionCreators};
pub use types::{build_type, screaming_snake_case};
