//! Errors raised while assembling slices.

use thiserror::Error;

use crate::config::ConfigError;

/// Construction-time misconfiguration of a slice or of a combined reducer.
///
/// Runtime lookups never produce these: selector misses are logged and
/// yield `None`, and a panicking case handler unwinds through the reducer.
#[derive(Debug, Error)]
pub enum SliceError {
    /// Slice built without any case handler
    #[error("Slice '{slice}' has no case handlers")]
    MissingCases { slice: String },

    #[error("Slice '{slice}' defines case '{case}' more than once")]
    DuplicateCase { slice: String, case: String },

    /// `/` separates the slice namespace from the case in action types
    #[error("Slice name '{slice}' must not contain '/'")]
    InvalidName { slice: String },

    #[error("Slice '{slice}' overrides the type of unknown case '{case}'")]
    UnknownOverride { slice: String, case: String },

    /// Reducer without a slice name cannot be mounted in a root object
    #[error("Cannot combine a reducer that has no slice name")]
    UnnamedSlice,

    #[error("Slice '{slice}' is combined more than once")]
    DuplicateSlice { slice: String },

    #[error("Slice manifest error: {0}")]
    Config(#[from] ConfigError),
}
