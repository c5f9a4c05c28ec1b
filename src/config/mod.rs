//! Declarative slice manifests loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::SliceManifest;
