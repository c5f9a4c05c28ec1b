use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declarative part of a slice: everything except the case handlers.
///
/// ```toml
/// name = "form"
///
/// [initial_value]
/// name = ""
/// surname = ""
///
/// [type_overrides]
/// reset = "@@FORM_RESET"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceManifest {
    /// Action-type namespace and mount key. Empty means un-namespaced.
    #[serde(default)]
    pub name: String,
    /// Initial slice value. TOML tables become objects, arrays stay arrays.
    #[serde(default)]
    pub initial_value: Value,
    /// Case name to literal action type, replacing the derived type.
    #[serde(default)]
    pub type_overrides: BTreeMap<String, String>,
}
