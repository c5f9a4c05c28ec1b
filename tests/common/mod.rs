//! Shared slice fixtures and helpers.

#![allow(dead_code, unused_imports)]

use serde_json::{json, Value};
use slicekit::{Slice, SliceBuilder};
use std::path::PathBuf;
use tempfile::TempDir;

/// Counter slice named `cool` with replacement-style cases.
pub fn cool_counter() -> Slice {
    SliceBuilder::new("cool")
        .initial_value(json!(0))
        .case("increment", |state, _| Some(json!(state.as_i64()? + 1)))
        .case("multiply", |state, payload| {
            let factor = payload.and_then(Value::as_i64).unwrap_or(1);
            Some(json!(state.as_i64()? * factor))
        })
        .build()
        .expect("cool slice should build")
}

/// Form slice mounted under `form` with draft-mutation cases.
pub fn form_slice() -> Slice {
    SliceBuilder::new("form")
        .initial_value(json!({ "name": "", "surname": "", "middlename": "" }))
        .case("setName", |draft, payload| set_field(draft, "name", payload))
        .case("setSurname", |draft, payload| set_field(draft, "surname", payload))
        .case("clear", |_, _| Some(Value::Null))
        .build()
        .expect("form slice should build")
}

fn set_field(draft: &mut Value, key: &str, payload: Option<&Value>) -> Option<Value> {
    if let Some(fields) = draft.as_object_mut() {
        fields.insert(key.to_string(), payload.cloned().unwrap_or(Value::Null));
    }
    None
}

/// Wraps a slice value in a root state keyed by slice name.
pub fn root_with(slice_name: &str, value: Value) -> Value {
    let mut root = serde_json::Map::new();
    root.insert(slice_name.to_string(), value);
    Value::Object(root)
}

/// Writes a manifest file into a fresh temp dir.
pub fn temp_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("slice.toml");
    std::fs::write(&path, content).expect("Failed to write manifest");
    (temp_dir, path)
}
