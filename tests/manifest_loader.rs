mod common;

use std::path::Path;

use common::{root_with, temp_manifest};
use serde_json::json;
use slicekit::{ConfigError, Reducer, SliceBuilder, SliceError, SliceManifest};

const FORM_MANIFEST: &str = r#"
name = "form"

[initial_value]
name = ""
surname = ""

[type_overrides]
reset = "@@FORM_RESET"
"#;

/// Test that a manifest file seeds name, initial value and overrides.
#[test]
fn test_load_manifest_from_file() {
    let (_dir, path) = temp_manifest(FORM_MANIFEST);
    let manifest = SliceManifest::load_from(&path).unwrap();

    assert_eq!(manifest.name, "form");
    assert_eq!(manifest.initial_value, json!({ "name": "", "surname": "" }));
    assert_eq!(manifest.type_overrides["reset"], "@@FORM_RESET");
}

/// Test that a builder seeded from a manifest file produces a working slice.
#[test]
fn test_builder_from_manifest_file() {
    let (_dir, path) = temp_manifest(FORM_MANIFEST);
    let slice = SliceBuilder::from_manifest_file(&path)
        .unwrap()
        .case("setName", |draft, payload| {
            draft["name"] = payload.cloned().unwrap_or_default();
            None
        })
        .case("reset", |_, _| Some(json!({ "name": "", "surname": "" })))
        .build()
        .unwrap();

    assert_eq!(slice.actions()["reset"].action_type(), "@@FORM_RESET");
    assert_eq!(slice.actions()["setName"].action_type(), "form/SET_NAME");

    let state = slice
        .reducer()
        .reduce(None, &slice.actions()["setName"].create("John"));
    let root = root_with("form", (*state).clone());
    assert_eq!(slice.selectors()["name"].select(&root), Some(&json!("John")));
    assert_eq!(slice.selectors()["surname"].select(&root), Some(&json!("")));
}

/// Test that an override naming a case the builder never registers fails the build.
#[test]
fn test_manifest_override_without_case_fails_build() {
    let manifest = SliceManifest::from_toml_str(FORM_MANIFEST).unwrap();
    let err = SliceBuilder::from_manifest(manifest)
        .case("setName", |_, _| None)
        .build()
        .unwrap_err();
    assert!(matches!(err, SliceError::UnknownOverride { case, .. } if case == "reset"));
}

/// Test that a missing file surfaces as a read error wrapped in SliceError.
#[test]
fn test_missing_manifest_file() {
    let err = SliceBuilder::from_manifest_file(Path::new("/nonexistent/slice.toml"))
        .err()
        .expect("missing file should fail");
    assert!(matches!(err, SliceError::Config(ConfigError::ReadError { .. })));
}

/// Test that a malformed file reports its path.
#[test]
fn test_malformed_manifest_file() {
    let (_dir, path) = temp_manifest("name = [");
    let err = SliceManifest::load_from(&path).unwrap_err();
    match err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, Some(path)),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// Test that scalar initial values are accepted.
#[test]
fn test_scalar_initial_value() {
    let manifest = SliceManifest::from_toml_str("name = \"count\"\ninitial_value = 10").unwrap();
    assert_eq!(manifest.initial_value, json!(10));
}
