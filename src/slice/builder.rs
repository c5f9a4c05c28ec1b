use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::action::{make_action_creators, ActionCreator, ActionCreators};
use crate::config::SliceManifest;
use crate::reducer::{make_reducer, CaseFn, Cases, SliceReducer};
use crate::selector::{make_selector_set, SelectorSet};
use crate::slice::error::SliceError;

/// Everything needed to build a slice, in plain data form.
#[derive(Clone)]
pub struct SliceDescriptor {
    /// Action-type namespace; empty means un-namespaced.
    pub name: String,
    pub initial_value: Value,
    /// Case handlers by case name, in declaration order.
    pub cases: Vec<(String, CaseFn)>,
}

/// The generated parts of one slice.
#[derive(Debug, Clone)]
pub struct Slice {
    name: String,
    actions: ActionCreators,
    reducer: SliceReducer,
    selectors: SelectorSet,
}

impl Slice {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &ActionCreators {
        &self.actions
    }

    /// Creator for one case, if the case exists.
    pub fn action(&self, case_name: &str) -> Option<&ActionCreator> {
        self.actions.get(case_name)
    }

    pub fn reducer(&self) -> &SliceReducer {
        &self.reducer
    }

    pub fn selectors(&self) -> &SelectorSet {
        &self.selectors
    }

    pub fn into_parts(self) -> (ActionCreators, SliceReducer, SelectorSet) {
        (self.actions, self.reducer, self.selectors)
    }
}

/// Builder for [`Slice`].
///
/// ```
/// use serde_json::json;
/// use slicekit::{Reducer, SliceBuilder};
///
/// let slice = SliceBuilder::new("cool")
///     .initial_value(json!(0))
///     .case("increment", |state, _| Some(json!(state.as_i64()? + 1)))
///     .build()
///     .unwrap();
///
/// let action = slice.actions()["increment"].call();
/// assert_eq!(action.action_type, "cool/INCREMENT");
/// let next = slice.reducer().reduce(None, &action);
/// assert_eq!(*next, json!(1));
/// ```
pub struct SliceBuilder {
    name: String,
    initial_value: Value,
    cases: Vec<(String, CaseFn)>,
    type_overrides: BTreeMap<String, String>,
}

impl SliceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_value: Value::Null,
            cases: Vec::new(),
            type_overrides: BTreeMap::new(),
        }
    }

    /// Seeds name, initial value and type overrides from a manifest.
    pub fn from_manifest(manifest: SliceManifest) -> Self {
        Self {
            name: manifest.name,
            initial_value: manifest.initial_value,
            cases: Vec::new(),
            type_overrides: manifest.type_overrides,
        }
    }

    /// Loads a manifest file and seeds the builder from it.
    pub fn from_manifest_file(path: &Path) -> Result<Self, SliceError> {
        Ok(Self::from_manifest(SliceManifest::load_from(path)?))
    }

    pub fn initial_value(mut self, value: Value) -> Self {
        self.initial_value = value;
        self
    }

    /// Registers a case handler.
    ///
    /// The handler gets a draft of the slice value and the payload. Return
    /// `None` to keep the mutated draft or `Some(value)` to replace it.
    pub fn case<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Value, Option<&Value>) -> Option<Value> + Send + Sync + 'static,
    {
        let handler: CaseFn = Arc::new(handler);
        self.cases.push((name.into(), handler));
        self
    }

    /// Uses `action_type` verbatim for `case_name` instead of the derived type.
    pub fn type_override(mut self, case_name: impl Into<String>, action_type: impl Into<String>) -> Self {
        self.type_overrides.insert(case_name.into(), action_type.into());
        self
    }

    /// Generates action creators, the reducer and selectors.
    ///
    /// Fails when the slice has no case handlers at all (an empty case list
    /// counts as missing), when a case name repeats, when an override names
    /// an unknown case, or when the slice name contains `/`.
    ///
    /// Distinct case names that end up with the same action type (`reset`
    /// and `RESET`) are not rejected: both creators exist and the case
    /// declared last handles the type.
    pub fn build(self) -> Result<Slice, SliceError> {
        let Self {
            name,
            initial_value,
            cases,
            type_overrides,
        } = self;

        if name.contains('/') {
            return Err(SliceError::InvalidName { slice: name });
        }

        if cases.is_empty() {
            return Err(SliceError::MissingCases { slice: name });
        }

        let mut seen = BTreeSet::new();
        for (case, _) in &cases {
            if !seen.insert(case.as_str()) {
                return Err(SliceError::DuplicateCase {
                    slice: name,
                    case: case.clone(),
                });
            }
        }

        if let Some(case) = type_overrides.keys().find(|case| !seen.contains(case.as_str())) {
            return Err(SliceError::UnknownOverride {
                slice: name.clone(),
                case: case.clone(),
            });
        }

        let actions = make_action_creators(
            Some(name.as_str()),
            cases.iter().map(|(case, _)| case),
            &type_overrides,
        );

        let mut by_type: Cases = BTreeMap::new();
        for (case, handler) in cases {
            let action_type = actions[case.as_str()].action_type().to_string();
            if by_type.insert(action_type.clone(), handler).is_some() {
                tracing::debug!(
                    slice = %name,
                    case = %case,
                    action_type = %action_type,
                    "Case shadows an earlier case with the same type"
                );
            }
        }

        let selectors = make_selector_set(&name, &initial_value);
        let reducer = make_reducer(name.clone(), initial_value, by_type);

        tracing::debug!(
            slice = %name,
            cases = actions.len(),
            selectors = selectors.names().count(),
            "Built slice"
        );

        Ok(Slice {
            name,
            actions,
            reducer,
            selectors,
        })
    }
}

/// Builds a slice from a descriptor.
pub fn create_slice(descriptor: SliceDescriptor) -> Result<Slice, SliceError> {
    let SliceDescriptor {
        name,
        initial_value,
        cases,
    } = descriptor;

    let mut builder = SliceBuilder::new(name).initial_value(initial_value);
    builder.cases = cases;
    builder.build()
}
