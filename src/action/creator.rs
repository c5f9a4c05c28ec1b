//! Action records and the creators that build them.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::build_type;

/// An immutable record describing something that happened.
///
/// Serializes as `{"type": "...", "payload": ...}`; the payload is omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Action {
    /// Action without a payload.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
        }
    }

    pub fn with_payload(action_type: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Some(payload.into()),
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

/// Builds actions of one fixed type.
///
/// Two creators are equal when their types are equal. Compare an action to
/// a creator with [`ActionCreator::matches`], which looks at the explicit
/// `type` field only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionCreator {
    action_type: String,
}

impl ActionCreator {
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Action with no payload.
    pub fn call(&self) -> Action {
        Action::new(self.action_type.clone())
    }

    pub fn create(&self, payload: impl Into<Value>) -> Action {
        Action::with_payload(self.action_type.clone(), payload)
    }

    pub fn create_with(&self, payload: Option<Value>) -> Action {
        Action {
            action_type: self.action_type.clone(),
            payload,
        }
    }

    pub fn matches(&self, action: &Action) -> bool {
        action.action_type == self.action_type
    }
}

impl fmt::Display for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.action_type)
    }
}

/// Creates an action creator for a literal type.
pub fn make_action(action_type: impl Into<String>) -> ActionCreator {
    ActionCreator {
        action_type: action_type.into(),
    }
}

/// Action creators of one slice, keyed by case name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionCreators {
    creators: BTreeMap<String, ActionCreator>,
}

impl ActionCreators {
    pub fn get(&self, case_name: &str) -> Option<&ActionCreator> {
        self.creators.get(case_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionCreator)> {
        self.creators.iter().map(|(name, creator)| (name.as_str(), creator))
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl Index<&str> for ActionCreators {
    type Output = ActionCreator;

    /// Panics if no creator exists for `case_name`.
    fn index(&self, case_name: &str) -> &Self::Output {
        match self.creators.get(case_name) {
            Some(creator) => creator,
            None => panic!("no action creator for case '{case_name}'"),
        }
    }
}

/// Builds one creator per case name.
///
/// The type of each creator is, in order of precedence:
/// 1. the entry in `overrides` for that case,
/// 2. [`build_type`] when `slice_name` is given (an empty name still
///    upper-snakes the case),
/// 3. the raw case name.
pub fn make_action_creators<I, S>(
    slice_name: Option<&str>,
    case_names: I,
    overrides: &BTreeMap<String, String>,
) -> ActionCreators
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let creators = case_names
        .into_iter()
        .map(|case| {
            let case = case.as_ref();
            let action_type = match (overrides.get(case), slice_name) {
                (Some(custom), _) => custom.clone(),
                (None, Some(slice)) => build_type(slice, case),
                (None, None) => case.to_string(),
            };
            (case.to_string(), make_action(action_type))
        })
        .collect();

    ActionCreators { creators }
}
