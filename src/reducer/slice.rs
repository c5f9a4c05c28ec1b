use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;
use crate::reducer::traits::Reducer;

/// A case handler.
///
/// Receives a draft of the current slice value and the action payload.
/// Returning `None` keeps the (possibly mutated) draft; returning `Some`
/// replaces the slice value, `Some(Value::Null)` included.
pub type CaseFn = Arc<dyn Fn(&mut Value, Option<&Value>) -> Option<Value> + Send + Sync>;

/// Case handlers keyed by the action type they answer to.
pub type Cases = BTreeMap<String, CaseFn>;

/// Reducer for a single slice.
///
/// Displays as its slice name, which is also the key it is mounted under
/// by [`combine_reducers`](crate::reducer::combine_reducers).
#[derive(Clone)]
pub struct SliceReducer {
    name: String,
    initial: Arc<Value>,
    cases: Cases,
}

impl SliceReducer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_value(&self) -> &Arc<Value> {
        &self.initial
    }

    /// Whether a case is registered for `action_type`.
    pub fn handles(&self, action_type: &str) -> bool {
        self.cases.contains_key(action_type)
    }

    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }
}

impl Reducer for SliceReducer {
    fn reduce(&self, state: Option<Arc<Value>>, action: &Action) -> Arc<Value> {
        let mut draft = state.unwrap_or_else(|| Arc::clone(&self.initial));

        let Some(case) = self.cases.get(&action.action_type) else {
            return draft;
        };

        tracing::trace!(slice = %self.name, action = %action.action_type, "Applying case");

        // make_mut copies unless the caller handed over the only reference,
        // so a state held elsewhere is never altered.
        let previous = (Arc::strong_count(&draft) > 1).then(|| Arc::clone(&draft));

        match case(Arc::make_mut(&mut draft), action.payload()) {
            Some(replacement) => Arc::new(replacement),
            // An untouched draft hands back the shared previous state.
            None => match previous {
                Some(previous) if *previous == *draft => previous,
                _ => draft,
            },
        }
    }
}

impl fmt::Display for SliceReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for SliceReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceReducer")
            .field("name", &self.name)
            .field("initial", &self.initial)
            .field("cases", &self.cases.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds a reducer from an initial value and case handlers keyed by action type.
pub fn make_reducer(name: impl Into<String>, initial_value: Value, cases: Cases) -> SliceReducer {
    SliceReducer {
        name: name.into(),
        initial: Arc::new(initial_value),
        cases,
    }
}
