//! Mounting several slice reducers under one root object.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::action::Action;
use crate::reducer::slice::SliceReducer;
use crate::reducer::traits::Reducer;
use crate::slice::SliceError;

/// Root reducer that delegates each key of the root object to the slice
/// reducer registered under that name.
#[derive(Debug, Clone)]
pub struct CombinedReducer {
    slices: Vec<SliceReducer>,
}

impl CombinedReducer {
    pub fn slice_names(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(SliceReducer::name)
    }
}

impl Reducer for CombinedReducer {
    fn reduce(&self, state: Option<Arc<Value>>, action: &Action) -> Arc<Value> {
        let previous = state.as_deref().and_then(Value::as_object);
        let mut updates: Vec<(&str, Value)> = Vec::new();

        for slice in &self.slices {
            let current = previous.and_then(|root| root.get(slice.name()));

            let next = match current {
                // Slices that do not handle this type keep their value untouched.
                Some(_) if !slice.handles(&action.action_type) => continue,
                Some(value) => slice.reduce(Some(Arc::new(value.clone())), action),
                None => slice.reduce(None, action),
            };

            if current != Some(&*next) {
                updates.push((slice.name(), unwrap_or_clone(next)));
            }
        }

        let had_root = previous.is_some();
        let state = match state {
            Some(state) if had_root && updates.is_empty() => return state,
            other => other,
        };

        let mut root = state
            .as_deref()
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_else(Map::new);
        for (name, value) in updates {
            root.insert(name.to_string(), value);
        }
        Arc::new(Value::Object(root))
    }
}

fn unwrap_or_clone(value: Arc<Value>) -> Value {
    Arc::try_unwrap(value).unwrap_or_else(|shared| (*shared).clone())
}

/// Combines slice reducers into one root reducer.
///
/// Every reducer must carry a non-empty slice name, and names must be unique.
pub fn combine_reducers<I>(reducers: I) -> Result<CombinedReducer, SliceError>
where
    I: IntoIterator<Item = SliceReducer>,
{
    let mut seen = BTreeSet::new();
    let mut slices = Vec::new();

    for reducer in reducers {
        if reducer.name().is_empty() {
            return Err(SliceError::UnnamedSlice);
        }
        if !seen.insert(reducer.name().to_string()) {
            return Err(SliceError::DuplicateSlice {
                slice: reducer.name().to_string(),
            });
        }
        slices.push(reducer);
    }

    tracing::debug!(slices = slices.len(), "Combined slice reducers");
    Ok(CombinedReducer { slices })
}
