use std::collections::BTreeMap;
use std::iter;
use std::ops::Index;

use serde_json::Value;

use super::path::Selector;

/// Name under which the whole-slice selector is listed.
pub const SELECT_SLICE: &str = "selectSlice";

/// Selectors of one slice: one for the slice itself plus one per top-level
/// field of an object-shaped initial value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorSet {
    slice: Selector,
    fields: BTreeMap<String, Selector>,
}

impl SelectorSet {
    pub fn select_slice(&self) -> &Selector {
        &self.slice
    }

    /// Looks up a selector by name. [`SELECT_SLICE`] always resolves to the
    /// whole-slice selector, even if the slice has a field of that name.
    pub fn get(&self, name: &str) -> Option<&Selector> {
        if name == SELECT_SLICE {
            Some(&self.slice)
        } else {
            self.fields.get(name)
        }
    }

    /// Field selector only, bypassing the reserved [`SELECT_SLICE`] name.
    pub fn field(&self, name: &str) -> Option<&Selector> {
        self.fields.get(name)
    }

    /// `selectSlice` followed by the field names, in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        iter::once(SELECT_SLICE).chain(
            self.fields
                .keys()
                .map(String::as_str)
                .filter(|name| *name != SELECT_SLICE),
        )
    }

    /// Mounts every selector under `prefix` in a larger root state.
    pub fn remap<I, S>(&self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefix: Vec<String> = prefix.into_iter().map(Into::into).collect();
        Self {
            slice: self.slice.remap(prefix.iter().cloned()),
            fields: self
                .fields
                .iter()
                .map(|(name, selector)| (name.clone(), selector.remap(prefix.iter().cloned())))
                .collect(),
        }
    }
}

impl Index<&str> for SelectorSet {
    type Output = Selector;

    /// Panics if no selector exists under `name`.
    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(selector) => selector,
            None => panic!("no selector named '{name}'"),
        }
    }
}

/// Builds the selectors for a slice.
///
/// With an empty slice name the root state is the slice. Field selectors are
/// generated only when `initial_value` is an object; arrays and scalars get
/// the whole-slice selector alone.
pub fn make_selector_set(slice_name: &str, initial_value: &Value) -> SelectorSet {
    let base: Vec<String> = if slice_name.is_empty() {
        Vec::new()
    } else {
        vec![slice_name.to_string()]
    };

    let fields = match initial_value {
        Value::Object(map) => map
            .keys()
            .map(|key| {
                let path = base.iter().cloned().chain(iter::once(key.clone()));
                (key.clone(), Selector::new(key.clone(), path))
            })
            .collect(),
        _ => BTreeMap::new(),
    };

    SelectorSet {
        slice: Selector::new(SELECT_SLICE, base),
        fields,
    }
}
