use serde_json::Value;

/// Read-only accessor that walks a fixed key path from the root state.
///
/// Lookups tolerate partially built state: a missing key, a null value or a
/// non-container along the way is logged and yields `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    name: String,
    path: Vec<String>,
}

impl Selector {
    pub fn new<I, S>(name: impl Into<String>, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn select<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;

        for (depth, segment) in self.path.iter().enumerate() {
            let next = match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                Value::Null => {
                    tracing::warn!(
                        selector = %self.name,
                        at = %self.path[..depth].join("."),
                        "State is null, cannot read '{}'",
                        segment
                    );
                    return None;
                }
                other => {
                    tracing::warn!(
                        selector = %self.name,
                        at = %self.path[..depth].join("."),
                        "Cannot read '{}' from a {} value",
                        segment,
                        kind(other)
                    );
                    return None;
                }
            };

            match next {
                Some(value) => current = value,
                None => {
                    tracing::warn!(
                        selector = %self.name,
                        at = %self.path[..depth].join("."),
                        "Key '{}' not found in state",
                        segment
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    pub fn select_owned(&self, root: &Value) -> Option<Value> {
        self.select(root).cloned()
    }

    /// Same selector, reading from `prefix` within a larger root state.
    pub fn remap<I, S>(&self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path: Vec<String> = prefix.into_iter().map(Into::into).collect();
        path.extend(self.path.iter().cloned());
        Self {
            name: self.name.clone(),
            path,
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_path_is_identity() {
        let root = json!({ "a": 1 });
        assert_eq!(Selector::new("all", Vec::<String>::new()).select(&root), Some(&root));
    }

    #[test]
    fn walks_objects_and_arrays() {
        let root = json!({ "todos": { "items": [{ "title": "x" }] } });
        let selector = Selector::new("title", ["todos", "items", "0", "title"]);
        assert_eq!(selector.select(&root), Some(&json!("x")));
    }

    #[test]
    fn misses_return_none() {
        let selector = Selector::new("name", ["form", "name"]);
        assert_eq!(selector.select(&json!({})), None);
        assert_eq!(selector.select(&Value::Null), None);
        assert_eq!(selector.select(&json!({ "form": 3 })), None);
        assert_eq!(selector.select(&json!({ "form": null })), None);
    }

    #[test]
    fn remap_prepends_prefix() {
        let selector = Selector::new("name", ["form", "name"]).remap(["pages", "signup"]);
        assert_eq!(selector.path(), ["pages", "signup", "form", "name"]);
        let root = json!({ "pages": { "signup": { "form": { "name": "John" } } } });
        assert_eq!(selector.select_owned(&root), Some(json!("John")));
    }
}
