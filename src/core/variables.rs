//! Name-to-value store for predicate-driven machines.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mutable variable store shared by every action and predicate of a run.
///
/// Values are JSON values, so stores can be seeded from and dumped to JSON.
/// The engine does not require this type; any `C` works as a shared store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Integer value of `name`, if present and integral.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(Value::as_i64)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(Value::as_bool)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// Set `name`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Add `by` to an integer variable and return the new value.
    ///
    /// A missing variable counts as zero. Returns `None` and leaves the
    /// store untouched when the current value is not an integer or the
    /// sum overflows `i64`.
    pub fn increment(&mut self, name: &str, by: i64) -> Option<i64> {
        let current = match self.values.get(name) {
            None => 0,
            Some(value) => value.as_i64()?,
        };
        let next = current.checked_add(by)?;
        self.values.insert(name.to_string(), Value::from(next));
        Some(next)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>, V: Into<Value>> FromIterator<(S, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_getters() {
        let mut vars = Variables::new();
        vars.set("a", 1);
        vars.set("ratio", 0.5);
        vars.set("flag", true);
        vars.set("name", "loop");

        assert_eq!(vars.get_i64("a"), Some(1));
        assert_eq!(vars.get_f64("ratio"), Some(0.5));
        assert_eq!(vars.get_bool("flag"), Some(true));
        assert_eq!(vars.get_str("name"), Some("loop"));
        assert_eq!(vars.get_i64("name"), None);
        assert_eq!(vars.get_i64("missing"), None);
    }

    #[test]
    fn set_returns_previous_value() {
        let mut vars = Variables::new();
        assert_eq!(vars.set("k", 10), None);
        assert_eq!(vars.set("k", 11), Some(json!(10)));
    }

    #[test]
    fn increment_treats_missing_as_zero() {
        let mut vars = Variables::new();
        assert_eq!(vars.increment("count", 1), Some(1));
        assert_eq!(vars.increment("count", 2), Some(3));
        assert_eq!(vars.get_i64("count"), Some(3));
    }

    #[test]
    fn increment_overflow_leaves_value() {
        let mut vars = Variables::new();
        vars.set("n", i64::MAX);
        assert_eq!(vars.increment("n", 1), None);
        assert_eq!(vars.get_i64("n"), Some(i64::MAX));

        vars.set("m", i64::MIN);
        assert_eq!(vars.increment("m", -1), None);
        assert_eq!(vars.get_i64("m"), Some(i64::MIN));
        assert_eq!(vars.increment("m", 1), Some(i64::MIN + 1));
    }

    #[test]
    fn increment_skips_non_integers() {
        let mut vars = Variables::new();
        vars.set("ratio", 0.5);
        vars.set("name", "loop");
        vars.set("big", u64::MAX);

        assert_eq!(vars.increment("ratio", 1), None);
        assert_eq!(vars.increment("name", 1), None);
        assert_eq!(vars.increment("big", 1), None);

        assert_eq!(vars.get("ratio"), Some(&json!(0.5)));
        assert_eq!(vars.get("name"), Some(&json!("loop")));
        assert_eq!(vars.get("big"), Some(&json!(u64::MAX)));
    }

    #[test]
    fn from_iterator_and_removal() {
        let mut vars: Variables = [("a", 1), ("k", 10)].into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains("k"));

        vars.remove("k");
        assert!(!vars.contains("k"));
        assert_eq!(vars.iter().collect::<Vec<_>>(), vec![("a", &json!(1))]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let vars: Variables = [("a", 1), ("k", 10)].into_iter().collect();

        let text = serde_json::to_string(&vars).unwrap();
        assert_eq!(text, r#"{"a":1,"k":10}"#);

        let back: Variables = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vars);
    }
}
