//! Mapping operations.
//!
//! These are inherent methods on [`Object`] (the mapping type) and on [`Value`] (since every value
//! kind inherits the mapping surface, the dynamic forms accept any receiver).
//!
//! ## Notes
//! - Sequences own their index keys (`"0"`, `"1"`, ...) and text owns its character indices, so key
//!   enumeration and path lookup treat both like mappings from decimal indices to elements.
//!   Both also own a non-enumerable `length`, which path lookup resolves but enumeration skips.
//! - [`Value::compare`] is true structural equality over the canonical JSON form. The weaker
//!   hash-of-serialization check is still available as [`Value::fingerprint`].

use std::borrow::Cow;

use agave_core::paths::split_path;
use agave_core::strings::to_hash;

use crate::value::{Callable, Object, Value};

/// A nested lookup path: either a key list or a `/`-separated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    Keys(Vec<String>),
    Unix(String),
}

impl KeyPath {
    /// Return the key segments to walk, in order.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            KeyPath::Keys(keys) => keys.iter().map(String::as_str).collect(),
            KeyPath::Unix(path) => split_path(path),
        }
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::Unix(path.to_string())
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        KeyPath::Unix(path)
    }
}

impl<S: Into<String>> From<Vec<S>> for KeyPath {
    fn from(keys: Vec<S>) -> Self {
        KeyPath::Keys(keys.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String> + Clone, const N: usize> From<[S; N]> for KeyPath {
    fn from(keys: [S; N]) -> Self {
        KeyPath::Keys(keys.into_iter().map(Into::into).collect())
    }
}

impl Object {
    /// Return the own enumerable keys, in insertion order.
    pub fn get_keys(&self) -> Vec<String> {
        self.keys().map(str::to_string).collect()
    }

    /// Return the number of own enumerable keys.
    pub fn get_size(&self) -> usize {
        self.len()
    }

    /// Resolve a nested value.
    ///
    /// Walks the path segments in order and returns `None` as soon as the current value is `null`
    /// or lacks the next key as an own member. Any value, `null` included, is a valid result. An
    /// empty key list resolves to `None`.
    ///
    /// Members stored in the tree are borrowed; derived members (a character of a text, a
    /// `length`) are owned.
    pub fn get_path(&self, path: impl Into<KeyPath>) -> Option<Cow<'_, Value>> {
        let path = path.into();
        let mut segments = path.segments().into_iter();
        let first = segments.next()?;
        walk(Cow::Borrowed(self.get(first)?), segments)
    }

    /// Return a deep copy. Nested mappings and sequences are copied recursively.
    pub fn deep_clone(&self) -> Object {
        self.clone()
    }

    /// Invoke `callback` with every key and value, in order.
    pub fn for_each_entry<F>(&self, mut callback: F)
    where
        F: FnMut(&str, &Value),
    {
        for (key, value) in self.iter() {
            callback(key, value);
        }
    }

    /// Copy every own key of `other` onto `self`; later values win. Returns `self` for chaining.
    pub fn extend_from(&mut self, other: &Object) -> &mut Self {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
        self
    }
}

impl Value {
    /// Return the own enumerable keys of any value.
    ///
    /// Mappings yield their keys, sequences their decimal indices, text its character indices;
    /// every other value has none.
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.get_keys(),
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Value::String(s) => (0..s.chars().count()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Return the own entries of any value, as `(key, value)` pairs.
    pub fn own_entries(&self) -> Vec<(String, Value)> {
        match self {
            Value::Object(map) => map.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            Value::Array(items) => items.iter().enumerate().map(|(i, v)| (i.to_string(), v.clone())).collect(),
            Value::String(s) => s
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Look up an own member by key.
    ///
    /// Mappings resolve their keys. Sequences resolve canonical decimal indices and `length`; text
    /// resolves character indices and `length`. Every other value has no own members.
    pub fn own_member(&self, key: &str) -> Option<Cow<'_, Value>> {
        match self {
            Value::Object(map) => map.get(key).map(Cow::Borrowed),
            Value::Array(items) if key == "length" => Some(Cow::Owned(Value::from(items.len() as f64))),
            Value::Array(items) => items.get(index_key(key)?).map(Cow::Borrowed),
            Value::String(s) if key == "length" => Some(Cow::Owned(Value::from(s.chars().count() as f64))),
            Value::String(s) => s
                .chars()
                .nth(index_key(key)?)
                .map(|c| Cow::Owned(Value::String(c.to_string()))),
            _ => None,
        }
    }

    /// Resolve a nested value starting from this value; see [`Object::get_path`].
    pub fn get_path(&self, path: impl Into<KeyPath>) -> Option<Cow<'_, Value>> {
        let path = path.into();
        let segments = path.segments();
        if segments.is_empty() {
            return None;
        }
        walk(Cow::Borrowed(self), segments.into_iter())
    }

    /// Invoke `callback` with every own key and value.
    pub fn for_each_entry(&self, callback: &Callable) {
        for (key, value) in self.own_entries() {
            callback.call(&[Value::String(key), value]);
        }
    }

    /// Return true if both values have the same canonical JSON form.
    ///
    /// Key order does not matter; members the serializer drops (`undefined`, callables) are ignored.
    /// At the top level `undefined` serializes as `null`, so the two compare equal instead of
    /// failing.
    pub fn compare(&self, other: &Value) -> bool {
        self.to_json() == other.to_json()
    }

    /// Hash the canonical JSON form with [`to_hash`].
    ///
    /// Mapping keys are serialized in sorted order, so the fingerprint is key-order-insensitive.
    /// Distinct values can share a fingerprint.
    pub fn fingerprint(&self) -> i32 {
        to_hash(&self.to_json().to_string())
    }
}

/// Parse a canonical decimal index. "01" and "+1" are not index keys.
fn index_key(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

fn walk<'v, 's>(start: Cow<'v, Value>, segments: impl Iterator<Item = &'s str>) -> Option<Cow<'v, Value>> {
    let mut current = start;
    for segment in segments {
        current = match current {
            Cow::Borrowed(Value::Null) | Cow::Owned(Value::Null) => return None,
            Cow::Borrowed(value) => value.own_member(segment)?,
            Cow::Owned(value) => Cow::Owned(value.own_member(segment)?.into_owned()),
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested() -> Value {
        Value::from(json!({"a": {"b": 2}}))
    }

    #[test]
    fn get_path_by_string_and_keys() {
        let v = nested();
        assert_eq!(v.get_path("a/b").as_deref(), Some(&Value::from(2)));
        assert_eq!(v.get_path("/a/b/").as_deref(), Some(&Value::from(2)));
        assert_eq!(v.get_path("a/c"), None);
        assert_eq!(v.get_path(["a", "b"]).as_deref(), Some(&Value::from(2)));
        assert_eq!(v.get_path(vec!["a"]).as_deref(), Some(&Value::from(json!({"b": 2}))));
    }

    #[test]
    fn get_path_null_is_a_valid_result_but_not_traversable() {
        let v = Value::from(json!({"a": null}));
        assert_eq!(v.get_path("a").as_deref(), Some(&Value::Null));
        assert_eq!(v.get_path("a/b"), None);
    }

    #[test]
    fn get_path_descends_into_sequences_by_index() {
        let v = Value::from(json!({"items": [{"id": 7}]}));
        assert_eq!(v.get_path("items/0/id").as_deref(), Some(&Value::from(7)));
        assert_eq!(v.get_path("items/1/id"), None);
        assert_eq!(v.get_path("items/00/id"), None);
    }

    #[test]
    fn get_path_resolves_text_indices_like_get_keys() {
        let v = Value::from(json!({"a": "xy"}));
        assert_eq!(Value::from("xy").own_keys(), vec!["0", "1"]);
        assert_eq!(v.get_path("a/0").as_deref(), Some(&Value::from("x")));
        assert_eq!(v.get_path("a/1/0").as_deref(), Some(&Value::from("y")));
        assert_eq!(v.get_path("a/2"), None);
        assert_eq!(v.get_path("a/01"), None);
    }

    #[test]
    fn get_path_resolves_length_without_enumerating_it() {
        let v = Value::from(json!({"a": [1, 2], "s": "héllo"}));
        assert_eq!(v.get_path("a/length").as_deref(), Some(&Value::from(2)));
        assert_eq!(v.get_path("s/length").as_deref(), Some(&Value::from(5)));
        assert!(!Value::from(json!([1, 2])).own_keys().contains(&"length".to_string()));
        assert_eq!(v.get_path("a/length/x"), None);
    }

    #[test]
    fn get_path_stops_at_primitives() {
        let v = Value::from(json!({"n": 3, "b": true}));
        assert_eq!(v.get_path("n/0"), None);
        assert_eq!(v.get_path("b/length"), None);
    }

    #[test]
    fn get_path_empty_key_list_is_none() {
        let v = nested();
        assert_eq!(v.get_path(Vec::<String>::new()), None);
    }

    #[test]
    fn object_get_path_matches_value_get_path() {
        let v = nested();
        let map = v.as_object().expect("object");
        assert_eq!(map.get_path("a/b"), v.get_path("a/b"));
        assert_eq!(map.get_path("x"), None);
    }

    #[test]
    fn keys_and_size_follow_insertion_order() {
        let v = Value::from(json!({"z": 1, "a": 2}));
        let map = v.as_object().expect("object");
        assert_eq!(map.get_keys().len(), 2);
        assert_eq!(map.get_size(), 2);
        assert_eq!(Value::from(json!([5, 6])).own_keys(), vec!["0", "1"]);
    }

    #[test]
    fn extend_from_later_value_wins() {
        let mut a: Object = [("x", Value::from(1)), ("y", Value::from(2))].into_iter().collect();
        let b: Object = [("y", Value::from(3)), ("z", Value::from(4))].into_iter().collect();
        a.extend_from(&b);
        assert_eq!(a.get_keys(), vec!["x", "y", "z"]);
        assert_eq!(a.get("y"), Some(&Value::from(3)));
    }

    #[test]
    fn deep_clone_is_independent() {
        let original = Value::from(json!({"a": {"b": [1, 2]}}));
        let mut copy = original.as_object().expect("object").deep_clone();
        if let Some(Value::Object(inner)) = copy.get_mut("a") {
            inner.insert("b", Value::from(0));
        }
        assert_eq!(original.get_path("a/b").as_deref(), Some(&Value::from(json!([1, 2]))));
        assert!(original.compare(&Value::Object(original.as_object().expect("object").deep_clone())));
        assert!(!original.compare(&Value::Object(copy)));
    }

    #[test]
    fn compare_is_structural() {
        assert!(Value::from(json!({"a": 1})).compare(&Value::from(json!({"a": 1}))));
        assert!(!Value::from(json!({"a": 1})).compare(&Value::from(json!({"a": 2}))));
        assert!(Value::from(json!({"a": 1, "b": 2})).compare(&Value::from(json!({"b": 2, "a": 1}))));
    }

    #[test]
    fn compare_treats_top_level_undefined_as_null() {
        assert!(Value::Undefined.compare(&Value::Null));
        assert!(!Value::Undefined.compare(&Value::from(0)));
    }

    #[test]
    fn fingerprint_is_stable() {
        let v = nested();
        assert_eq!(v.fingerprint(), v.clone().fingerprint());
        assert_eq!(Value::from(json!({})).fingerprint(), to_hash("{}"));
    }

    #[test]
    fn for_each_entry_visits_every_key() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let callback = Callable::new(move |args| {
            sink.borrow_mut().push((args[0].clone(), args[1].clone()));
            Value::Undefined
        });
        Value::from(json!({"a": 1, "b": 2})).for_each_entry(&callback);
        assert_eq!(
            *seen.borrow(),
            vec![(Value::from("a"), Value::from(1)), (Value::from("b"), Value::from(2))]
        );
    }
}
