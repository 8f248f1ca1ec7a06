//! Dynamic value model.
//!
//! [`Value`] is what installed members receive as their receiver and arguments. It covers the value
//! kinds the host knows about: the two absence markers, booleans, numbers, text, sequences,
//! mappings, dates and callables.
//!
//! ## Notes
//! - Values are owned trees. Cloning a `Value` never aliases a sequence or mapping, and cyclic
//!   structures cannot be built. Callables are the exception: they are shared by reference, the same
//!   way a host copies a function value.
//! - `PartialEq` is **strict equality**: `NaN` is unequal to itself and callables compare by
//!   identity. Sequences and mappings compare element-wise, since owned values have no identity.
//! - [`Value::to_json`] produces the canonical serialization used for structural comparison.

use std::fmt;
use std::rc::Rc;

use agave_core::Category;
use chrono::{DateTime, SecondsFormat, Utc};

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A dynamically typed host value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence sentinel.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Date(DateTime<Utc>),
    Function(Callable),
}

impl Value {
    /// Return the host's structural type tag (`"Array"`, `"Object"`, `"Number"`, ...).
    ///
    /// Unlike [`crate::kind`], this does not special-case `NaN`.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
            Value::Date(_) => "Date",
            Value::Function(_) => "Function",
        }
    }

    /// Return the category whose surface this value sees first, if any.
    ///
    /// Booleans and dates have no category surface of their own; they only inherit the mapping
    /// surface. `Undefined` and `Null` have no surfaces at all.
    pub fn category(&self) -> Option<Category> {
        match self {
            Value::Array(_) => Some(Category::Sequence),
            Value::Object(_) => Some(Category::Mapping),
            Value::String(_) => Some(Category::Text),
            Value::Function(_) => Some(Category::Callable),
            Value::Number(_) => Some(Category::Numeric),
            Value::Bool(_) | Value::Date(_) => Some(Category::Mapping),
            Value::Undefined | Value::Null => None,
        }
    }

    /// Return true for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Return the host's truthiness of this value.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Date(_) | Value::Function(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Convert to the canonical JSON form.
    ///
    /// Follows the host's JSON serializer: non-finite numbers become `null`, dates become ISO-8601
    /// strings, and `Undefined`/callables are dropped from mappings and become `null` elsewhere.
    /// Integral numbers serialize without a fractional part.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, v)| !matches!(v, Value::Undefined | Value::Function(_)))
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
            Value::Date(date) => serde_json::Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Function(_) => f.write_str("[Function]"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Function(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

/// Insertion-ordered, string-keyed mapping.
///
/// Every key is an own enumerable key. Re-inserting an existing key replaces its value in place and
/// keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert or replace a value; returns the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Mappings are equal when they hold the same keys with strictly equal values, in any order.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Object::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A shared, invocable value.
///
/// The host passes arguments as a slice and receives a single value back.
#[derive(Clone)]
pub struct Callable(Rc<dyn Fn(&[Value]) -> Value>);

impl Callable {
    pub fn new(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Callable(Rc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }

    /// Return true if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nan_is_not_strictly_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[test]
    fn callables_compare_by_identity() {
        let f = Callable::new(|_| Value::Undefined);
        let g = Callable::new(|_| Value::Undefined);
        assert_eq!(Value::Function(f.clone()), Value::Function(f.clone()));
        assert_ne!(Value::Function(f), Value::Function(g));
    }

    #[test]
    fn object_keeps_insertion_order_on_replace() {
        let mut map = Object::new();
        map.insert("b", Value::from(1));
        map.insert("a", Value::from(2));
        assert_eq!(map.insert("b", Value::from(3)), Some(Value::from(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(map.get("b"), Some(&Value::from(3)));
    }

    #[test]
    fn object_equality_ignores_key_order() {
        let a: Object = [("x", Value::from(1)), ("y", Value::from(2))].into_iter().collect();
        let b: Object = [("y", Value::from(2)), ("x", Value::from(1))].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn json_round_trip_drops_undefined_members() {
        let mut map = Object::new();
        map.insert("kept", Value::from(1));
        map.insert("gone", Value::Undefined);
        map.insert("f", Value::Function(Callable::new(|_| Value::Null)));
        assert_eq!(Value::Object(map).to_json(), json!({"kept": 1}));
    }

    #[test]
    fn json_numbers_serialize_like_the_host() {
        assert_eq!(Value::from(3.0).to_json().to_string(), "3");
        assert_eq!(Value::from(0.5).to_json().to_string(), "0.5");
        assert_eq!(Value::Number(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            Value::Array(vec![Value::Undefined, Value::from(1)]).to_json(),
            json!([null, 1])
        );
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let date = DateTime::from_timestamp_millis(0).expect("epoch is representable");
        assert_eq!(Value::Date(date).to_json(), json!("1970-01-01T00:00:00.000Z"));
    }

    #[test]
    fn truthiness_follows_host_rules() {
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::Object(Object::new()).is_truthy());
    }
}
