//! Value classification.
//!
//! [`kind`] is the standalone function installed on the host's global surface.

use crate::value::Value;

/// Classify a value.
///
/// Returns `"null"`, `"undefined"` and `"NaN"` for the two absence markers and not-a-number;
/// otherwise the structural type tag (`"Array"`, `"Object"`, `"String"`, `"Number"`, `"Boolean"`,
/// `"Date"`, `"Function"`).
///
/// # Examples
///
/// ```
/// use agave_runtime::{Value, kind};
///
/// assert_eq!(kind(&Value::Null), "null");
/// assert_eq!(kind(&Value::Number(f64::NAN)), "NaN");
/// assert_eq!(kind(&Value::Array(vec![])), "Array");
/// ```
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Undefined => "undefined",
        Value::Number(n) if n.is_nan() => "NaN",
        other => other.type_tag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Callable, Object};

    #[test]
    fn classifies_every_value_kind() {
        assert_eq!(kind(&Value::Undefined), "undefined");
        assert_eq!(kind(&Value::Object(Object::new())), "Object");
        assert_eq!(kind(&Value::from("s")), "String");
        assert_eq!(kind(&Value::from(1)), "Number");
        assert_eq!(kind(&Value::Number(f64::INFINITY)), "Number");
        assert_eq!(kind(&Value::from(true)), "Boolean");
        assert_eq!(kind(&Value::Function(Callable::new(|_| Value::Undefined))), "Function");
        assert_eq!(kind(&Value::Date(chrono::Utc::now())), "Date");
    }
}
