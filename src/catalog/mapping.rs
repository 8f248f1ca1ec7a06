//! Mapping adapters (`Object` surface).
//!
//! Every value kind inherits this surface, so most adapters accept any receiver and work on its
//! own entries. Only `extend` needs an actual mapping to write into.

use std::borrow::Cow;

use agave_runtime::conversions::{arg, arg_or_undefined, callable_arg};
use agave_runtime::{CallError, KeyPath, Value};

use super::expect_receiver;
use crate::host::CallContext;

pub(super) fn get_keys(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Array(receiver.own_keys().into_iter().map(Value::String).collect()))
}

pub(super) fn get_size(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Number(receiver.own_keys().len() as f64))
}

pub(super) fn get_path(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let path = match arg(args, 0) {
        Some(Value::String(path)) => KeyPath::from(path.as_str()),
        Some(Value::Array(keys)) => KeyPath::Keys(keys.iter().map(property_key).collect()),
        other => {
            return Err(CallError::InvalidArgument {
                method: "getPath",
                index: 0,
                expected: "Array or String",
                found: other.map_or("Undefined", Value::type_tag),
            });
        }
    };
    Ok(receiver.get_path(path).map(Cow::into_owned).unwrap_or_default())
}

/// Convert a key-list element to a property key.
fn property_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(super) fn clone(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(receiver.clone())
}

pub(super) fn for_each(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let callback = callable_arg("forEach", args, 0)?;
    receiver.for_each_entry(callback);
    Ok(Value::Undefined)
}

pub(super) fn extend(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let map = expect_receiver("extend", "Object", receiver, Value::as_object_mut)?;
    // Copying from `undefined`/`null` or a primitive without own entries is a no-op.
    for (key, value) in arg(args, 0).map(Value::own_entries).unwrap_or_default() {
        map.insert(key, value);
    }
    Ok(receiver.clone())
}

pub(super) fn compare(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Bool(receiver.compare(&arg_or_undefined(args, 0))))
}
