//! Text adapters (`String` surface).

use agave_runtime::conversions::{callable_arg, invalid_receiver, text_arg};
use agave_runtime::{CallError, TextExt, Value};

use crate::host::CallContext;

fn text<'v>(method: &'static str, receiver: &'v Value) -> Result<&'v str, CallError> {
    receiver.as_str().ok_or_else(|| invalid_receiver(method, "String", receiver))
}

pub(super) fn reverse(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(Value::String(TextExt::reverse(text("reverse", receiver)?)))
}

pub(super) fn left_strip(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let s = text("leftStrip", receiver)?;
    Ok(Value::from(s.left_strip(text_arg("leftStrip", args, 0)?)))
}

pub(super) fn right_strip(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let s = text("rightStrip", receiver)?;
    Ok(Value::from(s.right_strip(text_arg("rightStrip", args, 0)?)))
}

pub(super) fn strip(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let s = text("strip", receiver)?;
    Ok(Value::from(s.strip(text_arg("strip", args, 0)?)))
}

pub(super) fn to_hash(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Number(f64::from(text("toHash", receiver)?.to_hash())))
}

/// Invoke the callback with `(character, index, text)` for every character.
pub(super) fn for_each(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let s = text("forEach", receiver)?;
    let callback = callable_arg("forEach", args, 0)?;
    s.for_each_char(|c, index| {
        callback.call(&[Value::String(c.to_string()), Value::Number(index as f64), receiver.clone()]);
    });
    Ok(Value::Undefined)
}
