//! Sequence adapters (`Array` surface).

use agave_runtime::conversions::{arg_or_undefined, array_arg, callable_arg, optional_number_arg};
use agave_runtime::sequence::count_from_f64;
use agave_runtime::{CallError, SequenceExt, Value};

use super::expect_receiver;
use crate::host::CallContext;

fn receiver_items<'v>(method: &'static str, receiver: &'v mut Value) -> Result<&'v mut Vec<Value>, CallError> {
    expect_receiver(method, "Array", receiver, Value::as_array_mut)
}

pub(super) fn find_item(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let items = receiver_items("findItem", receiver)?;
    let predicate = callable_arg("findItem", args, 0)?;
    let found = items.find_item(|item| predicate.call(std::slice::from_ref(item)).is_truthy());
    Ok(found.cloned().unwrap_or_default())
}

pub(super) fn extend(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let other = array_arg("extend", args, 0)?;
    receiver_items("extend", receiver)?.extend_items(other.iter().cloned());
    Ok(receiver.clone())
}

pub(super) fn includes(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let value = arg_or_undefined(args, 0);
    Ok(Value::Bool(receiver_items("includes", receiver)?.includes(&value)))
}

pub(super) fn clone(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
    Ok(Value::Array(receiver_items("clone", receiver)?.shallow_clone()))
}

pub(super) fn remove(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let value = arg_or_undefined(args, 0);
    Ok(Value::Bool(receiver_items("remove", receiver)?.remove_item(&value)))
}

pub(super) fn first(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let items = receiver_items("first", receiver)?;
    Ok(match optional_number_arg("first", args, 0)? {
        None => items.first().cloned().unwrap_or_default(),
        Some(n) => Value::Array(items.first_n(count_from_f64(n)).to_vec()),
    })
}

pub(super) fn last(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let items = receiver_items("last", receiver)?;
    Ok(match optional_number_arg("last", args, 0)? {
        None => items.last().cloned().unwrap_or_default(),
        Some(n) => Value::Array(items.last_n(count_from_f64(n)).to_vec()),
    })
}
