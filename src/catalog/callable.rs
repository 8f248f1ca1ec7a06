//! Callable adapters (`Function` surface).
//!
//! Both members schedule on the host timer queue reached through the call context.

use agave_runtime::conversions::{arg, duration_arg, flag_arg, invalid_receiver};
use agave_runtime::{CallError, Callable, Value};

use crate::host::CallContext;

fn function<'v>(method: &'static str, receiver: &'v Value) -> Result<&'v Callable, CallError> {
    receiver.as_callable().ok_or_else(|| invalid_receiver(method, "Function", receiver))
}

/// `fn.throttle(wait, immediate?)` returns the throttled wrapper as a new function.
pub(super) fn throttle(cx: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let func = function("throttle", receiver)?.clone();
    let wait = duration_arg("throttle", args, 0)?;
    let wrapper = agave_runtime::throttle(cx.timers, func, wait, flag_arg(args, 1));
    Ok(Value::Function(wrapper.into_callable()))
}

/// `fn.repeat(args, interval, leadingEdge?)` or `fn.repeat(interval, leadingEdge?)`.
///
/// Returns the interval's timer id as a number.
pub(super) fn repeat(cx: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let func = function("repeat", receiver)?.clone();
    let (call_args, rest) = match arg(args, 0) {
        Some(Value::Array(call_args)) => (call_args.clone(), &args[1..]),
        _ => (Vec::new(), args),
    };
    let interval = duration_arg("repeat", rest, 0)?;
    let id = agave_runtime::repeat(cx.timers, func, call_args, interval, flag_arg(rest, 1));
    Ok(Value::Number(id.as_u64() as f64))
}
