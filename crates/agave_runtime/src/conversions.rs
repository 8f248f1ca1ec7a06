//! Argument conversion helpers for installed members.
//!
//! Dynamic callers pass arguments as a `&[Value]` slice. These helpers pull out the typed argument
//! an operation needs, or produce the canonical [`CallError`] a host primitive would raise for a
//! value of the wrong kind. A missing argument reads as `undefined`.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::errors::CallError;
use crate::timers::duration_from_millis;
use crate::value::{Callable, Object, Value};

/// Return argument `index`, or `None` when the caller passed fewer arguments.
#[inline]
pub fn arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index)
}

/// Return a copy of argument `index`, or `undefined` when missing.
pub fn arg_or_undefined(args: &[Value], index: usize) -> Value {
    arg(args, index).cloned().unwrap_or_default()
}

/// Return true if argument `index` is missing or `undefined`.
#[inline]
pub fn is_absent(args: &[Value], index: usize) -> bool {
    matches!(arg(args, index), None | Some(Value::Undefined))
}

/// Build the error for a receiver of the wrong kind.
pub fn invalid_receiver(method: &'static str, expected: &'static str, found: &Value) -> CallError {
    CallError::InvalidReceiver {
        method,
        expected,
        found: found.type_tag(),
    }
}

fn invalid_argument(method: &'static str, index: usize, expected: &'static str, found: Option<&Value>) -> CallError {
    CallError::InvalidArgument {
        method,
        index,
        expected,
        found: found.map_or("Undefined", Value::type_tag),
    }
}

pub fn number_arg(method: &'static str, args: &[Value], index: usize) -> Result<f64, CallError> {
    match arg(args, index) {
        Some(Value::Number(n)) => Ok(*n),
        other => Err(invalid_argument(method, index, "Number", other)),
    }
}

/// Like [`number_arg`], but `undefined` reads as `None`.
pub fn optional_number_arg(method: &'static str, args: &[Value], index: usize) -> Result<Option<f64>, CallError> {
    if is_absent(args, index) {
        return Ok(None);
    }
    number_arg(method, args, index).map(Some)
}

pub fn text_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a str, CallError> {
    match arg(args, index) {
        Some(Value::String(s)) => Ok(s),
        other => Err(invalid_argument(method, index, "String", other)),
    }
}

pub fn callable_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a Callable, CallError> {
    match arg(args, index) {
        Some(Value::Function(f)) => Ok(f),
        other => Err(invalid_argument(method, index, "Function", other)),
    }
}

pub fn array_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a Vec<Value>, CallError> {
    match arg(args, index) {
        Some(Value::Array(items)) => Ok(items),
        other => Err(invalid_argument(method, index, "Array", other)),
    }
}

pub fn object_arg<'a>(method: &'static str, args: &'a [Value], index: usize) -> Result<&'a Object, CallError> {
    match arg(args, index) {
        Some(Value::Object(map)) => Ok(map),
        other => Err(invalid_argument(method, index, "Object", other)),
    }
}

/// Read a flag argument by truthiness; a missing flag is false.
pub fn flag_arg(args: &[Value], index: usize) -> bool {
    arg(args, index).is_some_and(Value::is_truthy)
}

/// Read an optional date argument; `undefined` reads as `None` (meaning "now").
pub fn optional_date_arg(method: &'static str, args: &[Value], index: usize) -> Result<Option<DateTime<Utc>>, CallError> {
    match arg(args, index) {
        None | Some(Value::Undefined) => Ok(None),
        Some(Value::Date(date)) => Ok(Some(*date)),
        other => Err(invalid_argument(method, index, "Date", other)),
    }
}

/// Read a millisecond delay argument; `undefined` reads as zero.
pub fn duration_arg(method: &'static str, args: &[Value], index: usize) -> Result<Duration, CallError> {
    Ok(optional_number_arg(method, args, index)?.map_or(Duration::ZERO, duration_from_millis))
}
