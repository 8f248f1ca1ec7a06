//! Numeric adapters (`Number` surface).

use agave_runtime::conversions::{invalid_receiver, optional_date_arg, optional_number_arg};
use agave_runtime::{CallError, NumericExt, Value, num};

use crate::host::CallContext;

fn number(method: &'static str, receiver: &Value) -> Result<f64, CallError> {
    receiver.as_number().ok_or_else(|| invalid_receiver(method, "Number", receiver))
}

macro_rules! unary {
    ($($adapter:ident => $name:literal, $op:expr;)*) => {
        $(
            pub(super) fn $adapter(_: &CallContext<'_>, receiver: &mut Value, _: &[Value]) -> Result<Value, CallError> {
                let op: fn(f64) -> f64 = $op;
                Ok(Value::Number(op(number($name, receiver)?)))
            }
        )*
    };
}

unary! {
    seconds => "seconds", <f64 as NumericExt>::seconds;
    minutes => "minutes", <f64 as NumericExt>::minutes;
    hours => "hours", <f64 as NumericExt>::hours;
    days => "days", <f64 as NumericExt>::days;
    weeks => "weeks", <f64 as NumericExt>::weeks;
    round => "round", num::round;
    ceil => "ceil", num::ceil;
    floor => "floor", num::floor;
    abs => "abs", num::abs;
}

pub(super) fn before(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let duration = number("before", receiver)?;
    let date = optional_date_arg("before", args, 0)?;
    duration.before(date).map(Value::Date).ok_or(CallError::InvalidDate)
}

pub(super) fn after(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let duration = number("after", receiver)?;
    let date = optional_date_arg("after", args, 0)?;
    duration.after(date).map(Value::Date).ok_or(CallError::InvalidDate)
}

/// A missing exponent reads as `NaN`, so the result is `NaN`.
pub(super) fn pow(_: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    let base = number("pow", receiver)?;
    let exponent = optional_number_arg("pow", args, 0)?.unwrap_or(f64::NAN);
    Ok(Value::Number(num::pow(base, exponent)))
}
