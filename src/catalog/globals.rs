//! Global function adapters.

use agave_runtime::conversions::arg_or_undefined;
use agave_runtime::{CallError, Value};

use crate::host::CallContext;

pub(super) fn kind(_: &CallContext<'_>, _: &mut Value, args: &[Value]) -> Result<Value, CallError> {
    Ok(Value::from(agave_runtime::kind(&arg_or_undefined(args, 0))))
}
