//! Member lookup and invocation.
//!
//! A receiver sees its own category surface first, then the mapping surface, which every value
//! kind inherits from. `undefined` and `null` have no surfaces; reading a member from them fails
//! the way a host property read does.

use agave_core::Category;
use agave_runtime::{CallError, Value};

use super::{CallContext, Host, Method};

impl Host {
    /// Resolve the member `name` as seen by `receiver`.
    pub fn lookup(&self, receiver: &Value, name: &str) -> Option<&Method> {
        let category = receiver.category()?;
        let own = self.surface(category).and_then(|s| s.method(name));
        own.or_else(|| match category {
            Category::Mapping => None,
            _ => self.surface(Category::Mapping).and_then(|s| s.method(name)),
        })
    }

    /// Invoke the member `name` on `receiver`.
    ///
    /// ## Errors
    /// - [`CallError::NoProperties`] if `receiver` is `undefined` or `null`.
    /// - [`CallError::NotAFunction`] if no surface the receiver sees has the member.
    /// - Whatever the member itself returns for a receiver or argument of the wrong kind.
    #[tracing::instrument(level = "trace", skip_all, fields(member = name, receiver = receiver.type_tag()))]
    pub fn call(&self, receiver: &mut Value, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let method = match receiver {
            Value::Undefined => return Err(no_properties("undefined", name)),
            Value::Null => return Err(no_properties("null", name)),
            _ => self.lookup(receiver, name).cloned().ok_or_else(|| CallError::NotAFunction {
                name: name.to_string(),
            })?,
        };
        let cx = CallContext { timers: self.timers() };
        method.invoke(&cx, receiver, args)
    }

    /// Invoke the global function `name`.
    #[tracing::instrument(level = "trace", skip_all, fields(function = name))]
    pub fn call_global(&self, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let method = self.globals.method(name).cloned().ok_or_else(|| CallError::NotAFunction {
            name: name.to_string(),
        })?;
        let cx = CallContext { timers: self.timers() };
        method.invoke(&cx, &mut Value::Undefined, args)
    }
}

fn no_properties(receiver: &'static str, name: &str) -> CallError {
    CallError::NoProperties {
        receiver,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Member;

    fn tagged(tag: &'static str) -> Method {
        Method::new(move |_, _, _| Ok(Value::from(tag)))
    }

    #[test]
    fn own_surface_shadows_mapping_surface() {
        let mut host = Host::new();
        host.surface_mut(Category::Mapping)
            .expect("mapping surface")
            .define("clone", Member::installed(tagged("mapping")));
        host.surface_mut(Category::Sequence)
            .expect("sequence surface")
            .define("clone", Member::installed(tagged("sequence")));

        let mut array = Value::Array(vec![]);
        let mut number = Value::Number(1.0);
        assert_eq!(host.call(&mut array, "clone", &[]), Ok(Value::from("sequence")));
        assert_eq!(host.call(&mut number, "clone", &[]), Ok(Value::from("mapping")));
    }

    #[test]
    fn nullish_receivers_have_no_properties() {
        let host = Host::new();
        let err = host.call(&mut Value::Null, "getKeys", &[]).expect_err("null has no members");
        assert_eq!(err.to_string(), "TypeError: cannot read properties of null (reading 'getKeys')");
    }

    #[test]
    fn missing_member_is_not_a_function() {
        let host = Host::new();
        assert_eq!(
            host.call(&mut Value::from("s"), "nope", &[]),
            Err(CallError::NotAFunction { name: "nope".to_string() })
        );
        assert!(host.call_global("kind", &[]).is_err());
    }
}
