//! Member tables.
//!
//! A [`Surface`] is the shared member table one value category sees (the stand-in for a host
//! prototype), or the table of global functions. Members are looked up by their own name only;
//! inheritance between surfaces is resolved by the dispatcher.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use agave_runtime::{CallError, TimerQueue, Value};

/// Everything an invoked member may need from its host besides the receiver and arguments.
pub struct CallContext<'a> {
    pub timers: &'a TimerQueue,
}

/// Signature of a native member implementation.
///
/// The receiver is mutable so in-place operations (`extend`, `remove`) can update it.
pub type NativeFn = fn(&CallContext<'_>, &mut Value, &[Value]) -> Result<Value, CallError>;

type MethodFn = dyn Fn(&CallContext<'_>, &mut Value, &[Value]) -> Result<Value, CallError>;

/// A callable member implementation, shared by reference.
#[derive(Clone)]
pub struct Method(Rc<MethodFn>);

impl Method {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&CallContext<'_>, &mut Value, &[Value]) -> Result<Value, CallError> + 'static,
    {
        Method(Rc::new(f))
    }

    pub fn invoke(&self, cx: &CallContext<'_>, receiver: &mut Value, args: &[Value]) -> Result<Value, CallError> {
        (self.0)(cx, receiver, args)
    }

    /// Return true if both handles share one implementation.
    pub fn ptr_eq(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<NativeFn> for Method {
    fn from(f: NativeFn) -> Self {
        Method::new(f)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// A named entry on a surface.
#[derive(Debug, Clone)]
pub struct Member {
    pub method: Method,
    /// Whether ordinary enumeration of the surface lists this member.
    pub enumerable: bool,
    /// Whether [`Surface::assign`] may replace this member.
    pub writable: bool,
}

impl Member {
    /// A member as installed by activation: hidden from enumeration, overridable.
    pub fn installed(method: Method) -> Self {
        Self {
            method,
            enumerable: false,
            writable: true,
        }
    }

    /// A member as created by plain assignment: enumerable and writable.
    pub fn assigned(method: Method) -> Self {
        Self {
            method,
            enumerable: true,
            writable: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Surface {
    name: &'static str,
    members: BTreeMap<String, Member>,
}

impl Surface {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            members: BTreeMap::new(),
        }
    }

    /// Return the host name of this surface (`Array`, `Object`, ..., or `global`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return true if `name` is an own member.
    pub fn has_own(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Return the implementation of an own member.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.members.get(name).map(|m| &m.method)
    }

    /// Define (or redefine) a member with explicit attributes.
    pub fn define(&mut self, name: impl Into<String>, member: Member) {
        self.members.insert(name.into(), member);
    }

    /// Assign a member the way ordinary property assignment does.
    ///
    /// Replaces the implementation of a writable member (keeping its attributes), or creates an
    /// enumerable member when absent. Returns false, leaving the surface unchanged, if the existing
    /// member is read-only.
    pub fn assign(&mut self, name: &str, method: Method) -> bool {
        match self.members.get_mut(name) {
            Some(member) if !member.writable => false,
            Some(member) => {
                member.method = method;
                true
            }
            None => {
                self.members.insert(name.to_string(), Member::assigned(method));
                true
            }
        }
    }

    /// Iterate every own member name, in sorted order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Iterate the member names ordinary enumeration sees.
    pub fn enumerable_names(&self) -> impl Iterator<Item = &str> {
        self.members
            .iter()
            .filter(|(_, m)| m.enumerable)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> Method {
        Method::new(move |_, _, _| Ok(Value::Number(value)))
    }

    #[test]
    fn assign_respects_writability() {
        let mut surface = Surface::new("Object");
        surface.define(
            "frozen",
            Member {
                method: constant(1.0),
                enumerable: false,
                writable: false,
            },
        );
        let original = surface.method("frozen").cloned().expect("defined");
        assert!(!surface.assign("frozen", constant(2.0)));
        assert!(surface.method("frozen").expect("still defined").ptr_eq(&original));
    }

    #[test]
    fn assign_keeps_attributes_of_existing_member() {
        let mut surface = Surface::new("Object");
        surface.define("hidden", Member::installed(constant(1.0)));
        assert!(surface.assign("hidden", constant(2.0)));
        assert!(!surface.get("hidden").expect("defined").enumerable);

        assert!(surface.assign("fresh", constant(3.0)));
        assert_eq!(surface.enumerable_names().collect::<Vec<_>>(), vec!["fresh"]);
        assert_eq!(surface.member_names().collect::<Vec<_>>(), vec!["fresh", "hidden"]);
    }
}
