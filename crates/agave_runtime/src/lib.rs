//! Runtime for agave's installed operations.
//!
//! This crate provides the dynamic [`Value`] model that installed members receive, plus typed
//! implementations of every operation: sequence search/mutation, mapping path lookup, deep clone and
//! structural comparison, the text trimming family, duration arithmetic, classification, and the
//! throttle/repeat helpers on a cooperative [`TimerQueue`].

#![deny(clippy::unwrap_used)]

pub mod callable;
pub mod conversions;
pub mod errors;
pub mod mapping;
pub mod num;
pub mod prelude;
pub mod reflection;
pub mod sequence;
pub mod strings;
pub mod timers;
pub mod value;

// Re-export commonly used items
pub use callable::{Throttled, repeat, throttle};
pub use errors::CallError;
pub use mapping::KeyPath;
pub use num::NumericExt;
pub use reflection::kind;
pub use sequence::SequenceExt;
pub use strings::TextExt;
pub use timers::{TimerId, TimerQueue};
pub use value::{Callable, Object, Value};
