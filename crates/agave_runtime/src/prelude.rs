//! Prelude module for common runtime imports.
//!
//! ```ignore
//! use agave_runtime::prelude::*;
//! ```

pub use crate::callable::{Throttled, repeat, throttle};
pub use crate::mapping::KeyPath;
pub use crate::num::NumericExt;
pub use crate::reflection::kind;
pub use crate::sequence::SequenceExt;
pub use crate::strings::TextExt;
pub use crate::timers::{TimerId, TimerQueue};
pub use crate::value::{Callable, Object, Value};
