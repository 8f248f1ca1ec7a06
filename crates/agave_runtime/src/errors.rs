//! Errors raised when an installed member is misused.
//!
//! The operations themselves never fail; these errors are the runtime analogue of the host
//! primitive's own `TypeError`/`RangeError` propagating out of a bad call. Messages use the canonical
//! `Kind: message` shape.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("TypeError: {name} is not a function")]
    NotAFunction { name: String },

    #[error("TypeError: cannot read properties of {receiver} (reading '{name}')")]
    NoProperties { receiver: &'static str, name: String },

    #[error("TypeError: {method} expects a {expected} receiver, got {found}")]
    InvalidReceiver {
        method: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("TypeError: {method} argument {index} must be {expected}, got {found}")]
    InvalidArgument {
        method: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("RangeError: invalid date")]
    InvalidDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_kind_prefix() {
        let err = CallError::NotAFunction { name: "x_strip".to_string() };
        assert_eq!(err.to_string(), "TypeError: x_strip is not a function");

        let err = CallError::InvalidArgument {
            method: "leftStrip",
            index: 0,
            expected: "String",
            found: "Number",
        };
        assert_eq!(err.to_string(), "TypeError: leftStrip argument 0 must be String, got Number");
        assert_eq!(CallError::InvalidDate.to_string(), "RangeError: invalid date");
    }
}
