#![forbid(unsafe_code)]
//! agave: namespaced convenience methods for the fundamental value kinds.
//!
//! This crate provides the installation engine: an application-owned [`Host`] with one member
//! surface per value category, a fixed method [`catalog`], non-destructive [`install`]ation, and
//! idempotent per-namespace activation ([`Host::enable`]). Installed members are invoked through
//! [`Host::call`] and [`Host::call_global`]. Timers scheduled by `throttle`/`repeat` fire while
//! the host is driven with [`Host::run_until`].
//!
//! The operations themselves live in `agave_runtime` and can be used directly, without a host.
//!
//! ## Example
//!
//! ```rust
//! use agave::Host;
//! use agave_runtime::Value;
//!
//! let mut host = Host::new();
//! host.enable("av_");
//!
//! let mut text = Value::from("  ab  ");
//! let stripped = host.call(&mut text, "av_strip", &[Value::from(" ")]).expect("installed");
//! assert_eq!(stripped, Value::from("ab"));
//! assert!(host.call(&mut text, "strip", &[Value::from(" ")]).is_err());
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod catalog;
pub mod cli;
pub mod enable;
pub mod host;
pub mod install;

pub use host::{CallContext, Host, HostConfig, Member, Method, Surface};
pub use install::{InstallOutcome, derived_name};
