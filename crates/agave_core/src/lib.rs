//! Provide the canonical method vocabulary and pure helpers for agave.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the runtime (`agave_runtime`) uses to implement the installed operations, and
//! - the installer (`agave`) uses to name, describe and group those operations.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no dynamic values.
//! - Current scope: the text trimming family and string hash, duration units and JS-compatible
//!   numeric transforms, path splitting for `getPath`, and the method/category registries.

pub mod lang;
pub mod numbers;
pub mod paths;
pub mod strings;

pub use lang::categories::Category;
pub use lang::surface::methods::MethodId;
