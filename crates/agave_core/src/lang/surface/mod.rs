//! Installable “surface” vocabulary.
//!
//! This module is for the **user-facing** names agave installs on a host:
//!
//! - category methods like `"  ab ".strip(" ")` or `[1, 2].findItem(...)`
//! - global functions like `kind(value)`
//!
//! Names here are base names; the installer prefixes them with the activation namespace.

pub mod functions;
pub mod methods;

// Re-export method registries for shorter paths:
// `crate::lang::surface::text_methods`, `crate::lang::surface::sequence_methods`, ...
pub use methods::{callable_methods, mapping_methods, numeric_methods, sequence_methods, text_methods};
