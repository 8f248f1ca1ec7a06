//! agave method vocabulary registries.
//!
//! This module is the “front door” for the names agave installs: the value categories that receive
//! methods, the per-category method tables, and the standalone global functions.
//!
//! Callers work with **stable IDs** (e.g. `Category`, `MethodId`) and look up spellings and
//! metadata via registry tables instead of comparing strings throughout the installer.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no runtime values, no side effects.
//! - Canonical spellings are the base names used to derive installed member names; aliases are
//!   accepted only for lookup (e.g. snake_case spellings used by the Rust API).
//!
//! ## Examples
//! ```rust
//! use agave_core::lang::surface::text_methods::{self, TextMethodId};
//!
//! assert_eq!(text_methods::from_str("leftStrip"), Some(TextMethodId::LeftStrip));
//! assert_eq!(text_methods::from_str("left_strip"), Some(TextMethodId::LeftStrip));
//! assert_eq!(text_methods::as_str(TextMethodId::LeftStrip), "leftStrip");
//! ```

pub mod categories;
pub mod registry;
pub mod surface;
