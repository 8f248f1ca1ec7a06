//! Global function vocabulary.
//!
//! This registry covers standalone functions installed on the host's global surface rather than on
//! a category surface. Today that is only `kind`.

use crate::lang::registry::{Example, LangItemInfo, Stability, from_str_impl, info_for_impl};

/// Stable identifier for a global function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalFnId {
    Kind,
}

/// Metadata for a global function.
pub type GlobalFnInfo = LangItemInfo<GlobalFnId>;

pub const GLOBAL_FUNCTIONS: &[GlobalFnInfo] = &[GlobalFnInfo {
    id: GlobalFnId::Kind,
    canonical: "kind",
    aliases: &[],
    description: "Classify a value: 'null', 'undefined', 'NaN', or its structural tag (Array, Object, ...).",
    since_version: Some("0.1.0"),
    stability: Stability::Stable,
    examples: &[
        Example {
            code: "kind([])",
            note: Some("Returns `'Array'`."),
        },
        Example {
            code: "kind(0 / 0)",
            note: Some("Returns `'NaN'`."),
        },
    ],
}];

pub fn from_str(name: &str) -> Option<GlobalFnId> {
    from_str_impl(GLOBAL_FUNCTIONS, name)
}

pub fn as_str(id: GlobalFnId) -> &'static str {
    info_for(id).canonical
}

pub fn info_for(id: GlobalFnId) -> &'static GlobalFnInfo {
    info_for_impl(GLOBAL_FUNCTIONS, id, "global function info missing")
}
