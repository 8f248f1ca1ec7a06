//! Shareable metadata for `agave_core::lang` registries.
//!
//! Every registry in `agave_core::lang` (categories, methods, global functions) describes its items
//! with the small, dependency-free metadata types defined here.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy` so registries can live in `const` tables.
//! - Metadata is meant for the installer, docs and the CLI reference; behavior lives in the runtime.

/// Identify the release a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use agave_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example call, written in method-call style on the host.
/// - `note` is an optional short explanation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
///
/// ## Notes
/// - `canonical` is the base name an installed member is derived from.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Resolve a spelling to a stable id for a registry table.
///
/// Canonical spellings win over aliases; lookup is case-sensitive.
pub(crate) fn from_str_impl<Id: Copy>(items: &[LangItemInfo<Id>], name: &str) -> Option<Id> {
    if let Some(m) = items.iter().find(|m| m.canonical == name) {
        return Some(m.id);
    }
    items
        .iter()
        .find(|m| {
            let aliases: &[&str] = m.aliases;
            aliases.contains(&name)
        })
        .map(|m| m.id)
}

/// Return the registry metadata entry for a stable id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub(crate) fn info_for_impl<Id: Copy + PartialEq>(
    items: &'static [LangItemInfo<Id>],
    id: Id,
    missing_msg: &'static str,
) -> &'static LangItemInfo<Id> {
    items
        .iter()
        .find(|m| m.id == id)
        .unwrap_or_else(|| panic!("{missing_msg}"))
}
