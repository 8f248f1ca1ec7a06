//! Value category vocabulary.
//!
//! A category is one of the fundamental value kinds that receives installed methods. Each category
//! corresponds to a host surface (the shared member table every value of that kind sees), which a
//! given host may not provide.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII** and accepts the host surface name
//!   (`Array`, `Object`, ...) as well as the category name.
//!
//! ## Examples
//! ```rust
//! use agave_core::lang::categories::{self, Category};
//!
//! assert_eq!(categories::from_str("sequence"), Some(Category::Sequence));
//! assert_eq!(categories::from_str("Array"), Some(Category::Sequence));
//! assert_eq!(Category::Mapping.host_name(), "Object");
//! ```

use crate::lang::registry::{SinceVersion, Stability};

/// Stable identifier for a value category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Sequence,
    Mapping,
    Text,
    Callable,
    Numeric,
}

/// Metadata for a value category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: Category,
    pub canonical: &'static str,
    /// Name of the host surface the category's methods are installed on.
    pub host_name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
}

/// Registry of value categories, in catalog walk order.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(
        Category::Sequence,
        "Sequence",
        "Array",
        &["seq", "list"],
        "Ordered, index-addressed collection of values.",
    ),
    info(
        Category::Mapping,
        "Mapping",
        "Object",
        &["map", "dict"],
        "String-keyed collection of values; every value kind inherits its surface.",
    ),
    info(
        Category::Text,
        "Text",
        "String",
        &["str"],
        "Immutable sequence of characters.",
    ),
    info(
        Category::Callable,
        "Callable",
        "Function",
        &["fn"],
        "Invocable value taking an argument list.",
    ),
    info(
        Category::Numeric,
        "Numeric",
        "Number",
        &["num"],
        "Double-precision number; durations are numbers of milliseconds.",
    ),
];

impl Category {
    /// Return the canonical category name (e.g. `"Sequence"`).
    pub fn as_str(self) -> &'static str {
        info_for(self).canonical
    }

    /// Return the host surface name (e.g. `"Array"`).
    pub fn host_name(self) -> &'static str {
        info_for(self).host_name
    }

    /// Iterate all categories in registry order.
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORIES.iter().map(|c| c.id)
    }
}

/// Resolve a category or host surface name to a [`Category`].
///
/// ## Returns
/// - `Some(Category)` if the spelling matches the canonical name, the host name or an alias.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<Category> {
    CATEGORIES
        .iter()
        .find(|c| {
            c.canonical.eq_ignore_ascii_case(name)
                || c.host_name.eq_ignore_ascii_case(name)
                || c.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        })
        .map(|c| c.id)
}

/// Return the full metadata entry for a category.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: Category) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .expect("category info missing")
}

const fn info(
    id: Category,
    canonical: &'static str,
    host_name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> CategoryInfo {
    CategoryInfo {
        id,
        canonical,
        host_name,
        aliases,
        description,
        since_version: Some("0.1.0"),
        stability: Stability::Stable,
    }
}
