//! Host configuration.
//!
//! Selects which category surfaces a [`super::Host`] provides. A host that lacks a surface models
//! a runtime without that value kind's shared member table; activation skips its entries.

use std::collections::BTreeSet;

use agave_core::Category;

/// Host configuration
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Category surfaces the host provides
    pub surfaces: BTreeSet<Category>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            surfaces: Category::all().collect(),
        }
    }
}

impl HostConfig {
    /// Create a new config providing every surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the surface for `category`
    pub fn with_surface(mut self, category: Category) -> Self {
        self.surfaces.insert(category);
        self
    }

    /// Drop the surface for `category`
    pub fn without_surface(mut self, category: Category) -> Self {
        self.surfaces.remove(&category);
        self
    }

    pub fn has_surface(&self, category: Category) -> bool {
        self.surfaces.contains(&category)
    }
}
