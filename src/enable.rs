//! Namespace activation.
//!
//! [`Host::enable`] walks the catalog once per namespace, installing every method on its category
//! surface under the derived name, then installs the global functions. Activation never fails:
//! absent surfaces and existing members are skipped and only traced.

use crate::catalog::{CATALOG, GLOBALS};
use crate::host::{Host, Method};
use crate::install::{InstallOutcome, derived_name, install};
use agave_core::lang::surface::functions;

impl Host {
    /// Activate `namespace`.
    ///
    /// ## Parameters
    /// - `namespace`: prefix for every installed member name; may be empty.
    ///
    /// ## Notes
    /// - Idempotent: a namespace that is already enabled is a no-op, with no catalog walk.
    /// - The namespace is recorded only after every entry has been visited. Installation itself
    ///   cannot fail, so an enabled namespace always has its full member set (minus skips).
    #[tracing::instrument(skip_all, fields(namespace = namespace))]
    pub fn enable(&mut self, namespace: &str) {
        if self.is_enabled(namespace) {
            tracing::trace!("namespace already enabled");
            return;
        }

        let mut installed = 0usize;
        for entry in CATALOG {
            let category = entry.method.category();
            let name = derived_name(namespace, entry.method.base_name());
            let outcome = install(
                self.surfaces.get_mut(&category),
                &name,
                Method::from(entry.implementation),
            );
            match outcome {
                InstallOutcome::Installed => installed += 1,
                InstallOutcome::SkippedExisting => {
                    tracing::debug!(member = %name, surface = category.host_name(), "existing member kept");
                }
                InstallOutcome::SkippedMissingSurface => {
                    tracing::trace!(member = %name, surface = category.host_name(), "surface absent");
                }
            }
        }

        for entry in GLOBALS {
            let name = derived_name(namespace, functions::as_str(entry.function));
            match install(Some(&mut self.globals), &name, Method::from(entry.implementation)) {
                InstallOutcome::Installed => installed += 1,
                _ => tracing::debug!(global = %name, "existing global kept"),
            }
        }

        self.enabled.insert(namespace.to_string());
        tracing::debug!(installed, "namespace enabled");
    }
}

#[cfg(test)]
mod tests {
    use agave_core::Category;

    use super::*;

    #[test]
    fn installs_every_entry_under_the_namespace() {
        let mut host = Host::new();
        host.enable("av_");
        assert!(host.is_enabled("av_"));
        for entry in CATALOG {
            let surface = host.surface(entry.method.category()).expect("surface provided");
            let name = derived_name("av_", entry.method.base_name());
            assert!(surface.has_own(&name), "{name} missing on {}", surface.name());
        }
        assert!(host.globals().has_own("av_kind"));
    }

    #[test]
    fn installed_members_are_not_enumerable() {
        let mut host = Host::new();
        host.enable("");
        assert_eq!(host.surface(Category::Text).expect("text").enumerable_names().count(), 0);
    }

    #[test]
    fn second_enable_is_a_no_op() {
        let mut host = Host::new();
        host.enable("x_");
        let reverse = host
            .surface(Category::Text)
            .and_then(|s| s.method("x_reverse"))
            .cloned()
            .expect("installed");
        host.enable("x_");
        let after = host.surface(Category::Text).and_then(|s| s.method("x_reverse")).expect("installed");
        assert!(after.ptr_eq(&reverse));
    }
}
