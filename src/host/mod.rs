//! The host: category surfaces, global functions and activation state.
//!
//! [`Host`] is owned by the application. It replaces process-wide augmentation state with an
//! explicit object: one [`Surface`] per provided category, a global surface, the set of
//! namespaces already enabled, and the [`TimerQueue`] that `throttle`/`repeat` schedule on.
//!
//! ## Notes
//! - `Host` is `!Send`. Members that schedule timers can be invoked anywhere; the scheduled calls
//!   run while the host is driven with [`Host::run_until`] (or [`TimerQueue::block_on`]).
//! - Activation lives in [`crate::enable`]; member lookup and invocation in [`dispatch`].

pub mod config;
pub mod dispatch;
pub mod surface;

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

use agave_core::Category;
use agave_runtime::TimerQueue;

pub use config::HostConfig;
pub use surface::{CallContext, Member, Method, NativeFn, Surface};

/// Host name of the global-function surface.
pub const GLOBAL_SURFACE: &str = "global";

pub struct Host {
    pub(crate) surfaces: BTreeMap<Category, Surface>,
    pub(crate) globals: Surface,
    pub(crate) enabled: BTreeSet<String>,
    timers: TimerQueue,
}

impl Default for Host {
    fn default() -> Self {
        Self::with_config(HostConfig::default())
    }
}

impl Host {
    /// Create a host providing every category surface.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HostConfig) -> Self {
        let surfaces = config
            .surfaces
            .iter()
            .map(|&category| (category, Surface::new(category.host_name())))
            .collect();
        Self {
            surfaces,
            globals: Surface::new(GLOBAL_SURFACE),
            enabled: BTreeSet::new(),
            timers: TimerQueue::new(),
        }
    }

    /// Return the surface for `category`, or `None` if the host does not provide it.
    pub fn surface(&self, category: Category) -> Option<&Surface> {
        self.surfaces.get(&category)
    }

    pub fn surface_mut(&mut self, category: Category) -> Option<&mut Surface> {
        self.surfaces.get_mut(&category)
    }

    pub fn globals(&self) -> &Surface {
        &self.globals
    }

    pub fn globals_mut(&mut self) -> &mut Surface {
        &mut self.globals
    }

    /// Return true if `namespace` has been activated.
    pub fn is_enabled(&self, namespace: &str) -> bool {
        self.enabled.contains(namespace)
    }

    /// Iterate the activated namespaces, in sorted order.
    pub fn enabled_namespaces(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Drive the host's pending timers until `future` completes.
    pub async fn run_until<F: Future>(&self, future: F) -> F::Output {
        self.timers.run_until(future).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_follow_config() {
        let host = Host::with_config(HostConfig::new().without_surface(Category::Numeric));
        assert!(host.surface(Category::Numeric).is_none());
        assert_eq!(host.surface(Category::Sequence).map(Surface::name), Some("Array"));
        assert_eq!(host.globals().name(), GLOBAL_SURFACE);
    }

    #[test]
    fn fresh_host_is_empty() {
        let host = Host::new();
        assert_eq!(host.enabled_namespaces().count(), 0);
        assert!(Category::all().all(|c| host.surface(c).is_some_and(Surface::is_empty)));
        assert!(host.globals().is_empty());
    }
}
