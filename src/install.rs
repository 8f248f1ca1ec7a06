//! Non-destructive member installation.

use crate::host::{Member, Method, Surface};

/// What [`install`] did with one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// An own member of that name was already present and was left untouched.
    SkippedExisting,
    /// The host does not provide the target surface.
    SkippedMissingSurface,
}

/// Derive the member name for `base_name` under `namespace`.
///
/// ## Examples
/// ```rust
/// use agave::install::derived_name;
///
/// assert_eq!(derived_name("", "strip"), "strip");
/// assert_eq!(derived_name("av_", "strip"), "av_strip");
/// ```
pub fn derived_name(namespace: &str, base_name: &str) -> String {
    format!("{namespace}{base_name}")
}

/// Attach `method` to `surface` as `name`, unless the surface is absent or already owns `name`.
///
/// Installed members are non-enumerable and writable.
pub fn install(surface: Option<&mut Surface>, name: &str, method: Method) -> InstallOutcome {
    let Some(surface) = surface else {
        return InstallOutcome::SkippedMissingSurface;
    };
    if surface.has_own(name) {
        return InstallOutcome::SkippedExisting;
    }
    surface.define(name, Member::installed(method));
    InstallOutcome::Installed
}
