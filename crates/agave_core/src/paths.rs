//! Path splitting for nested lookups.
//!
//! A path string is a Unix-style `/`-separated list of keys. Leading and trailing `/` are ignored;
//! interior empty segments are kept (so `"a//b"` looks up the empty key between `a` and `b`).

use crate::strings::strip;

/// Path separator for [`split_path`].
pub const PATH_DELIMITER: &str = "/";

/// Split a `/`-separated path into its key segments.
///
/// ## Examples
/// ```rust
/// use agave_core::paths::split_path;
///
/// assert_eq!(split_path("/a/b/"), vec!["a", "b"]);
/// assert_eq!(split_path(""), vec![""]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    strip(path, PATH_DELIMITER).split(PATH_DELIMITER).collect()
}
