//! Text operations.
//!
//! [`TextExt`] exposes the shared text semantics from `agave_core::strings` as methods on `str`, so
//! runtime behavior stays aligned with the pure helpers (and their tests).

use agave_core::strings;

/// Text methods for `str`.
pub trait TextExt {
    /// Reverse the characters.
    fn reverse(&self) -> String;

    /// Drop leading characters that are members of `strip_chars`.
    fn left_strip(&self, strip_chars: &str) -> &str;

    /// Drop trailing characters that are members of `strip_chars`.
    fn right_strip(&self, strip_chars: &str) -> &str;

    /// Drop leading and trailing characters that are members of `strip_chars`.
    fn strip(&self, strip_chars: &str) -> &str;

    /// Return the 32-bit string hash.
    fn to_hash(&self) -> i32;

    /// Invoke `callback` with each character and its index.
    fn for_each_char<F>(&self, callback: F)
    where
        F: FnMut(char, usize);
}

impl TextExt for str {
    fn reverse(&self) -> String {
        strings::reverse(self)
    }

    fn left_strip(&self, strip_chars: &str) -> &str {
        strings::left_strip(self, strip_chars)
    }

    fn right_strip(&self, strip_chars: &str) -> &str {
        strings::right_strip(self, strip_chars)
    }

    fn strip(&self, strip_chars: &str) -> &str {
        strings::strip(self, strip_chars)
    }

    fn to_hash(&self) -> i32 {
        strings::to_hash(self)
    }

    fn for_each_char<F>(&self, mut callback: F)
    where
        F: FnMut(char, usize),
    {
        for (index, c) in self.chars().enumerate() {
            callback(c, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_delegate_to_core() {
        assert_eq!("abc".reverse(), "cba");
        assert_eq!("  ab  ".strip(" "), "ab");
        assert_eq!("  ab  ".left_strip(" "), "ab  ");
        assert_eq!("  ab  ".right_strip(" "), "  ab");
        assert_eq!("".to_hash(), 0);
    }

    #[test]
    fn works_on_owned_strings_through_deref() {
        let s = String::from("--x--");
        assert_eq!(s.strip("-"), "x");
    }

    #[test]
    fn for_each_char_passes_indices() {
        let mut seen = Vec::new();
        "héy".for_each_char(|c, i| seen.push((i, c)));
        assert_eq!(seen, vec![(0, 'h'), (1, 'é'), (2, 'y')]);
    }
}
