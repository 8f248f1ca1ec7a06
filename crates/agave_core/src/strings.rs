//! Define shared text semantics (policy + pure helpers).
//!
//! This module holds the **pure/deterministic** text algorithms behind the installed text methods.
//!
//! ## Notes
//! - **Character model**: Unicode scalars (Rust `char`). For text inside the Basic Multilingual
//!   Plane this is identical to per-code-unit behavior; astral characters are kept whole instead of
//!   being split into surrogate halves.
//! - **Strip sets**: a strip set is a string whose characters are the members; order and
//!   repetition are irrelevant.
//! - **Hashing**: [`to_hash`] works on UTF-16 code units so results match the classic
//!   `(hash << 5) - hash + code` string hash bit-for-bit.

/// Reverse the characters of a string.
///
/// ## Notes
/// - Not grapheme-aware: combining marks are reversed independently of their base character.
///
/// ## Examples
/// ```rust
/// use agave_core::strings::reverse;
///
/// assert_eq!(reverse("abc"), "cba");
/// assert_eq!(reverse(""), "");
/// ```
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Drop leading characters while they are members of `strip_chars`.
///
/// Stops at the first non-member or when the text becomes empty.
///
/// ## Examples
/// ```rust
/// use agave_core::strings::left_strip;
///
/// assert_eq!(left_strip("  ab  ", " "), "ab  ");
/// assert_eq!(left_strip("xxyab", "xy"), "ab");
/// ```
pub fn left_strip<'a>(s: &'a str, strip_chars: &str) -> &'a str {
    s.trim_start_matches(|c: char| strip_chars.contains(c))
}

/// Drop trailing characters while they are members of `strip_chars`.
///
/// Equivalent to `reverse(left_strip(reverse(s), strip_chars))`, without the two allocations.
pub fn right_strip<'a>(s: &'a str, strip_chars: &str) -> &'a str {
    s.trim_end_matches(|c: char| strip_chars.contains(c))
}

/// Drop leading and trailing characters that are members of `strip_chars`.
///
/// ## Examples
/// ```rust
/// use agave_core::strings::strip;
///
/// assert_eq!(strip("  ab  ", " "), "ab");
/// assert_eq!(strip("//a/b//", "/"), "a/b");
/// ```
pub fn strip<'a>(s: &'a str, strip_chars: &str) -> &'a str {
    right_strip(left_strip(s, strip_chars), strip_chars)
}

/// Hash a string to a 32-bit signed integer.
///
/// Starting from `0`, every UTF-16 code unit `c` updates `hash = (hash << 5) - hash + c` with
/// 32-bit wrap-around. The empty string hashes to `0`.
///
/// ## Examples
/// ```rust
/// use agave_core::strings::to_hash;
///
/// assert_eq!(to_hash(""), 0);
/// assert_eq!(to_hash("a"), 97);
/// ```
pub fn to_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_family_on_padded_text() {
        assert_eq!(strip("  ab  ", " "), "ab");
        assert_eq!(left_strip("  ab  ", " "), "ab  ");
        assert_eq!(right_strip("  ab  ", " "), "  ab");
    }

    #[test]
    fn strip_to_empty() {
        assert_eq!(left_strip("    ", " "), "");
        assert_eq!(strip("", " "), "");
    }

    #[test]
    fn empty_strip_set_removes_nothing() {
        assert_eq!(strip("  ab  ", ""), "  ab  ");
    }

    #[test]
    fn to_hash_matches_known_values() {
        assert_eq!(to_hash("ab"), 97 * 31 + 98);
        assert_eq!(to_hash("hello"), 99_162_322);
    }

    #[test]
    fn to_hash_wraps_on_long_input() {
        let long = "wrap-around ".repeat(8);
        let mut reference: i64 = 0;
        for unit in long.encode_utf16() {
            reference = (((reference << 5) - reference + i64::from(unit)) as i32).into();
        }
        assert_eq!(to_hash(&long), reference as i32);
    }

    #[test]
    fn to_hash_counts_astral_characters_as_two_units() {
        // U+1F600 is the surrogate pair D83D DE00.
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(to_hash("\u{1F600}"), expected);
    }

    #[test]
    fn reverse_keeps_astral_characters_whole() {
        assert_eq!(reverse("a\u{1F600}b"), "b\u{1F600}a");
    }
}
