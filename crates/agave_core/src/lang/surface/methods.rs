//! Surface “method” vocabularies.
//!
//! This module groups the per-category method registries (sequence methods, text methods, ...) into a
//! single compilation unit, and ties them together through [`MethodId`].

use crate::lang::categories::Category;
use crate::lang::registry::{from_str_impl, info_for_impl};

pub mod sequence_methods {
    //! Sequence method surface vocabulary.
    //!
    //! These are the methods installed on the `Array` surface.

    use crate::lang::registry::{Example, LangItemInfo, SinceVersion, Stability};

    /// Stable identifier for a sequence method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum SequenceMethodId {
        FindItem,
        Extend,
        Includes,
        Clone,
        Remove,
        First,
        Last,
    }

    pub type SequenceMethodInfo = LangItemInfo<SequenceMethodId>;

    /// Registry of all sequence methods, in installation order.
    pub const SEQUENCE_METHODS: &[SequenceMethodInfo] = &[
        info(
            SequenceMethodId::FindItem,
            "findItem",
            &["find_item"],
            "Return the first element matching a predicate, or undefined.",
            &[Example {
                code: "[1, 2, 3].findItem(x => x > 1)",
                note: Some("Returns `2`."),
            }],
        ),
        info(
            SequenceMethodId::Extend,
            "extend",
            &["extend_items"],
            "Append every element of another sequence in place; returns the receiver.",
            &[],
        ),
        info(
            SequenceMethodId::Includes,
            "includes",
            &[],
            "Return true if an element strictly equals the value.",
            &[],
        ),
        info(
            SequenceMethodId::Clone,
            "clone",
            &["shallow_clone"],
            "Return a shallow copy with a new identity.",
            &[],
        ),
        info(
            SequenceMethodId::Remove,
            "remove",
            &["remove_item"],
            "Remove the first element strictly equal to the value; returns whether one was removed.",
            &[Example {
                code: "[1, 2, 3].remove(2)",
                note: Some("Returns `true`, leaving `[1, 3]`."),
            }],
        ),
        info(
            SequenceMethodId::First,
            "first",
            &["first_n"],
            "Return the first element, or the first N elements clamped to the length; an explicit N of 0 yields an empty list.",
            &[],
        ),
        info(
            SequenceMethodId::Last,
            "last",
            &["last_n"],
            "Return the last element, or the last N elements clamped to the length; an explicit N of 0 yields an empty list.",
            &[],
        ),
    ];

    /// Resolve a sequence method spelling to its stable id.
    pub fn from_str(name: &str) -> Option<SequenceMethodId> {
        super::from_str_impl(SEQUENCE_METHODS, name)
    }

    /// Return the canonical spelling for a sequence method.
    pub fn as_str(id: SequenceMethodId) -> &'static str {
        info_for(id).canonical
    }

    /// Return the full metadata entry for a sequence method.
    ///
    /// ## Panics
    /// - If the registry is missing an entry for `id` (this indicates a programming error).
    pub fn info_for(id: SequenceMethodId) -> &'static SequenceMethodInfo {
        super::info_for_impl(SEQUENCE_METHODS, id, "sequence method info missing")
    }

    const SINCE: SinceVersion = "0.1.0";

    const fn info(
        id: SequenceMethodId,
        canonical: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        examples: &'static [Example],
    ) -> SequenceMethodInfo {
        LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            since_version: Some(SINCE),
            stability: Stability::Stable,
            examples,
        }
    }
}

pub mod mapping_methods {
    //! Mapping method surface vocabulary.
    //!
    //! These are the methods installed on the `Object` surface. Every value kind inherits this
    //! surface, so a mapping method is reachable from any receiver.

    use crate::lang::registry::{Example, LangItemInfo, Stability};

    /// Stable identifier for a mapping method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum MappingMethodId {
        GetKeys,
        GetSize,
        GetPath,
        Clone,
        ForEach,
        Extend,
        Compare,
    }

    pub type MappingMethodInfo = LangItemInfo<MappingMethodId>;

    /// Registry of all mapping methods, in installation order.
    pub const MAPPING_METHODS: &[MappingMethodInfo] = &[
        info(
            MappingMethodId::GetKeys,
            "getKeys",
            &["get_keys"],
            "Return the own enumerable keys in insertion order.",
            &[],
        ),
        info(
            MappingMethodId::GetSize,
            "getSize",
            &["get_size"],
            "Return the number of own enumerable keys.",
            &[],
        ),
        info(
            MappingMethodId::GetPath,
            "getPath",
            &["get_path"],
            "Resolve a nested value by key list or `/`-separated path; undefined if any step is missing.",
            &[
                Example {
                    code: "({a: {b: 2}}).getPath('a/b')",
                    note: Some("Returns `2`."),
                },
                Example {
                    code: "({a: {b: 2}}).getPath(['a', 'c'])",
                    note: Some("Returns `undefined`."),
                },
            ],
        ),
        info(
            MappingMethodId::Clone,
            "clone",
            &["deep_clone"],
            "Return a deep copy; nested mappings and sequences are copied recursively.",
            &[],
        ),
        info(
            MappingMethodId::ForEach,
            "forEach",
            &["for_each_entry"],
            "Invoke a callback with each enumerable key and value.",
            &[],
        ),
        info(
            MappingMethodId::Extend,
            "extend",
            &["extend_from"],
            "Copy every key of another mapping onto the receiver; later values win.",
            &[],
        ),
        info(
            MappingMethodId::Compare,
            "compare",
            &[],
            "Return true if two values are structurally equal.",
            &[],
        ),
    ];

    /// Resolve a mapping method spelling to its stable id.
    pub fn from_str(name: &str) -> Option<MappingMethodId> {
        super::from_str_impl(MAPPING_METHODS, name)
    }

    /// Return the canonical spelling for a mapping method.
    pub fn as_str(id: MappingMethodId) -> &'static str {
        info_for(id).canonical
    }

    /// Return the full metadata entry for a mapping method.
    ///
    /// ## Panics
    /// - If the registry is missing an entry for `id` (this indicates a programming error).
    pub fn info_for(id: MappingMethodId) -> &'static MappingMethodInfo {
        super::info_for_impl(MAPPING_METHODS, id, "mapping method info missing")
    }

    const fn info(
        id: MappingMethodId,
        canonical: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        examples: &'static [Example],
    ) -> MappingMethodInfo {
        LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            since_version: Some("0.1.0"),
            stability: Stability::Stable,
            examples,
        }
    }
}

pub mod text_methods {
    //! Text method surface vocabulary.

    use crate::lang::registry::{Example, LangItemInfo, Stability};

    /// Stable identifier for a text method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum TextMethodId {
        Reverse,
        LeftStrip,
        RightStrip,
        Strip,
        ToHash,
        ForEach,
    }

    pub type TextMethodInfo = LangItemInfo<TextMethodId>;

    /// Registry of all text methods, in installation order.
    pub const TEXT_METHODS: &[TextMethodInfo] = &[
        info(TextMethodId::Reverse, "reverse", &[], "Reverse the characters.", &[]),
        info(
            TextMethodId::LeftStrip,
            "leftStrip",
            &["left_strip", "lstrip"],
            "Remove leading characters that belong to the given set.",
            &[Example {
                code: "'  ab  '.leftStrip(' ')",
                note: Some("Returns `'ab  '`."),
            }],
        ),
        info(
            TextMethodId::RightStrip,
            "rightStrip",
            &["right_strip", "rstrip"],
            "Remove trailing characters that belong to the given set.",
            &[],
        ),
        info(
            TextMethodId::Strip,
            "strip",
            &[],
            "Remove leading and trailing characters that belong to the given set.",
            &[],
        ),
        info(
            TextMethodId::ToHash,
            "toHash",
            &["to_hash"],
            "Return a deterministic 32-bit signed hash of the UTF-16 code units.",
            &[],
        ),
        info(
            TextMethodId::ForEach,
            "forEach",
            &["for_each_char"],
            "Invoke a callback with each character, its index and the text.",
            &[],
        ),
    ];

    /// Resolve a text method spelling to its stable id.
    pub fn from_str(name: &str) -> Option<TextMethodId> {
        super::from_str_impl(TEXT_METHODS, name)
    }

    /// Return the canonical spelling for a text method.
    pub fn as_str(id: TextMethodId) -> &'static str {
        info_for(id).canonical
    }

    /// Return the full metadata entry for a text method.
    pub fn info_for(id: TextMethodId) -> &'static TextMethodInfo {
        super::info_for_impl(TEXT_METHODS, id, "text method info missing")
    }

    const fn info(
        id: TextMethodId,
        canonical: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        examples: &'static [Example],
    ) -> TextMethodInfo {
        LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            since_version: Some("0.1.0"),
            stability: Stability::Stable,
            examples,
        }
    }
}

pub mod callable_methods {
    //! Callable method surface vocabulary.

    use crate::lang::registry::{Example, LangItemInfo, Stability};

    /// Stable identifier for a callable method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum CallableMethodId {
        Throttle,
        Repeat,
    }

    pub type CallableMethodInfo = LangItemInfo<CallableMethodId>;

    /// Registry of all callable methods, in installation order.
    pub const CALLABLE_METHODS: &[CallableMethodInfo] = &[
        info(
            CallableMethodId::Throttle,
            "throttle",
            &["debounce"],
            "Wrap the function so a burst of calls runs it once, after `wait` ms of quiet (or once up front).",
            &[Example {
                code: "save.throttle(100)",
                note: Some("Three calls 50ms apart run `save` once, 100ms after the last call."),
            }],
        ),
        info(
            CallableMethodId::Repeat,
            "repeat",
            &[],
            "Run the function every `interval` ms until cleared; returns the timer id.",
            &[],
        ),
    ];

    /// Resolve a callable method spelling to its stable id.
    pub fn from_str(name: &str) -> Option<CallableMethodId> {
        super::from_str_impl(CALLABLE_METHODS, name)
    }

    /// Return the canonical spelling for a callable method.
    pub fn as_str(id: CallableMethodId) -> &'static str {
        info_for(id).canonical
    }

    /// Return the full metadata entry for a callable method.
    pub fn info_for(id: CallableMethodId) -> &'static CallableMethodInfo {
        super::info_for_impl(CALLABLE_METHODS, id, "callable method info missing")
    }

    const fn info(
        id: CallableMethodId,
        canonical: &'static str,
        aliases: &'static [&'static str],
        description: &'static str,
        examples: &'static [Example],
    ) -> CallableMethodInfo {
        LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            since_version: Some("0.1.0"),
            stability: Stability::Stable,
            examples,
        }
    }
}

pub mod numeric_methods {
    //! Numeric method surface vocabulary.
    //!
    //! The unit methods (`seconds` ... `weeks`) turn a count into a millisecond duration, which
    //! `before`/`after` then apply to a date.

    use crate::lang::registry::{Example, LangItemInfo, Stability};

    /// Stable identifier for a numeric method.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum NumericMethodId {
        Seconds,
        Minutes,
        Hours,
        Days,
        Weeks,
        Before,
        After,
        Round,
        Ceil,
        Floor,
        Abs,
        Pow,
    }

    pub type NumericMethodInfo = LangItemInfo<NumericMethodId>;

    /// Registry of all numeric methods, in installation order.
    pub const NUMERIC_METHODS: &[NumericMethodInfo] = &[
        info(
            NumericMethodId::Seconds,
            "seconds",
            "Convert a count of seconds to milliseconds.",
            &[Example {
                code: "(3).seconds()",
                note: Some("Returns `3000`."),
            }],
        ),
        info(
            NumericMethodId::Minutes,
            "minutes",
            "Convert a count of minutes to milliseconds.",
            &[],
        ),
        info(
            NumericMethodId::Hours,
            "hours",
            "Convert a count of hours to milliseconds.",
            &[Example {
                code: "(1).hours() + (30).minutes()",
                note: Some("Returns `5400000`."),
            }],
        ),
        info(NumericMethodId::Days, "days", "Convert a count of days to milliseconds.", &[]),
        info(NumericMethodId::Weeks, "weeks", "Convert a count of weeks to milliseconds.", &[]),
        info(
            NumericMethodId::Before,
            "before",
            "Return the date this many milliseconds before the given date (default: now).",
            &[],
        ),
        info(
            NumericMethodId::After,
            "after",
            "Return the date this many milliseconds after the given date (default: now).",
            &[],
        ),
        info(
            NumericMethodId::Round,
            "round",
            "Round to the nearest integer; halves round up.",
            &[],
        ),
        info(NumericMethodId::Ceil, "ceil", "Round up to an integer.", &[]),
        info(NumericMethodId::Floor, "floor", "Round down to an integer.", &[]),
        info(NumericMethodId::Abs, "abs", "Return the absolute value.", &[]),
        info(NumericMethodId::Pow, "pow", "Raise to the given exponent.", &[]),
    ];

    /// Resolve a numeric method spelling to its stable id.
    pub fn from_str(name: &str) -> Option<NumericMethodId> {
        super::from_str_impl(NUMERIC_METHODS, name)
    }

    /// Return the canonical spelling for a numeric method.
    pub fn as_str(id: NumericMethodId) -> &'static str {
        info_for(id).canonical
    }

    /// Return the full metadata entry for a numeric method.
    pub fn info_for(id: NumericMethodId) -> &'static NumericMethodInfo {
        super::info_for_impl(NUMERIC_METHODS, id, "numeric method info missing")
    }

    const fn info(
        id: NumericMethodId,
        canonical: &'static str,
        description: &'static str,
        examples: &'static [Example],
    ) -> NumericMethodInfo {
        LangItemInfo {
            id,
            canonical,
            aliases: &[],
            description,
            since_version: Some("0.1.0"),
            stability: Stability::Stable,
            examples,
        }
    }
}

use callable_methods::CallableMethodId;
use mapping_methods::MappingMethodId;
use numeric_methods::NumericMethodId;
use sequence_methods::SequenceMethodId;
use text_methods::TextMethodId;

/// Stable identifier for any installable method, tagged by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodId {
    Sequence(SequenceMethodId),
    Mapping(MappingMethodId),
    Text(TextMethodId),
    Callable(CallableMethodId),
    Numeric(NumericMethodId),
}

impl MethodId {
    /// Return the category whose surface the method is installed on.
    pub fn category(self) -> Category {
        match self {
            MethodId::Sequence(_) => Category::Sequence,
            MethodId::Mapping(_) => Category::Mapping,
            MethodId::Text(_) => Category::Text,
            MethodId::Callable(_) => Category::Callable,
            MethodId::Numeric(_) => Category::Numeric,
        }
    }

    /// Return the canonical base name (the un-namespaced member name).
    pub fn base_name(self) -> &'static str {
        match self {
            MethodId::Sequence(id) => sequence_methods::as_str(id),
            MethodId::Mapping(id) => mapping_methods::as_str(id),
            MethodId::Text(id) => text_methods::as_str(id),
            MethodId::Callable(id) => callable_methods::as_str(id),
            MethodId::Numeric(id) => numeric_methods::as_str(id),
        }
    }

    /// Return the one-line description from the owning registry.
    pub fn description(self) -> &'static str {
        match self {
            MethodId::Sequence(id) => sequence_methods::info_for(id).description,
            MethodId::Mapping(id) => mapping_methods::info_for(id).description,
            MethodId::Text(id) => text_methods::info_for(id).description,
            MethodId::Callable(id) => callable_methods::info_for(id).description,
            MethodId::Numeric(id) => numeric_methods::info_for(id).description,
        }
    }

    /// Resolve a spelling within one category.
    pub fn from_str_in(category: Category, name: &str) -> Option<MethodId> {
        match category {
            Category::Sequence => sequence_methods::from_str(name).map(MethodId::Sequence),
            Category::Mapping => mapping_methods::from_str(name).map(MethodId::Mapping),
            Category::Text => text_methods::from_str(name).map(MethodId::Text),
            Category::Callable => callable_methods::from_str(name).map(MethodId::Callable),
            Category::Numeric => numeric_methods::from_str(name).map(MethodId::Numeric),
        }
    }

    /// Iterate every method of every category, in catalog walk order.
    pub fn all() -> impl Iterator<Item = MethodId> {
        let sequence = sequence_methods::SEQUENCE_METHODS.iter().map(|m| MethodId::Sequence(m.id));
        let mapping = mapping_methods::MAPPING_METHODS.iter().map(|m| MethodId::Mapping(m.id));
        let text = text_methods::TEXT_METHODS.iter().map(|m| MethodId::Text(m.id));
        let callable = callable_methods::CALLABLE_METHODS.iter().map(|m| MethodId::Callable(m.id));
        let numeric = numeric_methods::NUMERIC_METHODS.iter().map(|m| MethodId::Numeric(m.id));
        sequence.chain(mapping).chain(text).chain(callable).chain(numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_count_matches_catalog_size() {
        assert_eq!(MethodId::all().count(), 7 + 7 + 6 + 2 + 12);
    }

    #[test]
    fn base_names_resolve_back_within_their_category() {
        for id in MethodId::all() {
            assert_eq!(MethodId::from_str_in(id.category(), id.base_name()), Some(id));
        }
    }

    #[test]
    fn shared_base_names_resolve_per_category() {
        assert_eq!(
            MethodId::from_str_in(Category::Sequence, "clone"),
            Some(MethodId::Sequence(SequenceMethodId::Clone))
        );
        assert_eq!(
            MethodId::from_str_in(Category::Mapping, "clone"),
            Some(MethodId::Mapping(MappingMethodId::Clone))
        );
        assert_eq!(MethodId::from_str_in(Category::Numeric, "clone"), None);
    }
}
