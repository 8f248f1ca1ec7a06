//! The method catalog.
//!
//! [`CATALOG`] binds every [`MethodId`] from the `agave_core` vocabulary to a native adapter that
//! unpacks a dynamic receiver and arguments, calls the typed operation in `agave_runtime`, and
//! packs the result back into a [`Value`]. [`GLOBALS`] does the same for global functions.
//!
//! The catalog is fixed at build time. Entry order is the activation walk order.
//!
//! ## Adding a method
//! 1. Add the id and its spelling to the category registry in `agave_core::lang::surface`.
//! 2. Implement the typed operation in `agave_runtime`.
//! 3. Add the adapter to the category module here and an entry to [`CATALOG`].
//!
//! The `catalog_guardrails` integration test fails if step 3 is forgotten.

mod callable;
mod globals;
mod mapping;
mod numeric;
mod sequence;
mod text;

use agave_core::MethodId;
use agave_core::lang::surface::functions::GlobalFnId;
use agave_core::lang::surface::{
    callable_methods::CallableMethodId as C, mapping_methods::MappingMethodId as M,
    numeric_methods::NumericMethodId as N, sequence_methods::SequenceMethodId as S, text_methods::TextMethodId as T,
};
use agave_runtime::{CallError, Value};

use crate::host::NativeFn;

/// One installable method: its identity and native implementation.
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub method: MethodId,
    pub implementation: NativeFn,
}

/// One installable global function.
#[derive(Clone, Copy)]
pub struct GlobalEntry {
    pub function: GlobalFnId,
    pub implementation: NativeFn,
}

const fn entry(method: MethodId, implementation: NativeFn) -> CatalogEntry {
    CatalogEntry { method, implementation }
}

pub const CATALOG: &[CatalogEntry] = &[
    // Sequence
    entry(MethodId::Sequence(S::FindItem), sequence::find_item),
    entry(MethodId::Sequence(S::Extend), sequence::extend),
    entry(MethodId::Sequence(S::Includes), sequence::includes),
    entry(MethodId::Sequence(S::Clone), sequence::clone),
    entry(MethodId::Sequence(S::Remove), sequence::remove),
    entry(MethodId::Sequence(S::First), sequence::first),
    entry(MethodId::Sequence(S::Last), sequence::last),
    // Mapping
    entry(MethodId::Mapping(M::GetKeys), mapping::get_keys),
    entry(MethodId::Mapping(M::GetSize), mapping::get_size),
    entry(MethodId::Mapping(M::GetPath), mapping::get_path),
    entry(MethodId::Mapping(M::Clone), mapping::clone),
    entry(MethodId::Mapping(M::ForEach), mapping::for_each),
    entry(MethodId::Mapping(M::Extend), mapping::extend),
    entry(MethodId::Mapping(M::Compare), mapping::compare),
    // Text
    entry(MethodId::Text(T::Reverse), text::reverse),
    entry(MethodId::Text(T::LeftStrip), text::left_strip),
    entry(MethodId::Text(T::RightStrip), text::right_strip),
    entry(MethodId::Text(T::Strip), text::strip),
    entry(MethodId::Text(T::ToHash), text::to_hash),
    entry(MethodId::Text(T::ForEach), text::for_each),
    // Callable
    entry(MethodId::Callable(C::Throttle), callable::throttle),
    entry(MethodId::Callable(C::Repeat), callable::repeat),
    // Numeric
    entry(MethodId::Numeric(N::Seconds), numeric::seconds),
    entry(MethodId::Numeric(N::Minutes), numeric::minutes),
    entry(MethodId::Numeric(N::Hours), numeric::hours),
    entry(MethodId::Numeric(N::Days), numeric::days),
    entry(MethodId::Numeric(N::Weeks), numeric::weeks),
    entry(MethodId::Numeric(N::Before), numeric::before),
    entry(MethodId::Numeric(N::After), numeric::after),
    entry(MethodId::Numeric(N::Round), numeric::round),
    entry(MethodId::Numeric(N::Ceil), numeric::ceil),
    entry(MethodId::Numeric(N::Floor), numeric::floor),
    entry(MethodId::Numeric(N::Abs), numeric::abs),
    entry(MethodId::Numeric(N::Pow), numeric::pow),
];

pub const GLOBALS: &[GlobalEntry] = &[GlobalEntry {
    function: GlobalFnId::Kind,
    implementation: globals::kind,
}];

/// Return the catalog entry for `method`, if one exists.
pub fn entry_for(method: MethodId) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.method == method)
}

/// Shared receiver check: `Err` unless `receiver` is of the kind `extract` accepts.
fn expect_receiver<'v, R: ?Sized>(
    method: &'static str,
    expected: &'static str,
    receiver: &'v mut Value,
    extract: impl FnOnce(&'v mut Value) -> Option<&'v mut R>,
) -> Result<&'v mut R, CallError> {
    let found = receiver.type_tag();
    extract(receiver).ok_or(CallError::InvalidReceiver { method, expected, found })
}
