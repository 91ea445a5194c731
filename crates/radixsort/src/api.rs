//! High-level API for radix sorting.
//!
//! ## Purpose
//!
//! This module is the crate's public surface: it re-exports the engine, the
//! key-strategy types, and the error type, and provides one-shot convenience
//! functions that run a throwaway engine with default buffer handling.
//!
//! ## Key concepts
//!
//! * **Engine reuse**: Callers that sort repeatedly should hold a
//!   [`Sorter`] and pass `keep_buffers = true`; the free functions here
//!   trade that amortization for brevity.
//! * **Strategy selection**: The key type's [`RadixKey`] implementation is
//!   picked up implicitly; a [`Sorter::with_encoding`] engine overrides the
//!   sign policy when the strategy cannot express it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Publicly re-exported types
pub use crate::engine::executor::Sorter;
pub use crate::key::extract::{RadixKey, SignEncoding};
pub use crate::key::keyed::Keyed;
pub use crate::primitives::errors::SortError;

// ============================================================================
// One-Shot Operations
// ============================================================================

/// Sort `data` ascending by key, in place.
pub fn sort<K: RadixKey>(data: &mut [K]) -> Result<(), SortError> {
    Sorter::new().sort(data, false)
}

/// Sort a slice of `Copy` elements ascending by key, scattering directly.
pub fn sort_copy<K: RadixKey + Copy>(data: &mut [K]) -> Result<(), SortError> {
    Sorter::new().sort_copy(data, false)
}

/// Compute the sorted-order permutation of `data` without mutating it.
pub fn view<K: RadixKey>(data: &[K]) -> Result<Vec<usize>, SortError> {
    Sorter::new().view(data, false)
}

/// Compute the sorted-order permutation narrowed to index type `I`.
pub fn view_as<I: PrimInt, K: RadixKey>(data: &[K]) -> Result<Vec<I>, SortError> {
    Sorter::new().view_as(data, false)
}
