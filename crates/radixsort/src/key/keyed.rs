//! Key/payload pairs for stable indirect sorting.
//!
//! ## Purpose
//!
//! This module provides [`Keyed`], a first-class pairing of an explicit sort
//! key with an opaque payload. Sorting a slice of `Keyed` values orders the
//! payloads by key while the engine's per-pass stability guarantees that
//! equal keys keep their original relative order.
//!
//! ## Design notes
//!
//! * The whole strategy delegates to the key; the payload is never read.
//! * The payload type is unconstrained, so a payload can be an index into a
//!   parallel structure, an owned record, or anything in between.

// Internal dependencies
use crate::key::extract::{RadixKey, SignEncoding};

// ============================================================================
// Keyed Pair
// ============================================================================

/// An element that sorts by `key` and carries `payload` along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyed<K, P> {
    /// The sort key; the engine reads only this field.
    pub key: K,

    /// Opaque payload reordered alongside the key.
    pub payload: P,
}

impl<K, P> Keyed<K, P> {
    /// Pair `key` with `payload`.
    pub fn new(key: K, payload: P) -> Self {
        Self { key, payload }
    }
}

impl<K, P> From<(K, P)> for Keyed<K, P> {
    fn from((key, payload): (K, P)) -> Self {
        Self::new(key, payload)
    }
}

impl<K: RadixKey, P> RadixKey for Keyed<K, P> {
    const ENCODING: SignEncoding = K::ENCODING;

    #[inline]
    fn byte_at(&self, position: usize) -> u8 {
        self.key.byte_at(position)
    }

    #[inline]
    fn significant_len(&self) -> usize {
        self.key.significant_len()
    }
}
