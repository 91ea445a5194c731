//! Stable counting-sort passes over one byte position.
//!
//! ## Purpose
//!
//! This module implements the single pass at the heart of the engine: bucket
//! a sequence of elements by the key byte at one position, then emit the
//! sequence reordered by that byte while preserving the relative order of
//! equal bytes. Chaining one such pass per byte position, least significant
//! first, composes into a full lexicographic sort.
//!
//! ## Key concepts
//!
//! * **Histogram + inclusive prefix sum**: After the prefix sum, `bucket[k]`
//!   holds the number of elements whose byte is `<= k`, i.e. one past the
//!   last slot of bucket `k`.
//! * **Reverse scan, decrement-before-write**: Scanning the input from the
//!   back and decrementing a bucket's cursor before writing fills each
//!   bucket from its last slot backwards, so elements with equal bytes keep
//!   their input order. This stability is the correctness-critical invariant
//!   of every pass.
//!
//! ## Invariants
//!
//! * A bucket cursor never underflows. An underflow means the byte strategy
//!   returned inconsistent values between the histogram and placement scans,
//!   which is a contract violation surfaced by a debug assertion.

// Internal dependencies
use crate::key::extract::RadixKey;

// ============================================================================
// Pass Constants
// ============================================================================

/// One bucket per possible byte value.
pub const BUCKET_COUNT: usize = 256;

// ============================================================================
// Index Pass
// ============================================================================

/// One stable counting pass refining an index permutation.
///
/// Reads elements of `data` in the order given by `input` and writes the
/// reordered indices to `output`. `buckets` is caller-owned so the engine
/// can reuse the same table for every pass.
pub fn counting_pass<K: RadixKey>(
    data: &[K],
    position: usize,
    input: &[usize],
    output: &mut [usize],
    buckets: &mut [usize; BUCKET_COUNT],
) {
    buckets.fill(0);
    for &index in input {
        buckets[data[index].byte_at(position) as usize] += 1;
    }

    let mut cumulative = 0usize;
    for bucket in buckets.iter_mut() {
        cumulative += *bucket;
        *bucket = cumulative;
    }

    for &index in input.iter().rev() {
        let bucket = data[index].byte_at(position) as usize;
        debug_assert!(
            buckets[bucket] > 0,
            "bucket cursor underflow at byte position {position}: key strategy is inconsistent"
        );
        buckets[bucket] -= 1;
        output[buckets[bucket]] = index;
    }
}

// ============================================================================
// Element Pass
// ============================================================================

/// One stable counting pass scattering elements directly.
///
/// The direct-scatter counterpart of [`counting_pass`]: elements move from
/// `source` to `destination` in refined order without an index indirection.
/// Used by the engine's copy-path, where elements are plain scalars.
pub fn scatter_pass<K: RadixKey + Copy>(
    source: &[K],
    destination: &mut [K],
    position: usize,
    buckets: &mut [usize; BUCKET_COUNT],
) {
    buckets.fill(0);
    for key in source {
        buckets[key.byte_at(position) as usize] += 1;
    }

    let mut cumulative = 0usize;
    for bucket in buckets.iter_mut() {
        cumulative += *bucket;
        *bucket = cumulative;
    }

    for key in source.iter().rev() {
        let bucket = key.byte_at(position) as usize;
        debug_assert!(
            buckets[bucket] > 0,
            "bucket cursor underflow at byte position {position}: key strategy is inconsistent"
        );
        buckets[bucket] -= 1;
        destination[buckets[bucket]] = *key;
    }
}
