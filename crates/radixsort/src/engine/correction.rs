//! Sign correction after the byte passes.
//!
//! ## Purpose
//!
//! Byte-wise ascending order treats the sign bit as an ordinary high bit, so
//! after the counting passes every key with the sign bit set sits in a
//! contiguous block at the end of the array. This module locates that block
//! and repairs the order: the negative block rotates to the front, and for
//! IEEE-754 keys it is additionally reversed in place.
//!
//! ## Design notes
//!
//! * **Binary search**: Once the passes are done, "sign bit set" is a
//!   monotonic predicate over positions (all clear before all set), so the
//!   block boundary is found by a plain binary search with the all-negative
//!   and all-non-negative cases falling out naturally.
//! * **Why integers need no reversal**: Two's-complement bit patterns of
//!   negative values grow with the value itself, so the rotated block is
//!   already ascending. IEEE-754 negative patterns grow as the value
//!   decreases, hence the extra reversal.
//!
//! ## Invariants
//!
//! * Both blocks keep their internal order through the rotation.
//! * Inputs shorter than two elements are left untouched.

// Internal dependencies
use crate::key::extract::{RadixKey, SignEncoding};

// ============================================================================
// Boundary Search
// ============================================================================

/// Mask of the sign bit in the most significant key byte.
pub const SIGN_BIT: u8 = 0x80;

/// First position for which `is_negative` holds, or `count` if none.
///
/// `is_negative` must be monotonic over `0..count`: once it holds at some
/// position it holds at every later one. That is guaranteed for the sign-bit
/// predicate after a full set of counting passes.
pub fn negative_run_start(count: usize, is_negative: impl Fn(usize) -> bool) -> usize {
    let mut low = 0;
    let mut high = count;
    while low < high {
        let middle = low + (high - low) / 2;
        if is_negative(middle) {
            high = middle;
        } else {
            low = middle + 1;
        }
    }
    low
}

// ============================================================================
// Correction over an Index View
// ============================================================================

/// Repair the sign ordering of an index permutation.
///
/// `view` maps output positions to element indices in `data`; the elements
/// themselves are not touched.
pub fn correct_view<K: RadixKey>(data: &[K], view: &mut [usize], encoding: SignEncoding) {
    if !encoding.needs_correction() || view.len() < 2 {
        return;
    }
    let count = view.len();
    let start = negative_run_start(count, |position| {
        data[view[position]].byte_at(0) & SIGN_BIT != 0
    });
    if start == count {
        return;
    }
    view.rotate_left(start);
    if encoding.reverses_negatives() {
        view[..count - start].reverse();
    }
}

// ============================================================================
// Correction over Elements
// ============================================================================

/// Repair the sign ordering of a sorted element slice in place.
///
/// The direct counterpart of [`correct_view`] for the scatter path, where
/// the byte passes moved the elements themselves.
pub fn correct_slice<K: RadixKey>(data: &mut [K], encoding: SignEncoding) {
    if !encoding.needs_correction() || data.len() < 2 {
        return;
    }
    let count = data.len();
    let start = negative_run_start(count, |position| data[position].byte_at(0) & SIGN_BIT != 0);
    if start == count {
        return;
    }
    data.rotate_left(start);
    if encoding.reverses_negatives() {
        data[..count - start].reverse();
    }
}
