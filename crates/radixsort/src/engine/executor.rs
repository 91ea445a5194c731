//! The sort engine and its public operations.
//!
//! ## Purpose
//!
//! This module provides [`Sorter`], the engine that orchestrates the
//! counting passes over its owned scratch buffers and exposes the public
//! operations: in-place sorting (generic and direct-scatter), index views
//! (native and narrowed width), and the buffer-lifecycle hooks.
//!
//! ## Design notes
//!
//! * **Ping-pong over owned buffers**: Each pass reads one index buffer and
//!   writes the other; the roles swap via mutable-slice exchange, and the
//!   finished side is tracked with an enum rather than pointer comparison,
//!   keeping ownership unambiguous.
//! * **Two in-place strategies**: [`Sorter::sort`] builds the index view and
//!   then applies the permutation with element swaps, so elements of any
//!   type are relocated, never duplicated. [`Sorter::sort_copy`] skips the
//!   indirection and scatters `Copy` elements through the element scratch
//!   buffer instead.
//! * **Deferred release**: Every operation takes `keep_buffers`; `false`
//!   returns scratch storage to the allocator before returning, `true`
//!   retains it for the next call on the same instance.
//!
//! ## Invariants
//!
//! * The index view emitted by the passes is a bijection over `[0, n)`.
//! * Sign correction runs after the passes and before any output is
//!   produced or applied.
//!
//! ## Non-goals
//!
//! * No interior mutability: a `Sorter` shared across threads needs external
//!   synchronization.
//! * No recovery: a failed operation leaves its output unspecified.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::any::type_name;
use core::mem;
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::correction::{correct_slice, correct_view};
use crate::engine::passes::{counting_pass, scatter_pass, BUCKET_COUNT};
use crate::key::extract::{RadixKey, SignEncoding};
use crate::primitives::buffer::SortBuffers;
use crate::primitives::errors::SortError;

// ============================================================================
// Pass Bookkeeping
// ============================================================================

/// Which index buffer holds the finished permutation after the passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveBuffer {
    Forward,
    Reverse,
}

// ============================================================================
// Sorter
// ============================================================================

/// A reusable radix sort engine for elements of key type `K`.
///
/// The engine owns its scratch buffers, so repeated calls on one instance
/// with `keep_buffers = true` amortize allocation. Construction is free; no
/// memory is allocated until the first operation or an explicit
/// [`preallocate`](Sorter::preallocate).
#[derive(Debug, Clone)]
pub struct Sorter<K> {
    /// Owned scratch space, retained across calls on request.
    buffers: SortBuffers<K>,

    /// Forced sign policy; `None` infers it from `K::ENCODING`.
    encoding_override: Option<SignEncoding>,
}

impl<K> Default for Sorter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Sorter<K> {
    /// Create an engine that infers the sign policy from the key type.
    pub fn new() -> Self {
        Self {
            buffers: SortBuffers::new(),
            encoding_override: None,
        }
    }

    /// Create an engine with a forced sign policy.
    ///
    /// Useful when the key strategy cannot express signedness itself, e.g. a
    /// custom wrapper whose bytes are two's-complement but whose `ENCODING`
    /// is the `Unsigned` default.
    pub fn with_encoding(encoding: SignEncoding) -> Self {
        Self {
            buffers: SortBuffers::new(),
            encoding_override: Some(encoding),
        }
    }

    /// Allocate the index buffers for `count` elements up front.
    ///
    /// Gives callers deterministic allocation timing; the element scratch
    /// used by [`sort_copy`](Sorter::sort_copy) still grows on demand.
    pub fn preallocate(&mut self, count: usize) -> Result<(), SortError> {
        self.buffers.ensure_view_capacity(count)
    }

    /// Release all retained scratch storage.
    pub fn release_buffers(&mut self) {
        self.buffers.release();
    }
}

impl<K: RadixKey> Sorter<K> {
    /// The sign policy in effect for this instance.
    fn effective_encoding(&self) -> SignEncoding {
        self.encoding_override.unwrap_or(K::ENCODING)
    }

    // ========================================================================
    // In-Place Sorting
    // ========================================================================

    /// Sort `data` ascending by key, in place.
    ///
    /// Builds the index permutation, then applies it with element swaps, so
    /// non-trivial element types are moved rather than cloned.
    pub fn sort(&mut self, data: &mut [K], keep_buffers: bool) -> Result<(), SortError> {
        if data.len() > 1 {
            let active = self.build_view(data)?;
            let (forward, reverse) = self.buffers.view_pair();
            let (view, inverse) = match active {
                ActiveBuffer::Forward => (forward, reverse),
                ActiveBuffer::Reverse => (reverse, forward),
            };
            apply_view(data, view, inverse);
        }
        if !keep_buffers {
            self.buffers.release();
        }
        Ok(())
    }

    /// Sort `data` ascending by key, scattering elements directly.
    ///
    /// Skips the index indirection of [`sort`](Sorter::sort): each pass
    /// moves the elements themselves between `data` and the element scratch
    /// buffer. Preferred for plain scalar keys, at the cost of one full
    /// element-buffer allocation.
    pub fn sort_copy(&mut self, data: &mut [K], keep_buffers: bool) -> Result<(), SortError>
    where
        K: Copy,
    {
        let count = data.len();
        if count > 1 {
            self.buffers.ensure_element_capacity(count)?;
            let encoding = self.effective_encoding();

            let mut max_len = 0;
            for key in data.iter() {
                max_len = max_len.max(key.significant_len());
            }

            let scratch = self.buffers.elements_mut();
            scratch.clear();
            scratch.extend_from_slice(data);
            let scratch = scratch.as_mut_slice();

            let mut buckets = [0usize; BUCKET_COUNT];
            let mut in_scratch = false;
            for position in (0..max_len).rev() {
                if in_scratch {
                    scatter_pass(scratch, data, position, &mut buckets);
                } else {
                    scatter_pass(data, scratch, position, &mut buckets);
                }
                in_scratch = !in_scratch;
            }
            if in_scratch {
                data.copy_from_slice(&scratch[..count]);
            }

            correct_slice(data, encoding);
        }
        if !keep_buffers {
            self.buffers.release();
        }
        Ok(())
    }

    // ========================================================================
    // Index Views
    // ========================================================================

    /// Compute the sorted-order permutation of `data` without mutating it.
    ///
    /// The result maps output position to original position: element
    /// `data[view[0]]` is the smallest. Always a bijection over `[0, n)`.
    pub fn view(&mut self, data: &[K], keep_buffers: bool) -> Result<Vec<usize>, SortError> {
        let count = data.len();
        let mut indices = Vec::new();
        indices
            .try_reserve_exact(count)
            .map_err(|_| SortError::AllocationFailed { requested: count })?;

        if count == 1 {
            indices.push(0);
        } else if count > 1 {
            let active = self.build_view(data)?;
            let (forward, reverse) = self.buffers.view_pair();
            let current = match active {
                ActiveBuffer::Forward => forward,
                ActiveBuffer::Reverse => reverse,
            };
            indices.extend_from_slice(current);
        }

        if !keep_buffers {
            self.buffers.release();
        }
        Ok(indices)
    }

    /// Compute the sorted-order permutation narrowed to index type `I`.
    ///
    /// Fails with [`SortError::ViewIndexOverflow`] before any pass runs if
    /// `I` cannot represent position `count - 1`; positions are never
    /// silently truncated.
    pub fn view_as<I: PrimInt>(
        &mut self,
        data: &[K],
        keep_buffers: bool,
    ) -> Result<Vec<I>, SortError> {
        let count = data.len();
        if count > 0 && I::from(count - 1).is_none() {
            return Err(SortError::ViewIndexOverflow {
                count,
                target: type_name::<I>(),
            });
        }

        let mut indices = Vec::new();
        indices
            .try_reserve_exact(count)
            .map_err(|_| SortError::AllocationFailed { requested: count })?;

        if count == 1 {
            indices.push(I::zero());
        } else if count > 1 {
            let active = self.build_view(data)?;
            let (forward, reverse) = self.buffers.view_pair();
            let current = match active {
                ActiveBuffer::Forward => forward,
                ActiveBuffer::Reverse => reverse,
            };
            for &index in current.iter() {
                let narrowed = I::from(index).ok_or(SortError::ViewIndexOverflow {
                    count,
                    target: type_name::<I>(),
                })?;
                indices.push(narrowed);
            }
        }

        if !keep_buffers {
            self.buffers.release();
        }
        Ok(indices)
    }

    // ========================================================================
    // Pass Orchestration
    // ========================================================================

    /// Run the counting passes and sign correction, leaving the finished
    /// permutation in one of the index buffers.
    fn build_view(&mut self, data: &[K]) -> Result<ActiveBuffer, SortError> {
        let count = data.len();
        self.buffers.ensure_view_capacity(count)?;
        let encoding = self.effective_encoding();

        let (forward, reverse) = self.buffers.view_pair();

        let mut max_len = 0;
        for (index, key) in data.iter().enumerate() {
            forward[index] = index;
            max_len = max_len.max(key.significant_len());
        }

        let mut buckets = [0usize; BUCKET_COUNT];
        let mut input: &mut [usize] = forward;
        let mut output: &mut [usize] = reverse;
        for position in (0..max_len).rev() {
            counting_pass(data, position, input, output, &mut buckets);
            mem::swap(&mut input, &mut output);
        }

        correct_view(data, input, encoding);

        Ok(if max_len % 2 == 0 {
            ActiveBuffer::Forward
        } else {
            ActiveBuffer::Reverse
        })
    }
}

// ============================================================================
// Permutation Application
// ============================================================================

/// Apply the permutation in `view` to `data` in place, using swaps only.
///
/// `inverse` is overwritten with the inverse permutation and both arrays are
/// consumed as bookkeeping: after each swap the mappings are patched so every
/// later step still finds its element. Positions `0..i` are final once step
/// `i` completes, so the whole application is O(n) swaps.
pub fn apply_view<K>(data: &mut [K], view: &mut [usize], inverse: &mut [usize]) {
    for position in 0..data.len() {
        inverse[view[position]] = position;
    }
    for position in 0..data.len() {
        let source = view[position];
        data.swap(position, source);
        let destination = inverse[position];
        view[destination] = source;
        inverse[source] = destination;
    }
}
