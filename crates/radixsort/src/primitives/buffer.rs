//! Scratch-buffer management for the sort engine.
//!
//! ## Purpose
//!
//! This module owns the engine's working memory: two index buffers that
//! ping-pong between counting passes, and one element-typed buffer for the
//! direct-scatter sort path. Allocating these once and reusing them across
//! calls is what makes repeated sorts of similar size cheap.
//!
//! ## Design notes
//!
//! * **Lazy**: Nothing is allocated until a sort or view runs, or the caller
//!   asks for it via preallocation.
//! * **Geometric growth**: When a request exceeds capacity, the buffers
//!   double if doubling covers the request, otherwise they grow to the exact
//!   request. Doubling stops above [`GROWTH_CEILING`] elements.
//! * **Fallible**: Growth goes through `try_reserve_exact`, so exhaustion
//!   reaches the caller as [`SortError::AllocationFailed`] instead of
//!   aborting mid-sort.
//! * **Exclusive ownership**: Buffers are never aliased by the caller; the
//!   engine hands out disjoint mutable slices per pass.
//!
//! ## Invariants
//!
//! * After `ensure_view_capacity(n)`, both index buffers have length exactly
//!   `n`.
//! * Capacity is monotonically non-decreasing until [`SortBuffers::release`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Growth Policy
// ============================================================================

/// Element count above which capacity stops doubling and grows exactly.
pub const GROWTH_CEILING: usize = 1_000_000_000;

/// Capacity to allocate when `requested` exceeds the `current` capacity.
///
/// Doubles only when doubling already covers the request; large or
/// first-time requests get exactly what they asked for.
pub fn grown_capacity(current: usize, requested: usize) -> usize {
    if current.saturating_mul(2) > requested && current < GROWTH_CEILING {
        current * 2
    } else {
        requested
    }
}

/// Grow `buf` so its capacity is at least `requested` elements.
fn grow<T>(buf: &mut Vec<T>, requested: usize) -> Result<(), SortError> {
    let current = buf.capacity();
    if current >= requested {
        return Ok(());
    }
    let target = grown_capacity(current, requested);
    buf.try_reserve_exact(target - buf.len())
        .map_err(|_| SortError::AllocationFailed { requested: target })
}

// ============================================================================
// SortBuffers - Working Memory for the Engine
// ============================================================================

/// Owned scratch space for one sort engine instance.
///
/// The two index buffers hold the evolving permutation during the counting
/// passes; the element buffer backs the direct-scatter sort path. All three
/// survive across calls when the caller opts into buffer retention.
#[derive(Debug, Clone)]
pub struct SortBuffers<K> {
    /// Index buffer holding the pass input order.
    forward: Vec<usize>,

    /// Index buffer receiving the pass output order.
    reverse: Vec<usize>,

    /// Element scratch for the direct-scatter path.
    elements: Vec<K>,
}

impl<K> Default for SortBuffers<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SortBuffers<K> {
    /// Create empty buffers; no allocation happens here.
    pub fn new() -> Self {
        Self {
            forward: Vec::new(),
            reverse: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Grow both index buffers per the growth policy and set their length to
    /// exactly `count`.
    pub fn ensure_view_capacity(&mut self, count: usize) -> Result<(), SortError> {
        grow(&mut self.forward, count)?;
        grow(&mut self.reverse, count)?;
        self.forward.resize(count, 0);
        self.reverse.resize(count, 0);
        Ok(())
    }

    /// Grow the element buffer's capacity per the growth policy.
    ///
    /// The buffer's contents are left untouched; the engine refills it per
    /// call.
    pub fn ensure_element_capacity(&mut self, count: usize) -> Result<(), SortError> {
        grow(&mut self.elements, count)
    }

    /// Borrow both index buffers as disjoint mutable slices.
    pub fn view_pair(&mut self) -> (&mut [usize], &mut [usize]) {
        (self.forward.as_mut_slice(), self.reverse.as_mut_slice())
    }

    /// Borrow the element scratch buffer.
    pub fn elements_mut(&mut self) -> &mut Vec<K> {
        &mut self.elements
    }

    /// Capacity of the index buffers, in elements.
    pub fn index_capacity(&self) -> usize {
        self.forward.capacity().min(self.reverse.capacity())
    }

    /// Whether any scratch storage is currently allocated.
    pub fn is_allocated(&self) -> bool {
        self.forward.capacity() > 0 || self.reverse.capacity() > 0 || self.elements.capacity() > 0
    }

    /// Release all scratch storage back to the allocator.
    pub fn release(&mut self) {
        self.forward = Vec::new();
        self.reverse = Vec::new();
        self.elements = Vec::new();
    }
}
