#![cfg(feature = "dev")]
//! White-box tests for engine internals.
//!
//! These tests reach through the `dev`-only `internals` module to exercise
//! the counting pass, the boundary search, the permutation application, and
//! the buffer growth policy in isolation.
//!
//! ## Test Organization
//!
//! 1. **Counting Pass** - single-pass ordering and stability
//! 2. **Boundary Search** - negative-run edge cases
//! 3. **Permutation Application** - swap bookkeeping
//! 4. **Growth Policy** - doubling rule and ceiling

use radixsort::internals::engine::correction::{negative_run_start, SIGN_BIT};
use radixsort::internals::engine::executor::apply_view;
use radixsort::internals::engine::passes::{counting_pass, BUCKET_COUNT};
use radixsort::internals::primitives::buffer::{grown_capacity, SortBuffers, GROWTH_CEILING};

// ============================================================================
// Counting Pass Tests
// ============================================================================

/// Test that one pass orders single-byte keys.
#[test]
fn test_single_pass_orders_bytes() {
    let data = vec![30u8, 10, 20];
    let input = vec![0usize, 1, 2];
    let mut output = vec![0usize; 3];
    let mut buckets = [0usize; BUCKET_COUNT];

    counting_pass(&data, 0, &input, &mut output, &mut buckets);

    assert_eq!(output, vec![1, 2, 0]);
}

/// Test that a pass is stable for equal bytes.
#[test]
fn test_single_pass_stability() {
    let data = vec![5u8, 1, 5, 1, 5];
    let input = vec![0usize, 1, 2, 3, 4];
    let mut output = vec![0usize; 5];
    let mut buckets = [0usize; BUCKET_COUNT];

    counting_pass(&data, 0, &input, &mut output, &mut buckets);

    assert_eq!(output, vec![1, 3, 0, 2, 4], "Equal bytes keep input order");
}

/// Test that positions past every key's length leave order unchanged.
#[test]
fn test_pass_beyond_length_is_identity() {
    let data = vec![9u8, 7, 8];
    let input = vec![2usize, 0, 1];
    let mut output = vec![0usize; 3];
    let mut buckets = [0usize; BUCKET_COUNT];

    counting_pass(&data, 5, &input, &mut output, &mut buckets);

    assert_eq!(output, input, "All-zero bytes preserve the incoming order");
}

// ============================================================================
// Boundary Search Tests
// ============================================================================

/// Test the boundary in the middle of the array.
#[test]
fn test_boundary_middle() {
    let signs = [false, false, true, true, true];

    let start = negative_run_start(signs.len(), |i| signs[i]);

    assert_eq!(start, 2);
}

/// Test the all-negative and all-non-negative edges.
#[test]
fn test_boundary_edges() {
    assert_eq!(negative_run_start(4, |_| true), 0, "All negative");
    assert_eq!(negative_run_start(4, |_| false), 4, "No negatives");
    assert_eq!(negative_run_start(0, |_| false), 0, "Empty input");
}

/// Test the boundary at the last position.
#[test]
fn test_boundary_last() {
    let signs = [false, false, false, true];

    let start = negative_run_start(signs.len(), |i| signs[i]);

    assert_eq!(start, 3);
}

/// Test the sign-bit mask against a signed key.
#[test]
fn test_sign_bit_mask() {
    use radixsort::prelude::RadixKey;

    assert_ne!((-7i32).byte_at(0) & SIGN_BIT, 0);
    assert_eq!(7i32.byte_at(0) & SIGN_BIT, 0);
}

// ============================================================================
// Permutation Application Tests
// ============================================================================

/// Test applying a known permutation with swap bookkeeping.
#[test]
fn test_apply_view_cycle() {
    let mut data = vec!["b", "c", "a"];
    let mut view = vec![2usize, 0, 1];
    let mut inverse = vec![0usize; 3];

    apply_view(&mut data, &mut view, &mut inverse);

    assert_eq!(data, vec!["a", "b", "c"]);
}

/// Test the identity permutation.
#[test]
fn test_apply_view_identity() {
    let mut data = vec![10u8, 20, 30];
    let mut view = vec![0usize, 1, 2];
    let mut inverse = vec![0usize; 3];

    apply_view(&mut data, &mut view, &mut inverse);

    assert_eq!(data, vec![10, 20, 30]);
}

/// Test a permutation made of disjoint swaps.
#[test]
fn test_apply_view_swaps() {
    let mut data = vec![1u8, 0, 3, 2];
    let mut view = vec![1usize, 0, 3, 2];
    let mut inverse = vec![0usize; 4];

    apply_view(&mut data, &mut view, &mut inverse);

    assert_eq!(data, vec![0, 1, 2, 3]);
}

// ============================================================================
// Growth Policy Tests
// ============================================================================

/// Test the doubling rule.
#[test]
fn test_growth_doubles_when_sufficient() {
    assert_eq!(grown_capacity(16, 20), 32, "Double when doubling covers");
    assert_eq!(grown_capacity(16, 100), 100, "Exact when doubling falls short");
    assert_eq!(grown_capacity(0, 10), 10, "First allocation is exact");
}

/// Test the doubling ceiling.
#[test]
fn test_growth_ceiling() {
    let huge = GROWTH_CEILING;

    assert_eq!(
        grown_capacity(huge, huge + 1),
        huge + 1,
        "No doubling above the ceiling"
    );
}

/// Test buffer lengths after capacity assurance.
#[test]
fn test_buffers_resize_to_count() {
    let mut buffers: SortBuffers<u32> = SortBuffers::new();
    assert!(!buffers.is_allocated());

    buffers.ensure_view_capacity(8).unwrap();
    let (forward, reverse) = buffers.view_pair();
    assert_eq!(forward.len(), 8);
    assert_eq!(reverse.len(), 8);

    buffers.ensure_view_capacity(3).unwrap();
    let (forward, reverse) = buffers.view_pair();
    assert_eq!(forward.len(), 3, "Length tracks the request exactly");
    assert_eq!(reverse.len(), 3);
    assert!(buffers.index_capacity() >= 8, "Capacity is retained");

    buffers.release();
    assert!(!buffers.is_allocated());
}
