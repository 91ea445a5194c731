//! Tests for index-view output modes.
//!
//! These tests verify the view operations:
//! - The emitted permutation is a bijection and the input is untouched
//! - Gathering through the view equals sorting in place
//! - Narrowed index widths convert exactly or fail fast
//!
//! ## Test Organization
//!
//! 1. **Basic Views** - permutation contents, input immutability
//! 2. **Gather Equivalence** - view-applied order vs in-place sort
//! 3. **Correction on Views** - signed and float keys
//! 4. **Narrowed Views** - successful narrowing and width failures
//! 5. **Edge Cases** - empty and single-element inputs

use radixsort::prelude::*;

/// Gather `data` through `view` into a new vector.
fn gather<T: Clone>(data: &[T], view: &[usize]) -> Vec<T> {
    view.iter().map(|&index| data[index].clone()).collect()
}

// ============================================================================
// Basic View Tests
// ============================================================================

/// Test the permutation for a small input.
#[test]
fn test_view_basic() {
    let data = vec![30u8, 10, 20];

    let view = Sorter::new().view(&data, false).unwrap();

    assert_eq!(view, vec![1, 2, 0], "View maps output position to source");
    assert_eq!(data, vec![30, 10, 20], "Input is untouched");
}

/// Test that the view is a bijection over the input positions.
#[test]
fn test_view_is_bijection() {
    let data: Vec<u32> = (0..97).map(|i| i * 31 % 97).collect();

    let mut view = Sorter::new().view(&data, false).unwrap();

    view.sort_unstable();
    let identity: Vec<usize> = (0..97).collect();
    assert_eq!(view, identity, "Every position appears exactly once");
}

/// Test that equal keys appear in the view in input order.
#[test]
fn test_view_stability() {
    let data = vec![2u8, 1, 2, 1];

    let view = Sorter::new().view(&data, false).unwrap();

    assert_eq!(view, vec![1, 3, 0, 2]);
}

// ============================================================================
// Gather Equivalence Tests
// ============================================================================

/// Test that gathering through the view equals the in-place sort.
#[test]
fn test_gather_matches_sort() {
    let data = vec![-40i64, 7, -2, 900, 0, -40];

    let view = Sorter::new().view(&data, false).unwrap();
    let mut sorted = data.clone();
    Sorter::new().sort(&mut sorted, false).unwrap();

    assert_eq!(gather(&data, &view), sorted);
}

/// Test gather equivalence for strings.
#[test]
fn test_gather_matches_sort_strings() {
    let data = vec![
        "melon".to_string(),
        "kiwi".to_string(),
        "melonade".to_string(),
        "".to_string(),
    ];

    let view = Sorter::new().view(&data, false).unwrap();
    let mut sorted = data.clone();
    Sorter::new().sort(&mut sorted, false).unwrap();

    assert_eq!(gather(&data, &view), sorted);
}

// ============================================================================
// Correction on View Tests
// ============================================================================

/// Test that the negative correction applies to the view path.
#[test]
fn test_view_signed_correction() {
    let data = vec![-5i64, 3, -1, 0, -100];

    let view = Sorter::new().view(&data, false).unwrap();

    assert_eq!(gather(&data, &view), vec![-100, -5, -1, 0, 3]);
}

/// Test that the float reversal applies to the view path.
#[test]
fn test_view_float_correction() {
    let data = vec![-1.5f32, 2.0, -0.5, -10.0];

    let view = Sorter::new().view(&data, false).unwrap();

    assert_eq!(gather(&data, &view), vec![-10.0, -1.5, -0.5, 2.0]);
}

// ============================================================================
// Narrowed View Tests
// ============================================================================

/// Test narrowing to a width that fits.
#[test]
fn test_view_as_narrow_fits() {
    let data = vec![9u16, 3, 7, 1];

    let wide = Sorter::new().view(&data, false).unwrap();
    let narrow: Vec<u8> = Sorter::new().view_as(&data, false).unwrap();

    let widened: Vec<usize> = narrow.iter().map(|&i| i as usize).collect();
    assert_eq!(widened, wide, "Narrowed view matches the native view");
}

/// Test narrowing to a signed index type.
#[test]
fn test_view_as_signed_index() {
    let data = vec![5u8, 4, 3, 2, 1];

    let narrow: Vec<i16> = Sorter::new().view_as(&data, false).unwrap();

    assert_eq!(narrow, vec![4, 3, 2, 1, 0]);
}

/// Test the width-overflow failure.
///
/// An 8-bit index cannot address 1000 positions; the call must fail, not
/// wrap.
#[test]
fn test_view_as_width_overflow() {
    let data: Vec<u32> = (0..1000).collect();

    let result: Result<Vec<u8>, SortError> = Sorter::new().view_as(&data, false);

    match result {
        Err(SortError::ViewIndexOverflow { count, .. }) => {
            assert_eq!(count, 1000);
        }
        other => panic!("Expected ViewIndexOverflow, got {other:?}"),
    }
}

/// Test that a signed type's positive range bounds the check.
#[test]
fn test_view_as_signed_overflow() {
    let data: Vec<u32> = (0..200).collect();

    let result: Result<Vec<i8>, SortError> = Sorter::new().view_as(&data, false);

    assert!(result.is_err(), "i8 cannot represent position 199");
}

/// Test the exact boundary of a narrow width.
#[test]
fn test_view_as_width_boundary() {
    let at_limit: Vec<u16> = (0..256).collect();
    let over_limit: Vec<u16> = (0..257).collect();

    let ok: Result<Vec<u8>, SortError> = Sorter::new().view_as(&at_limit, false);
    let err: Result<Vec<u8>, SortError> = Sorter::new().view_as(&over_limit, false);

    assert!(ok.is_ok(), "Position 255 fits in u8");
    assert!(err.is_err(), "Position 256 does not fit in u8");
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test the empty view.
#[test]
fn test_view_empty() {
    let data: Vec<u64> = vec![];

    let view = Sorter::new().view(&data, false).unwrap();

    assert!(view.is_empty());
}

/// Test the single-element view.
#[test]
fn test_view_single() {
    let data = vec![42u8];

    let view = Sorter::new().view(&data, false).unwrap();
    let narrow: Vec<u8> = Sorter::new().view_as(&data, false).unwrap();

    assert_eq!(view, vec![0]);
    assert_eq!(narrow, vec![0]);
}
