//! Radix key strategies for intrinsic numeric types.
//!
//! ## Purpose
//!
//! This module implements [`RadixKey`] for all fixed-width integers and for
//! IEEE single and double floats. Numeric keys have a constant significant
//! length equal to their byte width, and every element of a slice shares it,
//! so a sort always runs exactly `size_of` passes.
//!
//! ## Design notes
//!
//! * **Shift, not memory**: Bytes come from arithmetic shifts on the value
//!   (or its `to_bits` image for floats), never from inspecting raw memory.
//!   The logical byte at position 0 is the most significant regardless of the
//!   machine's endianness, so no layout detection is required.
//! * **Signed = unsigned bits**: Signed integers extract through their
//!   unsigned reinterpretation; only the [`SignEncoding`] differs. The engine
//!   repairs the negative block afterwards.
//!
//! ## Key concepts
//!
//! * **Float total order**: After correction, floats sort exactly in
//!   `total_cmp` order: negative NaNs first, `-0.0` before `+0.0`, positive
//!   NaNs last.

// Internal dependencies
use crate::key::extract::{RadixKey, SignEncoding};

// ============================================================================
// Unsigned Integers
// ============================================================================

macro_rules! unsigned_radix_key {
    ($($ty:ty),* $(,)?) => {$(
        impl RadixKey for $ty {
            const ENCODING: SignEncoding = SignEncoding::Unsigned;

            #[inline]
            fn byte_at(&self, position: usize) -> u8 {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                if position >= WIDTH {
                    return 0;
                }
                (*self >> ((WIDTH - position - 1) * 8)) as u8
            }

            #[inline]
            fn significant_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }
    )*};
}

unsigned_radix_key!(u8, u16, u32, u64, u128, usize);

// ============================================================================
// Signed Integers
// ============================================================================

macro_rules! signed_radix_key {
    ($(($ty:ty, $unsigned:ty)),* $(,)?) => {$(
        impl RadixKey for $ty {
            const ENCODING: SignEncoding = SignEncoding::TwosComplement;

            #[inline]
            fn byte_at(&self, position: usize) -> u8 {
                (*self as $unsigned).byte_at(position)
            }

            #[inline]
            fn significant_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }
    )*};
}

signed_radix_key!(
    (i8, u8),
    (i16, u16),
    (i32, u32),
    (i64, u64),
    (i128, u128),
    (isize, usize),
);

// ============================================================================
// IEEE Floats
// ============================================================================

macro_rules! float_radix_key {
    ($($ty:ty),* $(,)?) => {$(
        impl RadixKey for $ty {
            const ENCODING: SignEncoding = SignEncoding::FloatingPoint;

            #[inline]
            fn byte_at(&self, position: usize) -> u8 {
                self.to_bits().byte_at(position)
            }

            #[inline]
            fn significant_len(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }
    )*};
}

float_radix_key!(f32, f64);
