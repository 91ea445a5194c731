//! Byte-extraction strategy for sort keys.
//!
//! ## Purpose
//!
//! This module defines [`RadixKey`], the capability an element type must
//! provide to be radix-sortable: report its number of significant key bytes,
//! and return the byte at any position, most-significant first. It also
//! defines [`SignEncoding`], the policy describing what post-pass correction
//! the key's sign representation requires.
//!
//! ## Key concepts
//!
//! * **Logical byte order**: Position 0 is the most significant byte. The
//!   engine iterates positions from least to most significant, one counting
//!   pass each.
//! * **Zero padding**: Querying a position at or beyond
//!   [`RadixKey::significant_len`] must return 0, so shorter keys behave as
//!   if right-padded with zero bytes. Zero sorts lowest, which is what makes
//!   a string sort before every string it is a strict prefix of.
//!
//! ## Invariants
//!
//! * `byte_at` and `significant_len` are pure: repeated calls on the same
//!   element return the same values for the duration of a sort.
//! * `byte_at(p) == 0` for every `p >= significant_len()`.

// ============================================================================
// Sign Encoding
// ============================================================================

/// How a key type encodes its sign, and therefore which correction the
/// engine must apply after the byte passes.
///
/// Raw byte-wise ascending order treats the sign bit as just another high
/// bit, so keys with the sign bit set end up in a contiguous block after all
/// non-negative keys. The encoding selects how that block is repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignEncoding {
    /// No sign bit; byte order is already ascending order.
    #[default]
    Unsigned,

    /// Two's-complement integers: the negative block moves to the front and
    /// is already internally ascending.
    TwosComplement,

    /// IEEE-754 sign-magnitude values: the negative block moves to the front
    /// and must additionally be reversed, because negative float bit
    /// patterns grow as the true value decreases.
    FloatingPoint,
}

impl SignEncoding {
    /// Whether keys of this encoding can carry a sign bit at all.
    pub fn needs_correction(self) -> bool {
        !matches!(self, Self::Unsigned)
    }

    /// Whether the negative block's internal order must be reversed.
    pub fn reverses_negatives(self) -> bool {
        matches!(self, Self::FloatingPoint)
    }
}

// ============================================================================
// RadixKey Strategy Trait
// ============================================================================

/// Capability of a type to act as a radix sort key.
///
/// Implementations decide how an element maps to a logical sequence of key
/// bytes. The engine only ever reads elements through this trait.
pub trait RadixKey {
    /// Sign-correction policy for this key type.
    ///
    /// Defaults to [`SignEncoding::Unsigned`]; numeric implementations
    /// override it. The engine instance can override it again for wrapper
    /// types whose strategies cannot express signedness.
    const ENCODING: SignEncoding = SignEncoding::Unsigned;

    /// The key byte at `position`, where position 0 is the most significant.
    ///
    /// Must return 0 for positions at or beyond [`significant_len`].
    ///
    /// [`significant_len`]: RadixKey::significant_len
    fn byte_at(&self, position: usize) -> u8;

    /// Number of significant key bytes this element carries.
    fn significant_len(&self) -> usize;
}

// Elements behind a reference sort like the referent, so slices of `&str` or
// `&[u8]` work directly.
impl<'a, K: RadixKey + ?Sized> RadixKey for &'a K {
    const ENCODING: SignEncoding = K::ENCODING;

    #[inline]
    fn byte_at(&self, position: usize) -> u8 {
        (**self).byte_at(position)
    }

    #[inline]
    fn significant_len(&self) -> usize {
        (**self).significant_len()
    }
}
