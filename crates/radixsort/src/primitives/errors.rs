//! Error types for radix sort operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a sort or view operation can
//! report: a narrowed index type too small for the input, and scratch-buffer
//! allocation failure.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (element
//!   count, requested capacity, target type name).
//! * **No-std**: The type is `core`-only; `std::error::Error` is implemented
//!   when the `std` feature is enabled.
//! * **Fail-fast**: Both conditions are detected before any output is
//!   produced; on failure the output is unspecified and no partial result is
//!   returned.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation itself.
//! * Internal invariant violations (byte-strategy contract breaches) are
//!   debug assertions, not recoverable errors.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for radix sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested view index type cannot represent every input position.
    ViewIndexOverflow {
        /// Number of elements in the input; positions run up to `count - 1`.
        count: usize,
        /// Name of the index type that was requested.
        target: &'static str,
    },

    /// Growing a scratch or output buffer failed.
    AllocationFailed {
        /// Capacity, in elements, that could not be allocated.
        requested: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ViewIndexOverflow { count, target } => {
                write!(
                    f,
                    "Index type {target} cannot represent positions of {count} elements"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "Failed to allocate buffer space for {requested} elements")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
