//! Layer 2: Key strategies
//!
//! # Purpose
//!
//! This layer defines how elements present their sort keys to the engine as
//! logical byte sequences: the [`extract::RadixKey`] strategy trait, the
//! sign-correction policy attached to it, and the built-in strategies for
//! intrinsic numeric types, byte strings, and keyed pairs.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Key strategies ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The byte-extraction strategy trait and sign-encoding policy.
pub mod extract;

/// Strategies for fixed-width integers and IEEE floats.
pub mod numeric;

/// Strategies for byte strings and UTF-8 strings.
pub mod string;

/// Key/payload pairs for stable indirect sorting.
pub mod keyed;
