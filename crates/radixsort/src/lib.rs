//! # radixsort — generic byte-radix sorting for Rust
//!
//! A reusable LSD (least-significant-digit) radix sort engine, generic over
//! the key type. Given a slice of elements, it produces either the slice
//! sorted ascending in place, or an index permutation ("view") describing the
//! sorted order without touching the input.
//!
//! Keys are presented to the engine as logical byte sequences through the
//! [`RadixKey`](prelude::RadixKey) strategy trait; built-in strategies cover all fixed-width
//! integers, IEEE floats, byte strings, and keyed key/payload pairs. The
//! engine runs one stable counting-sort pass per key byte, corrects the
//! ordering of negative two's-complement and IEEE-754 values afterwards, and
//! reuses its scratch buffers across calls on request.
//!
//! ## Quick Start
//!
//! ```rust
//! use radixsort::prelude::*;
//!
//! let mut data = vec![-5i64, 3, -1, 0, -100];
//!
//! let mut sorter = Sorter::new();
//! sorter.sort(&mut data, false)?;
//!
//! assert_eq!(data, vec![-100, -5, -1, 0, 3]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Index views
//!
//! A view leaves the input untouched and returns the permutation instead:
//!
//! ```rust
//! use radixsort::prelude::*;
//!
//! let cities = vec!["Lyon", "Ankara", "Quito"];
//!
//! let mut sorter = Sorter::new();
//! let order = sorter.view(&cities, false)?;
//!
//! assert_eq!(order, vec![1, 0, 2]);
//! assert_eq!(cities[order[0]], "Ankara");
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Reusing scratch buffers
//!
//! Passing `keep_buffers = true` retains the engine's scratch space after the
//! call, amortizing allocation over repeated sorts of similar size:
//!
//! ```rust
//! use radixsort::prelude::*;
//!
//! let mut sorter = Sorter::new();
//! sorter.preallocate(1024)?;
//!
//! for _ in 0..8 {
//!     let mut batch: Vec<u32> = (0..1024).rev().collect();
//!     sorter.sort_copy(&mut batch, true)?;
//!     assert!(batch.windows(2).all(|w| w[0] <= w[1]));
//! }
//! sorter.release_buffers();
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Sorting payloads by key
//!
//! [`Keyed`](prelude::Keyed) pairs an explicit sort key with an opaque payload; equal keys
//! keep their original relative order:
//!
//! ```rust
//! use radixsort::prelude::*;
//!
//! let mut records = vec![
//!     Keyed::new(30u8, "thirty"),
//!     Keyed::new(10u8, "first ten"),
//!     Keyed::new(10u8, "second ten"),
//! ];
//!
//! radixsort::prelude::sort(&mut records)?;
//!
//! assert_eq!(records[0].payload, "first ten");
//! assert_eq!(records[1].payload, "second ten");
//! assert_eq!(records[2].payload, "thirty");
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Ordering guarantees
//!
//! * Integers sort by numeric value, negatives first.
//! * Floats sort in `total_cmp` order: `-NaN` values first, `-0.0` before
//!   `+0.0`, `+NaN` values last.
//! * Byte strings sort lexicographically; a string that is a strict prefix of
//!   another sorts before it.
//! * Every pass is stable, so equal keys preserve their input order.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors and scratch-buffer management.
mod primitives;

// Layer 2: Key strategies - byte extraction per key type.
mod key;

// Layer 3: Engine - counting passes, sign correction, execution.
mod engine;

// High-level public surface.
mod api;

// Standard radixsort prelude.
pub mod prelude {
    pub use crate::api::{
        sort, sort_copy, view, view_as, Keyed, RadixKey, SignEncoding, SortError, Sorter,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod key {
        pub use crate::key::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
