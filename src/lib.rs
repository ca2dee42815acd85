//! # Broadword bit primitives for bitset engines
//!
//! Bitwords provides the word-level inner-loop primitives that bitset and
//! inverted-index structures call millions of times: power-of-two tests and
//! rounding, trailing-zero-bit counting, and popcount reductions over
//! windows of two word arrays.
//!
//! ## Design policy
//!
//! - **Stay pure:**
//!   Every function is a stateless pure function of its arguments. Nothing
//!   here allocates, mutates its inputs, or blocks, so all operations are
//!   safe to call concurrently on shared slices.
//!
//! - **Operate on bit patterns:**
//!   Words are `u64` bit patterns. Callers holding signed words reinterpret
//!   the bits (`as u64`) rather than converting the magnitude, which keeps
//!   semantics identical for values with the high bit set.
//!
//! - **Trust the caller's window:**
//!   The windowed reductions read exactly `[start, start + count)` and
//!   validate nothing beyond the slice bounds check. A zero-length window is
//!   always valid and yields 0 for any `start`; an out-of-range window
//!   panics.
//!
//! ## Modules
//!
//! - [`broadword`]: single-word popcount and the trailing-zero family.
//! - [`utils`]: width-generic power-of-two helpers.
//! - [`windowed`]: popcount reductions over sliced windows of word arrays.
#![deny(missing_docs)]

pub mod broadword;
pub mod utils;
pub mod windowed;

pub use windowed::{pop_andnot, pop_array, pop_intersect, pop_union, pop_xor};
