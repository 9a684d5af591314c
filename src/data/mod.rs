//! ## Data types shared by the distance functions.
//!
//! Sequences are plain byte slices throughout *evodist*: any `&[u8]`, `&str`,
//! `String`, or `Vec<u8>` can be passed wherever a sequence is expected. The
//! only symbol given special meaning is the gap, `-`. Other symbols are
//! compared byte-for-byte without validation or case folding.

/// Error types and exit-code helpers.
pub mod err;

/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// implementations for aligned sequence pairs.
#[cfg(feature = "fuzzing")]
pub mod arbitrary;
