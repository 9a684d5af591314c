#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]
#![cfg_attr(all(test, feature = "bench"), feature(test))]

/// Data types shared across the crate, such as errors.
pub mod data;
/// Distance functions for aligned nucleotide sequences.
pub mod distance;

/// Generate random and mutated sequences.
#[cfg(feature = "rand")]
pub mod generate;
/// Floating point comparison used by the assertion macros.
#[doc(hidden)]
pub mod math;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::err::{DistanceError, OrFail};
    pub use crate::distance::dna::{
        AlignedPair, CorrectedDistance, DistanceFromTally, DistanceModel, jukes_cantor, kimura_two_parameter,
    };
    pub use crate::distance::tally::{SiteTally, tally_sites};
    pub use crate::distance::{hamming, p_distance};
    #[cfg(feature = "rand")]
    pub use crate::generate::{mutate_sequence, rand_sequence};
}
