/// Nucleotide substitution models for calculating evolutionary distances
/// between two aligned DNA sequences.
///
/// ## Assumptions:
///
/// * __Alignment:__ both sequences must already be aligned. No alignment is
///   performed here.
/// * __Pairwise deletion:__ if a gap (`-`) is present at a position in either
///   sequence, that position is excluded from both the numerator and the
///   denominator of every proportion.
/// * __Unequal sequence lengths:__ if sequences are of different lengths,
///   symbols in the longer sequence that extend beyond the length of the
///   shorter sequence are disregarded. Use
///   [`AlignedPair::new_equal_length`](dna::AlignedPair::new_equal_length) to
///   reject such input instead.
/// * __No alphabet validation:__ symbols are compared byte-for-byte. Lowercase
///   bases, `U`, and ambiguity codes such as `N` are not folded or skipped, so
///   they count as mismatches against anything other than the identical byte,
///   and as transversions in the Kimura model.
///
/// ## Example:
/// ```
/// # use evodist::distance::dna::{jukes_cantor, kimura_two_parameter};
/// let reference: &[u8] = b"ATGC";
/// let distant: &[u8] = b"ATGG";
///
/// let jc69 = jukes_cantor(reference, distant).unwrap();
/// let k2p = kimura_two_parameter(reference, distant).unwrap();
/// assert!(jc69 > 0.30 && jc69 < 0.31);
/// assert!(k2p > 0.31 && k2p < 0.32);
/// ```
pub mod dna;
/// Per-position classification of an aligned pair into gaps, transitions, and
/// transversions.
pub mod tally;

/// Uncorrected distance functions.
mod general;

pub use general::*;
