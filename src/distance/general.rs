use crate::{
    data::err::DistanceError,
    distance::{dna::DistanceFromTally, tally::tally_sites},
};

#[must_use]
/// Calculates the number of differences at the byte (or base) level over the
/// overlapping length of the two sequences. Gaps are treated as ordinary
/// symbols here.
///
/// # Example
/// ```
/// use evodist::distance::hamming;
///
/// let s1 = b"ATGCATCGATCGATCGATCGATCGATCGATGC";
/// let s2 = b"ATGCATnGATCGATCGATCGAnCGATCGATnC";
///
/// assert!(3 == hamming(s1, s2));
/// ```
pub fn hamming(x: &[u8], y: &[u8]) -> usize {
    x.iter().zip(y).filter(|(a, b)| a != b).count()
}

/// The uncorrected p-distance: the proportion of comparable (non-gap) sites at
/// which the two sequences differ.
///
/// # Errors
///
/// Returns [`DistanceError::NoComparableSites`] if no overlapping position is
/// free of gaps.
///
/// # Example
/// ```
/// use evodist::distance::p_distance;
///
/// assert_eq!(p_distance(b"AC-GT", b"ACAGA"), Ok(0.25));
/// ```
pub fn p_distance(reference: &[u8], distant: &[u8]) -> Result<f64, DistanceError> {
    tally_sites(reference, distant).p_distance()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hamming_counts_gaps_as_symbols() {
        assert_eq!(hamming(b"AC-T", b"ACGT"), 1);
        assert_eq!(hamming(b"AC-T", b"AC-T"), 0);
    }

    #[test]
    fn hamming_truncates() {
        assert_eq!(hamming(b"ACGTTTTT", b"ACGA"), 1);
        assert_eq!(hamming(b"", b"ACGA"), 0);
    }

    #[test]
    fn p_distance_excludes_gaps() {
        assert_eq!(p_distance(b"ACGT", b"ACGT"), Ok(0.0));
        assert_eq!(p_distance(b"A-GT", b"ACGA"), Ok(1.0 / 3.0));
        assert_eq!(p_distance(b"--", b"AC"), Err(DistanceError::NoComparableSites));
    }
}
