use std::fmt::Display;

/// The alignment gap symbol. Positions holding it in either sequence are
/// excluded from every distance.
pub const GAP: u8 = b'-';

/// Counts of each kind of site between two aligned sequences, over the
/// overlapping length of the pair.
///
/// A site tally is built once with [`tally_sites`] and can then be turned into
/// any of the supported distances with
/// [`DistanceFromTally`](super::dna::DistanceFromTally).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiteTally {
    /// Number of positions compared, `min(len(reference), len(distant))`.
    pub overlap:       usize,
    /// Positions where either sequence holds a gap.
    pub gaps:          usize,
    /// Non-gap mismatches in the transition set, see [`is_transition`].
    pub transitions:   usize,
    /// All other non-gap mismatches.
    pub transversions: usize,
}

impl SiteTally {
    /// Total number of non-gap mismatches.
    #[inline]
    #[must_use]
    pub fn mismatches(&self) -> usize {
        self.transitions + self.transversions
    }

    /// Positions where neither sequence holds a gap. This is the denominator
    /// of every proportion.
    #[inline]
    #[must_use]
    pub fn comparable_sites(&self) -> usize {
        self.overlap - self.gaps
    }

    /// Number of comparable sites where both sequences agree.
    #[inline]
    #[must_use]
    pub fn identities(&self) -> usize {
        self.comparable_sites() - self.mismatches()
    }
}

impl Display for SiteTally {
    /// Tab-separated `overlap`, `gaps`, `transitions`, and `transversions`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buff = itoa::Buffer::new();
        f.write_str(buff.format(self.overlap))?;
        f.write_str("\t")?;
        f.write_str(buff.format(self.gaps))?;
        f.write_str("\t")?;
        f.write_str(buff.format(self.transitions))?;
        f.write_str("\t")?;
        f.write_str(buff.format(self.transversions))
    }
}

/// Whether substituting `reference` with `distant` is a transition.
///
/// Exactly four ordered pairs qualify: `(A, G)`, `(G, A)`, `(T, C)`, and
/// `(C, T)`. Matching is byte-exact, so lowercase bases, `U`, and ambiguity
/// codes are never transitions.
///
/// ```
/// # use evodist::distance::tally::is_transition;
/// assert!(is_transition(b'A', b'G'));
/// assert!(is_transition(b'C', b'T'));
/// assert!(!is_transition(b'A', b'T'));
/// assert!(!is_transition(b'a', b'g'));
/// ```
#[inline]
#[must_use]
pub const fn is_transition(reference: u8, distant: u8) -> bool {
    matches!((reference, distant), (b'A', b'G') | (b'G', b'A') | (b'T', b'C') | (b'C', b'T'))
}

/// ## Tallies gaps, transitions, and transversions between two aligned sequences.
///
/// Only the first `min(len(reference), len(distant))` positions are visited;
/// trailing symbols of the longer sequence are ignored. A position is a gap if
/// either symbol is [`GAP`]. Otherwise, if the symbols differ, it is a
/// transition when [`is_transition`] holds and a transversion in every other
/// case.
///
/// ### Example
/// ```
/// # use evodist::distance::tally::{tally_sites, SiteTally};
/// let tally = tally_sites(b"ATGCA-T", b"GTGG-CTAAA");
/// assert_eq!(
///     tally,
///     SiteTally {
///         overlap:       7,
///         gaps:          2,
///         transitions:   1,
///         transversions: 1,
///     }
/// );
/// ```
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
#[must_use]
pub fn tally_sites(reference: &[u8], distant: &[u8]) -> SiteTally {
    let mut tally = SiteTally {
        overlap: reference.len().min(distant.len()),
        ..SiteTally::default()
    };

    for (&r, &d) in std::iter::zip(reference, distant) {
        if r == GAP || d == GAP {
            tally.gaps += 1;
        } else if r != d {
            if is_transition(r, d) {
                tally.transitions += 1;
            } else {
                tally.transversions += 1;
            }
        }
    }

    tally
}
