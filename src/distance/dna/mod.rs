#![allow(clippy::doc_markdown)]
use crate::{
    data::err::DistanceError,
    distance::tally::{SiteTally, tally_sites},
};
use std::{fmt::Display, str::FromStr};

/// The distance models supported by *evodist*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceModel {
    /// The uncorrected proportion of differing sites.
    P,
    /// Jukes-Cantor (1969).
    Jc69,
    /// Kimura two-parameter (1980).
    K2p,
}

impl DistanceModel {
    /// All models, in the order they are usually reported.
    pub const ALL: [DistanceModel; 3] = [DistanceModel::P, DistanceModel::Jc69, DistanceModel::K2p];

    /// Computes this model's distance between two aligned sequences.
    ///
    /// # Errors
    ///
    /// See [`jukes_cantor`] and [`kimura_two_parameter`].
    pub fn distance(self, reference: &[u8], distant: &[u8]) -> Result<f64, DistanceError> {
        let tally = tally_sites(reference, distant);
        log::trace!("{self} site tally: {tally:?}");

        let distance = tally.distance(self);
        if let Err(e) = &distance {
            log::debug!("{self} distance undefined for tally {tally:?}: {e}");
        }
        distance
    }
}

impl Display for DistanceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DistanceModel::P => "p",
            DistanceModel::Jc69 => "JC69",
            DistanceModel::K2p => "K2P",
        };
        f.write_str(name)
    }
}

/// The error returned when a string does not name a [`DistanceModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModelError(String);

impl Display for ParseModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown distance model '{}'; expected one of p, jc69, k2p", self.0)
    }
}

impl std::error::Error for ParseModelError {}

impl FromStr for DistanceModel {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p" | "p-distance" => Ok(DistanceModel::P),
            "jc" | "jc69" | "jukes-cantor" => Ok(DistanceModel::Jc69),
            "k2p" | "k80" | "kimura" => Ok(DistanceModel::K2p),
            _ => Err(ParseModelError(s.to_string())),
        }
    }
}

/// Provides method syntax for the distance functions on anything that can be
/// viewed as a byte slice.
///
/// # Example
/// ```
/// # use evodist::distance::dna::CorrectedDistance;
/// let s1 = "ATGCATCGATCGATCGATCG";
/// let s2 = "ATGCATCGATCGATCGATCA";
///
/// assert_eq!(s1.distance_p(s2), Ok(0.05));
/// assert!(s1.distance_jc69(s2).unwrap() > 0.05);
/// assert!(s1.distance_k2p(s2).unwrap() > 0.05);
/// ```
pub trait CorrectedDistance: AsRef<[u8]> {
    /// Tallies sites between [`self`] and another sequence. See
    /// [`tally_sites`] for more details.
    #[inline]
    #[must_use]
    fn site_tally<T: AsRef<[u8]> + ?Sized>(&self, other_sequence: &T) -> SiteTally {
        tally_sites(self.as_ref(), other_sequence.as_ref())
    }

    /// Computes the p-distance between [`self`] and another sequence. See
    /// [`p_distance`](crate::distance::p_distance) for more details.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites.
    #[inline]
    fn distance_p<T: AsRef<[u8]> + ?Sized>(&self, other_sequence: &T) -> Result<f64, DistanceError> {
        DistanceModel::P.distance(self.as_ref(), other_sequence.as_ref())
    }

    /// Computes the JC69 distance between [`self`] and another sequence. See
    /// [`jukes_cantor`] for more details.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    #[inline]
    fn distance_jc69<T: AsRef<[u8]> + ?Sized>(&self, other_sequence: &T) -> Result<f64, DistanceError> {
        jukes_cantor(self.as_ref(), other_sequence.as_ref())
    }

    /// Computes the K2P distance between [`self`] and another sequence. See
    /// [`kimura_two_parameter`] for more details.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    #[inline]
    fn distance_k2p<T: AsRef<[u8]> + ?Sized>(&self, other_sequence: &T) -> Result<f64, DistanceError> {
        kimura_two_parameter(self.as_ref(), other_sequence.as_ref())
    }
}

impl<T: AsRef<[u8]> + ?Sized> CorrectedDistance for T {}

/// ## Jukes-Cantor (JC-69) nucleotide substitution model.
///
/// This model estimates the number of substitutions per site between two
/// sequences under the assumption of equal base frequencies and equal
/// substitution rates among all possible nucleotide changes.
///
/// See [Assumptions](super::dna)
///
/// The formula used is:
///
/// $$ d = - \frac{3}{4} \ln \left(1 - \frac{4}{3} p \right) $$
///
/// where $d$ is the JC-69 evolutionary distance and $p$ is the proportion of
/// differing sites among the sites where neither sequence has a gap.
///
/// # Errors
///
/// - [`DistanceError::NoComparableSites`] if every overlapping position has a
///   gap, or the sequences do not overlap.
/// - [`DistanceError::Saturated`] if $p \geq 0.75$.
///
/// # Example
/// ```
/// # use evodist::distance::dna::jukes_cantor;
/// let d = jukes_cantor(b"ATGC", b"ATGG").unwrap();
/// assert!((d - 0.304_099).abs() < 1e-6);
/// ```
///
/// ### Citations
///
/// - Jukes, T., and Cantor, C. (1969). "Evolution of Protein Molecules."
///   Mammalian Protein Metabolism, New York: Academic Press, III(3), 21–132.
#[inline]
pub fn jukes_cantor(reference: &[u8], distant: &[u8]) -> Result<f64, DistanceError> {
    DistanceModel::Jc69.distance(reference, distant)
}

/// ## Kimura 2-Parameter (K-80) nucleotide substitution model.
///
/// This model accounts for different rates of **transitions** and
/// **transversions** between sequences. A mismatch is a transition only for
/// the ordered pairs listed in
/// [`is_transition`](crate::distance::tally::is_transition); every other
/// non-gap mismatch is a transversion.
///
/// See [Assumptions](super::dna)
///
/// The formula used is:
///
/// $$ d = -\frac{1}{2} \ln\left[\left(1 - 2p - q\right) \sqrt{1 - 2q}\right] $$
///
/// where $d$ is the evolutionary distance, $p$ is the proportion of
/// transitions, and $q$ is the proportion of transversions, both relative to
/// the sites where neither sequence has a gap.
///
/// # Errors
///
/// - [`DistanceError::NoComparableSites`] if every overlapping position has a
///   gap, or the sequences do not overlap.
/// - [`DistanceError::Saturated`] if $1 - 2p - q \leq 0$ or $1 - 2q \leq 0$.
///
/// # Example
/// ```
/// # use evodist::distance::dna::kimura_two_parameter;
/// let d = kimura_two_parameter(b"ATGC", b"ATGG").unwrap();
/// assert!((d - 0.317_128).abs() < 1e-6);
/// ```
///
/// ### Citations
///
/// - Kimura, M. (1980). "A simple method for estimating evolutionary rates of
///   base substitutions through comparative studies of nucleotide sequences."
///   Journal of Molecular Evolution. 16, 111-120.
#[inline]
pub fn kimura_two_parameter(reference: &[u8], distant: &[u8]) -> Result<f64, DistanceError> {
    DistanceModel::K2p.distance(reference, distant)
}

/// A trait for calculating evolutionary distances from the same
/// [`SiteTally`], so several models can share one pass over the sequences.
///
/// ```
/// # use evodist::distance::{dna::DistanceFromTally, tally::tally_sites};
/// let tally = tally_sites(b"ACGTACGTAC", b"ACGTACGTAT");
/// let (jc69, k2p) = (tally.jc69_distance(), tally.k2p_distance());
/// assert!(jc69.unwrap() < k2p.unwrap());
/// ```
pub trait DistanceFromTally {
    /// The uncorrected proportion of differing comparable sites.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites.
    fn p_distance(&self) -> Result<f64, DistanceError>;

    /// Computes the JC69 distance. See [`jukes_cantor`] for more details.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    fn jc69_distance(&self) -> Result<f64, DistanceError>;

    /// Computes the K2P distance. See [`kimura_two_parameter`] for more
    /// details.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    fn k2p_distance(&self) -> Result<f64, DistanceError>;

    /// Computes the distance for the given `model`.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    fn distance(&self, model: DistanceModel) -> Result<f64, DistanceError> {
        match model {
            DistanceModel::P => self.p_distance(),
            DistanceModel::Jc69 => self.jc69_distance(),
            DistanceModel::K2p => self.k2p_distance(),
        }
    }
}

impl SiteTally {
    /// The number of comparable sites, or an error if there are none.
    fn nonzero_sites(&self) -> Result<usize, DistanceError> {
        match self.comparable_sites() {
            0 => Err(DistanceError::NoComparableSites),
            sites => Ok(sites),
        }
    }
}

/// Applies $-\text{scale} \cdot \ln(\text{argument})$, failing when the
/// argument is not positive.
#[inline]
fn log_correction(scale: f64, argument: f64, model: DistanceModel) -> Result<f64, DistanceError> {
    if argument > 0.0 {
        // Adding zero turns -0.0 (from ln(1)) into 0.0
        Ok(-scale * argument.ln() + 0.0)
    } else {
        Err(DistanceError::Saturated(model))
    }
}

// Saturation is decided on the integer counts. Proportions such as 1/3 do not
// round-trip through f64, so `1 - 2p - q` can land just above zero at the
// boundary.
impl DistanceFromTally for SiteTally {
    #[allow(clippy::cast_precision_loss)]
    fn p_distance(&self) -> Result<f64, DistanceError> {
        let sites = self.nonzero_sites()?;
        Ok(self.mismatches() as f64 / sites as f64)
    }

    /// $1 - \frac{4}{3}p = \frac{3n - 4m}{3n}$ for $m$ mismatches over $n$
    /// sites.
    #[allow(clippy::cast_precision_loss)]
    fn jc69_distance(&self) -> Result<f64, DistanceError> {
        let sites = self.nonzero_sites()?;
        let mismatches = self.mismatches();
        if 4 * mismatches >= 3 * sites {
            return Err(DistanceError::Saturated(DistanceModel::Jc69));
        }

        let argument = (3 * sites - 4 * mismatches) as f64 / (3 * sites) as f64;
        log_correction(0.75, argument, DistanceModel::Jc69)
    }

    /// $1 - 2p - q = \frac{n - 2t - v}{n}$ and $1 - 2q = \frac{n - 2v}{n}$
    /// for $t$ transitions and $v$ transversions over $n$ sites.
    #[allow(clippy::cast_precision_loss)]
    fn k2p_distance(&self) -> Result<f64, DistanceError> {
        let sites = self.nonzero_sites()?;
        let (t, v) = (self.transitions, self.transversions);
        if 2 * t + v >= sites || 2 * v >= sites {
            return Err(DistanceError::Saturated(DistanceModel::K2p));
        }

        let n = sites as f64;
        let a1 = (sites - 2 * t - v) as f64 / n;
        let a2 = (sites - 2 * v) as f64 / n;
        log_correction(0.5, a1 * a2.sqrt(), DistanceModel::K2p)
    }
}

/// Two aligned sequences, compared position by position.
///
/// [`AlignedPair::new`] accepts sequences of any lengths and compares only
/// their overlap, exactly like the free functions.
/// [`AlignedPair::new_equal_length`] rejects sequences of different lengths
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    reference: &'a [u8],
    distant:   &'a [u8],
}

impl<'a> AlignedPair<'a> {
    #[inline]
    #[must_use]
    pub fn new(reference: &'a [u8], distant: &'a [u8]) -> Self {
        AlignedPair { reference, distant }
    }

    /// Creates a pair, requiring both sequences to have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::UnequalLength`] if the lengths differ.
    ///
    /// ```
    /// # use evodist::{data::err::DistanceError, distance::dna::AlignedPair};
    /// assert!(AlignedPair::new_equal_length(b"ACGT", b"ACGA").is_ok());
    /// assert_eq!(
    ///     AlignedPair::new_equal_length(b"ACGT", b"ACG"),
    ///     Err(DistanceError::UnequalLength {
    ///         reference: 4,
    ///         distant:   3,
    ///     })
    /// );
    /// ```
    pub fn new_equal_length(reference: &'a [u8], distant: &'a [u8]) -> Result<Self, DistanceError> {
        if reference.len() == distant.len() {
            Ok(AlignedPair { reference, distant })
        } else {
            Err(DistanceError::UnequalLength {
                reference: reference.len(),
                distant:   distant.len(),
            })
        }
    }

    #[inline]
    #[must_use]
    pub fn reference(&self) -> &'a [u8] {
        self.reference
    }

    #[inline]
    #[must_use]
    pub fn distant(&self) -> &'a [u8] {
        self.distant
    }

    /// Tallies the sites of the pair. See [`tally_sites`].
    #[inline]
    #[must_use]
    pub fn tally(&self) -> SiteTally {
        tally_sites(self.reference, self.distant)
    }

    /// Computes the distance for the given `model`.
    ///
    /// # Errors
    ///
    /// Fails if there are no comparable sites or the model is saturated.
    #[inline]
    pub fn distance(&self, model: DistanceModel) -> Result<f64, DistanceError> {
        model.distance(self.reference, self.distant)
    }

    /// # Errors
    ///
    /// See [`jukes_cantor`].
    #[inline]
    pub fn jukes_cantor(&self) -> Result<f64, DistanceError> {
        jukes_cantor(self.reference, self.distant)
    }

    /// # Errors
    ///
    /// See [`kimura_two_parameter`].
    #[inline]
    pub fn kimura_two_parameter(&self) -> Result<f64, DistanceError> {
        kimura_two_parameter(self.reference, self.distant)
    }
}

#[cfg(all(test, feature = "bench"))]
mod bench;
