//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for aligned sequence pairs.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::distance::dna::AlignedPair;
use arbitrary::{Arbitrary, Result, Unstructured};

/// The symbols drawn for an [`ArbitraryAlignment`]: the four bases and a gap.
const ALIGNMENT_ALPHABET: &[u8; 5] = b"ACGT-";

/// Two aligned sequences of equal length over `ACGT-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryAlignment {
    pub reference: Vec<u8>,
    pub distant:   Vec<u8>,
}

impl ArbitraryAlignment {
    /// Borrows the sequences as an [`AlignedPair`].
    #[must_use]
    pub fn as_pair(&self) -> AlignedPair<'_> {
        AlignedPair::new(&self.reference, &self.distant)
    }
}

impl<'a> Arbitrary<'a> for ArbitraryAlignment {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<[u8; 2]>()?;
        let mut reference = Vec::with_capacity(len);
        let mut distant = Vec::with_capacity(len);

        for _ in 0..len {
            reference.push(*u.choose(ALIGNMENT_ALPHABET)?);
            distant.push(*u.choose(ALIGNMENT_ALPHABET)?);
        }

        Ok(ArbitraryAlignment { reference, distant })
    }
}
