use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

const BASES: &[u8; 4] = b"ACGT";

/// Generates a random sequence of `length` symbols drawn uniformly from
/// `alpha`, reproducibly from `seed`.
///
/// ```
/// # use evodist::generate::rand_sequence;
/// let s = rand_sequence(b"ACGT-", 100, 42);
/// assert_eq!(s.len(), 100);
/// assert_eq!(s, rand_sequence(b"ACGT-", 100, 42));
/// ```
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Returns a copy of `sequence` in which each `A`, `C`, `G`, or `T` is
/// substituted by one of the other three bases with probability `rate`.
/// Gaps and other symbols are copied unchanged, so the result stays aligned
/// to `sequence`.
///
/// ```
/// # use evodist::{distance::p_distance, generate::{mutate_sequence, rand_sequence}};
/// let reference = rand_sequence(b"ACGT", 10_000, 7);
/// let distant = mutate_sequence(&reference, 0.1, 8);
///
/// let p = p_distance(&reference, &distant).unwrap();
/// assert!(p > 0.08 && p < 0.12);
/// ```
#[must_use]
pub fn mutate_sequence(sequence: &[u8], rate: f64, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    sequence
        .iter()
        .map(|&base| {
            let Some(index) = BASES.iter().position(|&b| b == base) else {
                return base;
            };
            if unit_interval(&mut rng) < rate {
                BASES[(index + 1 + rng.next_u32() as usize % 3) % 4]
            } else {
                base
            }
        })
        .collect()
}

/// A uniform draw from `[0, 1)` using the top 53 bits of the generator.
#[allow(clippy::cast_precision_loss)]
fn unit_interval(rng: &mut Xoshiro256PlusPlus) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
