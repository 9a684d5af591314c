use crate::distance::dna::DistanceModel;
use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Reasons a distance between two aligned sequences cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// Every overlapping position holds a gap in at least one sequence, or
    /// the sequences do not overlap at all. The mismatch proportion would
    /// divide by zero.
    NoComparableSites,
    /// The observed proportions are at or beyond the saturation point of the
    /// model, so the logarithm in the correction has a non-positive argument.
    Saturated(DistanceModel),
    /// The sequences were required to have equal lengths but did not.
    UnequalLength { reference: usize, distant: usize },
}

impl Display for DistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DistanceError::NoComparableSites => write!(f, "No comparable (non-gap) sites between the two sequences"),
            DistanceError::Saturated(model) => {
                write!(f, "The {model} distance is undefined: substitutions saturate the model")
            }
            DistanceError::UnequalLength { reference, distant } => {
                let mut buff = itoa::Buffer::new();
                f.write_str("Aligned sequences differ in length: reference has ")?;
                f.write_str(buff.format(*reference))?;
                f.write_str(" symbols, distant has ")?;
                f.write_str(buff.format(*distant))
            }
        }
    }
}

impl std::error::Error for DistanceError {}

impl GetCode for DistanceError {
    fn get_code(&self) -> i32 {
        match self {
            DistanceError::NoComparableSites => 2,
            DistanceError::Saturated(_) => 3,
            DistanceError::UnequalLength { .. } => 4,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            DistanceError::Saturated(DistanceModel::Jc69).to_string(),
            "The JC69 distance is undefined: substitutions saturate the model"
        );
        assert_eq!(
            DistanceError::UnequalLength {
                reference: 12,
                distant:   9,
            }
            .to_string(),
            "Aligned sequences differ in length: reference has 12 symbols, distant has 9"
        );
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            DistanceError::NoComparableSites.get_code(),
            DistanceError::Saturated(DistanceModel::K2p).get_code(),
            DistanceError::UnequalLength {
                reference: 1,
                distant:   0,
            }
            .get_code(),
        ];
        assert!(codes.iter().all(|&c| c != 0 && c != 1));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
