/// A trait unifying the methods for comparing two `f64` values. This is
/// implemented for [`NearlyEqualStrategy`] (provided methods for comparing
/// floats) and `Fn(f64, f64) -> bool` closures (custom comparison methods).
///
/// <div class="warning">
///
/// **Warning**
///
/// This is an implementation detail and *should not* be called directly! Use
/// [`is_fp_eq`] or [`assert_fp_eq`] instead.
///
/// </div>
#[doc(hidden)]
pub trait NearlyEqualMethod {
    fn nearly_equal_float(&self, a: f64, b: f64) -> bool;
}

/// An enum for provided floating point comparison methods.
#[doc(hidden)]
pub enum NearlyEqualStrategy {
    /// Compare the values using relative error with a tolerance of `eps`
    Relative { eps: f64 },
    /// Compare the values using absolute error with a tolerance of `eps`
    Absolute { eps: f64 },
}

impl NearlyEqualMethod for NearlyEqualStrategy {
    /// Tests if two floating points are approximately equal within an epsilon.
    /// Relative error port courtesy of
    /// <https://floating-point-gui.de/errors/comparison/>
    #[allow(clippy::float_cmp)]
    fn nearly_equal_float(&self, a: f64, b: f64) -> bool {
        match self {
            NearlyEqualStrategy::Relative { eps } => {
                let diff = (a - b).abs();
                let magnitude = a.abs() + b.abs();

                if a == b {
                    // shortcut, handles infinities
                    true
                } else if a == 0.0 || b == 0.0 || magnitude < f64::MIN_POSITIVE {
                    // relative error is meaningless this close to zero
                    diff < *eps * f64::MIN_POSITIVE
                } else {
                    diff / magnitude.min(f64::MAX) < *eps
                }
            }
            NearlyEqualStrategy::Absolute { eps } => a == b || (a - b).abs() < *eps,
        }
    }
}

impl<F: Fn(f64, f64) -> bool> NearlyEqualMethod for F {
    fn nearly_equal_float(&self, a: f64, b: f64) -> bool {
        self(a, b)
    }
}

/// A trait for enabling approximate equality comparisons of values holding
/// floats.
///
/// The second element of the returned tuple holds the pair of floats that
/// caused the inequality, when there is one.
#[doc(hidden)]
pub trait NearlyEqual {
    fn nearly_equal<M: NearlyEqualMethod>(&self, b: &Self, method: &M) -> (bool, Option<(f64, f64)>);
}

impl NearlyEqual for f64 {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod>(&self, b: &Self, method: &M) -> (bool, Option<(f64, f64)>) {
        if method.nearly_equal_float(*self, *b) {
            (true, None)
        } else {
            (false, Some((*self, *b)))
        }
    }
}

impl<S: NearlyEqual> NearlyEqual for Option<S> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod>(&self, b: &Self, method: &M) -> (bool, Option<(f64, f64)>) {
        match (self, b) {
            (Some(x), Some(y)) => x.nearly_equal(y, method),
            (None, None) => (true, None),
            _ => (false, None),
        }
    }
}

/// Errors must be equal; successes are compared approximately.
impl<S: NearlyEqual, E: PartialEq> NearlyEqual for Result<S, E> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod>(&self, b: &Self, method: &M) -> (bool, Option<(f64, f64)>) {
        match (self, b) {
            (Ok(x), Ok(y)) => x.nearly_equal(y, method),
            (Err(x), Err(y)) => (x == y, None),
            _ => (false, None),
        }
    }
}

impl<S: NearlyEqual> NearlyEqual for Vec<S> {
    #[inline]
    fn nearly_equal<M: NearlyEqualMethod>(&self, b: &Self, method: &M) -> (bool, Option<(f64, f64)>) {
        if self.len() != b.len() {
            return (false, None);
        }
        for (eq, vals) in self.iter().zip(b).map(|(x, y)| x.nearly_equal(y, method)) {
            if !eq {
                return (false, vals);
            }
        }
        (true, None)
    }
}

/// Assert that two floating point values are approximately equal.
///
/// The default tolerance is $\epsilon=10^{-8}$ using relative error. A third
/// argument customizes the tolerance, and a leading `@absolute` or `@custom`
/// changes the comparison method.
/// ```
/// # use evodist::assert_fp_eq;
/// assert_fp_eq!(3.0, 1.0 + 2.0);
/// assert_fp_eq!(3.0, 2.99999, 1e-4);
/// assert_fp_eq!(@absolute, 1e-10, 2e-10, 1e-8);
/// assert_fp_eq!(Ok::<f64, ()>(0.1 + 0.2), Ok(0.3));
/// assert_fp_eq!(@custom, 0.5, 0.6, |a: f64, b: f64| (a - b).abs() < 0.2);
/// ```
///
/// `f64`, and `Option`, `Result`, and `Vec` of comparable values, are
/// supported. Errors inside a `Result` are compared with `==`.
#[macro_export]
macro_rules! assert_fp_eq {
    ($(@$method:tt,)? $a:expr, $b:expr) => {
        $crate::assert_fp_eq!($(@$method,)? $a, $b, 1e-8);
    };
    ($(@relative,)? $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(
            @strategy,
            $a,
            $b,
            $epsilon,
            $crate::math::NearlyEqualStrategy::Relative { eps: $epsilon }
        );
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(
            @strategy,
            $a,
            $b,
            $epsilon,
            $crate::math::NearlyEqualStrategy::Absolute { eps: $epsilon }
        );
    };
    (@custom, $a:expr, $b:expr, $closure:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, "custom", $closure);
    };
    (@strategy, $a:expr, $b:expr, $epsilon:expr, $method:expr) => {
        let (a, b) = (&$a, &$b);
        let (eq, vals) = $crate::math::NearlyEqual::nearly_equal(a, b, &$method);
        if !eq {
            if let Some((x, y)) = vals {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`,\n\n Caused by the comparison of:\n left:\t`{:?}`,\n right:\t`{:?}`", a, b, $epsilon, x, y)
            } else {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`", a, b, $epsilon)
            }
        }
    };
}

/// Check whether two floating point values are approximately equal.
///
/// Similar to [`assert_fp_eq`], but returns a boolean rather than performing an
/// assertion.
#[macro_export]
macro_rules! is_fp_eq {
    ($(@$method:tt,)? $a:expr, $b:expr) => {
        $crate::is_fp_eq!($(@$method,)? $a, $b, 1e-8)
    };
    ($(@relative,)? $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::NearlyEqual::nearly_equal(
            &$a,
            &$b,
            &$crate::math::NearlyEqualStrategy::Relative { eps: $epsilon }
        ).0
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::math::NearlyEqual::nearly_equal(
            &$a,
            &$b,
            &$crate::math::NearlyEqualStrategy::Absolute { eps: $epsilon }
        ).0
    };
    (@custom, $a:expr, $b:expr, $closure:expr) => {
        $crate::math::NearlyEqual::nearly_equal(&$a, &$b, &$closure).0
    };
}

#[cfg(test)]
mod test {
    #[test]
    fn relative_and_absolute() {
        assert!(is_fp_eq!(1.0, 1.0 + 1e-12));
        assert!(!is_fp_eq!(1.0, 1.1));
        assert!(is_fp_eq!(@absolute, 0.0, 1e-12, 1e-9));
        assert!(!is_fp_eq!(0.0, 1e-12));
    }

    #[test]
    fn results_compare_errors_exactly() {
        assert!(is_fp_eq!(Ok::<f64, u8>(0.5), Ok(0.5 + 1e-12)));
        assert!(is_fp_eq!(Err::<f64, u8>(3), Err(3)));
        assert!(!is_fp_eq!(Err::<f64, u8>(3), Err(4)));
        assert!(!is_fp_eq!(Ok::<f64, u8>(0.5), Err(4)));
    }

    #[test]
    #[should_panic(expected = "found ≈ expected")]
    fn assertion_panics() {
        assert_fp_eq!(vec![1.0, 2.0], vec![1.0, 2.5]);
    }
}
