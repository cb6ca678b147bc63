//! Normal distribution truncated to a closed interval.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Errors that can occur when constructing a [`TruncatedNormal`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TruncatedNormalError {
    /// Mean is NaN or infinite.
    #[error("mean {mean} must be finite")]
    InvalidMean {
        /// The rejected mean.
        mean: f64,
    },

    /// Standard deviation is non-positive, NaN, or infinite.
    #[error("standard deviation {std_dev} must be finite and positive")]
    InvalidStdDev {
        /// The rejected standard deviation.
        std_dev: f64,
    },

    /// Truncation interval contains no mass.
    #[error("truncation interval [{lower}, {upper}] is empty")]
    EmptyInterval {
        /// The rejected lower bound.
        lower: f64,
        /// The rejected upper bound.
        upper: f64,
    },
}

/// Normal distribution restricted to `[lower, upper]`.
///
/// Values are drawn by rejection from the parent normal: draws outside the
/// interval are discarded and redrawn, which yields exactly the truncated
/// distribution (mass outside the interval renormalised away). Every sampled
/// value satisfies `lower <= x <= upper`.
///
/// Sampling cost is inversely proportional to the parent mass inside the
/// interval; intervals deep in the tail of the parent will sample slowly.
///
/// # Examples
///
/// ```rust
/// use rand_distr::Distribution;
/// use trial_core::sampling::TruncatedNormal;
///
/// let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
/// let mut rng = rand::thread_rng();
///
/// let x = dist.sample(&mut rng);
/// assert!((2500.0..=3500.0).contains(&x));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TruncatedNormal {
    /// Untruncated parent distribution.
    parent: Normal<f64>,
    /// Inclusive lower bound.
    lower: f64,
    /// Inclusive upper bound.
    upper: f64,
}

impl TruncatedNormal {
    /// Creates a truncated normal with the given parent parameters and
    /// inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`TruncatedNormalError`] if `mean` is not finite, `std_dev`
    /// is not finite and positive, or `lower >= upper`.
    pub fn new(
        mean: f64,
        std_dev: f64,
        lower: f64,
        upper: f64,
    ) -> Result<Self, TruncatedNormalError> {
        if !mean.is_finite() {
            return Err(TruncatedNormalError::InvalidMean { mean });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(TruncatedNormalError::InvalidStdDev { std_dev });
        }
        if !(lower < upper) {
            return Err(TruncatedNormalError::EmptyInterval { lower, upper });
        }

        // Parameters are validated above; Normal::new only rejects a
        // negative or non-finite standard deviation.
        let parent = Normal::new(mean, std_dev)
            .map_err(|_| TruncatedNormalError::InvalidStdDev { std_dev })?;

        Ok(Self {
            parent,
            lower,
            upper,
        })
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Distribution<f64> for TruncatedNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Interval is non-empty (checked at construction), so acceptance
        // has positive probability and the loop terminates.
        loop {
            let x = self.parent.sample(rng);
            if x >= self.lower && x <= self.upper {
                return x;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_samples_stay_in_bounds() {
        let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
        let mut rng = SessionRng::from_seed(42);

        for _ in 0..10_000 {
            let x: f64 = rng.sample(&dist);
            assert!(x >= 2500.0, "sample {} below lower bound", x);
            assert!(x <= 3500.0, "sample {} above upper bound", x);
        }
    }

    #[test]
    fn test_symmetric_truncation_keeps_mean() {
        // [2500, 3500] is symmetric around the parent mean of 3000, so the
        // truncated mean is also 3000.
        let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
        let mut rng = SessionRng::from_seed(7);

        let n = 10_000;
        let sum: f64 = (0..n).map(|_| rng.sample::<f64, _>(&dist)).sum();
        let mean = sum / n as f64;

        assert_abs_diff_eq!(mean, 3000.0, epsilon = 30.0);
    }

    #[test]
    fn test_invalid_mean_rejected() {
        let result = TruncatedNormal::new(f64::NAN, 1000.0, 2500.0, 3500.0);
        assert!(matches!(
            result,
            Err(TruncatedNormalError::InvalidMean { .. })
        ));
    }

    #[test]
    fn test_invalid_std_dev_rejected() {
        for std_dev in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = TruncatedNormal::new(3000.0, std_dev, 2500.0, 3500.0);
            assert!(
                matches!(result, Err(TruncatedNormalError::InvalidStdDev { .. })),
                "std_dev {} should be rejected",
                std_dev
            );
        }
    }

    #[test]
    fn test_empty_interval_rejected() {
        let result = TruncatedNormal::new(3000.0, 1000.0, 3500.0, 2500.0);
        assert!(matches!(
            result,
            Err(TruncatedNormalError::EmptyInterval { .. })
        ));

        let result = TruncatedNormal::new(3000.0, 1000.0, 3000.0, 3000.0);
        assert!(matches!(
            result,
            Err(TruncatedNormalError::EmptyInterval { .. })
        ));
    }

    #[test]
    fn test_bound_accessors() {
        let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
        assert_eq!(dist.lower(), 2500.0);
        assert_eq!(dist.upper(), 3500.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Samples stay inside the requested interval for any
            /// parameterisation whose interval holds the parent mean.
            #[test]
            fn prop_samples_in_bounds(
                lower in -5e3..0.0f64,
                width in 50.0..1e4f64,
                mean_frac in 0.0..1.0f64,
                std_dev in 1.0..100.0f64,
                seed in 0u64..1024,
            ) {
                let upper = lower + width;
                let mean = lower + mean_frac * width;
                let dist = TruncatedNormal::new(mean, std_dev, lower, upper).unwrap();
                let mut rng = SessionRng::from_seed(seed);

                for _ in 0..50 {
                    let x: f64 = rng.sample(&dist);
                    prop_assert!(x >= lower && x <= upper);
                }
            }
        }
    }
}
