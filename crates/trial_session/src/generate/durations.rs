//! Bounded-duration array generation.
//!
//! Inter-trial intervals and stimulus noise durations share one sampler: a
//! normal distribution truncated to fixed millisecond bounds, rounded to
//! whole milliseconds. The two arrays are generated through separate named
//! entry points writing separate config fields, so their parameters can
//! diverge without touching the shared sampling path. Unlike trial types,
//! duration draws come from entropy-seeded sources and differ run to run.

use std::path::Path;

use tracing::{debug, info};
use trial_core::rng::SessionRng;
use trial_core::sampling::TruncatedNormal;

use super::error::GenerateError;
use crate::store;

/// Config document field that receives the inter-trial interval array.
pub const ITI_FIELD: &str = "ITIArray";

/// Config document field that receives the noise duration array.
pub const NOISE_FIELD: &str = "noiseArray";

/// Statistical parameters for a bounded duration array, in milliseconds.
///
/// Durations are drawn from Normal(`mean_ms`, `std_dev_ms`) truncated to
/// `[lower_ms, upper_ms]` and rounded half-to-even to whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSpec {
    /// Inclusive lower bound on produced durations.
    pub lower_ms: f64,
    /// Inclusive upper bound on produced durations.
    pub upper_ms: f64,
    /// Mean of the parent normal distribution.
    pub mean_ms: f64,
    /// Standard deviation of the parent normal distribution.
    pub std_dev_ms: f64,
}

impl DurationSpec {
    /// Parameters shared today by the inter-trial interval and noise arrays.
    #[inline]
    pub const fn session_default() -> Self {
        Self {
            lower_ms: 2500.0,
            upper_ms: 3500.0,
            mean_ms: 3000.0,
            std_dev_ms: 1000.0,
        }
    }
}

impl Default for DurationSpec {
    fn default() -> Self {
        Self::session_default()
    }
}

/// Computes a duration array of length `trials` from the given source.
///
/// Each element is an independent draw from the truncated normal described
/// by `spec`, rounded half-to-even to a whole number of milliseconds.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidDurationSpec`] if `spec` describes a
/// distribution that cannot be sampled (non-positive standard deviation or
/// an empty interval).
///
/// # Examples
///
/// ```rust
/// use trial_core::rng::SessionRng;
/// use trial_session::generate::{duration_array, DurationSpec};
///
/// let mut rng = SessionRng::from_entropy();
/// let iti_ms = duration_array(5, &DurationSpec::session_default(), &mut rng)?;
///
/// assert_eq!(iti_ms.len(), 5);
/// assert!(iti_ms.iter().all(|&ms| (2500..=3500).contains(&ms)));
/// # Ok::<(), trial_session::GenerateError>(())
/// ```
pub fn duration_array(
    trials: usize,
    spec: &DurationSpec,
    rng: &mut SessionRng,
) -> Result<Vec<u32>, GenerateError> {
    let dist = TruncatedNormal::new(spec.mean_ms, spec.std_dev_ms, spec.lower_ms, spec.upper_ms)?;

    let durations = rng
        .sample_vec(&dist, trials)
        .into_iter()
        .map(|ms| ms.round_ties_even() as u32)
        .collect();

    Ok(durations)
}

/// Generates the inter-trial interval array and persists it under
/// [`ITI_FIELD`] in the config document at `config_path`.
///
/// Draws come from a fresh entropy-seeded source, so intervals differ run
/// to run. The array is persisted before it is returned.
///
/// # Errors
///
/// Propagates [`GenerateError::Store`] if the config document cannot be
/// read or rewritten.
pub fn gen_iti_array(trials: usize, config_path: &Path) -> Result<Vec<u32>, GenerateError> {
    gen_duration_field(trials, config_path, ITI_FIELD)
}

/// Generates the stimulus noise duration array and persists it under
/// [`NOISE_FIELD`] in the config document at `config_path`.
///
/// Draws come from a fresh entropy-seeded source, so durations differ run
/// to run. The array is persisted before it is returned.
///
/// # Errors
///
/// Propagates [`GenerateError::Store`] if the config document cannot be
/// read or rewritten.
pub fn gen_noise_array(trials: usize, config_path: &Path) -> Result<Vec<u32>, GenerateError> {
    gen_duration_field(trials, config_path, NOISE_FIELD)
}

/// Shared body of the two duration entry points: sample with the session
/// parameters, persist under `field`, return the array.
fn gen_duration_field(
    trials: usize,
    config_path: &Path,
    field: &'static str,
) -> Result<Vec<u32>, GenerateError> {
    debug!(trials, field, "generating duration array");

    let mut rng = SessionRng::from_entropy();
    let durations = duration_array(trials, &DurationSpec::session_default(), &mut rng)?;

    store::persist_field(config_path, field, &durations)?;
    info!(
        field,
        len = durations.len(),
        path = %config_path.display(),
        "duration array persisted"
    );

    Ok(durations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_stay_in_bounds() {
        let mut rng = SessionRng::from_seed(42);
        let durations =
            duration_array(1000, &DurationSpec::session_default(), &mut rng).unwrap();

        assert_eq!(durations.len(), 1000);
        for &ms in &durations {
            assert!((2500..=3500).contains(&ms), "duration {} out of bounds", ms);
        }
    }

    #[test]
    fn test_zero_trials_allowed() {
        let mut rng = SessionRng::from_entropy();
        let durations = duration_array(0, &DurationSpec::session_default(), &mut rng).unwrap();
        assert!(durations.is_empty());
    }

    #[test]
    fn test_invalid_spec_rejected() {
        let spec = DurationSpec {
            lower_ms: 3500.0,
            upper_ms: 2500.0,
            ..DurationSpec::session_default()
        };

        let mut rng = SessionRng::from_seed(42);
        let result = duration_array(10, &spec, &mut rng);
        assert!(matches!(
            result,
            Err(GenerateError::InvalidDurationSpec(_))
        ));
    }

    #[test]
    fn test_entropy_sources_vary_between_calls() {
        // 256 draws from independent entropy sources matching element for
        // element would mean the sources are not independent.
        let spec = DurationSpec::session_default();

        let mut rng1 = SessionRng::from_entropy();
        let mut rng2 = SessionRng::from_entropy();
        let a = duration_array(256, &spec, &mut rng1).unwrap();
        let b = duration_array(256, &spec, &mut rng2).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_durations_spread_across_interval() {
        // With sigma at a third of the interval width, 1000 draws cover both
        // halves of the interval.
        let mut rng = SessionRng::from_seed(7);
        let durations =
            duration_array(1000, &DurationSpec::session_default(), &mut rng).unwrap();

        assert!(durations.iter().any(|&ms| ms < 3000));
        assert!(durations.iter().any(|&ms| ms > 3000));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Length and bounds hold for every trial count, including 0.
            #[test]
            fn prop_array_shape(trials in 0usize..300, seed in 0u64..1024) {
                let mut rng = SessionRng::from_seed(seed);
                let durations =
                    duration_array(trials, &DurationSpec::session_default(), &mut rng).unwrap();

                prop_assert_eq!(durations.len(), trials);
                prop_assert!(durations.iter().all(|&ms| (2500..=3500).contains(&ms)));
            }
        }
    }
}
