//! Trial type array generation.
//!
//! Every session opens with a run of guaranteed reward trials so the subject
//! engages before probabilistic trials begin; the rest of the session is a
//! fair coin flip per trial. The random source is seeded with a fixed
//! constant, so the trial type sequence for a given session length is
//! identical on every rig and every run.

use std::path::Path;

use rand_distr::Bernoulli;
use tracing::{debug, info};
use trial_core::rng::SessionRng;

use super::error::GenerateError;
use crate::store;

/// Number of guaranteed reward trials at the start of every session.
pub const REWARD_PREFIX_LEN: usize = 3;

/// Probability that a trial after the reward prefix is a reward trial.
pub const REWARD_PROBABILITY: f64 = 0.5;

/// Fixed seed for the trial type random source.
///
/// Trial type sequences must replicate across runs and processes; interval
/// and noise timing stays freshly randomised per session.
pub const TRIAL_SEED: u64 = 2;

/// Config document field that receives the trial type array.
pub const TRIAL_FIELD: &str = "trialArray";

/// Computes a trial type array of length `trials` from the given source.
///
/// The array opens with [`REWARD_PREFIX_LEN`] forced reward trials (value 1)
/// followed by `trials - REWARD_PREFIX_LEN` independent
/// Bernoulli([`REWARD_PROBABILITY`]) draws in draw order, 1 for reward and 0
/// for non-reward.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidTrialCount`] if `trials` is smaller than
/// the reward prefix; no draws are made in that case.
///
/// # Examples
///
/// ```rust
/// use trial_core::rng::SessionRng;
/// use trial_session::generate::{trial_type_array, TRIAL_SEED};
///
/// let mut rng = SessionRng::from_seed(TRIAL_SEED);
/// let trial_types = trial_type_array(5, &mut rng)?;
///
/// assert_eq!(trial_types.len(), 5);
/// assert_eq!(&trial_types[..3], &[1, 1, 1]);
/// # Ok::<(), trial_session::GenerateError>(())
/// ```
pub fn trial_type_array(trials: usize, rng: &mut SessionRng) -> Result<Vec<u8>, GenerateError> {
    if trials < REWARD_PREFIX_LEN {
        return Err(GenerateError::InvalidTrialCount { trials });
    }

    let mut trial_types = vec![1u8; REWARD_PREFIX_LEN];

    // REWARD_PROBABILITY is a valid probability, so construction cannot fail.
    let reward = Bernoulli::new(REWARD_PROBABILITY).unwrap();
    for _ in REWARD_PREFIX_LEN..trials {
        trial_types.push(u8::from(rng.sample(&reward)));
    }

    Ok(trial_types)
}

/// Generates the session trial type array and persists it under
/// [`TRIAL_FIELD`] in the config document at `config_path`.
///
/// The random source is seeded with [`TRIAL_SEED`]: the same `trials` count
/// always yields the same array. The array is persisted before it is
/// returned.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidTrialCount`] for `trials` below the
/// reward prefix, or a propagated [`GenerateError::Store`] if the config
/// document cannot be read or rewritten.
pub fn gen_trial_array(trials: usize, config_path: &Path) -> Result<Vec<u8>, GenerateError> {
    debug!(trials, field = TRIAL_FIELD, "generating trial type array");

    let mut rng = SessionRng::from_seed(TRIAL_SEED);
    let trial_types = trial_type_array(trials, &mut rng)?;

    store::persist_field(config_path, TRIAL_FIELD, &trial_types)?;
    info!(
        field = TRIAL_FIELD,
        len = trial_types.len(),
        path = %config_path.display(),
        "trial type array persisted"
    );

    Ok(trial_types)
}
