//! Session orchestration: all three parameter arrays in one call.

use std::path::Path;

use tracing::info;
use trial_core::rng::SessionRng;

use super::durations::{
    duration_array, gen_iti_array, gen_noise_array, DurationSpec, ITI_FIELD, NOISE_FIELD,
};
use super::error::GenerateError;
use super::trial_types::{gen_trial_array, trial_type_array, TRIAL_FIELD, TRIAL_SEED};
use crate::store::ConfigDocument;

/// The three parameter arrays produced for one behavioural session.
///
/// Field order matches the generation order: trial types, inter-trial
/// intervals, noise durations. The arrays are the same values written to the
/// config document, returned for immediate downstream use without a re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionArrays {
    /// Trial type per trial: 1 for reward, 0 for non-reward.
    pub trial_types: Vec<u8>,
    /// Inter-trial interval per trial, milliseconds.
    pub iti_ms: Vec<u32>,
    /// Stimulus noise duration per trial, milliseconds.
    pub noise_ms: Vec<u32>,
}

/// Generates all three session arrays and persists each into the config
/// document at `config_path`.
///
/// Generators run in a fixed order — trial types, inter-trial intervals,
/// noise durations — and each performs its own read-modify-write cycle
/// against the file. If the process stops partway, the document is left
/// with the fields written so far; nothing is rolled back.
///
/// # Errors
///
/// Returns the first generator error and does not run later generators.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use trial_session::generate_all;
///
/// let arrays = generate_all(30, Path::new("config.json"))?;
/// assert_eq!(arrays.iti_ms.len(), 30);
/// # Ok::<(), trial_session::GenerateError>(())
/// ```
pub fn generate_all(trials: usize, config_path: &Path) -> Result<SessionArrays, GenerateError> {
    let trial_types = gen_trial_array(trials, config_path)?;
    let iti_ms = gen_iti_array(trials, config_path)?;
    let noise_ms = gen_noise_array(trials, config_path)?;

    info!(trials, path = %config_path.display(), "session arrays generated");

    Ok(SessionArrays {
        trial_types,
        iti_ms,
        noise_ms,
    })
}

/// Generates all three session arrays with a single read-modify-write cycle.
///
/// Statistically identical to [`generate_all`] — same sources, same draw
/// order per array, same field names — but the config document is read
/// once, all three fields are set, and the file is written once. Use this
/// variant when an interruption must not leave a partially updated
/// document alongside an intact one.
///
/// # Errors
///
/// Returns the first generation or store error; on error nothing has been
/// written.
pub fn generate_all_single_write(
    trials: usize,
    config_path: &Path,
) -> Result<SessionArrays, GenerateError> {
    let mut seeded = SessionRng::from_seed(TRIAL_SEED);
    let trial_types = trial_type_array(trials, &mut seeded)?;

    let spec = DurationSpec::session_default();
    let mut iti_rng = SessionRng::from_entropy();
    let iti_ms = duration_array(trials, &spec, &mut iti_rng)?;
    let mut noise_rng = SessionRng::from_entropy();
    let noise_ms = duration_array(trials, &spec, &mut noise_rng)?;

    let mut doc = ConfigDocument::load(config_path)?;
    doc.set(TRIAL_FIELD, &trial_types)?;
    doc.set(ITI_FIELD, &iti_ms)?;
    doc.set(NOISE_FIELD, &noise_ms)?;
    doc.save(config_path)?;

    info!(trials, path = %config_path.display(), "session arrays generated (single write)");

    Ok(SessionArrays {
        trial_types,
        iti_ms,
        noise_ms,
    })
}
