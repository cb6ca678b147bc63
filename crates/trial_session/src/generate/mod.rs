//! # Trial Parameter Array Generation
//!
//! The three generators that parameterise one behavioural session, plus the
//! orchestrator that runs them in order:
//!
//! - [`gen_trial_array`]: trial types — forced reward prefix, then fair
//!   Bernoulli draws from a fixed-seed source (reproducible)
//! - [`gen_iti_array`] / [`gen_noise_array`]: millisecond durations from a
//!   bounded normal distribution, entropy-seeded (non-reproducible)
//! - [`generate_all`]: all three in a fixed order, each persisting its own
//!   field into the shared config document
//!
//! Each persisting entry point has a pure counterpart
//! ([`trial_type_array`], [`duration_array`]) that takes an explicit
//! [`trial_core::rng::SessionRng`] and never touches the filesystem.

mod durations;
mod error;
mod session;
mod trial_types;

// Public re-exports
pub use durations::{
    duration_array, gen_iti_array, gen_noise_array, DurationSpec, ITI_FIELD, NOISE_FIELD,
};
pub use error::GenerateError;
pub use session::{generate_all, generate_all_single_write, SessionArrays};
pub use trial_types::{
    gen_trial_array, trial_type_array, REWARD_PREFIX_LEN, REWARD_PROBABILITY, TRIAL_FIELD,
    TRIAL_SEED,
};
