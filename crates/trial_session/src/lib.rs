//! # trial_session: Trial Parameter Arrays and Config Persistence
//!
//! ## Session Layer Role
//!
//! trial_session produces the randomised parameter arrays for one
//! behavioural session and persists them into the shared JSON configuration
//! file consumed by the downstream hardware-transfer layer:
//!
//! - `trialArray`: trial type per trial (1 reward, 0 non-reward), opening
//!   with a forced three-trial reward prefix
//! - `ITIArray`: inter-trial interval per trial, milliseconds
//! - `noiseArray`: stimulus noise duration per trial, milliseconds
//!
//! The config file is owned externally and must exist before generation
//! runs; this crate only reads it, merges in the array fields, and rewrites
//! it. All other keys in the document are preserved.
//!
//! ## Reproducibility
//!
//! Trial type sequences are drawn from a fixed-seed source so a session can
//! be replicated exactly; interval and noise durations are drawn from
//! entropy-seeded sources and differ run to run.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use trial_session::generate_all;
//!
//! let arrays = generate_all(30, Path::new("config.json"))?;
//! assert_eq!(arrays.trial_types.len(), 30);
//! assert_eq!(&arrays.trial_types[..3], &[1, 1, 1]);
//! # Ok::<(), trial_session::GenerateError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generate;
pub mod store;

// Re-export commonly used items for convenience
pub use generate::{
    gen_iti_array, gen_noise_array, gen_trial_array, generate_all, generate_all_single_write,
    GenerateError, SessionArrays,
};
pub use store::{persist_field, ConfigDocument, StoreError};
