//! # trial_core: Sampling Foundation for Session Generation
//!
//! ## Foundation Layer Role
//!
//! trial_core is the bottom layer of the two-crate workspace, providing:
//! - Injectable random-source objects (`rng::SessionRng`)
//! - Bounded-interval normal sampling (`sampling::TruncatedNormal`)
//!
//! The session layer builds the experiment-specific arrays on top of these
//! primitives; this crate knows nothing about trials, config files, or field
//! names.
//!
//! ## Reproducibility Contract
//!
//! Randomness is always drawn through an explicit [`rng::SessionRng`] rather
//! than a global generator. A source built with [`rng::SessionRng::from_seed`]
//! yields the same stream on every run and on every machine; a source built
//! with [`rng::SessionRng::from_entropy`] is freshly randomised per call.
//! Callers choose per array which contract they need.
//!
//! ## Usage Example
//!
//! ```rust
//! use trial_core::rng::SessionRng;
//! use trial_core::sampling::TruncatedNormal;
//!
//! let mut rng = SessionRng::from_seed(42);
//! let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
//!
//! let draw = rng.sample(&dist);
//! assert!((2500.0..=3500.0).contains(&draw));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod sampling;
