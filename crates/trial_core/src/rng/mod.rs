//! # Random-Source Infrastructure
//!
//! This module provides the random sources used by session array generation.
//! Sources are explicit objects passed into generators rather than a shared
//! global generator, so the reproducibility contract of each array is visible
//! at the call site.
//!
//! ## Design Rationale
//!
//! - **Reproducibility on demand**: [`SessionRng::from_seed`] yields identical
//!   streams across runs and processes for a given seed
//! - **Ambient randomness on demand**: [`SessionRng::from_entropy`] yields an
//!   OS-entropy-seeded stream that differs per session
//! - **Distribution-agnostic**: draws go through `rand_distr::Distribution`,
//!   so the same source serves Bernoulli trial draws and truncated-normal
//!   duration draws
//!
//! ## Usage Example
//!
//! ```rust
//! use rand_distr::Bernoulli;
//! use trial_core::rng::SessionRng;
//!
//! // Seeded source: same stream every run
//! let mut rng = SessionRng::from_seed(2);
//! let coin = Bernoulli::new(0.5).unwrap();
//! let draw: bool = rng.sample(&coin);
//!
//! // Entropy source: fresh stream per session
//! let mut ambient = SessionRng::from_entropy();
//! let draws: Vec<bool> = ambient.sample_vec(&coin, 10);
//! assert_eq!(draws.len(), 10);
//! ```

mod prng;

// Public re-exports
pub use prng::SessionRng;
