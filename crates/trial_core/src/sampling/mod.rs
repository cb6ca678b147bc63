//! # Bounded-Interval Sampling
//!
//! Sampling primitives restricted to a bounded interval. The session layer
//! uses [`TruncatedNormal`] for inter-trial interval and stimulus noise
//! durations, which must stay inside fixed millisecond bounds.

mod truncated;

// Public re-exports
pub use truncated::{TruncatedNormal, TruncatedNormalError};
