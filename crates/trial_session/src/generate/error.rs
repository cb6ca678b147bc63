//! Array generation error types.

use thiserror::Error;
use trial_core::sampling::TruncatedNormalError;

use super::trial_types::REWARD_PREFIX_LEN;
use crate::store::StoreError;

/// Errors that can occur while generating session parameter arrays.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Session is shorter than the forced reward prefix.
    #[error(
        "trial count {trials} is below the {min}-trial reward prefix",
        min = REWARD_PREFIX_LEN
    )]
    InvalidTrialCount {
        /// The rejected trial count.
        trials: usize,
    },

    /// Duration parameters describe a distribution that cannot be sampled.
    #[error(transparent)]
    InvalidDurationSpec(#[from] TruncatedNormalError),

    /// Reading or rewriting the config document failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_trial_count_display() {
        let err = GenerateError::InvalidTrialCount { trials: 2 };
        assert!(err.to_string().contains("trial count 2"));
        assert!(err.to_string().contains("3-trial reward prefix"));
    }
}
