//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the random-source type is accessible via absolute path.
#[test]
fn test_rng_module_exports() {
    use trial_core::rng::SessionRng;

    let mut seeded = SessionRng::from_seed(2);
    assert_eq!(seeded.seed(), Some(2));

    let coin = rand_distr::Bernoulli::new(0.5).unwrap();
    let draws: Vec<bool> = seeded.sample_vec(&coin, 4);
    assert_eq!(draws.len(), 4);

    let ambient = SessionRng::from_entropy();
    assert_eq!(ambient.seed(), None);
}

/// Test that the sampling types are accessible via absolute path.
#[test]
fn test_sampling_module_exports() {
    use trial_core::sampling::{TruncatedNormal, TruncatedNormalError};

    let dist = TruncatedNormal::new(3000.0, 1000.0, 2500.0, 3500.0).unwrap();
    assert_eq!(dist.lower(), 2500.0);
    assert_eq!(dist.upper(), 3500.0);

    let err = TruncatedNormal::new(3000.0, 1000.0, 3500.0, 2500.0).unwrap_err();
    assert!(matches!(err, TruncatedNormalError::EmptyInterval { .. }));
}
