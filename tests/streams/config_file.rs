//! Loading sort configuration from disk.

use crate::common::init_tracing;
use lambdava::{functional, Error, SortConfig, SortPolicy, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn test_strict_config_from_file_drives_sort() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "incomparable = \"strict\"\n").unwrap();

    let config = SortConfig::from_file(&path).unwrap();
    assert_eq!(config.policy().unwrap(), SortPolicy::Strict);

    let err = functional(vec![1.0, f64::NAN])
        .sort_partial_with(&config)
        .unwrap_err();
    assert!(matches!(err, Error::IncomparableElements { index: 1 }));
}

#[test]
fn test_default_file_is_permissive() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    SortConfig::write_default_if_missing(&path).unwrap();

    let config = SortConfig::from_file(&path).unwrap();
    let sorted = functional(vec![f64::NAN, 2.0, 1.0])
        .sort_partial_with(&config)
        .unwrap()
        .into_vec();
    assert_eq!(&sorted[..2], &[1.0, 2.0]);
    assert!(sorted[2].is_nan());
}

#[test]
fn test_unknown_policy_in_file_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "incomparable = \"maybe\"\n").unwrap();
    assert!(matches!(
        SortConfig::from_file(&path),
        Err(Error::InvalidConfig(_))
    ));
}
