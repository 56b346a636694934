//! Integration tests for `pulsearc_hashing::config`.
//!
//! Loads configuration from disk and wires it into the hasher and token
//! generator.

use std::fs;

use pulsearc_hashing::{HashingConfig, HashingError, SecureHasher, TokenGenerator};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Validates a TOML file drives both components.
///
/// # Test Steps
/// 1. Write a config file with custom lengths
/// 2. Load it and build a hasher and token generator
/// 3. Confirm salts and tokens follow the configured lengths
#[test]
fn test_load_config_file() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("hashing.toml");
    fs::write(&path, "[hasher]\nsalt_length = 24\n\n[token]\nlength = 64\n")
        .expect("Failed to write config");

    let config = HashingConfig::from_file(&path).expect("Failed to load config");
    let hasher = SecureHasher::with_config(config.hasher.clone()).unwrap();
    let tokens = TokenGenerator::with_config(config.token.clone()).unwrap();

    assert_eq!(hasher.generate_salt().len(), 24);
    assert_eq!(hasher.secure_hash("Peter").salt.len(), 24);
    assert_eq!(tokens.generate().len(), 88);
}

/// Validates a missing file reports a configuration error.
#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = HashingConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, HashingError::Config { .. }));
}

/// Validates an invalid value in the file is rejected as an invalid argument.
#[test]
fn test_invalid_value_in_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("hashing.toml");
    fs::write(&path, "[token]\nlength = 0\n").expect("Failed to write config");

    let err = HashingConfig::from_file(&path).unwrap_err();
    assert!(err.is_invalid_argument());
}

/// Validates the written form of a config loads back unchanged.
#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("hashing.toml");

    let config = HashingConfig::default();
    fs::write(&path, config.to_toml_string().unwrap()).expect("Failed to write config");

    assert_eq!(HashingConfig::from_file(&path).unwrap(), config);
}
