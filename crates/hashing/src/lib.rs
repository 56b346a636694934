//! Digests, salted credential hashes and random tokens for PulseArc crates.
//!
//! - [`SecureHasher`]: MD5 / SHA-256 / SHA-384 / SHA-512 digests of strings,
//!   bytes and seekable streams (uppercase hex), salted SHA-256 hashes for
//!   credential storage, non-zero random salts, and an optional
//!   caller-supplied algorithm.
//! - [`TokenGenerator`]: random base64 tokens.
//!
//! ```rust
//! use pulsearc_hashing::{SecureHasher, TokenGenerator};
//!
//! let hasher = SecureHasher::new();
//! let stored = hasher.secure_hash("hunter2");
//! assert!(hasher.verify_secure_hash("hunter2", &stored));
//! assert_eq!(hasher.sha256_hash("Peter").len(), 64);
//!
//! let token = TokenGenerator::new().generate();
//! assert_eq!(token.len(), 44);
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod algorithm;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hasher;
mod random;
pub mod token;

pub use algorithm::HashAlgorithm;
pub use config::{HasherConfig, HashingConfig, TokenConfig};
pub use error::{HashingError, HashingResult, NotConfiguredReason};
pub use hasher::{DigestFactory, HashResult, SecureHasher};
pub use token::{token_length_for, TokenGenerator};

/// Re-exported so custom hashing methods can name the trait object type.
pub use digest::DynDigest;
