// Digests, salted credential hashes and salt generation.

use std::fmt;
use std::io::{Read, Seek};
use std::sync::Arc;

use digest::DynDigest;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, trace, warn};

use crate::algorithm::{digest_hex, digest_stream_hex, HashAlgorithm};
use crate::config::HasherConfig;
use crate::encoding::{base64_bytes, to_base64};
use crate::error::{HashingError, HashingResult, NotConfiguredReason};
use crate::random::non_zero_bytes;

/// Factory producing a fresh digest for [`SecureHasher::custom_hash`].
///
/// Returning `None` is reported as [`NotConfiguredReason::FactoryReturnedNone`].
pub type DigestFactory = dyn Fn() -> Option<Box<dyn DynDigest>> + Send + Sync;

/// Salt and digest produced by [`SecureHasher::secure_hash`].
///
/// Store both; pass them back to [`SecureHasher::verify_secure_hash`] later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// Non-zero random salt; serialized as base64.
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,
    /// Uppercase hex SHA-256 of `value ++ base64(salt)`.
    pub value: String,
}

/// Hashing front end: fixed algorithms, salted hashes and an optional
/// caller-supplied algorithm.
///
/// The custom algorithm lives on the instance. Replacing it needs `&mut self`,
/// so configure before sharing the hasher.
#[derive(Clone, Default)]
pub struct SecureHasher {
    config: HasherConfig,
    custom: Option<Arc<DigestFactory>>,
}

impl fmt::Debug for SecureHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureHasher")
            .field("config", &self.config)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl SecureHasher {
    /// Hasher with the default 32-byte salt length and no custom algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher using `config`, validated first.
    pub fn with_config(config: HasherConfig) -> HashingResult<Self> {
        config.validate()?;
        Ok(Self { config, custom: None })
    }

    /// Active configuration.
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Salted hashes
    // ------------------------------------------------------------------

    /// Hash `value` with a freshly generated salt.
    pub fn secure_hash(&self, value: &str) -> HashResult {
        let salt = self.generate_salt();
        let value = self.secure_hash_with_salt(value, &salt);
        HashResult { salt, value }
    }

    /// SHA-256 over `UTF-8(value) ++ base64(salt)`, uppercase hex.
    pub fn secure_hash_with_salt(&self, value: &str, salt: &[u8]) -> String {
        let mut digest = HashAlgorithm::Sha256.new_digest();
        digest.update(value.as_bytes());
        digest.update(to_base64(salt).as_bytes());
        hex::encode_upper(digest.finalize())
    }

    /// Check `value` against a stored [`HashResult`] in constant time.
    pub fn verify_secure_hash(&self, value: &str, stored: &HashResult) -> bool {
        let computed = self.secure_hash_with_salt(value, &stored.salt);
        let expected = stored.value.to_ascii_uppercase();
        computed.as_bytes().ct_eq(expected.as_bytes()).into()
    }

    // ------------------------------------------------------------------
    // Built-in digests
    // ------------------------------------------------------------------

    /// Digest `input` with `algorithm`, uppercase hex.
    pub fn hash(&self, algorithm: HashAlgorithm, input: impl AsRef<[u8]>) -> String {
        digest_hex(algorithm.new_digest(), input.as_ref())
    }

    /// Digest a whole stream with `algorithm`. The stream is rewound first.
    #[instrument(level = "debug", skip_all, fields(algorithm = %algorithm))]
    pub fn hash_stream<R>(&self, algorithm: HashAlgorithm, reader: &mut R) -> HashingResult<String>
    where
        R: Read + Seek + ?Sized,
    {
        digest_stream_hex(algorithm.new_digest(), reader)
    }

    /// SHA-256 of `input`, 64 uppercase hex characters.
    pub fn sha256_hash(&self, input: impl AsRef<[u8]>) -> String {
        self.hash(HashAlgorithm::Sha256, input)
    }

    /// SHA-384 of `input`, 96 uppercase hex characters.
    pub fn sha384_hash(&self, input: impl AsRef<[u8]>) -> String {
        self.hash(HashAlgorithm::Sha384, input)
    }

    /// SHA-512 of `input`, 128 uppercase hex characters.
    pub fn sha512_hash(&self, input: impl AsRef<[u8]>) -> String {
        self.hash(HashAlgorithm::Sha512, input)
    }

    /// MD5 of `input`, 32 uppercase hex characters.
    pub fn md5_hash(&self, input: impl AsRef<[u8]>) -> String {
        self.hash(HashAlgorithm::Md5, input)
    }

    /// SHA-256 of the whole stream, read from position zero.
    pub fn sha256_hash_stream<R: Read + Seek + ?Sized>(
        &self,
        reader: &mut R,
    ) -> HashingResult<String> {
        self.hash_stream(HashAlgorithm::Sha256, reader)
    }

    /// SHA-384 of the whole stream, read from position zero.
    pub fn sha384_hash_stream<R: Read + Seek + ?Sized>(
        &self,
        reader: &mut R,
    ) -> HashingResult<String> {
        self.hash_stream(HashAlgorithm::Sha384, reader)
    }

    /// SHA-512 of the whole stream, read from position zero.
    pub fn sha512_hash_stream<R: Read + Seek + ?Sized>(
        &self,
        reader: &mut R,
    ) -> HashingResult<String> {
        self.hash_stream(HashAlgorithm::Sha512, reader)
    }

    /// MD5 of the whole stream, read from position zero.
    pub fn md5_hash_stream<R: Read + Seek + ?Sized>(
        &self,
        reader: &mut R,
    ) -> HashingResult<String> {
        self.hash_stream(HashAlgorithm::Md5, reader)
    }

    // ------------------------------------------------------------------
    // Custom algorithm
    // ------------------------------------------------------------------

    /// Install the factory used by the `custom_hash*` methods, replacing any
    /// previous one. The factory runs once per call.
    pub fn set_custom_hashing_method<F>(&mut self, factory: F)
    where
        F: Fn() -> Option<Box<dyn DynDigest>> + Send + Sync + 'static,
    {
        let replaced = self.custom.replace(Arc::new(factory)).is_some();
        debug!(replaced, "Custom hashing method set");
    }

    /// Remove the custom algorithm; `custom_hash*` fails until one is set again.
    pub fn clear_custom_hashing_method(&mut self) {
        if self.custom.take().is_some() {
            debug!("Custom hashing method cleared");
        }
    }

    /// True once a custom algorithm has been set.
    pub fn has_custom_hashing_method(&self) -> bool {
        self.custom.is_some()
    }

    /// Digest `input` with the configured custom algorithm.
    pub fn custom_hash(&self, input: impl AsRef<[u8]>) -> HashingResult<String> {
        let digest = self.custom_digest()?;
        Ok(digest_hex(digest, input.as_ref()))
    }

    /// Digest a whole stream with the configured custom algorithm.
    pub fn custom_hash_stream<R: Read + Seek + ?Sized>(
        &self,
        reader: &mut R,
    ) -> HashingResult<String> {
        let digest = self.custom_digest()?;
        digest_stream_hex(digest, reader)
    }

    fn custom_digest(&self) -> HashingResult<Box<dyn DynDigest>> {
        let Some(factory) = self.custom.as_ref() else {
            warn!("Custom hash requested before a hashing method was set");
            return Err(HashingError::not_configured(NotConfiguredReason::FactoryMissing));
        };

        factory().ok_or_else(|| {
            warn!("Custom hashing method returned no algorithm");
            HashingError::not_configured(NotConfiguredReason::FactoryReturnedNone)
        })
    }

    // ------------------------------------------------------------------
    // Salts
    // ------------------------------------------------------------------

    /// `config().salt_length` random bytes, none of them zero.
    pub fn generate_salt(&self) -> Vec<u8> {
        trace!(length = self.config.salt_length, "Generating salt");
        non_zero_bytes(self.config.salt_length)
    }

    /// `length` random bytes, none of them zero.
    pub fn generate_salt_with_length(&self, length: usize) -> HashingResult<Vec<u8>> {
        if length == 0 {
            return Err(HashingError::invalid_argument("length", "Salt length cannot be zero"));
        }
        trace!(length, "Generating salt");
        Ok(non_zero_bytes(length))
    }
}
