//! Random security tokens.

use tracing::trace;

use crate::config::TokenConfig;
use crate::encoding::to_base64;
use crate::error::{HashingError, HashingResult};
use crate::random::uniform_bytes;

/// Encoded length of a token built from `length` random bytes
/// (`ceil(length / 3) * 4`).
pub fn token_length_for(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Generates base64-encoded random tokens from the OS CSPRNG.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator {
    config: TokenConfig,
}

impl TokenGenerator {
    /// Generator producing 32-byte tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator using `config`, validated first.
    pub fn with_config(config: TokenConfig) -> HashingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Token of `config().length` random bytes (32 by default, 44 characters).
    pub fn generate(&self) -> String {
        self.encode(self.config.length)
    }

    /// Token of `length` random bytes.
    pub fn generate_with_length(&self, length: usize) -> HashingResult<String> {
        if length == 0 {
            return Err(HashingError::invalid_argument("length", "Token length cannot be zero"));
        }
        Ok(self.encode(length))
    }

    fn encode(&self, length: usize) -> String {
        trace!(length, "Generating token");
        to_base64(&uniform_bytes(length))
    }
}
