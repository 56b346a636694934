//! Serde-backed configuration for the hasher and token generator.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HashingError, HashingResult};

/// Default salt length in bytes.
pub const DEFAULT_SALT_LENGTH: usize = 32;
/// Default token length in bytes (before base64 encoding).
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Settings for [`crate::SecureHasher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Bytes of salt drawn by `generate_salt` and `secure_hash`.
    pub salt_length: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self { salt_length: DEFAULT_SALT_LENGTH }
    }
}

impl HasherConfig {
    /// Validated config with the given salt length.
    pub fn with_salt_length(salt_length: usize) -> HashingResult<Self> {
        let config = Self { salt_length };
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero salt length.
    pub fn validate(&self) -> HashingResult<()> {
        if self.salt_length == 0 {
            return Err(HashingError::invalid_argument(
                "salt_length",
                "Salt length cannot be zero",
            ));
        }
        Ok(())
    }
}

/// Settings for [`crate::TokenGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Random bytes per token.
    pub length: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self { length: DEFAULT_TOKEN_LENGTH }
    }
}

impl TokenConfig {
    /// Validated config with the given token length.
    pub fn with_length(length: usize) -> HashingResult<Self> {
        let config = Self { length };
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero token length.
    pub fn validate(&self) -> HashingResult<()> {
        if self.length == 0 {
            return Err(HashingError::invalid_argument("length", "Token length cannot be zero"));
        }
        Ok(())
    }
}

/// Combined configuration, as stored in a TOML file:
///
/// ```toml
/// [hasher]
/// salt_length = 32
///
/// [token]
/// length = 64
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// `[hasher]` section.
    pub hasher: HasherConfig,
    /// `[token]` section.
    pub token: TokenConfig,
}

impl HashingConfig {
    /// Parse and validate TOML text. Missing sections use defaults.
    pub fn from_toml_str(text: &str) -> HashingResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| HashingError::config(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> HashingResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            HashingError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            salt_length = config.hasher.salt_length,
            token_length = config.token.length,
            "Loaded hashing configuration"
        );
        Ok(config)
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> HashingResult<String> {
        toml::to_string(self)
            .map_err(|e| HashingError::config(format!("Failed to serialize TOML: {e}")))
    }

    /// Validate both sections.
    pub fn validate(&self) -> HashingResult<()> {
        self.hasher.validate()?;
        self.token.validate()
    }
}
