//! Built-in digest algorithms and the shared digest/encode helpers.

use std::fmt;
use std::io::{Read, Seek};
use std::str::FromStr;

use digest::DynDigest;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};

use crate::error::{HashingError, HashingResult};

const STREAM_CHUNK_SIZE: usize = 8 * 1024;

/// Digest algorithms available without custom configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// MD5, 16-byte digest. Not collision resistant; use for checksums only.
    Md5,
    /// SHA-256, 32-byte digest.
    Sha256,
    /// SHA-384, 48-byte digest.
    Sha384,
    /// SHA-512, 64-byte digest.
    Sha512,
}

impl HashAlgorithm {
    /// Every built-in algorithm.
    pub const ALL: [Self; 4] = [Self::Md5, Self::Sha256, Self::Sha384, Self::Sha512];

    /// Canonical lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex-encoded digest.
    pub fn hex_len(self) -> usize {
        self.output_size() * 2
    }

    /// Fresh digest instance for this algorithm.
    pub fn new_digest(self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::new(Md5::default()),
            Self::Sha256 => Box::new(Sha256::default()),
            Self::Sha384 => Box::new(Sha384::default()),
            Self::Sha512 => Box::new(Sha512::default()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Self::ALL.into_iter().find(|algorithm| algorithm.name() == normalized).ok_or_else(|| {
            HashingError::invalid_argument("algorithm", format!("unsupported algorithm: {s}"))
        })
    }
}

/// Digest `data` and render it as uppercase hex.
pub(crate) fn digest_hex(mut digest: Box<dyn DynDigest>, data: &[u8]) -> String {
    digest.update(data);
    hex::encode_upper(digest.finalize())
}

/// Rewind `reader`, feed it to `digest` until EOF and render uppercase hex.
pub(crate) fn digest_stream_hex<R>(
    mut digest: Box<dyn DynDigest>,
    reader: &mut R,
) -> HashingResult<String>
where
    R: Read + Seek + ?Sized,
{
    reader.rewind()?;

    let mut buffer = [0u8; STREAM_CHUNK_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        digest.update(&buffer[..read]);
    }

    Ok(hex::encode_upper(digest.finalize()))
}
