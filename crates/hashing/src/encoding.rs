//! Text encodings shared by the hasher and the token generator.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Standard-alphabet, padded base64.
pub(crate) fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Serde adapter storing a byte vector as standard base64 text.
///
/// # Usage
/// ```rust
/// use pulsearc_hashing::encoding::base64_bytes;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Record {
///     #[serde(with = "base64_bytes")]
///     salt: Vec<u8>,
/// }
/// ```
pub mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::BASE64;

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Serialize bytes as base64 text
    pub fn serialize<S>(bytes: &[u8], serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    /// Deserialize base64 text into bytes
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        BASE64.decode(text.as_bytes()).map_err(serde::de::Error::custom)
    }
}
