use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure to encode or decode a payload.
///
/// Kept apart from [`crate::InternalError`]: a malformed payload is bad input,
/// not a broken invariant.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON encoding or decoding failed.
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),
    /// Binary encoding or decoding failed.
    #[error("binary codec error: {0}")]
    Binary(#[from] bincode::Error),
    /// A TOML document could not be parsed.
    #[error("toml codec error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Serializes a value to pretty printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Restores a value from JSON.
pub fn from_json<T: DeserializeOwned>(data: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_str(data)?)
}

/// Serializes a value into a compact binary blob.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(value)?)
}

/// Restores a value from a binary blob produced by [`to_bytes`].
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(bincode::deserialize(bytes)?)
}
