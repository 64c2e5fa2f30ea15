//! Codec trait and implementations for persisted values.
//!
//! A "codec" converts between Rust types and the strings a
//! [`KeyValueStore`](crate::KeyValueStore) holds. The session layer doesn't
//! care how a user record is written down; it just needs something that
//! implements [`Codec`].

use serde::{de::DeserializeOwned, Serialize};

use crate::StorageError;

/// Encodes Rust values to strings and decodes them back.
///
/// `Send + Sync + 'static` so a codec can live inside services shared
/// across tokio tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into a string.
    ///
    /// # Errors
    /// Returns [`StorageError::Encode`] if the value can't be represented.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, StorageError>;

    /// Deserializes a string back into a value.
    ///
    /// # Errors
    /// Returns [`StorageError::Decode`] if the string is malformed or
    /// doesn't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, StorageError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// JSON matches what the web storefront already keeps under its storage
/// keys, so a session written by one can be read by the other.
///
/// ## Example
///
/// ```rust
/// use vitastore_storage::{Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let text = codec.encode(&vec![1, 2, 3]).unwrap();
/// assert_eq!(text, "[1,2,3]");
///
/// let back: Vec<u32> = codec.decode(&text).unwrap();
/// assert_eq!(back, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, StorageError> {
        serde_json::to_string(value).map_err(StorageError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, StorageError> {
        serde_json::from_str(data).map_err(StorageError::Decode)
    }
}
