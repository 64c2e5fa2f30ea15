//! Error types for the storage layer.
//!
//! Each crate in Vitastore defines its own error enum. A `StorageError`
//! always means the problem is in keeping or decoding persisted strings,
//! never in authentication or translation.

use std::path::PathBuf;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Serialization failed (turning a Rust value into a stored string).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a stored string into a Rust value).
    ///
    /// Common causes: a blob written by an older build, a hand-edited
    /// file, or a truncated write.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("storage file {path} unavailable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
