//! Local persistence for Vitastore.
//!
//! The storefront keeps exactly two pieces of state across restarts: the
//! signed-in user and the chosen language. Both live in a flat string
//! key-value store, the same shape a browser's local storage has.
//!
//! - **Stores** ([`KeyValueStore`] trait, [`MemoryStore`], [`FileStore`]):
//!   where the strings are kept.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how structured values
//!   are turned into those strings and back.
//! - **Errors** ([`StorageError`]): what can go wrong doing either.
//!
//! # Architecture
//!
//! ```text
//! Session / i18n (above)  ← decide WHAT to persist and under which key
//!     ↕
//! Storage (this crate)    ← decides HOW and WHERE it is kept
//! ```

mod codec;
mod error;
mod file;
mod memory;
mod store;

pub use codec::{Codec, JsonCodec};
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, LANGUAGE_KEY, SESSION_KEY};
