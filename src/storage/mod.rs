//! Durable Client Storage
//!
//! A small string key-value store that survives restarts, playing the part
//! a browser's local storage plays for a web client. The session keeps two
//! entries here: the serialized principal and the literal `Authorization`
//! header value.
//!
//! - **kv**: the [`KeyValueStore`] trait, a JSON-file store and an in-memory store
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_admin::storage::{FileStore, KeyValueStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::new("./data/session.json");
//!     store.set("auth", "Basic YWRtaW5AaG90ZWwuY29tOmFkbWluMTIz").await?;
//!     assert!(store.get("auth").await?.is_some());
//!     store.remove("auth").await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;

pub use error::{StorageError, StorageResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
