//! Persistence for HBnB models.
//!
//! Models only bump their own timestamps; this crate keeps their records,
//! keyed by `"<TypeName>.<id>"`, and writes them durably.

pub mod config;
pub mod error;
pub mod file;
pub mod in_memory;
pub mod store;

pub use config::StorageConfig;
pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
pub use store::{Objects, Storage, save_model};
