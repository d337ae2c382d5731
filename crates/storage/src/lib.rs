#![forbid(unsafe_code)]

pub mod progress;
pub mod repository;
pub mod sqlite;

pub use progress::{PROGRESS_KEY, ProgressRecord, decode_progress, encode_progress};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
