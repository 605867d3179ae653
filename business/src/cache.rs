//! Client-side cache that acts as the system of record for user data.
//!
//! The cache holds one slot, `users`, containing the JSON array exactly as the
//! endpoint serves it. Reads distinguish a missing slot from an unparseable
//! one so callers can decide whether to refetch or to drop a mutation.

use crate::records::UserRecord;
use lendboard_states::State;
use std::collections::HashMap;
use thiserror::Error;

/// Error raised when a cache slot cannot be written.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to persist cache slot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to persist cache slot: {0}")]
    Store(String),
}

/// Backing storage for cache slots.
///
/// Implementations are deliberately dumb string maps; parsing and policy live
/// in [`UserCache`]. The app wires a persistent store on each platform, tests
/// use [`MemoryStore`].
pub trait CacheStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&mut self, key: &str);
}

/// In-memory store, used by tests and as the fallback when no persistent
/// storage is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}

/// Store backed by one JSON file per slot under the app's storage directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: std::path::PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(key).with_extension("json")
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CacheStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = std::fs::remove_file(self.slot_path(key));
    }
}

/// Outcome of reading the `users` slot.
#[derive(Debug, PartialEq)]
pub enum CacheRead {
    /// The slot has never been written (or was cleared).
    Missing,
    /// The slot exists but does not parse as a user array.
    Corrupt,
    /// The slot parsed. An empty array is still a hit.
    Records(Vec<UserRecord>),
}

/// State wrapping the platform cache store.
///
/// Accessed via `state_mut::<UserCache>()` by the commands that resolve and
/// mutate table data.
pub struct UserCache {
    store: Box<dyn CacheStore>,
}

impl std::fmt::Debug for UserCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCache").finish_non_exhaustive()
    }
}

impl Default for UserCache {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl State for UserCache {}

impl UserCache {
    /// Slot name shared with the original web console's localStorage key.
    pub const USERS_SLOT: &'static str = "users";

    pub fn new(store: Box<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    pub fn read_users(&self) -> CacheRead {
        match self.store.get(Self::USERS_SLOT) {
            None => CacheRead::Missing,
            Some(raw) => match serde_json::from_str::<Vec<UserRecord>>(&raw) {
                Ok(records) => CacheRead::Records(records),
                Err(err) => {
                    log::error!("users cache slot is unparseable: {err}");
                    CacheRead::Corrupt
                }
            },
        }
    }

    pub fn write_users(&mut self, records: &[UserRecord]) -> Result<(), CacheError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(Self::USERS_SLOT, &raw)
    }

    /// Write the slot verbatim. Lets tests seed hits, empty arrays and
    /// corrupt payloads without going through serialization.
    pub fn write_raw(&mut self, raw: &str) -> Result<(), CacheError> {
        self.store.set(Self::USERS_SLOT, raw)
    }

    pub fn clear_users(&mut self) {
        self.store.remove(Self::USERS_SLOT);
    }
}
