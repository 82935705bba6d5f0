pub mod config;
pub mod event_store;
pub mod kv;
pub mod sqlite;

pub use event_store::{EVENTS_KEY, EventStore};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use sqlite::SqliteStore;

use config::{Backend, StorageConfig};

pub fn open_backend(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>, StorageError> {
    tracing::info!("Opening {:?} store at {}", config.backend, config.path.display());
    let backend: Box<dyn KeyValueStore> = match config.backend {
        Backend::Sqlite => Box::new(SqliteStore::open(&config.path)?),
        Backend::File => Box::new(FileStore::new(&config.path)),
        Backend::Memory => Box::new(MemoryStore::new()),
    };
    Ok(backend)
}
