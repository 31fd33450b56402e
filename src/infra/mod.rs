//! Infrastructure layer (adapters/implementations).
//!
//! This module contains the IO-heavy pieces: storage backends, record
//! encoding and on-disk configuration.

pub mod app_config;
pub mod db;
pub mod snapshot;
pub mod store;

use anyhow::Result;
use app_config::{AppConfig, StorageBackend};
use db::{DB_FILENAME, Database};
use store::{JsonDirStore, KeyValueStore};

/// Open the configured durable store.
pub fn open_store(config: &AppConfig) -> Result<Box<dyn KeyValueStore>> {
    let dir = config.resolved_data_dir();
    log::debug!("opening {} store in {}", config.backend, dir.display());
    let store: Box<dyn KeyValueStore> = match config.backend {
        StorageBackend::Sqlite => Box::new(Database::open_or_recover(dir.join(DB_FILENAME))?),
        StorageBackend::Json => Box::new(JsonDirStore::new(dir)),
    };
    Ok(store)
}
