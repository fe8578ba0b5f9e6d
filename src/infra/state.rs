use std::sync::Arc;

use tracing::info;

use crate::config::{StoreConfig, StoreKind};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{MemoryGameStore, MongoGameStore};

/// Builds the shared application state for the configured store backend.
pub async fn build_state(config: &StoreConfig) -> Result<AppState, AppError> {
    match config.kind {
        StoreKind::Memory => {
            info!("using in-memory game store");
            Ok(AppState::new(Arc::new(MemoryGameStore::new())))
        }
        StoreKind::Mongo => {
            info!(db = %config.mongo_db, "connecting to mongodb");
            let store = MongoGameStore::connect(&config.mongo_uri, &config.mongo_db).await?;
            Ok(AppState::new(Arc::new(store)))
        }
    }
}
