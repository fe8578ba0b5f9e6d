use std::sync::Arc;

use crate::services::GameFlowService;
use crate::store::{GameStore, MemoryGameStore};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Game persistence; held explicitly rather than registered globally.
    pub store: Arc<dyn GameStore>,
    pub games: GameFlowService,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            games: GameFlowService::new(store.clone()),
            store,
        }
    }

    /// State backed by the in-memory store, for tests and local runs.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryGameStore::new()))
    }
}
