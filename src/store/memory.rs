//! In-memory game store for tests and single-process deployments.
//!
//! Documents live in a `HashMap` behind one `parking_lot::RwLock`. The lock
//! is held only for the in-memory check-and-swap, never across I/O, so the
//! compare-and-swap in `save` is a single atomic step.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::store::record::GameRecord;
use crate::store::GameStore;

#[derive(Default)]
struct Inner {
    games: HashMap<String, GameRecord>,
    /// Join code → game id.
    codes: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryGameStore {
    inner: RwLock<Inner>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn insert(&self, game: &Game) -> Result<(), DomainError> {
        let rec = GameRecord::from(game);
        let mut inner = self.inner.write();
        if inner.codes.contains_key(&rec.code) {
            return Err(DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                format!("Join code {} is already in use", rec.code),
            ));
        }
        inner.codes.insert(rec.code.clone(), rec.id.clone());
        inner.games.insert(rec.id.clone(), rec);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DomainError> {
        let rec = self.inner.read().games.get(&id.to_string()).cloned();
        rec.map(Game::try_from).transpose()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Game>, DomainError> {
        let rec = {
            let inner = self.inner.read();
            inner
                .codes
                .get(code)
                .and_then(|id| inner.games.get(id))
                .cloned()
        };
        rec.map(Game::try_from).transpose()
    }

    async fn save(&self, game: Game) -> Result<Game, DomainError> {
        let mut rec = GameRecord::from(&game);
        let expected = rec.lock_version;
        rec.lock_version = expected + 1;

        let mut inner = self.inner.write();
        let current = inner.games.get_mut(&rec.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {} not found", rec.id))
        })?;
        if current.lock_version != expected {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Game revision moved from {expected} to {}; reload and retry",
                    current.lock_version
                ),
            ));
        }
        *current = rec;
        drop(inner);

        let mut saved = game;
        saved.lock_version = expected + 1;
        Ok(saved)
    }
}
