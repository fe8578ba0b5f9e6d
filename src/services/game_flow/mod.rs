//! Game flow service: the operations clients drive the game with.
//!
//! Every mutation is a load → pure domain mutation → atomic save cycle.
//! When the save loses an optimistic-lock race the whole cycle is retried
//! against fresh state, so domain checks (the claim lock, seat assignment,
//! the start guard) always run against what is actually stored. Domain
//! rejections surface immediately and are never retried.

mod lifecycle;
mod relay;

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::game::Game;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::store::GameStore;

/// Bound on load-mutate-save retries before giving up with a conflict.
const MAX_SAVE_ATTEMPTS: u32 = 8;

/// Bound on join-code draws before reporting the code space exhausted.
const MAX_CODE_ATTEMPTS: u32 = 32;

#[derive(Clone)]
pub struct GameFlowService {
    store: Arc<dyn GameStore>,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    pub async fn fetch_game(&self, game_id: Uuid) -> Result<Game, AppError> {
        let game = self.store.find_by_id(game_id).await?;
        game.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found")).into()
        })
    }

    pub async fn fetch_game_by_code(&self, code: &str) -> Result<Game, AppError> {
        let game = self.store.find_by_code(code).await?;
        game.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("No game with code {code}")).into()
        })
    }

    /// Load-mutate-save with bounded retry on optimistic-lock conflicts.
    async fn mutate<T, F>(&self, game_id: Uuid, op: F) -> Result<(Game, T), AppError>
    where
        F: Fn(&mut Game) -> Result<T, DomainError>,
    {
        for _ in 0..MAX_SAVE_ATTEMPTS {
            let mut game = self.fetch_game(game_id).await?;
            let out = op(&mut game)?;
            match self.store.save(game).await {
                Ok(saved) => return Ok((saved, out)),
                Err(DomainError::Conflict(ConflictKind::OptimisticLock, _)) => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(AppError::conflict(
            ErrorCode::OptimisticLock,
            format!("Game {game_id} is under heavy contention; retry"),
        ))
    }
}
