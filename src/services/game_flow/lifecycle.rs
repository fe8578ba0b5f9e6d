//! Lobby-phase operations: create, join, start, and seed collection.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use super::{GameFlowService, MAX_CODE_ATTEMPTS};
use crate::domain::game::Game;
use crate::domain::rotation::Seat;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::utils::join_code::generate_join_code;

/// Longest accepted player name.
const MAX_NAME_LEN: usize = 64;

impl GameFlowService {
    /// Create a game with the creator seated at 0, under a fresh join code.
    ///
    /// Codes are drawn and checked against the store until one is unused,
    /// bounded by `MAX_CODE_ATTEMPTS`. The store's duplicate-code rejection
    /// closes the race between the check and the insert.
    pub async fn create_game(&self, creator_name: &str) -> Result<Game, AppError> {
        let name = validate_player_name(creator_name)?;

        for attempt in 0..MAX_CODE_ATTEMPTS {
            let code = generate_join_code();
            if self.find_code_in_use(&code).await? {
                debug!(attempt, "join code collision, redrawing");
                continue;
            }
            let game = Game::new(Uuid::new_v4(), code, name.clone(), OffsetDateTime::now_utc());
            match self.store.insert(&game).await {
                Ok(()) => {
                    info!(game_id = %game.id, code = %game.code, "game created");
                    return Ok(game);
                }
                // Lost the insert race for this code; draw another.
                Err(DomainError::Conflict(ConflictKind::JoinCodeConflict, _)) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::conflict(
            ErrorCode::CodeSpaceExhausted,
            format!("Could not draw an unused join code in {MAX_CODE_ATTEMPTS} attempts"),
        ))
    }

    /// Join the lobby of the game with the given code. Returns the updated
    /// game and the seat assigned to the new player.
    pub async fn join_game(&self, code: &str, name: &str) -> Result<(Game, Seat), AppError> {
        let name = validate_player_name(name)?;
        let game = self.fetch_game_by_code(code).await?;
        let (game, seat) = self.mutate(game.id, |g| g.join(name.clone())).await?;
        info!(game_id = %game.id, seat, "player joined");
        Ok((game, seat))
    }

    /// Close the lobby and allocate the chains.
    pub async fn start_game(&self, game_id: Uuid) -> Result<Game, AppError> {
        let (game, ()) = self
            .mutate(game_id, |g| g.start(OffsetDateTime::now_utc()))
            .await?;
        info!(game_id = %game.id, players = game.player_count(), "game started");
        Ok(game)
    }

    /// Record a seat's seed word.
    pub async fn submit_seed(
        &self,
        game_id: Uuid,
        seat: Seat,
        word: &str,
    ) -> Result<Game, AppError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingWord,
                "Seed word must not be empty",
            )
            .into());
        }
        let word = word.to_string();
        let (game, ()) = self
            .mutate(game_id, |g| g.submit_seed(seat, word.clone()))
            .await?;
        debug!(game_id = %game.id, seat, "seed recorded");
        Ok(game)
    }

    async fn find_code_in_use(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.store.find_by_code(code).await?.is_some())
    }
}

fn validate_player_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingName,
            "Player name must not be empty",
        )
        .into());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::Other("NAME_TOO_LONG".into()),
            format!("Player name is capped at {MAX_NAME_LEN} characters"),
        )
        .into());
    }
    Ok(name.to_string())
}
