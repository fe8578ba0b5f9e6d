//! Relay-phase operations: claim the open step of a chain, submit the next.
//!
//! Claim and submit both persist through the store's compare-and-swap, so
//! of two concurrent claims on one slot exactly one save lands; the loser
//! re-runs against the stored state, sees the lock, and gets
//! `AlreadyLocked`. A submit's step append and lock release land in the
//! same document write, making the submit durable before the release is
//! observable.

use tracing::{debug, info};
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::chain::{ClaimedStep, SubmitOutcome};
use crate::domain::game::Game;
use crate::domain::rotation::{Seat, StepKind};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlowService {
    /// Claim the open step of the chain at `slot` and return the content
    /// the claimant continues from, plus the expected author and kind.
    pub async fn claim_next(
        &self,
        game_id: Uuid,
        slot: Seat,
    ) -> Result<(Game, ClaimedStep), AppError> {
        let (game, claim) = self.mutate(game_id, |g| g.claim_next(slot)).await?;
        debug!(
            game_id = %game.id,
            slot,
            round = claim.round_no,
            author = claim.expected_author,
            "step claimed"
        );
        Ok((game, claim))
    }

    /// Record the next step of the chain at `slot`. For drawings the
    /// content is the reference string handed out by file storage; image
    /// bytes are never interpreted here.
    pub async fn submit_step(
        &self,
        game_id: Uuid,
        slot: Seat,
        author: Seat,
        kind: StepKind,
        content: &str,
    ) -> Result<(Game, SubmitOutcome), AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingContent,
                "Step content must not be empty",
            )
            .into());
        }
        let content = content.to_string();

        let (game, outcome) = self
            .mutate(game_id, |g| {
                g.submit_step(slot, author, kind, content.clone())
            })
            .await?;

        if outcome.chain_completed {
            info!(game_id = %game.id, slot, "chain complete");
        } else {
            debug!(game_id = %game.id, slot, round = outcome.round_no, "step recorded");
        }
        if game.is_complete() {
            info!(game_id = %game.id, "all chains complete");
        }
        Ok((game, outcome))
    }
}
