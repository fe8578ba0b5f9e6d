//! Chain slot state machine: seed, then repeated claim/submit rounds, then complete.
//!
//! A chain enforces ordering, author identity, and the claim lock. The
//! word/drawing alternation itself comes from `rotation`; the chain applies
//! it uniformly on every submit.

use time::OffsetDateTime;

use crate::domain::rotation::{kind_for_round, responsible_player, Round, Seat, StepKind};
use crate::errors::domain::{ConflictKind, DomainError};

/// One contribution appended to a chain. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// 1-based relay round this step fills (the seed is round 0).
    pub round_no: Round,
    pub author: Seat,
    pub kind: StepKind,
    /// Word text, or the opaque drawing reference handed out by file storage.
    pub content: String,
}

/// Chain lifecycle, derived from the seed and the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPhase {
    /// Allocated at game start, waiting for its owner's seed word.
    AwaitingSeed,
    /// Seeded; the step for `round_no` is open for a claim.
    OpenForRound { round_no: Round },
    /// All N-1 relay steps recorded.
    Complete,
}

/// What a successful claim hands back to the claimant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedStep {
    pub slot: Seat,
    /// Round the claimant is expected to fill.
    pub round_no: Round,
    /// Kind of the content to continue from.
    pub prompt_kind: StepKind,
    /// Latest step content, or the seed word when no steps exist yet.
    pub prompt: String,
    pub expected_author: Seat,
    pub expected_kind: StepKind,
}

/// State changes produced by a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub round_no: Round,
    pub chain_completed: bool,
}

/// One relay chain, owned by the game that allocated it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Slot index; equals the seat of the player who seeds this chain.
    pub slot: Seat,
    pub seed_creator: Seat,
    /// None until the owning seat submits its first word.
    pub seed_word: Option<String>,
    /// Claim lock. While true, exactly one claimant may submit the open step.
    pub in_use: bool,
    pub steps: Vec<Step>,
    pub created_at: OffsetDateTime,
}

impl Chain {
    pub fn new(slot: Seat, created_at: OffsetDateTime) -> Self {
        Self {
            slot,
            seed_creator: slot,
            seed_word: None,
            in_use: false,
            steps: Vec::new(),
            created_at,
        }
    }

    /// Relay steps this chain needs beyond the seed.
    fn target_steps(player_count: u8) -> usize {
        player_count.saturating_sub(1) as usize
    }

    pub fn phase(&self, player_count: u8) -> ChainPhase {
        if self.seed_word.is_none() {
            ChainPhase::AwaitingSeed
        } else if self.steps.len() >= Self::target_steps(player_count) {
            ChainPhase::Complete
        } else {
            ChainPhase::OpenForRound {
                round_no: self.steps.len() as Round + 1,
            }
        }
    }

    pub fn is_complete(&self, player_count: u8) -> bool {
        matches!(self.phase(player_count), ChainPhase::Complete)
    }

    /// Record the seed word. Valid exactly once.
    pub fn seed(&mut self, word: String) -> Result<(), DomainError> {
        if self.seed_word.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateSeed,
                format!("Slot {} is already seeded", self.slot),
            ));
        }
        self.seed_word = Some(word);
        Ok(())
    }

    /// Claim the open step of this chain.
    ///
    /// Exactly one of any set of concurrent claimants wins; the rest see
    /// `AlreadyLocked` and receive no content. The caller must persist the
    /// mutated chain before showing the prompt to the claimant.
    pub fn try_claim(&mut self, player_count: u8) -> Result<ClaimedStep, DomainError> {
        let round_no = match self.phase(player_count) {
            ChainPhase::AwaitingSeed => {
                return Err(DomainError::conflict(
                    ConflictKind::ChainNotSeeded,
                    format!("Slot {} has no seed word yet", self.slot),
                ));
            }
            ChainPhase::Complete => {
                return Err(DomainError::conflict(
                    ConflictKind::ChainComplete,
                    format!("Slot {} has rotated through every player", self.slot),
                ));
            }
            ChainPhase::OpenForRound { round_no } => round_no,
        };

        if self.in_use {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyLocked,
                format!("Slot {} is claimed by another player", self.slot),
            ));
        }
        self.in_use = true;

        let (prompt_kind, prompt) = match self.steps.last() {
            Some(step) => (step.kind, step.content.clone()),
            None => match &self.seed_word {
                Some(word) => (StepKind::Word, word.clone()),
                // unreachable: AwaitingSeed was handled above
                None => {
                    return Err(DomainError::conflict(
                        ConflictKind::ChainNotSeeded,
                        format!("Slot {} has no seed word yet", self.slot),
                    ));
                }
            },
        };

        Ok(ClaimedStep {
            slot: self.slot,
            round_no,
            prompt_kind,
            prompt,
            expected_author: responsible_player(self.slot, round_no, player_count),
            expected_kind: kind_for_round(round_no),
        })
    }

    /// Record the next step and release the claim lock.
    ///
    /// Valid only while the slot is held by a claim. A failed submit leaves
    /// the lock in place so the same claimant can correct and retry; the
    /// step list is never touched on failure.
    pub fn submit(
        &mut self,
        player_count: u8,
        author: Seat,
        kind: StepKind,
        content: String,
    ) -> Result<SubmitOutcome, DomainError> {
        let round_no = match self.phase(player_count) {
            ChainPhase::AwaitingSeed => {
                return Err(DomainError::conflict(
                    ConflictKind::ChainNotSeeded,
                    format!("Slot {} has no seed word yet", self.slot),
                ));
            }
            ChainPhase::Complete => {
                return Err(DomainError::conflict(
                    ConflictKind::ChainComplete,
                    format!("Slot {} has rotated through every player", self.slot),
                ));
            }
            ChainPhase::OpenForRound { round_no } => round_no,
        };

        if !self.in_use {
            return Err(DomainError::conflict(
                ConflictKind::NotClaimed,
                format!("Round {round_no} of slot {} was not claimed first", self.slot),
            ));
        }

        let expected_author = responsible_player(self.slot, round_no, player_count);
        if author != expected_author {
            return Err(DomainError::conflict(
                ConflictKind::UnexpectedAuthor,
                format!(
                    "Round {round_no} of slot {} belongs to seat {expected_author}, not seat {author}",
                    self.slot
                ),
            ));
        }

        let expected_kind = kind_for_round(round_no);
        if kind != expected_kind {
            return Err(DomainError::conflict(
                ConflictKind::KindMismatch,
                format!("Round {round_no} of slot {} expects a {expected_kind:?}", self.slot),
            ));
        }

        self.steps.push(Step {
            round_no,
            author,
            kind,
            content,
        });
        self.in_use = false;

        Ok(SubmitOutcome {
            round_no,
            chain_completed: self.is_complete(player_count),
        })
    }
}
