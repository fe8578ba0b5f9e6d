//! Game aggregate: roster, lifecycle, and the N relay chains.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::chain::{Chain, ClaimedStep, SubmitOutcome};
use crate::domain::rotation::{Seat, StepKind};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Fewest seats for a meaningful rotation. Below this the relay degenerates
/// into a player answering their own chain immediately.
pub const MIN_PLAYERS: u8 = 3;

/// Roster cap; keeps seat numbers comfortably inside `Seat`.
pub const MAX_PLAYERS: u8 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Seat index, assigned at join time, dense and immutable.
    pub seat: Seat,
    pub name: String,
    /// Exactly one player per game, always seat 0.
    pub is_creator: bool,
}

/// Overall game progression, derived from roster and chain state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Roster still open.
    Lobby,
    /// Started; at least one chain is waiting for its seed word.
    Seeding,
    /// All chains seeded; rotation in progress.
    Relay,
    /// Every chain has rotated through every player.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    /// Short human-enterable join code, unique among stored games.
    pub code: String,
    pub created_at: OffsetDateTime,
    pub started: bool,
    pub players: Vec<Player>,
    /// One chain per player once started; never resized afterwards.
    pub chains: Vec<Chain>,
    /// Store revision for optimistic concurrency; bumped on every save.
    pub lock_version: i32,
}

impl Game {
    pub fn new(id: Uuid, code: String, creator_name: String, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            code,
            created_at,
            started: false,
            players: vec![Player {
                seat: 0,
                name: creator_name,
                is_creator: true,
            }],
            chains: Vec::new(),
            lock_version: 0,
        }
    }

    pub fn player_count(&self) -> u8 {
        self.players.len() as u8
    }

    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Lobby
        } else if self.chains.iter().any(|c| c.seed_word.is_none()) {
            Phase::Seeding
        } else if self.is_complete() {
            Phase::Complete
        } else {
            Phase::Relay
        }
    }

    /// Add a player to the roster. Lobby only; duplicate names are allowed.
    /// Returns the assigned seat.
    pub fn join(&mut self, name: String) -> Result<Seat, DomainError> {
        if self.started {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "The roster closed when the game started",
            ));
        }
        if self.player_count() >= MAX_PLAYERS {
            return Err(DomainError::conflict(
                ConflictKind::GameFull,
                format!("The roster is capped at {MAX_PLAYERS} players"),
            ));
        }
        let seat = self.players.len() as Seat;
        self.players.push(Player {
            seat,
            name,
            is_creator: false,
        });
        Ok(seat)
    }

    /// Close the lobby and allocate one empty chain per seat.
    ///
    /// Guarded transition: a second call is rejected rather than re-appending
    /// chains, and the roster must reach `MIN_PLAYERS` first.
    pub fn start(&mut self, now: OffsetDateTime) -> Result<(), DomainError> {
        if self.started {
            return Err(DomainError::conflict(
                ConflictKind::GameAlreadyStarted,
                "The game has already been started",
            ));
        }
        if self.player_count() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::TooFewPlayers,
                format!("A game needs at least {MIN_PLAYERS} players to start"),
            ));
        }
        self.started = true;
        self.chains = (0..self.player_count())
            .map(|slot| Chain::new(slot, now))
            .collect();
        Ok(())
    }

    /// Record a seat's seed word into the chain at that seat's slot.
    pub fn submit_seed(&mut self, seat: Seat, word: String) -> Result<(), DomainError> {
        self.require_started()?;
        if seat >= self.player_count() {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Seat {seat} is out of range for {} players", self.player_count()),
            ));
        }
        self.chains[seat as usize].seed(word)
    }

    pub fn chain_at(&self, slot: Seat) -> Result<&Chain, DomainError> {
        self.chains.get(slot as usize).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidSlot,
                format!("Slot {slot} is out of range for {} chains", self.chains.len()),
            )
        })
    }

    fn chain_at_mut(&mut self, slot: Seat) -> Result<&mut Chain, DomainError> {
        let len = self.chains.len();
        self.chains.get_mut(slot as usize).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidSlot,
                format!("Slot {slot} is out of range for {len} chains"),
            )
        })
    }

    /// Claim the open step of the chain at `slot`.
    pub fn claim_next(&mut self, slot: Seat) -> Result<ClaimedStep, DomainError> {
        self.require_started()?;
        let player_count = self.player_count();
        self.chain_at_mut(slot)?.try_claim(player_count)
    }

    /// Record the next step of the chain at `slot`.
    pub fn submit_step(
        &mut self,
        slot: Seat,
        author: Seat,
        kind: StepKind,
        content: String,
    ) -> Result<SubmitOutcome, DomainError> {
        self.require_started()?;
        let player_count = self.player_count();
        if author >= player_count {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("Seat {author} is out of range for {player_count} players"),
            ));
        }
        self.chain_at_mut(slot)?.submit(player_count, author, kind, content)
    }

    /// True once every chain has its full rotation of steps.
    pub fn is_complete(&self) -> bool {
        let player_count = self.player_count();
        self.started
            && !self.chains.is_empty()
            && self.chains.iter().all(|c| c.is_complete(player_count))
    }

    fn require_started(&self) -> Result<(), DomainError> {
        if self.started {
            Ok(())
        } else {
            Err(DomainError::conflict(
                ConflictKind::GameNotStarted,
                "The game has not been started yet",
            ))
        }
    }
}
