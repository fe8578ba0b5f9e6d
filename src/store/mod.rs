//! Game persistence port and its adapters.
//!
//! The core consumes three capabilities from storage: load by id, load by
//! join code, and atomic save with conflict detection. `save` is a
//! compare-and-swap on the game's `lock_version`; every mutation in the
//! service layer rides on it, which is what makes claim/release and seat
//! assignment race-safe.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::errors::domain::DomainError;

pub mod memory;
pub mod mongo;
pub mod record;

pub use memory::MemoryGameStore;
pub use mongo::MongoGameStore;

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a freshly created game.
    ///
    /// Fails with `JoinCodeConflict` when another game already holds the
    /// code; the caller redraws and retries.
    async fn insert(&self, game: &Game) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DomainError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Game>, DomainError>;

    /// Atomic save: succeeds only while the stored revision still equals
    /// `game.lock_version`, and returns the game with the bumped revision.
    /// Fails with `OptimisticLock` when a concurrent writer got there first.
    async fn save(&self, game: Game) -> Result<Game, DomainError>;
}
