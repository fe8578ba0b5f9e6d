//! Domain layer: pure game logic types and helpers.

pub mod chain;
pub mod game;
pub mod rotation;

#[cfg(test)]
mod tests_chain;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_rotation;

// Re-exports for ergonomics
pub use chain::{Chain, ChainPhase, ClaimedStep, Step, SubmitOutcome};
pub use game::{Game, Phase, Player, MAX_PLAYERS, MIN_PLAYERS};
pub use rotation::{kind_for_round, responsible_player, Round, Seat, StepKind};
