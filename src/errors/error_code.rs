//! Error codes for the Sketchline API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Sketchline API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player name missing or empty
    MissingName,
    /// Seed word missing or empty
    MissingWord,
    /// Step content missing or empty
    MissingContent,
    /// Invalid game ID provided
    InvalidGameId,
    /// Seat number out of range
    InvalidSeat,
    /// Chain slot index out of range
    InvalidSlot,
    /// Not enough players to start the rotation
    TooFewPlayers,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Chain slot already claimed by another player
    AlreadyLocked,
    /// Step submitted without a prior claim
    NotClaimed,
    /// Game has already been started
    GameAlreadyStarted,
    /// Game has not been started yet
    GameNotStarted,
    /// Game roster is full
    GameFull,
    /// Chain slot already seeded
    DuplicateSeed,
    /// Chain slot has no seed word yet
    ChainNotSeeded,
    /// Chain has already rotated through every player
    ChainComplete,
    /// Submitting seat does not match the rotation
    UnexpectedAuthor,
    /// Step kind breaks the word/drawing alternation
    KindMismatch,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Join code already exists
    JoinCodeConflict,
    /// Could not draw an unused join code
    CodeSpaceExhausted,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Store error
    DbError,
    /// Store unavailable
    DbUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::MissingName => "MISSING_NAME",
            Self::MissingWord => "MISSING_WORD",
            Self::MissingContent => "MISSING_CONTENT",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::InvalidSlot => "INVALID_SLOT",
            Self::TooFewPlayers => "TOO_FEW_PLAYERS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::AlreadyLocked => "ALREADY_LOCKED",
            Self::NotClaimed => "NOT_CLAIMED",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameFull => "GAME_FULL",
            Self::DuplicateSeed => "DUPLICATE_SEED",
            Self::ChainNotSeeded => "CHAIN_NOT_SEEDED",
            Self::ChainComplete => "CHAIN_COMPLETE",
            Self::UnexpectedAuthor => "UNEXPECTED_AUTHOR",
            Self::KindMismatch => "KIND_MISMATCH",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::CodeSpaceExhausted => "CODE_SPACE_EXHAUSTED",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
