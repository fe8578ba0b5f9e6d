use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::game::{Game, Phase, MIN_PLAYERS};
use crate::domain::rotation::StepKind;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn lobby_game() -> Game {
    Game::new(
        Uuid::new_v4(),
        "AB12".to_string(),
        "Ann".to_string(),
        OffsetDateTime::UNIX_EPOCH,
    )
}

fn started_game() -> Game {
    let mut g = lobby_game();
    g.join("Bob".to_string()).unwrap();
    g.join("Cid".to_string()).unwrap();
    g.start(OffsetDateTime::UNIX_EPOCH).unwrap();
    g
}

#[test]
fn creator_holds_seat_zero() {
    let g = lobby_game();
    assert_eq!(g.player_count(), 1);
    assert_eq!(g.players[0].seat, 0);
    assert!(g.players[0].is_creator);
    assert_eq!(g.phase(), Phase::Lobby);
}

#[test]
fn join_assigns_dense_seats() {
    let mut g = lobby_game();
    assert_eq!(g.join("Bob".to_string()).unwrap(), 1);
    assert_eq!(g.join("Cid".to_string()).unwrap(), 2);
    // Duplicate names are allowed and still get fresh seats.
    assert_eq!(g.join("Bob".to_string()).unwrap(), 3);
    assert!(!g.players[3].is_creator);
}

#[test]
fn join_after_start_fails_and_roster_is_unchanged() {
    let mut g = started_game();
    let err = g.join("Dee".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyStarted, _)
    ));
    assert_eq!(g.player_count(), 3);
}

#[test]
fn start_requires_minimum_roster() {
    let mut g = lobby_game();
    g.join("Bob".to_string()).unwrap();
    assert!(g.player_count() < MIN_PLAYERS);
    let err = g.start(OffsetDateTime::UNIX_EPOCH).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::TooFewPlayers, _)
    ));
    assert!(!g.started);
    assert!(g.chains.is_empty());
}

#[test]
fn start_allocates_one_chain_per_seat_and_is_guarded() {
    let mut g = started_game();
    assert!(g.started);
    assert_eq!(g.chains.len(), 3);
    assert_eq!(g.phase(), Phase::Seeding);
    for (i, c) in g.chains.iter().enumerate() {
        assert_eq!(c.slot as usize, i);
        assert_eq!(c.seed_creator as usize, i);
        assert!(c.seed_word.is_none());
    }

    // A second start must not re-append chains.
    let err = g.start(OffsetDateTime::UNIX_EPOCH).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameAlreadyStarted, _)
    ));
    assert_eq!(g.chains.len(), 3);
}

#[test]
fn submit_seed_targets_own_slot() {
    let mut g = started_game();
    g.submit_seed(1, "dog".to_string()).unwrap();
    assert_eq!(g.chains[1].seed_word.as_deref(), Some("dog"));

    let err = g.submit_seed(1, "ferret".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateSeed, _)
    ));

    let err = g.submit_seed(7, "owl".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSeat, _)
    ));
}

#[test]
fn seed_before_start_is_rejected() {
    let mut g = lobby_game();
    let err = g.submit_seed(0, "cat".to_string()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::GameNotStarted, _)
    ));
}

#[test]
fn chain_at_is_bounds_checked() {
    let g = started_game();
    assert!(g.chain_at(2).is_ok());
    let err = g.chain_at(3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSlot, _)
    ));
}

#[test]
fn full_rotation_scenario() {
    // Ann (0), Bob (1), Cid (2); seeds "cat", "dog", "fish".
    let mut g = started_game();
    g.submit_seed(0, "cat".to_string()).unwrap();
    g.submit_seed(1, "dog".to_string()).unwrap();
    g.submit_seed(2, "fish".to_string()).unwrap();
    assert_eq!(g.phase(), Phase::Relay);

    // Slot 0: Bob draws the seed, Cid names the drawing.
    let claim = g.claim_next(0).unwrap();
    assert_eq!(claim.prompt, "cat");
    assert_eq!(claim.expected_author, 1);
    assert_eq!(claim.expected_kind, StepKind::Drawing);
    g.submit_step(0, 1, StepKind::Drawing, "cat.png".to_string())
        .unwrap();

    let claim = g.claim_next(0).unwrap();
    assert_eq!(claim.prompt, "cat.png");
    assert_eq!(claim.expected_author, 2);
    assert_eq!(claim.expected_kind, StepKind::Word);
    let outcome = g
        .submit_step(0, 2, StepKind::Word, "kitten".to_string())
        .unwrap();
    assert!(outcome.chain_completed);
    assert!(g.chain_at(0).unwrap().is_complete(3));

    // The game completes only once slots 1 and 2 also finish.
    assert!(!g.is_complete());
    for slot in [1u8, 2] {
        for _ in 0..2 {
            let claim = g.claim_next(slot).unwrap();
            g.submit_step(
                slot,
                claim.expected_author,
                claim.expected_kind,
                "next".to_string(),
            )
            .unwrap();
        }
    }
    assert!(g.is_complete());
    assert_eq!(g.phase(), Phase::Complete);

    let err = g.claim_next(0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ChainComplete, _)
    ));
}

#[test]
fn submit_step_rejects_out_of_range_author() {
    let mut g = started_game();
    g.submit_seed(0, "cat".to_string()).unwrap();
    g.claim_next(0).unwrap();
    let err = g
        .submit_step(0, 9, StepKind::Drawing, "cat.png".to_string())
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidSeat, _)
    ));
}
