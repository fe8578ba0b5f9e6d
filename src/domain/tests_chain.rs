use time::OffsetDateTime;

use crate::domain::chain::{Chain, ChainPhase};
use crate::domain::rotation::StepKind;
use crate::errors::domain::{ConflictKind, DomainError};

const N: u8 = 3;

fn chain(slot: u8) -> Chain {
    Chain::new(slot, OffsetDateTime::UNIX_EPOCH)
}

fn seeded_chain(slot: u8) -> Chain {
    let mut c = chain(slot);
    c.seed("cat".to_string()).unwrap();
    c
}

fn assert_conflict(err: DomainError, kind: ConflictKind) {
    match err {
        DomainError::Conflict(k, _) => assert_eq!(k, kind),
        other => panic!("expected conflict {kind:?}, got {other:?}"),
    }
}

#[test]
fn unseeded_chain_rejects_claims() {
    let mut c = chain(0);
    assert_eq!(c.phase(N), ChainPhase::AwaitingSeed);
    assert_conflict(c.try_claim(N).unwrap_err(), ConflictKind::ChainNotSeeded);
}

#[test]
fn seed_is_recorded_once() {
    let mut c = chain(0);
    c.seed("cat".to_string()).unwrap();
    assert_eq!(c.seed_word.as_deref(), Some("cat"));
    assert_conflict(
        c.seed("dog".to_string()).unwrap_err(),
        ConflictKind::DuplicateSeed,
    );
    assert_eq!(c.seed_word.as_deref(), Some("cat"));
}

#[test]
fn claim_returns_seed_prompt_and_rotation_target() {
    let mut c = seeded_chain(0);
    let claim = c.try_claim(N).unwrap();
    assert_eq!(claim.round_no, 1);
    assert_eq!(claim.prompt, "cat");
    assert_eq!(claim.prompt_kind, StepKind::Word);
    assert_eq!(claim.expected_author, 1);
    assert_eq!(claim.expected_kind, StepKind::Drawing);
    assert!(c.in_use);
}

#[test]
fn second_claim_is_rejected_while_locked() {
    let mut c = seeded_chain(0);
    c.try_claim(N).unwrap();
    assert_conflict(c.try_claim(N).unwrap_err(), ConflictKind::AlreadyLocked);
}

#[test]
fn submit_without_claim_is_rejected() {
    let mut c = seeded_chain(0);
    let err = c
        .submit(N, 1, StepKind::Drawing, "cat.png".to_string())
        .unwrap_err();
    assert_conflict(err, ConflictKind::NotClaimed);
    assert!(c.steps.is_empty());
}

#[test]
fn submit_by_wrong_author_leaves_chain_locked_and_unchanged() {
    let mut c = seeded_chain(0);
    c.try_claim(N).unwrap();
    let err = c
        .submit(N, 2, StepKind::Drawing, "cat.png".to_string())
        .unwrap_err();
    assert_conflict(err, ConflictKind::UnexpectedAuthor);
    assert!(c.steps.is_empty());
    // The claimant keeps the lock to retry.
    assert!(c.in_use);
}

#[test]
fn submit_with_wrong_kind_is_rejected() {
    let mut c = seeded_chain(0);
    c.try_claim(N).unwrap();
    let err = c.submit(N, 1, StepKind::Word, "kitten".to_string()).unwrap_err();
    assert_conflict(err, ConflictKind::KindMismatch);
    assert!(c.steps.is_empty());
    assert!(c.in_use);
}

#[test]
fn successful_submit_appends_and_releases() {
    let mut c = seeded_chain(0);
    c.try_claim(N).unwrap();
    let outcome = c
        .submit(N, 1, StepKind::Drawing, "cat.png".to_string())
        .unwrap();
    assert_eq!(outcome.round_no, 1);
    assert!(!outcome.chain_completed);
    assert!(!c.in_use);
    assert_eq!(c.steps.len(), 1);
    assert_eq!(c.phase(N), ChainPhase::OpenForRound { round_no: 2 });

    // The next claim continues from the drawing.
    let claim = c.try_claim(N).unwrap();
    assert_eq!(claim.prompt, "cat.png");
    assert_eq!(claim.prompt_kind, StepKind::Drawing);
    assert_eq!(claim.expected_author, 2);
    assert_eq!(claim.expected_kind, StepKind::Word);
}

#[test]
fn chain_completes_after_n_minus_one_steps() {
    let mut c = seeded_chain(0);
    c.try_claim(N).unwrap();
    c.submit(N, 1, StepKind::Drawing, "cat.png".to_string()).unwrap();
    c.try_claim(N).unwrap();
    let outcome = c.submit(N, 2, StepKind::Word, "kitten".to_string()).unwrap();
    assert!(outcome.chain_completed);
    assert!(c.is_complete(N));

    assert_conflict(c.try_claim(N).unwrap_err(), ConflictKind::ChainComplete);
    assert_conflict(
        c.submit(N, 0, StepKind::Drawing, "x.png".to_string())
            .unwrap_err(),
        ConflictKind::ChainComplete,
    );
}

#[test]
fn rotation_targets_follow_slot_offset() {
    // Slot 2 with 3 players: round 1 belongs to seat 0, round 2 to seat 1.
    let mut c = seeded_chain(2);
    let claim = c.try_claim(N).unwrap();
    assert_eq!(claim.expected_author, 0);
    c.submit(N, 0, StepKind::Drawing, "d.png".to_string()).unwrap();
    let claim = c.try_claim(N).unwrap();
    assert_eq!(claim.expected_author, 1);
}
