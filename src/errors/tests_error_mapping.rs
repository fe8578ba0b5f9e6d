// Unit tests for error mapping - pure domain logic without HTTP or store dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::MissingName, "name is empty");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MissingName);
    assert_eq!(app.status().as_u16(), 422);

    let de = DomainError::validation_other("bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let locked = DomainError::conflict(ConflictKind::AlreadyLocked, "slot is held");
    let app: AppError = locked.into();
    assert_eq!(app.code().as_str(), "ALREADY_LOCKED");
    assert_eq!(app.status().as_u16(), 409);

    let author = DomainError::conflict(ConflictKind::UnexpectedAuthor, "wrong seat");
    let app: AppError = author.into();
    assert_eq!(app.code().as_str(), "UNEXPECTED_AUTHOR");
    assert_eq!(app.status().as_u16(), 409);

    let kind = DomainError::conflict(ConflictKind::KindMismatch, "expected a drawing");
    let app: AppError = kind.into();
    assert_eq!(app.code().as_str(), "KIND_MISMATCH");
    assert_eq!(app.status().as_u16(), 409);

    let started = DomainError::conflict(ConflictKind::GameAlreadyStarted, "lobby closed");
    let app: AppError = started.into();
    assert_eq!(app.code().as_str(), "GAME_ALREADY_STARTED");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("odd".to_string()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no such game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad record");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}
