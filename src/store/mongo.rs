//! MongoDB-backed game store.
//!
//! One `games` collection of `GameRecord` documents. Atomic saves use a
//! filtered `replace_one` on `(_id, lockVersion)`; a unique index on `code`
//! backs join-code deduplication at the database level.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use uuid::Uuid;

use crate::domain::game::Game;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::store::record::GameRecord;
use crate::store::GameStore;

const GAMES_COLLECTION: &str = "games";

pub struct MongoGameStore {
    games: Collection<GameRecord>,
}

impl MongoGameStore {
    /// Connect to the given deployment and prepare the `games` collection.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(uri).await.map_err(store_error)?;
        let store = Self::new(&client, db_name);
        store.ensure_indexes().await?;
        Ok(store)
    }

    pub fn new(client: &Client, db_name: &str) -> Self {
        Self {
            games: client
                .database(db_name)
                .collection::<GameRecord>(GAMES_COLLECTION),
        }
    }

    async fn ensure_indexes(&self) -> Result<(), DomainError> {
        let code_index = IndexModel::builder()
            .keys(doc! { "code": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.games
            .create_index(code_index, None)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

fn store_error(e: mongodb::error::Error) -> DomainError {
    DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}

#[async_trait]
impl GameStore for MongoGameStore {
    async fn insert(&self, game: &Game) -> Result<(), DomainError> {
        let rec = GameRecord::from(game);
        match self.games.insert_one(&rec, None).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(DomainError::conflict(
                ConflictKind::JoinCodeConflict,
                format!("Join code {} is already in use", rec.code),
            )),
            Err(e) => Err(store_error(e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>, DomainError> {
        let rec = self
            .games
            .find_one(doc! { "_id": id.to_string() }, None)
            .await
            .map_err(store_error)?;
        rec.map(Game::try_from).transpose()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Game>, DomainError> {
        let rec = self
            .games
            .find_one(doc! { "code": code }, None)
            .await
            .map_err(store_error)?;
        rec.map(Game::try_from).transpose()
    }

    async fn save(&self, game: Game) -> Result<Game, DomainError> {
        let mut rec = GameRecord::from(&game);
        let expected = rec.lock_version;
        rec.lock_version = expected + 1;

        let result = self
            .games
            .replace_one(
                doc! { "_id": &rec.id, "lockVersion": expected },
                &rec,
                None,
            )
            .await
            .map_err(store_error)?;

        if result.matched_count == 0 {
            // Distinguish a concurrent writer from a missing document.
            let current = self
                .games
                .find_one(doc! { "_id": &rec.id }, None)
                .await
                .map_err(store_error)?;
            return match current {
                Some(current) => Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game revision moved from {expected} to {}; reload and retry",
                        current.lock_version
                    ),
                )),
                None => Err(DomainError::not_found(
                    NotFoundKind::Game,
                    format!("Game {} not found", rec.id),
                )),
            };
        }

        let mut saved = game;
        saved.lock_version = expected + 1;
        Ok(saved)
    }
}
