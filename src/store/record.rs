//! Persisted document schema for games.
//!
//! Stored field names are part of the on-disk contract:
//! `code`, `started`, `numPlayers`, `players[].number`, `words[].creator`,
//! `words[].word`, `words[].inUse`, `answers[].creator`,
//! `answers[].isDrawing`, `answers[].word`, `answers[].drawingFilename`.
//! `lockVersion` backs the store's atomic-save conflict detection.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::chain::{Chain, Step};
use crate::domain::game::{Game, Player};
use crate::domain::rotation::{Round, Seat, StepKind};
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    /// Unix milliseconds.
    pub created_at: i64,
    pub started: bool,
    pub num_players: u8,
    pub players: Vec<PlayerRecord>,
    pub words: Vec<WordRecord>,
    pub lock_version: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub number: Seat,
    pub creator: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub creator: Seat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    pub in_use: bool,
    pub answers: Vec<AnswerRecord>,
    /// Unix milliseconds.
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub creator: Seat,
    pub is_drawing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing_filename: Option<String>,
}

fn unix_ms(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

fn from_unix_ms(ms: i64) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::from_unix_timestamp_nanos(ms as i128 * 1_000_000).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Timestamp {ms} out of range"),
        )
    })
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.to_string(),
            code: game.code.clone(),
            created_at: unix_ms(game.created_at),
            started: game.started,
            num_players: game.player_count(),
            players: game
                .players
                .iter()
                .map(|p| PlayerRecord {
                    name: p.name.clone(),
                    number: p.seat,
                    creator: p.is_creator,
                })
                .collect(),
            words: game
                .chains
                .iter()
                .map(|c| WordRecord {
                    creator: c.seed_creator,
                    word: c.seed_word.clone(),
                    in_use: c.in_use,
                    answers: c
                        .steps
                        .iter()
                        .map(|s| match s.kind {
                            StepKind::Word => AnswerRecord {
                                creator: s.author,
                                is_drawing: false,
                                word: Some(s.content.clone()),
                                drawing_filename: None,
                            },
                            StepKind::Drawing => AnswerRecord {
                                creator: s.author,
                                is_drawing: true,
                                word: None,
                                drawing_filename: Some(s.content.clone()),
                            },
                        })
                        .collect(),
                    created: unix_ms(c.created_at),
                })
                .collect(),
            lock_version: game.lock_version,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = DomainError;

    fn try_from(rec: GameRecord) -> Result<Self, DomainError> {
        let id = Uuid::parse_str(&rec.id).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Game id {:?} is not a UUID", rec.id),
            )
        })?;

        let chains = rec
            .words
            .into_iter()
            .enumerate()
            .map(|(slot, word)| {
                let steps = word
                    .answers
                    .into_iter()
                    .enumerate()
                    .map(|(i, answer)| {
                        // Round numbers are positional: answer i fills round i+1.
                        let content = if answer.is_drawing {
                            answer.drawing_filename
                        } else {
                            answer.word
                        }
                        .ok_or_else(|| {
                            DomainError::infra(
                                InfraErrorKind::DataCorruption,
                                format!("Answer {i} of slot {slot} has no content"),
                            )
                        })?;
                        Ok(Step {
                            round_no: (i + 1) as Round,
                            author: answer.creator,
                            kind: if answer.is_drawing {
                                StepKind::Drawing
                            } else {
                                StepKind::Word
                            },
                            content,
                        })
                    })
                    .collect::<Result<Vec<_>, DomainError>>()?;

                Ok(Chain {
                    slot: slot as Seat,
                    seed_creator: word.creator,
                    seed_word: word.word,
                    in_use: word.in_use,
                    steps,
                    created_at: from_unix_ms(word.created)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Game {
            id,
            code: rec.code,
            created_at: from_unix_ms(rec.created_at)?,
            started: rec.started,
            players: rec
                .players
                .into_iter()
                .map(|p| Player {
                    seat: p.number,
                    name: p.name,
                    is_creator: p.creator,
                })
                .collect(),
            chains,
            lock_version: rec.lock_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        let mut game = Game::new(
            Uuid::new_v4(),
            "AB12".to_string(),
            "Ann".to_string(),
            OffsetDateTime::UNIX_EPOCH,
        );
        game.join("Bob".to_string()).unwrap();
        game.join("Cid".to_string()).unwrap();
        game.start(OffsetDateTime::UNIX_EPOCH).unwrap();
        game.submit_seed(0, "cat".to_string()).unwrap();
        game.claim_next(0).unwrap();
        game.submit_step(0, 1, StepKind::Drawing, "cat.png".to_string())
            .unwrap();
        game
    }

    #[test]
    fn record_round_trips_through_the_document_shape() {
        let game = sample_game();
        let rec = GameRecord::from(&game);
        let restored = Game::try_from(rec).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn record_uses_the_legacy_field_names() {
        let game = sample_game();
        let json = serde_json::to_value(GameRecord::from(&game)).unwrap();

        assert!(json.get("_id").is_some());
        assert_eq!(json["numPlayers"], 3);
        assert_eq!(json["players"][1]["number"], 1);
        assert!(json["players"][0]["creator"].as_bool().unwrap());
        assert_eq!(json["words"][0]["creator"], 0);
        assert_eq!(json["words"][0]["word"], "cat");
        assert_eq!(json["words"][0]["inUse"], false);
        assert_eq!(json["words"][0]["answers"][0]["isDrawing"], true);
        assert_eq!(json["words"][0]["answers"][0]["drawingFilename"], "cat.png");
        // An unseeded slot omits its word entirely.
        assert!(json["words"][1].get("word").is_none());
    }

    #[test]
    fn answer_without_content_is_rejected_on_load() {
        let game = sample_game();
        let mut rec = GameRecord::from(&game);
        rec.words[0].answers[0].drawing_filename = None;
        let err = Game::try_from(rec).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::DataCorruption, _)
        ));
    }
}
