use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Path extractor for the `game_id` segment.
///
/// Rejects malformed ids with a 400 before the handler runs, so handlers
/// always receive a well-formed `Uuid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub Uuid);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("game_id") {
            Some(raw) => Uuid::parse_str(raw).map(GameId).map_err(|_| {
                AppError::bad_request(
                    ErrorCode::InvalidGameId,
                    format!("'{raw}' is not a valid game id"),
                )
            }),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidGameId,
                "missing game_id path segment",
            )),
        };
        ready(result)
    }
}
