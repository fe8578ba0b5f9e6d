//! ETag helpers for game snapshots.
//!
//! Snapshot responses carry an ETag derived from the game id and store
//! revision, so polling clients can cheaply re-poll with `If-None-Match`.

use uuid::Uuid;

/// Generate an ETag for a game resource.
///
/// Format: `"game-{id}-v{version}"` (with quotes, as required by HTTP spec).
pub fn game_etag(id: Uuid, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}
