//! Game-related HTTP routes.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::chain::Chain;
use crate::domain::game::{Game, Phase, Player};
use crate::domain::rotation::{Round, Seat, StepKind};
use crate::error::AppError;
use crate::extractors::GameId;
use crate::http::etag::game_etag;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameRequest {
    creator_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinGameRequest {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitSeedRequest {
    player_number: Seat,
    word: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStepRequest {
    player_number: Seat,
    kind: StepKind,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerView {
    seat: Seat,
    name: String,
    is_creator: bool,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            seat: p.seat,
            name: p.name.clone(),
            is_creator: p.is_creator,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepView {
    round_no: Round,
    author: Seat,
    kind: StepKind,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainView {
    slot: Seat,
    seed_creator: Seat,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed_word: Option<String>,
    in_use: bool,
    complete: bool,
    steps: Vec<StepView>,
}

impl ChainView {
    fn from_chain(chain: &Chain, player_count: u8) -> Self {
        Self {
            slot: chain.slot,
            seed_creator: chain.seed_creator,
            seed_word: chain.seed_word.clone(),
            in_use: chain.in_use,
            complete: chain.is_complete(player_count),
            steps: chain
                .steps
                .iter()
                .map(|s| StepView {
                    round_no: s.round_no,
                    author: s.author,
                    kind: s.kind,
                    content: s.content.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameResponse {
    id: Uuid,
    code: String,
    phase: &'static str,
    started: bool,
    num_players: u8,
    players: Vec<PlayerView>,
    chains: Vec<ChainView>,
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        let n = game.player_count();
        Self {
            id: game.id,
            code: game.code.clone(),
            phase: match game.phase() {
                Phase::Lobby => "lobby",
                Phase::Seeding => "seeding",
                Phase::Relay => "relay",
                Phase::Complete => "complete",
            },
            started: game.started,
            num_players: n,
            players: game.players.iter().map(PlayerView::from).collect(),
            chains: game
                .chains
                .iter()
                .map(|c| ChainView::from_chain(c, n))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinGameResponse {
    seat: Seat,
    game: GameResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimResponse {
    slot: Seat,
    round_no: Round,
    prompt_kind: StepKind,
    prompt: String,
    expected_author: Seat,
    expected_kind: StepKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStepResponse {
    round_no: Round,
    chain_completed: bool,
    game_completed: bool,
}

/// POST /api/games
async fn create_game(
    app_state: web::Data<AppState>,
    body: web::Json<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.create_game(&body.creator_name).await?;
    Ok(HttpResponse::Created().json(GameResponse::from(&game)))
}

/// POST /api/games/join
async fn join_game(
    app_state: web::Data<AppState>,
    body: web::Json<JoinGameRequest>,
) -> Result<HttpResponse, AppError> {
    let (game, seat) = app_state.games.join_game(&body.code, &body.name).await?;
    Ok(HttpResponse::Ok().json(JoinGameResponse {
        seat,
        game: GameResponse::from(&game),
    }))
}

/// POST /api/games/{game_id}/start
async fn start_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.start_game(game_id.0).await?;
    Ok(HttpResponse::Ok().json(GameResponse::from(&game)))
}

/// POST /api/games/{game_id}/seed
async fn submit_seed(
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: web::Json<SubmitSeedRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .submit_seed(game_id.0, body.player_number, &body.word)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse::from(&game)))
}

/// POST /api/games/{game_id}/chains/{slot}/claim
///
/// Claims the open step of the chain at `slot`. At most one claimant wins;
/// a concurrent claimant gets a 409 and should try a different slot.
async fn claim_next(
    path: web::Path<(Uuid, Seat)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (game_id, slot) = path.into_inner();
    let (_game, claim) = app_state.games.claim_next(game_id, slot).await?;
    Ok(HttpResponse::Ok().json(ClaimResponse {
        slot: claim.slot,
        round_no: claim.round_no,
        prompt_kind: claim.prompt_kind,
        prompt: claim.prompt,
        expected_author: claim.expected_author,
        expected_kind: claim.expected_kind,
    }))
}

/// POST /api/games/{game_id}/chains/{slot}/steps
async fn submit_step(
    path: web::Path<(Uuid, Seat)>,
    app_state: web::Data<AppState>,
    body: web::Json<SubmitStepRequest>,
) -> Result<HttpResponse, AppError> {
    let (game_id, slot) = path.into_inner();
    let (game, outcome) = app_state
        .games
        .submit_step(game_id, slot, body.player_number, body.kind, &body.content)
        .await?;
    Ok(HttpResponse::Ok().json(SubmitStepResponse {
        round_no: outcome.round_no,
        chain_completed: outcome.chain_completed,
        game_completed: game.is_complete(),
    }))
}

/// GET /api/games/{game_id}
///
/// Returns the current game state as JSON with an ETag header derived from
/// the game's lock version.
///
/// Supports `If-None-Match`: if the client's ETag matches the current
/// version, returns `304 Not Modified` with no body. Clients poll this
/// endpoint at their own pace between claims.
async fn get_snapshot(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.fetch_game(game_id.0).await?;
    let etag_value = game_etag(game.id, game.lock_version);

    if let Some(if_none_match) = http_req.headers().get(IF_NONE_MATCH) {
        if let Ok(client_etag) = if_none_match.to_str() {
            // Wildcard "*" means "any representation exists" (RFC 9110)
            let matches = client_etag.trim() == "*"
                || client_etag
                    .split(',')
                    .map(str::trim)
                    .any(|etag| etag == etag_value);

            if matches {
                return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                    .insert_header((ETAG, etag_value))
                    .finish());
            }
        }
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag_value))
        .json(GameResponse::from(&game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/join").route(web::post().to(join_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_snapshot)));
    cfg.service(web::resource("/{game_id}/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/{game_id}/seed").route(web::post().to(submit_seed)));
    cfg.service(web::resource("/{game_id}/chains/{slot}/claim").route(web::post().to(claim_next)));
    cfg.service(web::resource("/{game_id}/chains/{slot}/steps").route(web::post().to(submit_step)));
}
