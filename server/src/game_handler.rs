use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use gomoku_common::gomoku::{GameSnapshot, MoveError, MoveOutcome, WinningLine};
use gomoku_common::{log, log_warn};

use crate::index_page;
use crate::web_server::WebServerState;

/// Body of `POST /move`. `x` is the column and `y` the row.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub status: &'static str,
    pub board: Vec<Vec<u8>>,
    pub current_player: u8,
    pub winner: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_line: Option<[[usize; 2]; 2]>,
}

impl MoveResponse {
    fn from_outcome(outcome: &MoveOutcome) -> Self {
        Self {
            status: "ok",
            board: outcome.board.to_wire(),
            current_player: outcome.current_player.to_wire(),
            winner: outcome.winner.map(|p| p.to_wire()),
            message: outcome.message(),
            winning_line: outcome.winning_line.as_ref().map(line_to_wire),
        }
    }

    fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            status: "ok",
            board: snapshot.board.to_wire(),
            current_player: snapshot.current_player.to_wire(),
            winner: snapshot.winner.map(|p| p.to_wire()),
            message: None,
            winning_line: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl ErrorResponse {
    fn new(kind: &'static str, message: String) -> Self {
        Self {
            status: "error",
            kind,
            message,
        }
    }
}

impl From<MoveError> for ErrorResponse {
    fn from(err: MoveError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub board: Vec<Vec<u8>>,
    pub current_player: u8,
    pub winner: Option<u8>,
    pub game_over: bool,
}

impl From<GameSnapshot> for StatusResponse {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            board: snapshot.board.to_wire(),
            current_player: snapshot.current_player.to_wire(),
            winner: snapshot.winner.map(|p| p.to_wire()),
            game_over: snapshot.game_over,
        }
    }
}

fn line_to_wire(line: &WinningLine) -> [[usize; 2]; 2] {
    [line.start.to_wire(), line.end.to_wire()]
}

pub async fn index(State(state): State<WebServerState>) -> Html<String> {
    let snapshot = state.game.status().await;
    Html(index_page::render(&snapshot))
}

pub async fn make_move(
    State(state): State<WebServerState>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log_warn!("Malformed move request: {}", rejection.body_text());
            let body = ErrorResponse::new("malformed_request", rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    match state.game.apply_move(request.x, request.y).await {
        Ok(outcome) => {
            match outcome.winner {
                Some(winner) => log!(
                    "Move {}: {} played ({}, {}) and won",
                    outcome.board.stone_count(),
                    winner.display_name(),
                    outcome.position.x,
                    outcome.position.y
                ),
                None => log!(
                    "Move {}: {} played ({}, {})",
                    outcome.board.stone_count(),
                    outcome.placed_by.display_name(),
                    outcome.position.x,
                    outcome.position.y
                ),
            }
            if outcome.winner.is_none() && outcome.board.is_full() {
                log!("Board is full without a winner; further moves will be rejected");
            }
            Json(MoveResponse::from_outcome(&outcome)).into_response()
        }
        Err(err) => {
            log!("Rejected move ({}, {}): {}", request.x, request.y, err.kind());
            Json(ErrorResponse::from(err)).into_response()
        }
    }
}

pub async fn reset_game(State(state): State<WebServerState>) -> Json<MoveResponse> {
    let snapshot = state.game.reset().await;
    log!("Game reset");
    Json(MoveResponse::from_snapshot(&snapshot))
}

pub async fn get_status(State(state): State<WebServerState>) -> Json<StatusResponse> {
    Json(StatusResponse::from(state.game.status().await))
}
