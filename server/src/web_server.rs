use std::net::SocketAddr;
use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use gomoku_common::{log, log_warn};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::game_handler::{get_status, index, make_move, reset_game};
use crate::shared_game::SharedGame;

#[derive(Clone)]
pub struct WebServerState {
    pub game: SharedGame,
}

pub fn build_router(game: SharedGame, static_files_path: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/move", post(make_move))
        .route("/reset", post(reset_game))
        .route("/status", get(get_status))
        .nest_service("/static", ServeDir::new(static_files_path))
        .layer(cors)
        .with_state(WebServerState { game })
}

pub async fn run_web_server(
    game: SharedGame,
    addr: SocketAddr,
    static_files_path: &Path,
) -> Result<(), String> {
    let app = build_router(game, static_files_path);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    log!("Web server listening on {}", addr);
    log!("Serving static files from {}", static_files_path.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Web server error: {}", e))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}
