use std::sync::Arc;
use tokio::sync::Mutex;

use gomoku_common::gomoku::{GameSnapshot, MoveError, MoveOutcome, TurnController};

/// The single game a server hosts. Every operation holds the lock for its
/// whole duration, so moves from concurrent requests never interleave.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    controller: Arc<Mutex<TurnController>>,
}

impl SharedGame {
    pub fn new() -> Self {
        Self {
            controller: Arc::new(Mutex::new(TurnController::new())),
        }
    }

    pub async fn apply_move(&self, x: i64, y: i64) -> Result<MoveOutcome, MoveError> {
        let mut controller = self.controller.lock().await;
        controller.apply_move(x, y)
    }

    pub async fn reset(&self) -> GameSnapshot {
        let mut controller = self.controller.lock().await;
        controller.reset()
    }

    pub async fn status(&self) -> GameSnapshot {
        let controller = self.controller.lock().await;
        controller.status()
    }
}
