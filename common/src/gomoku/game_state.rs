use super::board::Board;
use super::types::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// The whole state of the one game a server hosts.
///
/// `game_over` is not stored: it is exactly "a winner is set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub winner: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            winner: None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            winner: self.winner,
            game_over: self.game_over(),
        }
    }
}

/// Read-only copy of the game handed out to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress,
        }
    }
}
