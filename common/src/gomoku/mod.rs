mod board;
mod error;
mod game_state;
mod turn_controller;
mod types;
mod win_detector;

pub use board::Board;
pub use error::{BoardError, MoveError};
pub use game_state::{GameSnapshot, GameState, GameStatus};
pub use turn_controller::{MoveOutcome, TurnController};
pub use types::{BOARD_SIZE, Cell, Player, Position, WIN_LENGTH, WinningLine};
pub use win_detector::{check_win, find_winning_line};
