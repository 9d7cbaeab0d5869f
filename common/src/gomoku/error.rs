#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position (row {row}, col {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
}

/// Rejections of a submitted move. None of them change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid coordinates ({x}, {y})")]
    InvalidCoordinate { x: i64, y: i64 },

    #[error("Position ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },

    #[error("Game is already over")]
    GameAlreadyOver,
}

impl MoveError {
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::InvalidCoordinate { .. } => "invalid_coordinate",
            MoveError::CellOccupied { .. } => "cell_occupied",
            MoveError::GameAlreadyOver => "game_already_over",
        }
    }
}
