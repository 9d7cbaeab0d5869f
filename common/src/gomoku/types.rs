pub const BOARD_SIZE: usize = 15;
pub const WIN_LENGTH: usize = 5;

/// A side in the game. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn to_wire(&self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn to_wire(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(player) => player.to_wire(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// A board coordinate as clients address it: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self { x: col, y: row }
    }

    pub fn row(&self) -> usize {
        self.y
    }

    pub fn col(&self) -> usize {
        self.x
    }

    pub fn to_wire(&self) -> [usize; 2] {
        [self.x, self.y]
    }
}

/// End points of the run that decided the game, ordered from the negative
/// to the positive end of the scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
    pub length: usize,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position, length: usize) -> Self {
        Self { player, start, end, length }
    }
}
