use super::board::Board;
use super::error::MoveError;
use super::game_state::{GameSnapshot, GameState, GameStatus};
use super::types::{Cell, Player, Position, WinningLine};
use super::win_detector::find_winning_line;

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: Position,
    pub placed_by: Player,
    pub board: Board,
    /// Player to move next, or the winner when the move ended the game.
    pub current_player: Player,
    pub winner: Option<Player>,
    pub winning_line: Option<WinningLine>,
}

impl MoveOutcome {
    pub fn message(&self) -> Option<String> {
        self.winner
            .map(|player| format!("{} wins!", player.display_name()))
    }
}

/// Applies moves to the game one at a time and owns the state between them.
#[derive(Debug, Default)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's stone at column `x`, row `y`.
    ///
    /// Checks run in a fixed order (coordinates, occupancy, game over) and
    /// the state is only touched once all of them pass.
    pub fn apply_move(&mut self, x: i64, y: i64) -> Result<MoveOutcome, MoveError> {
        let position = Self::validate_coordinate(x, y)?;
        let (row, col) = (position.row(), position.col());

        let cell = self
            .state
            .board
            .get(row, col)
            .map_err(|_| MoveError::InvalidCoordinate { x, y })?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied {
                x: position.x,
                y: position.y,
            });
        }

        if let GameStatus::Won(_) = self.state.status() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.state.current_player;
        self.state
            .board
            .set(row, col, Cell::Stone(player))
            .map_err(|_| MoveError::InvalidCoordinate { x, y })?;

        let winning_line = find_winning_line(&self.state.board, row, col, player);
        if winning_line.is_some() {
            self.state.winner = Some(player);
        } else {
            self.state.current_player = player.opponent();
        }

        Ok(MoveOutcome {
            position,
            placed_by: player,
            board: self.state.board,
            current_player: self.state.current_player,
            winner: self.state.winner,
            winning_line,
        })
    }

    pub fn reset(&mut self) -> GameSnapshot {
        self.state = GameState::new();
        self.state.snapshot()
    }

    pub fn status(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    fn validate_coordinate(x: i64, y: i64) -> Result<Position, MoveError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(col), Ok(row)) if Board::in_bounds(row, col) => Ok(Position::new(col, row)),
            _ => Err(MoveError::InvalidCoordinate { x, y }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku::types::BOARD_SIZE;
    use crate::gomoku::win_detector::check_win;

    fn play(controller: &mut TurnController, moves: &[(i64, i64)]) -> MoveOutcome {
        let mut last = None;
        for &(x, y) in moves {
            last = Some(controller.apply_move(x, y).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_first_move_places_black_and_switches_turn() {
        let mut controller = TurnController::new();
        let outcome = controller.apply_move(3, 7).unwrap();

        assert_eq!(outcome.placed_by, Player::Black);
        assert_eq!(outcome.current_player, Player::White);
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.board.get(7, 3), Ok(Cell::Stone(Player::Black)));
        assert_eq!(outcome.board.get(3, 7), Ok(Cell::Empty));
    }

    #[test]
    fn test_diagonal_win_scenario() {
        let mut controller = TurnController::new();
        let moves = [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2), (0, 3), (3, 3), (0, 4)];
        for &(x, y) in &moves {
            let outcome = controller.apply_move(x, y).unwrap();
            assert_eq!(outcome.winner, None);
        }

        let outcome = controller.apply_move(4, 4).unwrap();
        assert_eq!(outcome.winner, Some(Player::Black));
        assert_eq!(outcome.current_player, Player::Black);
        assert_eq!(outcome.message().as_deref(), Some("Black wins!"));
        assert_eq!(outcome.winner.map(|p| p.to_wire()), Some(1));

        let status = controller.status();
        assert!(status.game_over);
        assert_eq!(status.winner, Some(Player::Black));
        assert_eq!(status.current_player, Player::Black);
    }

    #[test]
    fn test_vertical_win_for_white() {
        let mut controller = TurnController::new();
        let moves = [(0, 0), (9, 0), (0, 2), (9, 1), (0, 4), (9, 2), (0, 6), (9, 3), (0, 8), (9, 4)];
        let outcome = play(&mut controller, &moves);
        assert_eq!(outcome.winner, Some(Player::White));
        assert_eq!(outcome.message().as_deref(), Some("White wins!"));
        let line = outcome.winning_line.unwrap();
        assert_eq!(line.start, Position::new(9, 0));
        assert_eq!(line.end, Position::new(9, 4));
    }

    #[test]
    fn test_move_after_win_is_rejected_without_change() {
        let mut controller = TurnController::new();
        play(
            &mut controller,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)],
        );
        let before = controller.state().clone();

        assert_eq!(controller.apply_move(10, 10), Err(MoveError::GameAlreadyOver));
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_occupied_cell_reported_before_game_over() {
        let mut controller = TurnController::new();
        play(
            &mut controller,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)],
        );
        assert_eq!(
            controller.apply_move(0, 0),
            Err(MoveError::CellOccupied { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut controller = TurnController::new();
        let size = BOARD_SIZE as i64;
        for &(x, y) in &[(-1, 0), (0, -1), (size, 0), (0, size), (100, 100), (i64::MIN, 3)] {
            assert_eq!(
                controller.apply_move(x, y),
                Err(MoveError::InvalidCoordinate { x, y })
            );
        }
        assert_eq!(controller.state(), &GameState::new());
    }

    #[test]
    fn test_second_move_on_same_cell_is_rejected() {
        let mut controller = TurnController::new();
        controller.apply_move(5, 5).unwrap();

        assert_eq!(
            controller.apply_move(5, 5),
            Err(MoveError::CellOccupied { x: 5, y: 5 })
        );

        let status = controller.status();
        assert_eq!(status.board.get(5, 5), Ok(Cell::Stone(Player::Black)));
        assert_eq!(status.board.stone_count(), 1);
        assert_eq!(status.current_player, Player::White);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut controller = TurnController::new();
        play(
            &mut controller,
            &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)],
        );
        assert!(controller.status().game_over);

        let snapshot = controller.reset();
        assert_eq!(snapshot.board, Board::new());
        assert_eq!(snapshot.current_player, Player::Black);
        assert_eq!(snapshot.winner, None);
        assert!(!snapshot.game_over);

        let snapshot = controller.reset();
        assert_eq!(snapshot, TurnController::new().status());
    }

    #[test]
    fn test_full_board_without_winner_keeps_rejecting_as_occupied() {
        let mut controller = TurnController::new();
        // Colours alternate by column and by pairs of rows, so every line
        // holds runs of at most two.
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let player = if (row / 2 + col) % 2 == 0 {
                    Player::Black
                } else {
                    Player::White
                };
                controller
                    .state
                    .board
                    .set(row, col, Cell::Stone(player))
                    .unwrap();
            }
        }
        let board = controller.state().board;
        assert!(board.is_full());
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Ok(Cell::Stone(player)) = board.get(row, col) else {
                    panic!("cell ({}, {}) is empty", row, col);
                };
                assert!(!check_win(&board, row, col, player), "win at ({}, {})", row, col);
            }
        }

        for &(x, y) in &[(7, 7), (0, 0), (14, 14)] {
            assert_eq!(
                controller.apply_move(x, y),
                Err(MoveError::CellOccupied { x: x as usize, y: y as usize })
            );
        }
        assert!(!controller.status().game_over);
        assert_eq!(controller.status().winner, None);
        assert_eq!(controller.state().board, board);
    }
}
