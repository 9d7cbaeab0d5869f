use super::board::Board;
use super::types::{Cell, Player, Position, WIN_LENGTH, WinningLine};

/// Line axes as (row step, col step): horizontal, vertical, diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns true when the stone `player` just placed at (row, col) completes
/// a run of at least five.
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    find_winning_line(board, row, col, player).is_some()
}

pub fn find_winning_line(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Option<WinningLine> {
    if !Board::in_bounds(row, col) {
        return None;
    }

    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let (forward, end) = extend(board, row, col, player, dr, dc);
        let (backward, start) = extend(board, row, col, player, -dr, -dc);
        let length = 1 + forward + backward;

        (length >= WIN_LENGTH).then(|| {
            WinningLine::new(
                player,
                Position::from_row_col(start.0, start.1),
                Position::from_row_col(end.0, end.1),
                length,
            )
        })
    })
}

fn extend(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    dr: isize,
    dc: isize,
) -> (usize, (usize, usize)) {
    let mut count = 0;
    let mut last = (row, col);

    while let Some(next) = step(last, dr, dc) {
        if board.get(next.0, next.1) != Ok(Cell::Stone(player)) {
            break;
        }
        count += 1;
        last = next;
    }

    (count, last)
}

fn step((row, col): (usize, usize), dr: isize, dc: isize) -> Option<(usize, usize)> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    Board::in_bounds(row, col).then_some((row, col))
}
