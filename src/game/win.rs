use super::board::{Board, Cell};
use super::player::Seat;

pub const WIN_LENGTH: usize = 4;

/// `(dy, dx)` steps: horizontal, vertical, diagonal down-right, diagonal
/// down-left. Their negations cover the remaining four compass directions.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Full-board scan: true if any cell starts a run of four `seat` pieces in
/// any direction.
pub fn check_win(board: &Board, seat: Seat) -> bool {
    (0..board.height()).any(|row| {
        (0..board.width()).any(|col| {
            DIRECTIONS
                .iter()
                .any(|&dir| run_from(board, seat, row as isize, col as isize, dir))
        })
    })
}

/// Local check around the piece at `(row, col)`. Gives the same answer as
/// [`check_win`] when `(row, col)` is the move that was just placed.
pub fn wins_through(board: &Board, seat: Seat, row: usize, col: usize) -> bool {
    if board.get(row, col) != Cell::Occupied(seat) {
        return false;
    }

    DIRECTIONS.iter().any(|&(dy, dx)| {
        let count = 1
            + count_from(board, seat, row, col, (dy, dx))
            + count_from(board, seat, row, col, (-dy, -dx));
        count >= WIN_LENGTH
    })
}

fn run_from(board: &Board, seat: Seat, row: isize, col: isize, (dy, dx): (isize, isize)) -> bool {
    (0..WIN_LENGTH as isize)
        .all(|i| board.get_signed(row + dy * i, col + dx * i) == Some(Cell::Occupied(seat)))
}

/// Contiguous `seat` pieces after `(row, col)` walking in `(dy, dx)`.
fn count_from(board: &Board, seat: Seat, row: usize, col: usize, (dy, dx): (isize, isize)) -> usize {
    let (mut r, mut c) = (row as isize + dy, col as isize + dx);
    let mut count = 0;
    while board.get_signed(r, c) == Some(Cell::Occupied(seat)) {
        count += 1;
        r += dy;
        c += dx;
    }
    count
}
