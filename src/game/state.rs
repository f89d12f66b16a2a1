use tracing::debug;

use crate::error::MoveError;

use super::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::player::{Player, Seat};
use super::win;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Draw,
}

/// Where a dropped piece came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub placement: Placement,
    pub seat: Seat,
    pub status: GameStatus,
}

/// One match between two players: board, turn and end-of-game status.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh match; the first player moves first
    pub fn new(first_color: &str, second_color: &str, width: usize, height: usize) -> Self {
        GameState {
            board: Board::new(width, height),
            players: [
                Player::new(Seat::First, first_color),
                Player::new(Seat::Second, second_color),
            ],
            current: Seat::First,
            status: GameStatus::InProgress,
        }
    }

    /// Standard 7x6 match
    pub fn standard(first_color: &str, second_color: &str) -> Self {
        Self::new(first_color, second_color, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose move is currently accepted
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        self.board.lowest_open_row(col)
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `col`.
    ///
    /// On error nothing changes. On success the win check runs for the mover
    /// only, then the draw check; the turn passes only if neither ended the
    /// game.
    pub fn apply_move(&mut self, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if col >= self.width() {
            return Err(MoveError::InvalidColumn {
                col,
                width: self.width(),
            });
        }
        let row = self
            .board
            .lowest_open_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        let seat = self.current;
        self.board.occupy(row, col, seat)?;
        debug!(?seat, row, col, "piece placed");

        if win::wins_through(&self.board, seat, row, col) {
            self.status = GameStatus::Won(seat);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = seat.other();
        }

        Ok(MoveOutcome {
            placement: Placement { row, col },
            seat,
            status: self.status,
        })
    }

    /// Clear the board and hand the turn back to the first player
    pub fn restart(&mut self) {
        self.board.clear();
        self.current = Seat::First;
        self.status = GameStatus::InProgress;
    }
}
