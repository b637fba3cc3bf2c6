use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{IllegalMoveReason, TicTacToeError};
use super::types::{BOARD_SIZE, Mark, Position};

/// One immutable 3x3 snapshot, indexed `[y][x]`.
///
/// Boards are `Copy`; every placement hands back a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, position: Position) -> Option<Mark> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.y][position.x])
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    /// Copy of this board with `position` set to `mark`. Callers must have
    /// checked that `position` is on the board.
    pub(crate) fn with_mark(&self, position: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[position.y][position.x] = mark;
        next
    }

    /// Open cells in row-major order: y outer, x inner.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Mark::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Places `mark` at `position`, returning the new snapshot.
///
/// Does not look at terminal status; the game refuses moves once it is over.
pub fn apply_move(
    board: &Board,
    position: Position,
    mark: Mark,
) -> Result<Board, TicTacToeError> {
    if mark == Mark::Empty {
        return Err(TicTacToeError::IllegalMove {
            position,
            reason: IllegalMoveReason::EmptyMark,
        });
    }

    match board.get(position) {
        None => Err(TicTacToeError::IllegalMove {
            position,
            reason: IllegalMoveReason::OutOfRange,
        }),
        Some(Mark::Empty) => Ok(board.with_mark(position, mark)),
        Some(_) => Err(TicTacToeError::IllegalMove {
            position,
            reason: IllegalMoveReason::Occupied,
        }),
    }
}
