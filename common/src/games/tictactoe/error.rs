use std::fmt;

use super::types::{GameStatus, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    Occupied,
    OutOfRange,
    EmptyMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },
    GameOver {
        status: GameStatus,
    },
    /// The side asking to move does not hold the mark whose turn it is.
    NotYourTurn {
        requested: Mark,
        to_move: Mark,
    },
    /// Search was asked for a move on a full board. The game checks status
    /// before searching, so reaching this is a broken invariant.
    NoMovesAvailable,
}

impl TicTacToeError {
    /// A bad cell, a finished game and a move out of turn are all rejected
    /// moves from the caller's point of view.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            TicTacToeError::IllegalMove { .. }
                | TicTacToeError::GameOver { .. }
                | TicTacToeError::NotYourTurn { .. }
        )
    }
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::IllegalMove { position, reason } => match reason {
                IllegalMoveReason::EmptyMark => {
                    write!(f, "Illegal move: cannot place an empty mark at {}", position)
                }
                IllegalMoveReason::Occupied => {
                    write!(f, "Illegal move: cell {} is already marked", position)
                }
                IllegalMoveReason::OutOfRange => {
                    write!(f, "Illegal move: position {} out of bounds", position)
                }
            },
            TicTacToeError::GameOver { status } => {
                write!(f, "Illegal move: game is already over ({})", status)
            }
            TicTacToeError::NotYourTurn { requested, to_move } => {
                write!(f, "Illegal move: it is {}'s turn, not {}'s", to_move, requested)
            }
            TicTacToeError::NoMovesAvailable => write!(f, "No moves available on a full board"),
        }
    }
}

impl std::error::Error for TicTacToeError {}
