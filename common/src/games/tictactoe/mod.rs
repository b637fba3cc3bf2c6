mod board;
mod bot_controller;
mod error;
mod game_state;
mod history;
mod types;
mod win_detector;

pub use board::{Board, apply_move};
pub use bot_controller::{BotInput, BotStrategy, calculate_minimax_move, calculate_move};
pub use error::{IllegalMoveReason, TicTacToeError};
pub use game_state::{BoardView, GameView, TicTacToeGame};
pub use history::build_history;
pub use types::{BOARD_SIZE, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate, has_won};
