use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGame;
use super::types::{Mark, Position};
use super::win_detector::has_won;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotStrategy {
    /// Full-depth minimax. Never loses.
    #[default]
    Perfect,
    /// Uniform choice among open cells, for casual play.
    Random,
}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game(game: &TicTacToeGame) -> Self {
        Self {
            board: *game.current_board(),
            bot_mark: game.current_mark(),
        }
    }
}

pub fn calculate_move(
    strategy: BotStrategy,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match strategy {
        BotStrategy::Perfect => {
            let opponent_mark = input.bot_mark.opponent()?;
            calculate_minimax_move(&input.board, input.bot_mark, opponent_mark)
        }
        BotStrategy::Random => calculate_random_move(&input.board, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied()
}

/// Picks the move for `player_mark` with the best guaranteed outcome.
///
/// Cells are tried in row-major order and only a strictly better score
/// replaces the current choice, so ties go to the first cell in that order.
pub fn calculate_minimax_move(
    board: &Board,
    player_mark: Mark,
    opponent_mark: Mark,
) -> Option<Position> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in board.available_moves() {
        let next = board.with_mark(position, player_mark);
        let score = minimax(&next, opponent_mark, player_mark, opponent_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Score of `board` for `player_mark` with `to_move` about to play: +1 win,
/// -1 loss, 0 draw. Maximises on the player's turns and minimises on the
/// opponent's.
fn minimax(board: &Board, to_move: Mark, player_mark: Mark, opponent_mark: Mark) -> i32 {
    if has_won(board, player_mark) {
        return 1;
    }
    if has_won(board, opponent_mark) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == player_mark;
    let next_to_move = if maximizing { opponent_mark } else { player_mark };

    let scores = board.available_moves().into_iter().map(|position| {
        minimax(
            &board.with_mark(position, to_move),
            next_to_move,
            player_mark,
            opponent_mark,
        )
    });

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}
