use serde::Serialize;

use crate::games::SessionRng;
use crate::identifiers::GameId;
use crate::log;
use super::board::{Board, apply_move};
use super::bot_controller::{BotInput, BotStrategy, calculate_move};
use super::error::TicTacToeError;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate;

/// Latest snapshot plus winner label, returned after every move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub board: Board,
    pub winner: Option<String>,
}

/// Every snapshot from the empty board onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub boards: Vec<Board>,
    pub winner: Option<String>,
}

/// A game derived from its move list. Only `moves` is ever persisted; the
/// snapshots and status are rebuilt from it.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    id: GameId,
    moves: Vec<Position>,
    boards: Vec<Board>,
    status: GameStatus,
}

impl TicTacToeGame {
    /// The human opens, the engine answers.
    pub const HUMAN_MARK: Mark = Mark::X;
    pub const BOT_MARK: Mark = Mark::O;

    pub fn new(id: GameId) -> Self {
        Self {
            id,
            moves: Vec::new(),
            boards: vec![Board::empty()],
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a game from stored moves, replaying each one through the
    /// same checks a live move gets. A store handing back an off-board,
    /// repeated or post-game move is reported instead of trusted.
    pub fn from_moves(id: GameId, moves: Vec<Position>) -> Result<Self, TicTacToeError> {
        let mut game = Self::new(id);
        game.moves.reserve(moves.len());
        game.boards.reserve(moves.len());
        for position in moves {
            game.push_move(position)?;
        }
        Ok(game)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn current_board(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Mark of whoever moves next, from the parity of the move count.
    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.moves.len())
    }

    pub fn open_positions(&self) -> Vec<Position> {
        self.current_board().available_moves()
    }

    fn push_move(&mut self, position: Position) -> Result<GameStatus, TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver {
                status: self.status,
            });
        }

        let next = apply_move(self.current_board(), position, self.current_mark())?;

        self.moves.push(position);
        self.boards.push(next);
        self.status = evaluate(&next);
        Ok(self.status)
    }

    fn ensure_turn(&self, requested: Mark) -> Result<(), TicTacToeError> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver {
                status: self.status,
            });
        }

        let to_move = self.current_mark();
        if to_move != requested {
            return Err(TicTacToeError::NotYourTurn { requested, to_move });
        }
        Ok(())
    }

    /// Applies one move for the current mark, whichever side holds it, and
    /// recomputes the status. Nothing changes when the move is rejected.
    pub fn place_mark(&mut self, position: Position) -> Result<GameStatus, TicTacToeError> {
        let status = self.push_move(position)?;

        if status.is_over() {
            log!("Game {} finished after {} moves: {}", self.id, self.moves.len(), status);
        }

        Ok(status)
    }

    /// Lets the engine play `BOT_MARK`. Fails without changes when it is
    /// the human's turn.
    pub fn play_bot_move(
        &mut self,
        strategy: BotStrategy,
        rng: &mut SessionRng,
    ) -> Result<Position, TicTacToeError> {
        self.ensure_turn(Self::BOT_MARK)?;

        let input = BotInput::from_game(self);
        let Some(position) = calculate_move(strategy, &input, rng) else {
            log!("Game {}: no move found for {} on an unfinished board", self.id, input.bot_mark);
            return Err(TicTacToeError::NoMovesAvailable);
        };

        self.place_mark(position)?;
        log!("Game {}: bot ({:?}) played {} as {}", self.id, strategy, position, input.bot_mark);
        Ok(position)
    }

    /// A human (`HUMAN_MARK`) move followed, while the game is still
    /// running, by the engine's reply. Rejected without changes when it is
    /// not the human's turn.
    pub fn play_round(
        &mut self,
        position: Position,
        strategy: BotStrategy,
        rng: &mut SessionRng,
    ) -> Result<GameStatus, TicTacToeError> {
        self.ensure_turn(Self::HUMAN_MARK)?;
        self.place_mark(position)?;

        if !self.status.is_over() {
            self.play_bot_move(strategy, rng)?;
        }

        Ok(self.status)
    }

    pub fn board_view(&self) -> BoardView {
        BoardView {
            board: *self.current_board(),
            winner: self.status.label().map(str::to_string),
        }
    }

    pub fn game_view(&self) -> GameView {
        GameView {
            boards: self.boards.clone(),
            winner: self.status.label().map(str::to_string),
        }
    }
}
