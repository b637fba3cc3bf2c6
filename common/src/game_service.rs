use std::fmt;

use crate::engine_config::EngineConfig;
use crate::games::SessionRng;
use crate::games::tictactoe::{
    BoardView, BotStrategy, GameView, Position, TicTacToeError, TicTacToeGame,
};
use crate::identifiers::GameId;
use crate::log;
use crate::store::{MoveStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    GameNotFound(GameId),
    /// The stored move list does not replay as a legal game.
    InvalidHistory { id: GameId, source: TicTacToeError },
    Game(TicTacToeError),
    Store(StoreError),
}

impl ServiceError {
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, ServiceError::Game(e) if e.is_illegal_move())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::GameNotFound(_) => write!(f, "Game not found"),
            ServiceError::InvalidHistory { id, source } => {
                write!(f, "Stored moves for game {} are invalid: {}", id, source)
            }
            ServiceError::Game(e) if e.is_illegal_move() => write!(f, "Illegal move"),
            ServiceError::Game(e) => write!(f, "Game error: {}", e),
            ServiceError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::GameNotFound(_) => None,
            ServiceError::InvalidHistory { source, .. } => Some(source),
            ServiceError::Game(e) => Some(e),
            ServiceError::Store(e) => Some(e),
        }
    }
}

impl From<TicTacToeError> for ServiceError {
    fn from(e: TicTacToeError) -> Self {
        ServiceError::Game(e)
    }
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Store(e)
    }
}

/// Games backed by a move store. Each call rebuilds the game from its
/// stored moves and, after a successful round, writes the moves back.
pub struct GameService<S: MoveStore> {
    store: S,
    strategy: BotStrategy,
    rng: SessionRng,
}

impl<S: MoveStore> GameService<S> {
    pub fn new(store: S, config: &EngineConfig) -> Self {
        let rng = config.session_rng();
        log!("Game service started: strategy {:?}, rng seed {}", config.bot_strategy, rng.seed());
        Self {
            store,
            strategy: config.bot_strategy,
            rng,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn new_game(&mut self) -> GameId {
        let id = self.store.create_game();
        log!("Created game {}", id);
        id
    }

    pub fn list_games(&self) -> Vec<GameId> {
        self.store.list_games()
    }

    fn load(&self, id: GameId) -> Result<TicTacToeGame, ServiceError> {
        let moves = self
            .store
            .load_moves(id)
            .ok_or(ServiceError::GameNotFound(id))?;
        TicTacToeGame::from_moves(id, moves).map_err(|source| {
            log!("Game {}: stored moves rejected: {}", id, source);
            ServiceError::InvalidHistory { id, source }
        })
    }

    /// Plays `position` for the human, lets the engine answer, then stores
    /// the new move list. A rejected move leaves the store untouched.
    pub fn make_move(&mut self, id: GameId, position: Position) -> Result<BoardView, ServiceError> {
        let mut game = self.load(id)?;

        if let Err(e) = game.play_round(position, self.strategy, &mut self.rng) {
            log!("Game {}: rejected move {}: {}", id, position, e);
            return Err(e.into());
        }

        self.store.save_moves(id, game.moves())?;
        Ok(game.board_view())
    }

    pub fn view_game(&self, id: GameId) -> Result<GameView, ServiceError> {
        Ok(self.load(id)?.game_view())
    }
}
