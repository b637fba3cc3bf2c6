use std::collections::BTreeMap;
use std::fmt;

use crate::games::tictactoe::Position;
use crate::identifiers::GameId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownGame(GameId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownGame(id) => write!(f, "No stored game with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Keeps the committed move list of each game. The move list is the only
/// state that is ever stored.
pub trait MoveStore {
    fn create_game(&mut self) -> GameId;
    /// Ids in creation order.
    fn list_games(&self) -> Vec<GameId>;
    fn load_moves(&self, id: GameId) -> Option<Vec<Position>>;
    fn save_moves(&mut self, id: GameId, moves: &[Position]) -> Result<(), StoreError>;
}

/// Ids start at 1 and grow by one per game.
#[derive(Debug, Default)]
pub struct InMemoryMoveStore {
    games: BTreeMap<GameId, Vec<Position>>,
    last_id: u64,
}

impl InMemoryMoveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MoveStore for InMemoryMoveStore {
    fn create_game(&mut self) -> GameId {
        self.last_id += 1;
        let id = GameId::new(self.last_id);
        self.games.insert(id, Vec::new());
        id
    }

    fn list_games(&self) -> Vec<GameId> {
        self.games.keys().copied().collect()
    }

    fn load_moves(&self, id: GameId) -> Option<Vec<Position>> {
        self.games.get(&id).cloned()
    }

    fn save_moves(&mut self, id: GameId, moves: &[Position]) -> Result<(), StoreError> {
        let stored = self.games.get_mut(&id).ok_or(StoreError::UnknownGame(id))?;
        *stored = moves.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut store = InMemoryMoveStore::new();
        assert_eq!(store.create_game(), GameId::new(1));
        assert_eq!(store.create_game(), GameId::new(2));
        assert_eq!(store.list_games(), vec![GameId::new(1), GameId::new(2)]);
    }

    #[test]
    fn test_save_replaces_move_list() {
        let mut store = InMemoryMoveStore::new();
        let id = store.create_game();
        assert_eq!(store.load_moves(id), Some(Vec::new()));

        let moves = vec![Position::new(1, 1), Position::new(0, 0)];
        store.save_moves(id, &moves).unwrap();
        assert_eq!(store.load_moves(id), Some(moves));
    }

    #[test]
    fn test_unknown_game() {
        let mut store = InMemoryMoveStore::new();
        assert_eq!(store.load_moves(GameId::new(42)), None);
        assert_eq!(
            store.save_moves(GameId::new(42), &[]),
            Err(StoreError::UnknownGame(GameId::new(42)))
        );
    }
}
