pub mod config;
pub mod engine_config;
pub mod game_service;
pub mod games;
pub mod identifiers;
pub mod logger;
pub mod store;

pub use engine_config::EngineConfig;
pub use game_service::{GameService, ServiceError};
pub use identifiers::GameId;
pub use store::{InMemoryMoveStore, MoveStore, StoreError};
