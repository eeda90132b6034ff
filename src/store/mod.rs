//! Persistence boundary: a key-value store of serialized game payloads.

pub mod file;

pub use file::FileStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Game;
use crate::service::serializer;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("game payload could not be serialized")]
    Serialize,
    #[error("stored payload for {0} could not be parsed")]
    Corrupt(String),
}

/// Key-value contract for serialized games: one payload per game id, an index
/// of known ids, and an optional "current game" pointer. Writes to the same
/// id are last-write-wins; the store does no versioning or conflict handling.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn save(&self, game_id: &str, payload: &str) -> Result<(), StoreError>;
    async fn load(&self, game_id: &str) -> Result<Option<String>, StoreError>;
    async fn delete(&self, game_id: &str) -> Result<(), StoreError>;
    async fn list_ids(&self) -> Result<Vec<String>, StoreError>;
    async fn current_id(&self) -> Result<Option<String>, StoreError>;
    async fn set_current_id(&self, game_id: Option<&str>) -> Result<(), StoreError>;
}

/// Serialize and persist a game under its own id.
pub async fn save_game<S: GameStore + ?Sized>(store: &S, game: &Game) -> Result<(), StoreError> {
    let payload = serializer::serialize_game(Some(game)).ok_or(StoreError::Serialize)?;
    store.save(&game.game_id, &payload).await
}

/// Load and parse a game by id. Ok(None) when the id is unknown; a payload
/// that exists but no longer parses is surfaced as corruption, not skipped.
pub async fn load_game<S: GameStore + ?Sized>(
    store: &S,
    game_id: &str,
) -> Result<Option<Game>, StoreError> {
    match store.load(game_id).await? {
        Some(payload) => serializer::deserialize_game(&payload)
            .map(Some)
            .ok_or_else(|| StoreError::Corrupt(game_id.to_string())),
        None => Ok(None),
    }
}

/// Load every game the index knows about, skipping ids whose payload is
/// missing or unreadable.
pub async fn load_all_games<S: GameStore + ?Sized>(store: &S) -> Result<Vec<Game>, StoreError> {
    let mut games = Vec::new();
    for id in store.list_ids().await? {
        match load_game(store, &id).await {
            Ok(Some(game)) => games.push(game),
            Ok(None) => tracing::warn!(game_id = %id, "indexed game has no payload"),
            Err(e) => tracing::warn!(game_id = %id, error = %e, "skipping unreadable game"),
        }
    }
    Ok(games)
}
