//! Game lifecycle: creation and readiness checks.

use crate::model::config::GameConfig;
use crate::model::{Game, GameType};

/// Create a new game with an empty player list and no rounds. Returns None
/// when the trimmed title is too short to be meaningful.
pub fn create_game(title: &str, game_type: GameType, config: Option<GameConfig>) -> Option<Game> {
    if !validate_game_title(title) {
        tracing::warn!(title, "create_game: game title is invalid");
        return None;
    }
    Some(Game::new(title.trim(), game_type, config))
}

/// Precondition gate used before recording rounds or persisting: the game
/// must have a title and at least one player. Not enforced by create_game.
pub fn validate_game(game: Option<&Game>) -> bool {
    let Some(game) = game else {
        tracing::warn!("validate_game: game is missing");
        return false;
    };
    if game.game_title.trim().is_empty() {
        tracing::warn!(game_id = %game.game_id, "validate_game: game title is blank");
        return false;
    }
    if game.player_list.is_empty() {
        tracing::warn!(game_id = %game.game_id, "validate_game: game has no players");
        return false;
    }
    true
}

fn validate_game_title(title: &str) -> bool {
    let trimmed = title.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= 2
}
