//! JSON (de)serialization of the full game graph.
//!
//! The wire shape keeps the original field names (`gameId`, `gameTitle`,
//! `playerList`, `score`, `gameType`, `config`). The `config` object carries
//! no tag of its own; its concrete shape is resolved from the sibling
//! `gameType` discriminator, with an exhaustive match over the game types.

use serde::Deserialize;

use crate::model::config::{GameConfig, OkeyConfig, YuzBirOkeyConfig};
use crate::model::{Game, GameType, Player, Score};

/// Serialize a game to JSON. None for a missing game or an internal encoder
/// failure; this boundary never panics.
pub fn serialize_game(game: Option<&Game>) -> Option<String> {
    let Some(game) = game else {
        tracing::warn!("serialize_game: game is missing");
        return None;
    };
    match serde_json::to_string(game) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!(game_id = %game.game_id, error = %e, "serialize_game: encoding failed");
            None
        }
    }
}

/// Untyped payload: everything but `config` parses structurally, `config`
/// stays raw until the discriminator picks its shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGame {
    game_id: String,
    game_title: String,
    #[serde(default)]
    player_list: Vec<Player>,
    #[serde(default)]
    score: Vec<Score>,
    game_type: GameType,
    #[serde(default)]
    config: Option<serde_json::Value>,
}

/// Parse a game from JSON. Returns None for blank input, malformed text, an
/// unknown `gameType` discriminator, or a config payload that does not match
/// the discriminated shape.
pub fn deserialize_game(text: &str) -> Option<Game> {
    if text.trim().is_empty() {
        tracing::warn!("deserialize_game: input is blank");
        return None;
    }

    let raw: RawGame = match serde_json::from_str(text) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "deserialize_game: malformed payload");
            return None;
        }
    };

    let config = match resolve_config(raw.game_type, raw.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "deserialize_game: config resolution failed");
            return None;
        }
    };

    Some(Game {
        game_id: raw.game_id,
        game_title: raw.game_title,
        player_list: raw.player_list,
        score: raw.score,
        game_type: raw.game_type,
        config,
    })
}

/// Cheap well-formedness check used by call sites before attempting a full
/// parse: valid JSON that mentions the id, title and player-list fields.
pub fn validate_serialized_game(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    if serde_json::from_str::<serde_json::Value>(text).is_err() {
        tracing::warn!("validate_serialized_game: invalid JSON");
        return false;
    }
    text.contains("gameId") && text.contains("gameTitle") && text.contains("playerList")
}

fn resolve_config(
    game_type: GameType,
    raw: Option<serde_json::Value>,
) -> Result<Option<GameConfig>, serde_json::Error> {
    match game_type {
        // Generic games carry no config; any stray payload is dropped.
        GameType::GenelOyun => Ok(None),
        GameType::Okey => match raw {
            Some(value) => {
                let config: OkeyConfig = serde_json::from_value(value)?;
                Ok(Some(GameConfig::Okey(config)))
            }
            None => Ok(None),
        },
        GameType::YuzBirOkey => match raw {
            Some(value) => {
                let config: YuzBirOkeyConfig = serde_json::from_value(value)?;
                Ok(Some(GameConfig::YuzBir(config)))
            }
            None => Ok(None),
        },
    }
}
