//! Per-game-type score range validation, loaded from TOML at runtime.
//!
//! The acceptable magnitude of a single round entry depends on the game type
//! (101 Okey penalties run high, Okey scores stay moderate, generic games are
//! unbounded). The exact ranges are table conventions rather than fixed rules,
//! so they are configuration with built-in defaults.

use std::path::Path;

use serde::Deserialize;

use crate::model::GameType;

/// Inclusive [min, max] range for one round entry.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ScoreBounds {
    pub min: i32,
    pub max: i32,
}

impl ScoreBounds {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Top-level TOML file structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BoundsFile {
    #[serde(default)]
    pub okey: Option<ScoreBounds>,
    #[serde(default)]
    pub yuz_bir_okey: Option<ScoreBounds>,
}

/// Effective bounds per game type. Generic games accept any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsConfig {
    pub okey: ScoreBounds,
    pub yuz_bir_okey: ScoreBounds,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            okey: ScoreBounds { min: -500, max: 500 },
            yuz_bir_okey: ScoreBounds { min: -50, max: 1000 },
        }
    }
}

impl BoundsConfig {
    /// Bounds for a game type; None means unbounded.
    pub fn for_game_type(&self, game_type: GameType) -> Option<ScoreBounds> {
        match game_type {
            GameType::GenelOyun => None,
            GameType::Okey => Some(self.okey),
            GameType::YuzBirOkey => Some(self.yuz_bir_okey),
        }
    }

    fn from_file(file: BoundsFile) -> Self {
        let d = Self::default();
        Self {
            okey: file.okey.unwrap_or(d.okey),
            yuz_bir_okey: file.yuz_bir_okey.unwrap_or(d.yuz_bir_okey),
        }
    }
}

/// Load bounds from a TOML file at the given path.
pub fn load_bounds(path: &Path) -> Result<BoundsConfig, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file: BoundsFile = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok(BoundsConfig::from_file(file))
}

/// Try the given path, falling back to built-in defaults when absent or broken.
pub fn load_bounds_or_default(path: Option<&Path>) -> BoundsConfig {
    if let Some(p) = path {
        match load_bounds(p) {
            Ok(bounds) => {
                tracing::info!(path = %p.display(), "loaded score bounds");
                return bounds;
            }
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "failed to load score bounds");
            }
        }
    }
    tracing::debug!("using built-in score bounds");
    BoundsConfig::default()
}
