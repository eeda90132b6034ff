//! Core domain types: games, players, score rounds.

pub mod config;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use config::GameConfig;

pub type PlayerId = String;

/// Supported game types. The variant name doubles as the wire discriminator
/// that selects which config shape `config` carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameType {
    GenelOyun,
    Okey,
    YuzBirOkey,
}

impl GameType {
    pub fn display_name(&self) -> &'static str {
        match self {
            GameType::GenelOyun => "Genel Oyun",
            GameType::Okey => "Okey",
            GameType::YuzBirOkey => "101 Okey",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// New player with a fresh v4 id. The caller is responsible for trimming.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        }
    }
}

/// One recorded round: a 1-based order and one point delta per player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score_order: u32,
    pub score_map: HashMap<PlayerId, i32>,
}

/// Transient (player, points) pair. Used both as round input and as
/// calculated-total output; never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SingleScore {
    pub player_id: PlayerId,
    pub score: i32,
}

impl SingleScore {
    pub fn new(player_id: impl Into<PlayerId>, score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            score,
        }
    }
}

/// Highest total among the given calculated scores, or None when empty.
pub fn winning_score(scores: &[SingleScore]) -> Option<i32> {
    scores.iter().map(|s| s.score).max()
}

/// Every entry whose total equals the maximum (ties included).
pub fn winners(scores: &[SingleScore]) -> Vec<SingleScore> {
    match winning_score(scores) {
        Some(top) => scores.iter().filter(|s| s.score == top).cloned().collect(),
        None => Vec::new(),
    }
}

/// Sort descending by total, preserving input order between equal totals.
pub fn sort_by_score(scores: &mut [SingleScore]) {
    scores.sort_by_key(|s| std::cmp::Reverse(s.score));
}

/// A full scoreboard: identity, players in seating order, recorded rounds,
/// and the game-type-specific rule config.
///
/// `Deserialize` is intentionally not derived: the `config` shape depends on
/// the sibling `gameType` discriminator, so parsing goes through
/// [`crate::service::serializer`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: String,
    pub game_title: String,
    pub player_list: Vec<Player>,
    pub score: Vec<Score>,
    pub game_type: GameType,
    pub config: Option<GameConfig>,
}

impl Game {
    pub fn new(title: &str, game_type: GameType, config: Option<GameConfig>) -> Self {
        Self {
            game_id: Uuid::new_v4().to_string(),
            game_title: title.to_string(),
            player_list: Vec::new(),
            score: Vec::new(),
            game_type,
            config,
        }
    }

    pub fn round_count(&self) -> usize {
        self.score.len()
    }

    pub fn has_scores(&self) -> bool {
        !self.score.is_empty()
    }

    pub fn has_minimum_players(&self) -> bool {
        self.player_list.len() >= 2
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.player_list.iter().find(|p| p.id == player_id)
    }

    pub fn player_names(&self) -> Vec<String> {
        self.player_list.iter().map(|p| p.name.clone()).collect()
    }

    pub fn is_ready_to_play(&self) -> bool {
        !self.game_title.trim().is_empty() && self.has_minimum_players()
    }

    /// Highest recorded round order, 0 when no rounds exist.
    pub fn latest_round(&self) -> u32 {
        self.score.iter().map(|s| s.score_order).max().unwrap_or(0)
    }
}
