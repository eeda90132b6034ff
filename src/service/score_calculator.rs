//! Round recording and total calculation.

use std::collections::{HashMap, HashSet};

use crate::bounds::BoundsConfig;
use crate::model::{winners, Game, Score, SingleScore};
use crate::strategy::{ScoringStrategy, StandardScoring};

/// Records rounds and reduces them to totals via an injected strategy.
pub struct ScoreCalculator {
    strategy: Box<dyn ScoringStrategy>,
    bounds: BoundsConfig,
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new(Box::new(StandardScoring), BoundsConfig::default())
    }
}

impl ScoreCalculator {
    pub fn new(strategy: Box<dyn ScoringStrategy>, bounds: BoundsConfig) -> Self {
        Self { strategy, bounds }
    }

    pub fn with_strategy(strategy: Box<dyn ScoringStrategy>) -> Self {
        Self::new(strategy, BoundsConfig::default())
    }

    pub fn strategy(&self) -> &dyn ScoringStrategy {
        self.strategy.as_ref()
    }

    /// Record one round. The entry list must cover each of the game's players
    /// exactly once, and for rule-bound game types every value must sit inside
    /// the configured range. Any failure rejects the whole round; the game is
    /// never left with a partial append.
    pub fn add_score(&self, game: &mut Game, score_list: &[SingleScore]) -> bool {
        let player_count = game.player_list.len();
        if score_list.len() != player_count {
            tracing::warn!(
                game_id = %game.game_id,
                players = player_count,
                entries = score_list.len(),
                "add_score: player count mismatch"
            );
            return false;
        }

        let player_ids: HashSet<&str> =
            game.player_list.iter().map(|p| p.id.as_str()).collect();
        if !score_list
            .iter()
            .all(|s| player_ids.contains(s.player_id.as_str()))
        {
            tracing::warn!(game_id = %game.game_id, "add_score: entry for unknown player");
            return false;
        }

        // Duplicate entries would collapse in the map and leave the round
        // covering fewer players than the roster.
        let distinct: HashSet<&str> = score_list.iter().map(|s| s.player_id.as_str()).collect();
        if distinct.len() != player_count {
            tracing::warn!(game_id = %game.game_id, "add_score: duplicate entry for a player");
            return false;
        }

        if let Some(bounds) = self.bounds.for_game_type(game.game_type) {
            if let Some(bad) = score_list.iter().find(|s| !bounds.contains(s.score)) {
                tracing::warn!(
                    game_id = %game.game_id,
                    game_type = game.game_type.display_name(),
                    value = bad.score,
                    min = bounds.min,
                    max = bounds.max,
                    "add_score: score out of range for game type"
                );
                return false;
            }
        }

        let score_map: HashMap<String, i32> = score_list
            .iter()
            .map(|s| (s.player_id.clone(), s.score))
            .collect();
        let score_order = game.score.len() as u32 + 1;
        game.score.push(Score {
            score_order,
            score_map,
        });
        tracing::debug!(game_id = %game.game_id, round = score_order, "add_score: round recorded");
        true
    }

    /// A player's value for one round. Rounds are 1-based; anything outside
    /// the recorded range, or a missing entry, reads as zero.
    pub fn get_player_round_score(&self, game: &Game, player_id: &str, round: u32) -> i32 {
        if round == 0 || round as usize > game.score.len() {
            return 0;
        }
        game.score
            .iter()
            .find(|s| s.score_order == round)
            .and_then(|s| s.score_map.get(player_id).copied())
            .unwrap_or(0)
    }

    /// Totals per player, ordering determined by the active strategy.
    pub fn get_calculated_score(&self, game: &Game) -> Vec<SingleScore> {
        self.strategy.calculate_scores(game)
    }

    /// Players whose total equals the maximum, ties included.
    pub fn get_game_leaders(&self, game: &Game) -> Vec<SingleScore> {
        winners(&self.get_calculated_score(game))
    }
}
