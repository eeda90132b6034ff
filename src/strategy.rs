//! Scoring strategy trait and implementations.

use crate::model::{sort_by_score, Game, SingleScore};

/// A scoring strategy reduces a game's round history to one total per player.
/// Strategies are stateless and injected into the score calculator.
pub trait ScoringStrategy: Send + Sync {
    fn calculate_scores(&self, game: &Game) -> Vec<SingleScore>;
    fn name(&self) -> &str;
    fn description(&self) -> String;
}

/// Sums every round value per player, sorted descending by total.
pub struct StandardScoring;

impl ScoringStrategy for StandardScoring {
    fn calculate_scores(&self, game: &Game) -> Vec<SingleScore> {
        let mut totals: Vec<SingleScore> = game
            .player_list
            .iter()
            .map(|player| {
                let total: i32 = game
                    .score
                    .iter()
                    .map(|round| round.score_map.get(&player.id).copied().unwrap_or(0))
                    .sum();
                SingleScore::new(player.id.clone(), total)
            })
            .collect();
        sort_by_score(&mut totals);
        totals
    }

    fn name(&self) -> &str {
        "Standard Scoring"
    }

    fn description(&self) -> String {
        "Calculates total score by summing all round scores for each player".to_string()
    }
}

/// Average points per round, truncating toward zero. Empty when no rounds
/// have been recorded.
pub struct AverageScoring;

impl ScoringStrategy for AverageScoring {
    fn calculate_scores(&self, game: &Game) -> Vec<SingleScore> {
        let round_count = game.score.len() as i32;
        if round_count == 0 {
            return Vec::new();
        }

        let mut averages: Vec<SingleScore> = game
            .player_list
            .iter()
            .map(|player| {
                let total: i32 = game
                    .score
                    .iter()
                    .map(|round| round.score_map.get(&player.id).copied().unwrap_or(0))
                    .sum();
                SingleScore::new(player.id.clone(), total / round_count)
            })
            .collect();
        sort_by_score(&mut averages);
        averages
    }

    fn name(&self) -> &str {
        "Average Scoring"
    }

    fn description(&self) -> String {
        "Calculates average score per round for each player".to_string()
    }
}

/// Counts only each player's N best round values.
pub struct BestRoundsScoring {
    best_rounds_count: usize,
}

impl BestRoundsScoring {
    pub fn new(best_rounds_count: usize) -> Self {
        Self { best_rounds_count }
    }
}

impl Default for BestRoundsScoring {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ScoringStrategy for BestRoundsScoring {
    fn calculate_scores(&self, game: &Game) -> Vec<SingleScore> {
        let mut totals: Vec<SingleScore> = game
            .player_list
            .iter()
            .map(|player| {
                let mut values: Vec<i32> = game
                    .score
                    .iter()
                    .filter_map(|round| round.score_map.get(&player.id).copied())
                    .collect();
                values.sort_unstable_by(|a, b| b.cmp(a));
                values.truncate(self.best_rounds_count);
                SingleScore::new(player.id.clone(), values.iter().sum())
            })
            .collect();
        sort_by_score(&mut totals);
        totals
    }

    fn name(&self) -> &str {
        "Best Rounds Scoring"
    }

    fn description(&self) -> String {
        format!(
            "Calculates score using only the best {} rounds for each player",
            self.best_rounds_count
        )
    }
}
