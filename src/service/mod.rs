pub mod game_manager;
pub mod player_manager;
pub mod score_calculator;
pub mod serializer;

pub use game_manager::{create_game, validate_game};
pub use player_manager::{add_player, players, remove_player, validate_player_name};
pub use score_calculator::ScoreCalculator;
pub use serializer::{deserialize_game, serialize_game, validate_serialized_game};
