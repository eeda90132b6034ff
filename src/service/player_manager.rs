//! Player roster operations.

use crate::model::{Game, Player};

/// Append a player with a fresh id and trimmed name. Rejects invalid names
/// and case-insensitive duplicates; a rejected call leaves the game unchanged.
pub fn add_player(game: &mut Game, name: &str) -> bool {
    if !validate_player_name(name) {
        tracing::warn!(name, "add_player: player name is invalid");
        return false;
    }
    let trimmed = name.trim();
    if has_player_with_name(game, trimmed) {
        tracing::warn!(name = trimmed, "add_player: player name already exists");
        return false;
    }
    game.player_list.push(Player::new(trimmed));
    tracing::debug!(game_id = %game.game_id, name = trimmed, "add_player: player added");
    true
}

/// Remove the player with the given id. Recorded rounds keep any entries for
/// the removed id; totals simply stop listing the player.
pub fn remove_player(game: &mut Game, player_id: &str) -> bool {
    if player_id.trim().is_empty() {
        tracing::warn!("remove_player: player id is blank");
        return false;
    }
    let before = game.player_list.len();
    game.player_list.retain(|p| p.id != player_id);
    let removed = game.player_list.len() < before;
    if removed {
        tracing::debug!(game_id = %game.game_id, player_id, "remove_player: player removed");
    } else {
        tracing::warn!(game_id = %game.game_id, player_id, "remove_player: player not found");
    }
    removed
}

/// The game's roster in seating order.
pub fn players(game: &Game) -> &[Player] {
    &game.player_list
}

/// UI-facing gate: trimmed length in [2, 20], letters/digits/spaces only.
pub fn validate_player_name(name: &str) -> bool {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    len >= 2 && len <= 20 && trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

// Case folding has to cover the non-ASCII letters the roster allows.
fn has_player_with_name(game: &Game, name: &str) -> bool {
    let folded = name.to_lowercase();
    game.player_list
        .iter()
        .any(|p| p.name.to_lowercase() == folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameType;

    fn empty_game() -> Game {
        Game::new("Test", GameType::GenelOyun, None)
    }

    #[test]
    fn test_add_player_trims_name() {
        let mut game = empty_game();
        assert!(add_player(&mut game, "  Ali  "));
        assert_eq!(game.player_list[0].name, "Ali");
    }

    #[test]
    fn test_add_player_rejects_invalid_names() {
        let mut game = empty_game();
        assert!(!add_player(&mut game, ""));
        assert!(!add_player(&mut game, "   "));
        assert!(!add_player(&mut game, "A"));
        assert!(!add_player(&mut game, "this name is far too long to fit"));
        assert!(game.player_list.is_empty());
    }

    #[test]
    fn test_add_player_rejects_case_insensitive_duplicate() {
        let mut game = empty_game();
        assert!(add_player(&mut game, "Ali"));
        assert!(!add_player(&mut game, "ali"));
        assert!(!add_player(&mut game, "ALI "));
        assert_eq!(game.player_list.len(), 1);
    }

    #[test]
    fn test_duplicate_check_folds_unicode_case() {
        let mut game = empty_game();
        assert!(add_player(&mut game, "Ayşe"));
        assert!(!add_player(&mut game, "AYŞE"));
        assert!(!add_player(&mut game, "ayşe "));
        assert_eq!(game.player_list.len(), 1);
    }

    #[test]
    fn test_players_returns_roster_in_order() {
        let mut game = empty_game();
        add_player(&mut game, "Ali");
        add_player(&mut game, "Veli");
        let roster = players(&game);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Ali");
        assert_eq!(roster[1].name, "Veli");
    }

    #[test]
    fn test_remove_player_by_id() {
        let mut game = empty_game();
        add_player(&mut game, "Ali");
        add_player(&mut game, "Veli");
        let id = game.player_list[0].id.clone();
        assert!(remove_player(&mut game, &id));
        assert_eq!(game.player_list.len(), 1);
        assert!(!remove_player(&mut game, &id));
        assert!(!remove_player(&mut game, " "));
    }

    #[test]
    fn test_validate_player_name_bounds() {
        assert!(validate_player_name("Al"));
        assert!(validate_player_name("Oyuncu 1"));
        assert!(!validate_player_name("A"));
        assert!(!validate_player_name("x".repeat(21).as_str()));
        assert!(!validate_player_name("Ali!"));
    }

    #[test]
    fn test_validate_player_name_accepts_unicode_letters() {
        assert!(validate_player_name("Ayşe"));
        assert!(validate_player_name("Ömer"));
    }
}
