//! Save/load/delete flows against a FileStore on a temp directory.

use scoreboard_engine::model::config::{GameConfig, YuzBirOkeyConfig};
use scoreboard_engine::model::{Game, GameType, SingleScore};
use scoreboard_engine::service::{add_player, create_game, ScoreCalculator};
use scoreboard_engine::store::{
    load_all_games, load_game, save_game, FileStore, GameStore, StoreError,
};

async fn temp_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    (dir, store)
}

fn sample_game(title: &str) -> Game {
    let mut game = create_game(title, GameType::GenelOyun, None).unwrap();
    add_player(&mut game, "Ali");
    add_player(&mut game, "Veli");
    let calc = ScoreCalculator::default();
    let round: Vec<SingleScore> = game
        .player_list
        .iter()
        .zip([10, 20])
        .map(|(p, v)| SingleScore::new(p.id.clone(), v))
        .collect();
    calc.add_score(&mut game, &round);
    game
}

#[tokio::test]
async fn saved_game_loads_back_identically() {
    let (_dir, store) = temp_store().await;
    let game = sample_game("Persisted Game");
    save_game(&store, &game).await.unwrap();

    let loaded = load_game(&store, &game.game_id).await.unwrap().unwrap();
    assert_eq!(loaded, game);
}

#[tokio::test]
async fn yuz_bir_config_survives_persistence() {
    let (_dir, store) = temp_store().await;
    let config = GameConfig::YuzBir(YuzBirOkeyConfig::new(false));
    let game = create_game("101 Masası", GameType::YuzBirOkey, Some(config)).unwrap();
    save_game(&store, &game).await.unwrap();

    let loaded = load_game(&store, &game.game_id).await.unwrap().unwrap();
    match loaded.config {
        Some(GameConfig::YuzBir(c)) => {
            assert!(!c.is_partnered);
            assert_eq!(c.rules.len(), 7);
        }
        other => panic!("expected YuzBir config, got {other:?}"),
    }
}

#[tokio::test]
async fn list_reflects_saves_and_deletes() {
    let (_dir, store) = temp_store().await;
    let first = sample_game("First");
    let second = sample_game("Second");
    save_game(&store, &first).await.unwrap();
    save_game(&store, &second).await.unwrap();

    let titles: Vec<String> = load_all_games(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.game_title)
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    store.delete(&first.game_id).await.unwrap();
    let remaining = load_all_games(&store).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].game_id, second.game_id);
}

#[tokio::test]
async fn resave_updates_in_place() {
    let (_dir, store) = temp_store().await;
    let mut game = sample_game("Evolving");
    save_game(&store, &game).await.unwrap();

    let calc = ScoreCalculator::default();
    let round: Vec<SingleScore> = game
        .player_list
        .iter()
        .zip([5, 5])
        .map(|(p, v)| SingleScore::new(p.id.clone(), v))
        .collect();
    assert!(calc.add_score(&mut game, &round));
    save_game(&store, &game).await.unwrap();

    let loaded = load_game(&store, &game.game_id).await.unwrap().unwrap();
    assert_eq!(loaded.round_count(), 2);
    assert_eq!(store.list_ids().await.unwrap().len(), 1);
}

#[tokio::test]
async fn current_game_follows_saves_and_deletes() {
    let (_dir, store) = temp_store().await;
    let game = sample_game("Current");
    save_game(&store, &game).await.unwrap();
    store.set_current_id(Some(&game.game_id)).await.unwrap();
    assert_eq!(
        store.current_id().await.unwrap().as_deref(),
        Some(game.game_id.as_str())
    );

    store.delete(&game.game_id).await.unwrap();
    assert!(store.current_id().await.unwrap().is_none());
}

#[tokio::test]
async fn corrupt_payload_is_an_error_not_a_panic() {
    let (_dir, store) = temp_store().await;
    store.save("broken", "{definitely not json").await.unwrap();

    match load_game(&store, "broken").await {
        Err(StoreError::Corrupt(id)) => assert_eq!(id, "broken"),
        other => panic!("expected corrupt-payload error, got {other:?}"),
    }

    // load_all_games skips the unreadable entry instead of failing.
    assert!(load_all_games(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_id_loads_as_none() {
    let (_dir, store) = temp_store().await;
    assert!(load_game(&store, "nope").await.unwrap().is_none());
}
