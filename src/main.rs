use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use scoreboard_engine::bounds::load_bounds_or_default;
use scoreboard_engine::model::config::{GameConfig, OkeyConfig, YuzBirOkeyConfig};
use scoreboard_engine::model::{Game, GameType, SingleScore};
use scoreboard_engine::service::{add_player, create_game, validate_game, ScoreCalculator};
use scoreboard_engine::store::{load_all_games, load_game, save_game, FileStore, GameStore};
use scoreboard_engine::strategy::{
    AverageScoring, BestRoundsScoring, ScoringStrategy, StandardScoring,
};

#[derive(Parser)]
#[command(name = "scoreboard-engine", about = "Score tracker for card and tile games")]
struct Cli {
    /// Directory holding saved games
    #[arg(long, default_value = "scoreboard-data", env = "SCOREBOARD_DATA_DIR")]
    data_dir: PathBuf,

    /// Path to a score-bounds TOML file (built-in defaults when omitted)
    #[arg(long, env = "SCOREBOARD_BOUNDS")]
    bounds: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum GameTypeArg {
    Genel,
    Okey,
    YuzBir,
}

impl From<GameTypeArg> for GameType {
    fn from(arg: GameTypeArg) -> Self {
        match arg {
            GameTypeArg::Genel => GameType::GenelOyun,
            GameTypeArg::Okey => GameType::Okey,
            GameTypeArg::YuzBir => GameType::YuzBirOkey,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Standard,
    Average,
    BestRounds,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new game and make it current
    Create {
        title: String,
        #[arg(long, value_enum, default_value = "genel")]
        game_type: GameTypeArg,
        /// Partnered play (Okey / 101 Okey configs)
        #[arg(long)]
        partnered: bool,
    },
    /// Add a player to the current game
    AddPlayer { name: String },
    /// Record one round: one value per player, in seating order
    AddScore { values: Vec<i32> },
    /// Print calculated totals for the current game
    Totals {
        #[arg(long, value_enum, default_value = "standard")]
        strategy: StrategyArg,
        /// Round count for the best-rounds strategy
        #[arg(long, default_value_t = 3)]
        best_n: usize,
    },
    /// Print one player's value for a given round
    Round { player_name: String, round: u32 },
    /// List saved games
    List,
    /// Print the current game as JSON
    Show,
    /// Delete a saved game by id
    Delete { game_id: String },
    /// Point the store at a different saved game
    SetCurrent { game_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let store = FileStore::open(&cli.data_dir).await?;
    tracing::debug!(root = %store.root().display(), "opened game store");
    let bounds = load_bounds_or_default(cli.bounds.as_deref());

    match cli.command {
        Command::Create {
            title,
            game_type,
            partnered,
        } => {
            let game_type: GameType = game_type.into();
            let config = match game_type {
                GameType::GenelOyun => None,
                GameType::Okey => Some(GameConfig::Okey(OkeyConfig {
                    is_partnered: partnered,
                    ..OkeyConfig::default()
                })),
                GameType::YuzBirOkey => {
                    Some(GameConfig::YuzBir(YuzBirOkeyConfig::new(partnered)))
                }
            };
            let game = create_game(&title, game_type, config)
                .ok_or("game title must be at least 2 characters")?;
            save_game(&store, &game).await?;
            store.set_current_id(Some(&game.game_id)).await?;
            println!("created {} ({})", game.game_title, game.game_id);
        }
        Command::AddPlayer { name } => {
            let mut game = current_game(&store).await?;
            if !add_player(&mut game, &name) {
                return Err(format!("could not add player {name:?}").into());
            }
            save_game(&store, &game).await?;
            println!("added {} to {}", name.trim(), game.game_title);
        }
        Command::AddScore { values } => {
            let mut game = current_game(&store).await?;
            if !validate_game(Some(&game)) {
                return Err("game needs a title and at least one player".into());
            }
            let score_list: Vec<SingleScore> = game
                .player_list
                .iter()
                .zip(&values)
                .map(|(p, v)| SingleScore::new(p.id.clone(), *v))
                .collect();
            let calc = ScoreCalculator::new(Box::new(StandardScoring), bounds);
            if values.len() != game.player_list.len()
                || !calc.add_score(&mut game, &score_list)
            {
                return Err("round rejected: check value count and score ranges".into());
            }
            save_game(&store, &game).await?;
            println!("recorded round {}", game.latest_round());
        }
        Command::Totals { strategy, best_n } => {
            let game = current_game(&store).await?;
            let strategy = make_strategy(strategy, best_n);
            let calc = ScoreCalculator::new(strategy, bounds);
            print_totals(&game, &calc);
        }
        Command::Round { player_name, round } => {
            let game = current_game(&store).await?;
            let player = game
                .player_list
                .iter()
                .find(|p| p.name.to_lowercase() == player_name.to_lowercase())
                .ok_or_else(|| format!("no player named {player_name:?}"))?;
            let calc = ScoreCalculator::new(Box::new(StandardScoring), bounds);
            println!(
                "{} scored {} in round {}",
                player.name,
                calc.get_player_round_score(&game, &player.id, round),
                round
            );
        }
        Command::List => {
            let current = store.current_id().await?;
            for game in load_all_games(&store).await? {
                let marker = if current.as_deref() == Some(game.game_id.as_str()) {
                    "*"
                } else {
                    " "
                };
                let mode = match game.config.as_ref().map(|c| c.is_partnered()) {
                    Some(true) => ", partnered",
                    Some(false) => ", solo",
                    None => "",
                };
                println!(
                    "{marker} {} [{}{}] {} players, {} rounds ({})",
                    game.game_title,
                    game.game_type.display_name(),
                    mode,
                    game.player_list.len(),
                    game.round_count(),
                    game.game_id
                );
            }
        }
        Command::Show => {
            let game = current_game(&store).await?;
            let payload = scoreboard_engine::service::serialize_game(Some(&game))
                .ok_or("could not serialize game")?;
            println!("{payload}");
        }
        Command::Delete { game_id } => {
            store.delete(&game_id).await?;
            println!("deleted {game_id}");
        }
        Command::SetCurrent { game_id } => {
            if load_game(&store, &game_id).await?.is_none() {
                return Err(format!("no saved game with id {game_id}").into());
            }
            store.set_current_id(Some(&game_id)).await?;
            println!("current game is now {game_id}");
        }
    }

    Ok(())
}

async fn current_game(store: &FileStore) -> Result<Game, Box<dyn std::error::Error>> {
    let id = store
        .current_id()
        .await?
        .ok_or("no current game; run `create` or `set-current` first")?;
    load_game(store, &id)
        .await?
        .ok_or_else(|| format!("current game {id} is missing from the store").into())
}

fn make_strategy(arg: StrategyArg, best_n: usize) -> Box<dyn ScoringStrategy> {
    match arg {
        StrategyArg::Standard => Box::new(StandardScoring),
        StrategyArg::Average => Box::new(AverageScoring),
        StrategyArg::BestRounds => Box::new(BestRoundsScoring::new(best_n)),
    }
}

fn print_totals(game: &Game, calc: &ScoreCalculator) {
    println!("{} ({})", game.game_title, calc.strategy().name());
    let totals = calc.get_calculated_score(game);
    if totals.is_empty() {
        println!("  (no rounds recorded)");
        return;
    }
    for entry in &totals {
        let name = game
            .player(&entry.player_id)
            .map(|p| p.name.as_str())
            .unwrap_or("<unknown>");
        println!("  {:>6}  {}", entry.score, name);
    }
    let leaders = calc.get_game_leaders(game);
    if leaders.len() > 1 {
        println!("  ({} players tied for the lead)", leaders.len());
    }
}
