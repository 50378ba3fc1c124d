//! Plays seeded computer-vs-random games and prints a JSON summary.

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use seabattle::{init_logging, GameController, RandomPlayer, Side, DEFAULT_BOARD_SIZE};

#[derive(Parser)]
#[command(about = "Run automated games between two random shooters")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u64,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Serialize)]
struct GameSummary {
    seed: u64,
    winner: Option<Side>,
    turns: usize,
}

#[derive(Serialize)]
struct Report {
    size: usize,
    games: Vec<GameSummary>,
    player_wins: usize,
    computer_wins: usize,
    average_turns: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut games = Vec::new();
    let mut size = args.size;
    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        let mut game = GameController::new(args.size, SmallRng::seed_from_u64(seed))?;
        size = game.size();
        let mut player = RandomPlayer::new(SmallRng::seed_from_u64(seed.wrapping_add(1)));
        while game.play_turn(&mut player)? {}
        games.push(GameSummary {
            seed,
            winner: game.winner(),
            turns: game.turns(),
        });
    }

    let count_wins = |side| games.iter().filter(|g| g.winner == Some(side)).count();
    let average_turns = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.turns as f64).sum::<f64>() / games.len() as f64
    };
    let report = Report {
        size,
        player_wins: count_wins(Side::Player),
        computer_wins: count_wins(Side::Computer),
        average_turns,
        games,
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
