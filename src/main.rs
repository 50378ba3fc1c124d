#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui::print_player_view, CliPlayer, GameController, GameError, Side,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Play Battleship against a random-shooting computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length, clamped to 5..=15")]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&cli.size) {
        println!(
            "Board size {} is outside {}..={}, clamping.",
            cli.size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        );
    }
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = GameController::new(cli.size, rng)?;
    let mut player = CliPlayer::new();
    println!("Sink the computer's fleet. Enter targets like A1 or 1A, q to quit.");

    loop {
        println!();
        print_player_view(&game);
        match game.play_turn(&mut player) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(GameError::PlayerLeft) => {
                println!("\nGoodbye.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n=== GAME OVER ===\n");
    print_player_view(&game);
    match game.winner() {
        Some(Side::Player) => {
            println!("\nVICTORY! You have sunk all enemy ships in {} turns.", game.turns());
        }
        Some(Side::Computer) => {
            println!("\nDEFEAT. All your ships have been destroyed.");
        }
        None => {}
    }
    Ok(())
}
