//! Reversi player
//!
//! Reads controller commands from stdin and writes moves to stdout.
//! With `--interactive` it plays a human at the terminal instead.
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see every board.

use std::io;
use std::process;

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use reversi::eval::EARLY_GAME_MOVES;
use reversi::{play_console, serve, Board, Color, EngineError, Player, PlayerConfig, Strategy};

/// Play one side of a Reversi game over stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "reversi", version, about = "Reversi player for line-protocol controllers")]
struct Cli {
    /// Move selection strategy
    #[arg(long, value_enum, default_value_t = Strategy::Adaptive)]
    strategy: Strategy,

    /// Moves (both sides) before the adaptive heuristic enters the mid game
    #[arg(long, default_value_t = EARLY_GAME_MOVES)]
    early_game_moves: u32,

    /// Seed for tie-breaking (overridden by `srand:`); random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Play against a human on the terminal instead of a controller
    #[arg(long)]
    interactive: bool,

    /// Color of the human in interactive mode (X moves first)
    #[arg(long, default_value = "X", value_parser = parse_color)]
    human: Color,
}

fn parse_color(s: &str) -> Result<Color, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Color::from_symbol), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(format!("expected X or O, got {:?}", s)),
    }
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    let mut config = PlayerConfig::default()
        .with_strategy(cli.strategy)
        .with_early_game_moves(cli.early_game_moves);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    if cli.interactive {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::new(Color::Black);
        let outcome = play_console(stdin.lock(), stdout.lock(), board, &config, cli.human, &mut rng)?;
        info!("console game ended: {:?}", outcome);
        return Ok(());
    }

    let mut player: Player = Player::new(config);
    info!("starting with {:?}", player.config());
    serve(stdin.lock(), stdout.lock(), &mut player)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{}", err);
        process::exit(1);
    }
}
