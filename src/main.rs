//! Gomoku console game
//!
//! Play Human vs Human, Human vs AI or watch AI vs AI in the terminal.

use std::io;

use clap::{Parser, ValueEnum};
use log::warn;

use gomoku::config::MAX_SUPPORTED_DEPTH;
use gomoku::ui::{ConsoleApp, MenuChoice};
use gomoku::{EngineConfig, GomokuError, BOARD_SIZE};

/// Match type selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human vs Human
    Pvp,
    /// Human vs AI
    Pve,
    /// AI vs AI
    Eve,
}

impl From<Mode> for MenuChoice {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => MenuChoice::HumanVsHuman,
            Mode::Pve => MenuChoice::HumanVsAi,
            Mode::Eve => MenuChoice::AiVsAi,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Gomoku with a minimax AI", long_about = None)]
struct Cli {
    /// Match type; shows the main menu when omitted
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// AI search depth in plies
    #[arg(short, long, env = "GOMOKU_DEPTH", default_value_t = 6)]
    depth: u8,

    /// Board side length
    #[arg(short, long, env = "GOMOKU_BOARD_SIZE", default_value_t = BOARD_SIZE)]
    size: usize,
}

fn main() -> Result<(), GomokuError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if !(1..=MAX_SUPPORTED_DEPTH).contains(&cli.depth) {
        warn!(
            "Depth {} out of range, clamping to 1-{}",
            cli.depth, MAX_SUPPORTED_DEPTH
        );
    }
    let config = EngineConfig::default().with_max_depth(cli.depth);

    let stdin = io::stdin();
    let mut app = ConsoleApp::new(stdin.lock(), io::stdout())
        .with_engine_config(config)
        .with_board_size(cli.size);

    let outcome = match cli.mode {
        Some(mode) => app.run_choice(mode.into()),
        None => app.run(),
    };

    match outcome {
        // Ctrl-D at a prompt just quits
        Ok(_) | Err(GomokuError::InputClosed) => Ok(()),
        Err(e) => Err(e),
    }
}
