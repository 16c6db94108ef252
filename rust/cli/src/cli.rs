//! Command-line argument definitions for the felt CLI.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "felt",
    version,
    about = "A casual casino table: blackjack and 5-card draw against the house"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sit down and play rounds interactively
    Play {
        /// Which game to sit at
        #[arg(long, value_enum, default_value_t = Game::Blackjack)]
        game: Game,
        /// RNG seed for a reproducible session (default: random)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting bankroll, overriding the configuration
        #[arg(long)]
        bankroll: Option<f64>,
        /// Append settled rounds to this JSONL history file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// The two tables on the floor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Game {
    Blackjack,
    Poker,
}

impl Game {
    pub fn as_str(self) -> &'static str {
        match self {
            Game::Blackjack => "blackjack",
            Game::Poker => "poker",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
