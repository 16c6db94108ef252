//! # felt CLI Library
//!
//! Command-line front of the felt casino engine: an interactive table for
//! blackjack and 5-card draw, playing a bankroll the way the engine deals
//! it. The CLI is a pure presentation collaborator; every number and card
//! it prints comes out of an engine view payload.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["felt", "cfg"];
//! let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Sit down at a table and play rounds interactively
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};

pub use error::CliError;

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler. Help and version requests print to `out` and exit 0;
/// everything else that fails prints to `err` and exits 2.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FeltCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return ERROR;
                    }
                    SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return ERROR;
                    }
                    ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => report(commands::handle_cfg_command(out, err), err),
            Commands::Play {
                game,
                seed,
                bankroll,
                log,
            } => {
                // real stdin; tests call the handler directly with a buffer
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                report(
                    commands::handle_play_command(
                        game,
                        seed,
                        bankroll,
                        log,
                        out,
                        err,
                        &mut stdin_lock,
                    ),
                    err,
                )
            }
        },
    }
}

fn report(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            ERROR
        }
    }
}
