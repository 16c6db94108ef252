//! Command handler modules for the felt CLI.
//!
//! One module per subcommand, each exposing a single public
//! `handle_COMMAND_command` function. Handlers take their output streams
//! (and stdin where interactive) as parameters so tests can drive them with
//! buffers, and propagate failures as [`crate::error::CliError`].

mod cfg;
mod play;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
