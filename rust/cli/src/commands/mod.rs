//! Command handlers for the `shortstack` CLI.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_COMMAND_command` function. Output streams are passed in as
//! `&mut dyn Write` and every failure propagates as [`CliError`].

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use crate::config::Config;
use crate::error::CliError;

/// Base seed for a session: the configured one, else a random one.
pub(crate) fn session_seed(config: &Config) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Seed of the `index`-th hand (0-based) of a session.
pub(crate) fn hand_seed(base: u64, index: u32) -> u64 {
    base.wrapping_add(u64::from(index))
}

pub(crate) fn require_hands(hands: u32) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    Ok(())
}
