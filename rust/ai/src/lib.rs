//! # shortstack-ai: Bot Opponents
//!
//! Decision policies for the automated seats of a shortstack table. Every
//! policy implements the engine's [`BotPolicy`] seam, so the engine itself
//! never depends on this crate.
//!
//! ## Core Components
//!
//! - [`equity`] - 0-100 hand strength from private and community cards
//! - [`heuristic`] - Personality-driven bot built on the equity score
//! - [`passive`] - Always checks or calls, used as a reference opponent
//! - [`create_ai`] - Factory selecting a policy by name
//!
//! ## Quick Start
//!
//! ```rust
//! use shortstack_ai::create_ai;
//!
//! let bot = create_ai("heuristic").unwrap();
//! assert_eq!(bot.name(), "heuristic");
//! assert!(create_ai("oracle").is_err());
//! ```

use shortstack_engine::betting::BotPolicy;
use shortstack_engine::player::Personality;
use thiserror::Error;

pub mod equity;
pub mod heuristic;
pub mod passive;

/// Policy names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 2] = ["heuristic", "passive"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (expected one of: heuristic, passive)")]
    UnknownKind(String),
}

/// Creates a bot policy by name.
///
/// # Errors
///
/// [`AiError::UnknownKind`] for a name outside [`AI_KINDS`].
pub fn create_ai(kind: &str) -> Result<Box<dyn BotPolicy>, AiError> {
    match kind {
        "heuristic" => Ok(Box::new(heuristic::HeuristicBot::new())),
        "passive" => Ok(Box::new(passive::PassiveBot)),
        other => Err(AiError::UnknownKind(other.to_string())),
    }
}

/// Names and personalities for `count` bots: `Bot1`..`BotN` using the
/// presets in order. Seats past the fourth play the first preset.
pub fn default_roster(count: usize) -> Vec<(String, Personality)> {
    let presets = Personality::presets();
    (0..count)
        .map(|i| {
            let personality = presets.get(i).copied().unwrap_or(presets[0]);
            (format!("Bot{}", i + 1), personality)
        })
        .collect()
}
