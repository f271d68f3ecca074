//! Bot-only sessions with an optional JSONL hand history.

use std::io::Write;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shortstack_ai::default_roster;
use shortstack_ai::heuristic::HeuristicBot;
use shortstack_engine::betting::NoHuman;
use shortstack_engine::game::GameState;
use shortstack_engine::logger::HandLogger;

use super::{hand_seed, require_hands, session_seed};
use crate::cli::TableArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;

/// Plays up to `hands` hands between heuristic bots. Stops early once a
/// single bot holds every chip.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero hands or fewer than two bots, and
/// `CliError::Io` when the history file cannot be written.
pub fn handle_sim_command(
    table: &TableArgs,
    hands: u32,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    require_hands(hands)?;
    let cfg = config::load(&table.overrides())?;
    if cfg.bots < 2 {
        return Err(CliError::InvalidInput(
            "sim needs at least 2 bots".to_string(),
        ));
    }
    let seed = session_seed(&cfg);

    let mut game = GameState::with_roster(
        None,
        &default_roster(cfg.bots),
        cfg.starting_stack,
        cfg.blinds(),
    )?;
    game.shuffle_seats(&mut ChaCha20Rng::seed_from_u64(seed));
    let bot = HeuristicBot::new();
    let mut history = output.map(HandLogger::create).transpose()?;

    writeln!(out, "sim: hands={} seed={} bots={}", hands, seed, cfg.bots)?;
    for index in 0..hands {
        if game.is_over() {
            writeln!(out, "Table finished early: one player holds every chip.")?;
            break;
        }
        let outcome = game.play_hand(hand_seed(seed, index), &bot, &mut NoHuman)?;
        writeln!(
            out,
            "Hand {}: {} won {}{}",
            game.hands_played(),
            outcome.winners.join(", "),
            outcome.pot,
            if outcome.showdown.is_some() {
                " at showdown"
            } else {
                ""
            }
        )?;
        if let Some(logger) = history.as_mut() {
            logger.log(&outcome)?;
        }
    }

    writeln!(out, "Played {} hands", game.hands_played())?;
    ui::render_standings(out, &game)?;
    if let Some(path) = output {
        writeln!(out, "History written to {}", path.display())?;
    }
    Ok(())
}
