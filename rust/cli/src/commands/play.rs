//! # Play Command
//!
//! The human seat against the personality-driven bot roster. Actions are read
//! line by line from the injected input; `q` (or end of input) leaves the
//! table mid-hand, which discards that hand and ends the session with
//! [`CliError::Interrupted`].
//!
//! Seating order and the first dealer are drawn from the session seed, and
//! hand `i` is dealt from `seed + i`, so a seed plus the same answers replays
//! a session exactly.

use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shortstack_ai::default_roster;
use shortstack_ai::heuristic::HeuristicBot;
use shortstack_engine::errors::GameError;
use shortstack_engine::game::GameState;

use super::{hand_seed, require_hands, session_seed};
use crate::cli::TableArgs;
use crate::config;
use crate::error::CliError;
use crate::io_utils::StdinPlayer;
use crate::ui;

/// Runs an interactive session until `hands` hands are played, the human
/// is out of chips, or no opponent has chips left.
pub fn handle_play_command(
    table: &TableArgs,
    hands: Option<u32>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(n) = hands {
        require_hands(n)?;
    }
    let cfg = config::load(&table.overrides())?;
    let seed = session_seed(&cfg);

    let mut game = GameState::with_roster(
        Some(&cfg.human_name),
        &default_roster(cfg.bots),
        cfg.starting_stack,
        cfg.blinds(),
    )?;
    game.shuffle_seats(&mut ChaCha20Rng::seed_from_u64(seed));
    let bot = HeuristicBot::new();

    writeln!(
        out,
        "play: seed={} bots={} stack={} blinds={}/{}",
        seed, cfg.bots, cfg.starting_stack, cfg.small_blind, cfg.big_blind
    )?;

    let mut index = 0u32;
    while !game.is_over() && hands.is_none_or(|n| index < n) {
        writeln!(out)?;
        writeln!(
            out,
            "Hand #{} (dealer: {})",
            game.hands_played() + 1,
            dealer_name(&game)
        )?;
        let result = {
            let mut human = StdinPlayer::new(&mut *input, &mut *out);
            game.play_hand(hand_seed(seed, index), &bot, &mut human)
        };
        match result {
            Ok(outcome) => {
                writeln!(out)?;
                ui::render_outcome(out, &outcome)?;
                if let Some(delta) = outcome.delta_for(&cfg.human_name) {
                    writeln!(out, "  You: {:+}", delta)?;
                }
                ui::render_standings(out, &game)?;
            }
            Err(GameError::HandAborted) => {
                writeln!(out)?;
                writeln!(out, "Left the table. The unfinished hand was not counted.")?;
                ui::render_standings(out, &game)?;
                return Err(GameError::HandAborted.into());
            }
            Err(e) => return Err(e.into()),
        }
        index += 1;
    }

    writeln!(out)?;
    let human_chips = game.player(&cfg.human_name).map_or(0, |p| p.chips());
    if human_chips == 0 {
        writeln!(out, "You are out of chips.")?;
    } else if game.active_count() < 2 {
        writeln!(out, "You took every chip at the table.")?;
    }
    writeln!(
        out,
        "Session over after {} hands. You finish with {} chips.",
        game.hands_played(),
        human_chips
    )?;
    Ok(())
}

fn dealer_name(game: &GameState) -> &str {
    game.players()
        .iter()
        .filter(|p| p.chips() > 0)
        .nth(game.dealer())
        .map_or("-", |p| p.name())
}
