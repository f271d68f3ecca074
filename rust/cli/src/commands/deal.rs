//! Deal command: one hand played to showdown by passive seats, showing
//! every private hand and each seat's best five cards.

use std::io::Write;

use shortstack_ai::default_roster;
use shortstack_ai::passive::PassiveBot;
use shortstack_engine::betting::NoHuman;
use shortstack_engine::game::GameState;

use super::session_seed;
use crate::cli::TableArgs;
use crate::config;
use crate::error::CliError;
use crate::ui;

pub fn handle_deal_command(table: &TableArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load(&table.overrides())?;
    if cfg.bots < 2 {
        return Err(CliError::InvalidInput(
            "deal needs at least 2 bots".to_string(),
        ));
    }
    let seed = session_seed(&cfg);
    let game = GameState::with_roster(
        None,
        &default_roster(cfg.bots),
        cfg.starting_stack,
        cfg.blinds(),
    )?;

    let hand = game.start_hand(seed)?;
    writeln!(out, "Seed: {}", seed)?;
    for seat in hand.seats() {
        writeln!(out, "Hole {}: {}", seat.name, ui::format_cards(&seat.hole))?;
    }

    let outcome = hand.play(&PassiveBot, &mut NoHuman)?;
    writeln!(out, "Board: {}", ui::format_cards(&outcome.board))?;
    for entry in outcome.showdown.iter().flatten() {
        writeln!(
            out,
            "Best {}: {} ({})",
            entry.player,
            entry.evaluation.strength.category.name(),
            ui::format_cards(&entry.evaluation.cards)
        )?;
    }
    writeln!(out, "Winner: {}", outcome.winners.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let table = TableArgs {
            seed: Some(seed),
            ..TableArgs::default()
        };
        let mut out = Vec::new();
        handle_deal_command(&table, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(42), deal(42));
    }

    #[test]
    fn every_seat_reaches_showdown() {
        let text = deal(3);
        assert!(text.contains("Seed: 3"));
        assert_eq!(text.matches("Hole Bot").count(), 4);
        assert_eq!(text.matches("Best Bot").count(), 4);
        let board = text.lines().find(|l| l.starts_with("Board: ")).unwrap();
        assert_eq!(board.split_whitespace().count(), 6);
    }
}
