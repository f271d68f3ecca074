//! Bot policy evaluation.
//!
//! The roster seats play the policy under test while one extra seat,
//! `Passive`, only ever checks or calls. Chip results and pots won are
//! reported per seat.

use std::io::Write;

use rand::RngCore;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shortstack_ai::passive::PassiveBot;
use shortstack_ai::{create_ai, default_roster};
use shortstack_engine::betting::{BotPolicy, DecisionContext, NoHuman};
use shortstack_engine::game::GameState;
use shortstack_engine::player::{Personality, PlayerAction};

use super::{hand_seed, require_hands, session_seed};
use crate::cli::TableArgs;
use crate::config;
use crate::error::CliError;

pub const REFERENCE_SEAT: &str = "Passive";

/// Routes the reference seat to [`PassiveBot`] and every other seat to the
/// policy under test.
struct Lineup {
    tested: Box<dyn BotPolicy>,
    reference: PassiveBot,
}

impl BotPolicy for Lineup {
    fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RngCore) -> PlayerAction {
        if ctx.player == REFERENCE_SEAT {
            self.reference.decide(ctx, rng)
        } else {
            self.tested.decide(ctx, rng)
        }
    }

    fn name(&self) -> &str {
        self.tested.name()
    }
}

#[derive(Debug, Clone, Default)]
struct SeatStats {
    pots_won: u32,
    net: i64,
}

pub fn handle_eval_command(
    table: &TableArgs,
    hands: u32,
    ai: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    require_hands(hands)?;
    let lineup = Lineup {
        tested: create_ai(ai)?,
        reference: PassiveBot,
    };
    let cfg = config::load(&table.overrides())?;
    let seed = session_seed(&cfg);

    let mut roster = default_roster(cfg.bots);
    roster.push((REFERENCE_SEAT.to_string(), Personality::neutral()));
    let mut game = GameState::with_roster(None, &roster, cfg.starting_stack, cfg.blinds())?;
    game.shuffle_seats(&mut ChaCha20Rng::seed_from_u64(seed));

    let mut stats: Vec<(String, SeatStats)> = roster
        .iter()
        .map(|(name, _)| (name.clone(), SeatStats::default()))
        .collect();

    for index in 0..hands {
        if game.is_over() {
            break;
        }
        let outcome = game.play_hand(hand_seed(seed, index), &lineup, &mut NoHuman)?;
        for (name, s) in stats.iter_mut() {
            s.net += outcome.delta_for(name).unwrap_or(0);
            if outcome.winners.contains(name) {
                s.pots_won += 1;
            }
        }
    }

    writeln!(
        out,
        "eval: ai={} vs {} hands={} seed={}",
        lineup.name(),
        REFERENCE_SEAT,
        game.hands_played(),
        seed
    )?;
    writeln!(out, "{:<10} {:>7} {:>7} {:>9}", "Seat", "Chips", "Net", "Pots won")?;
    for (name, s) in &stats {
        let chips = game.player(name).map_or(0, |p| p.chips());
        writeln!(
            out,
            "{:<10} {:>7} {:>+7} {:>9}",
            name, chips, s.net, s.pots_won
        )?;
    }

    let reference_net = stats
        .iter()
        .find(|(name, _)| name == REFERENCE_SEAT)
        .map_or(0, |(_, s)| s.net);
    writeln!(
        out,
        "Roster net {:+} vs {} {:+}",
        -reference_net, REFERENCE_SEAT, reference_net
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_sends_reference_seat_to_passive_policy() {
        struct Folder;
        impl BotPolicy for Folder {
            fn decide(&self, _: &DecisionContext<'_>, _: &mut dyn RngCore) -> PlayerAction {
                PlayerAction::Fold
            }
            fn name(&self) -> &str {
                "folder"
            }
        }
        let lineup = Lineup {
            tested: Box::new(Folder),
            reference: PassiveBot,
        };
        let hole = shortstack_engine::cards::parse_cards("2♣ 7♦").unwrap();
        let mut ctx = DecisionContext {
            player: REFERENCE_SEAT,
            street: shortstack_engine::logger::Street::Preflop,
            hole: [hole[0], hole[1]],
            board: &[],
            personality: Personality::neutral(),
            bet_to_call: 2,
            stack: 100,
            pot: 3,
        };
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(lineup.decide(&ctx, &mut rng), PlayerAction::CheckCall);
        ctx.player = "Bot1";
        assert_eq!(lineup.decide(&ctx, &mut rng), PlayerAction::Fold);
        assert_eq!(lineup.name(), "folder");
    }
}
