//! Plain-text rendering of prompts, hands and standings.
//!
//! Every function writes to an injected stream so commands stay testable.

use std::io::Write;

use shortstack_ai::equity::{hand_score, pot_odds};
use shortstack_engine::betting::DecisionContext;
use shortstack_engine::cards::Card;
use shortstack_engine::engine::HandOutcome;
use shortstack_engine::errors::GameError;
use shortstack_engine::game::GameState;
use shortstack_engine::logger::Street;
use shortstack_engine::player::PlayerAction;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// `"A♠ K♦"`, or `"-"` for no cards.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_action(action: &PlayerAction, paid: u32) -> String {
    match action {
        PlayerAction::Fold => "folds".to_string(),
        PlayerAction::CheckCall if paid == 0 => "checks".to_string(),
        PlayerAction::CheckCall => format!("calls {}", paid),
        PlayerAction::Raise(x) => format!("raises {} (pays {})", x, paid),
    }
}

/// The human seat's view when it has to act.
pub fn render_prompt(
    out: &mut dyn Write,
    ctx: &DecisionContext<'_>,
    rejected: Option<&GameError>,
) -> std::io::Result<()> {
    if let Some(e) = rejected {
        writeln!(out, "Rejected: {}", e)?;
    }
    writeln!(out)?;
    writeln!(out, "[{}] Your cards: {}", ctx.street.as_str(), format_cards(&ctx.hole))?;
    writeln!(out, "Board: {}", format_cards(ctx.board))?;
    writeln!(
        out,
        "Stack: {} | To call: {} | Pot: {}",
        ctx.stack, ctx.bet_to_call, ctx.pot
    )?;
    write!(out, "Hand strength: {}/100", hand_score(ctx.hole, ctx.board))?;
    if ctx.bet_to_call > 0 {
        write!(out, " | Pot odds: {:.1}%", pot_odds(ctx.pot, ctx.bet_to_call))?;
    }
    writeln!(out)?;
    write!(out, "[c]all/check, [r]aise <n>, [f]old, [q]uit > ")?;
    out.flush()
}

/// Blinds, actions by street, board, showdown and pot awards of a settled hand.
pub fn render_outcome(out: &mut dyn Write, outcome: &HandOutcome) -> std::io::Result<()> {
    for post in &outcome.blinds {
        writeln!(out, "  {} posts {}", post.player, post.amount)?;
    }
    for street in Street::ALL {
        let actions: Vec<_> = outcome.actions.iter().filter(|a| a.street == street).collect();
        if actions.is_empty() {
            continue;
        }
        writeln!(out, "  {}:", street.as_str())?;
        for a in actions {
            write!(out, "    {} {}", a.player, format_action(&a.action, a.paid))?;
            if a.downgraded {
                write!(out, " (forced)")?;
            }
            writeln!(out)?;
        }
    }
    writeln!(out, "  Board: {}", format_cards(&outcome.board))?;
    if let Some(showdown) = &outcome.showdown {
        for entry in showdown {
            writeln!(
                out,
                "  {} shows {}: {} ({})",
                entry.player,
                format_cards(&entry.hole),
                entry.evaluation.strength.category.name(),
                format_cards(&entry.evaluation.cards)
            )?;
        }
    }
    for (name, amount) in &outcome.awards {
        writeln!(out, "  {} wins {}", name, amount)?;
    }
    if outcome.winners.len() > 1 {
        writeln!(out, "  Split pot of {}", outcome.pot)?;
    }
    Ok(())
}

/// Chip counts of every player, in seat order.
pub fn render_standings(out: &mut dyn Write, game: &GameState) -> std::io::Result<()> {
    let line = game
        .players()
        .iter()
        .map(|p| format!("{} {}", p.name(), p.chips()))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "Chips: {}", line)
}
