//! One street of betting.
//!
//! Every seat that is still in the hand and has chips acts exactly once, in
//! table order. Action is never reopened: a raise by a later seat is not
//! offered back to seats that already acted on this street.

use std::collections::BTreeSet;

use rand::RngCore;
use tracing::{debug, warn};

use crate::cards::Card;
use crate::errors::GameError;
use crate::logger::{ActionRecord, Street};
use crate::player::{Personality, PlayerAction, Seat};
use crate::rules::{downgrade_bot, validate_human};

/// What a seat sees when it has to act.
#[derive(Debug, Clone)]
pub struct DecisionContext<'a> {
    pub player: &'a str,
    pub street: Street,
    pub hole: [Card; 2],
    pub board: &'a [Card],
    pub personality: Personality,
    pub bet_to_call: u32,
    pub stack: u32,
    pub pot: u32,
}

/// Decision maker for automated seats.
///
/// Implementations may use `rng` for randomized play; it is the hand's single
/// seeded source, so a fixed seed replays the same decisions.
pub trait BotPolicy {
    fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RngCore) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Answer from the human seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HumanDecision {
    Act(PlayerAction),
    /// Abort the hand without settling it
    Quit,
}

/// Source of the human seat's decisions.
///
/// `rejected` carries the error for the previous answer when it could not be
/// applied, and the provider is asked again until it returns a valid action
/// or [`HumanDecision::Quit`].
pub trait ActionProvider {
    fn decide(&mut self, ctx: &DecisionContext<'_>, rejected: Option<&GameError>) -> HumanDecision;
}

impl<F> ActionProvider for F
where
    F: FnMut(&DecisionContext<'_>, Option<&GameError>) -> HumanDecision,
{
    fn decide(&mut self, ctx: &DecisionContext<'_>, rejected: Option<&GameError>) -> HumanDecision {
        self(ctx, rejected)
    }
}

/// Provider for tables without a human seat. Quits if it is ever asked.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHuman;

impl ActionProvider for NoHuman {
    fn decide(&mut self, _ctx: &DecisionContext<'_>, _rejected: Option<&GameError>) -> HumanDecision {
        HumanDecision::Quit
    }
}

/// Bet, pot and folds for the hand in progress. Seats are referred to by
/// their index in the hand's seat list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BettingState {
    pub bet_to_call: u32,
    pub pot: u32,
    /// Grows monotonically within a hand
    pub folded: BTreeSet<usize>,
}

impl BettingState {
    /// Seats still holding cards.
    pub fn contenders(&self, seat_count: usize) -> Vec<usize> {
        (0..seat_count)
            .filter(|i| !self.folded.contains(i))
            .collect()
    }

    /// Applies an action for `seat`, moving chips from `stack` into the pot.
    /// Returns the chips paid.
    ///
    /// # Errors
    ///
    /// Fails without mutating anything when the action is unaffordable or a
    /// zero raise.
    pub fn apply(
        &mut self,
        seat: usize,
        stack: &mut u32,
        action: PlayerAction,
    ) -> Result<u32, GameError> {
        let paid = match action {
            PlayerAction::Fold => {
                self.folded.insert(seat);
                return Ok(0);
            }
            PlayerAction::CheckCall => self.bet_to_call,
            PlayerAction::Raise(0) => return Err(GameError::InvalidAmount { amount: 0 }),
            PlayerAction::Raise(x) => self.bet_to_call.saturating_add(x),
        };
        if paid > *stack {
            return Err(GameError::InsufficientChips {
                needed: paid,
                available: *stack,
            });
        }
        *stack -= paid;
        self.pot += paid;
        if let PlayerAction::Raise(x) = action {
            self.bet_to_call += x;
        }
        Ok(paid)
    }
}

/// Runs a single pass of betting over `seats` for `street`.
///
/// Bots decide through `bots` and have unaffordable choices downgraded; the
/// human seat decides through `human` and is asked again after a rejected
/// action. A seat is not asked once everyone else has folded.
///
/// # Errors
///
/// [`GameError::HandAborted`] when the human quits.
pub fn run_betting_round(
    street: Street,
    seats: &mut [Seat],
    board: &[Card],
    state: &mut BettingState,
    bots: &dyn BotPolicy,
    human: &mut dyn ActionProvider,
    rng: &mut dyn RngCore,
) -> Result<Vec<ActionRecord>, GameError> {
    let order: Vec<usize> = (0..seats.len())
        .filter(|&i| !state.folded.contains(&i) && seats[i].stack > 0)
        .collect();
    let mut actions = Vec::with_capacity(order.len());

    for idx in order {
        if state.contenders(seats.len()).len() <= 1 {
            break;
        }
        let (action, downgraded) = {
            let seat = &seats[idx];
            let ctx = DecisionContext {
                player: &seat.name,
                street,
                hole: seat.hole,
                board,
                personality: seat.personality(),
                bet_to_call: state.bet_to_call,
                stack: seat.stack,
                pot: state.pot,
            };
            if seat.is_human() {
                (ask_human(human, &ctx)?, false)
            } else {
                let chosen = bots.decide(&ctx, rng);
                let (action, downgraded) = downgrade_bot(seat.stack, state.bet_to_call, chosen);
                if downgraded {
                    warn!(
                        player = %seat.name,
                        ?chosen,
                        ?action,
                        stack = seat.stack,
                        bet_to_call = state.bet_to_call,
                        "bot action downgraded"
                    );
                }
                (action, downgraded)
            }
        };

        let seat = &mut seats[idx];
        let paid = state.apply(idx, &mut seat.stack, action)?;
        debug!(
            player = %seat.name,
            street = street.as_str(),
            ?action,
            paid,
            pot = state.pot,
            bet_to_call = state.bet_to_call,
            "action applied"
        );
        actions.push(ActionRecord {
            player: seat.name.clone(),
            street,
            action,
            paid,
            downgraded,
        });
    }
    Ok(actions)
}

fn ask_human(
    human: &mut dyn ActionProvider,
    ctx: &DecisionContext<'_>,
) -> Result<PlayerAction, GameError> {
    let mut rejected: Option<GameError> = None;
    loop {
        match human.decide(ctx, rejected.as_ref()) {
            HumanDecision::Quit => return Err(GameError::HandAborted),
            HumanDecision::Act(action) => match validate_human(ctx.stack, ctx.bet_to_call, action) {
                Ok(valid) => return Ok(valid),
                Err(e) if e.is_recoverable() => rejected = Some(e),
                Err(e) => return Err(e),
            },
        }
    }
}
