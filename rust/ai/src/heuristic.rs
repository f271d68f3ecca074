//! Personality-driven bot built on the equity score.
//!
//! The score is scaled by the seat's aggression, compared with a fold
//! threshold scaled by its conservatism, optionally inflated by a bluff, and
//! then mapped to an action by band. Every random choice is drawn from the
//! hand's rng so a seed replays the same decisions.

use rand::{Rng, RngCore};
use shortstack_engine::betting::{BotPolicy, DecisionContext};
use shortstack_engine::player::{Personality, PlayerAction};
use tracing::debug;

use crate::equity::{hand_score, pot_odds};

const FOLD_THRESHOLD: f64 = 25.0;
/// Extra threshold when the bet is a large share of the stack
const EXPENSIVE_BET_PENALTY: f64 = 15.0;
const EXPENSIVE_BET_SHARE: f64 = 0.3;
const WEAK_FOLD_CHANCE: f64 = 0.8;
const BLUFF_MIN_BOARD: usize = 3;

const STRONG_BAND: f64 = 80.0;
const GOOD_BAND: f64 = 60.0;
const DECENT_BAND: f64 = 35.0;

const STRONG_RAISE_CHANCE: f64 = 0.7;
const GOOD_RAISE_CHANCE: f64 = 0.4;
const DECENT_BET_CHANCE: f64 = 0.2;
const DECENT_FOLD_CHANCE: f64 = 0.3;

const MIN_RAISE: u32 = 2;

/// What the policy needs to know about the table, independent of cards.
#[derive(Debug, Clone, Copy)]
pub struct Situation {
    pub personality: Personality,
    pub bet_to_call: u32,
    pub stack: u32,
    pub pot: u32,
    /// Community cards visible
    pub board_len: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    /// Picks an action for an equity `score` in `situation`.
    pub fn choose(score: u8, situation: &Situation, rng: &mut dyn RngCore) -> PlayerAction {
        let Situation {
            personality,
            bet_to_call: bet,
            stack,
            pot,
            board_len,
        } = *situation;

        let mut adjusted = f64::from(score) * personality.aggression;
        let mut threshold = FOLD_THRESHOLD * personality.conservatism;
        if f64::from(bet) > f64::from(stack) * EXPENSIVE_BET_SHARE {
            threshold += EXPENSIVE_BET_PENALTY;
        }
        if adjusted < threshold && bet > 0 && rng.random::<f64>() < WEAK_FOLD_CHANCE {
            return PlayerAction::Fold;
        }

        if rng.random::<f64>() < personality.bluff && board_len >= BLUFF_MIN_BOARD {
            adjusted += f64::from(rng.random_range(20u32..=40));
        }

        if adjusted >= STRONG_BAND {
            if rng.random::<f64>() >= STRONG_RAISE_CHANCE {
                return PlayerAction::CheckCall;
            }
            let raise = if bet == 0 {
                rng.random_range(3..=(stack / 4).min(8).max(3))
            } else {
                let low = (bet / 2).max(MIN_RAISE);
                let high = stack.saturating_sub(bet).min(bet.saturating_mul(3));
                ranged(rng, low, high)
            };
            PlayerAction::Raise(raise.max(MIN_RAISE))
        } else if adjusted >= GOOD_BAND {
            if rng.random::<f64>() >= GOOD_RAISE_CHANCE {
                return PlayerAction::CheckCall;
            }
            let raise = if bet == 0 {
                rng.random_range(MIN_RAISE..=(stack / 6).min(5).max(MIN_RAISE))
            } else {
                let high = stack.saturating_sub(bet).min(bet.saturating_mul(2));
                ranged(rng, MIN_RAISE, high)
            };
            PlayerAction::Raise(raise.max(MIN_RAISE))
        } else if adjusted >= DECENT_BAND {
            if bet == 0 {
                if rng.random::<f64>() < DECENT_BET_CHANCE {
                    let high = (stack / 10).min(3).max(MIN_RAISE);
                    PlayerAction::Raise(rng.random_range(MIN_RAISE..=high))
                } else {
                    PlayerAction::CheckCall
                }
            } else if pot_odds(pot, bet) < 30.0 {
                PlayerAction::CheckCall
            } else if rng.random::<f64>() < DECENT_FOLD_CHANCE {
                PlayerAction::Fold
            } else {
                PlayerAction::CheckCall
            }
        } else if bet == 0 || pot_odds(pot, bet) < 20.0 {
            PlayerAction::CheckCall
        } else {
            PlayerAction::Fold
        }
    }
}

/// Uniform in `low..=high`, or the minimum raise when the range is empty.
fn ranged(rng: &mut dyn RngCore, low: u32, high: u32) -> u32 {
    if high >= low {
        rng.random_range(low..=high)
    } else {
        MIN_RAISE
    }
}

impl BotPolicy for HeuristicBot {
    fn decide(&self, ctx: &DecisionContext<'_>, rng: &mut dyn RngCore) -> PlayerAction {
        let score = hand_score(ctx.hole, ctx.board);
        let situation = Situation {
            personality: ctx.personality,
            bet_to_call: ctx.bet_to_call,
            stack: ctx.stack,
            pot: ctx.pot,
            board_len: ctx.board.len(),
        };
        let action = Self::choose(score, &situation, rng);
        debug!(
            player = ctx.player,
            street = ctx.street.as_str(),
            score,
            ?action,
            "bot decision"
        );
        action
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
