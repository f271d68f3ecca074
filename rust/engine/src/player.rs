use std::collections::HashSet;

use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Action a seat takes during a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Pay the current bet-to-call (a check when it is zero)
    CheckCall,
    /// Pay the bet-to-call and raise it by the given amount
    Raise(u32),
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 100;

/// Fixed playing style of an automated seat.
///
/// `aggression` scales the equity score, `conservatism` scales the fold
/// threshold and `bluff` is the probability of a post-flop bluff boost.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub aggression: f64,
    pub conservatism: f64,
    pub bluff: f64,
}

impl Personality {
    pub const AGGRESSIVE: Personality = Personality::new(1.1, 0.9, 0.05);
    pub const CAUTIOUS: Personality = Personality::new(0.8, 1.2, 0.02);
    pub const BALANCED: Personality = Personality::new(1.0, 1.0, 0.08);
    pub const STEADY: Personality = Personality::new(0.9, 1.1, 0.03);

    pub const fn new(aggression: f64, conservatism: f64, bluff: f64) -> Self {
        Self {
            aggression,
            conservatism,
            bluff,
        }
    }

    /// Profile carried by the human seat: no scaling and no bluffing.
    pub const fn neutral() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }

    /// The four presets in roster order.
    pub fn presets() -> [Personality; 4] {
        [
            Self::AGGRESSIVE,
            Self::CAUTIOUS,
            Self::BALANCED,
            Self::STEADY,
        ]
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Who decides for a seat.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeatKind {
    /// Decisions come from the external action provider
    Human,
    /// Decisions come from the bot policy using this personality
    Bot(Personality),
}

/// A player record that survives across hands. Only `chips` changes
/// between hands; a player with no chips is not dealt in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    chips: u32,
    kind: SeatKind,
}

impl Player {
    pub fn human(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            kind: SeatKind::Human,
        }
    }

    pub fn bot(name: impl Into<String>, chips: u32, personality: Personality) -> Self {
        Self {
            name: name.into(),
            chips,
            kind: SeatKind::Bot(personality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn kind(&self) -> SeatKind {
        self.kind
    }
    pub fn is_human(&self) -> bool {
        matches!(self.kind, SeatKind::Human)
    }

    pub fn personality(&self) -> Personality {
        match self.kind {
            SeatKind::Bot(p) => p,
            SeatKind::Human => Personality::neutral(),
        }
    }

    /// Applies a settled chip delta. Deltas never take a stack below zero
    /// because a player can only lose what was put into the pot.
    pub fn apply_delta(&mut self, delta: i64) {
        let next = i64::from(self.chips) + delta;
        self.chips = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
    }
}

/// Fails on the first name seen twice.
pub fn ensure_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), GameError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(GameError::DuplicatePlayer(name.to_string()));
        }
    }
    Ok(())
}

/// Per-hand view of a player: a copy of the stack plus the private cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub kind: SeatKind,
    pub stack: u32,
    pub starting_stack: u32,
    pub hole: [Card; 2],
}

impl Seat {
    pub fn is_human(&self) -> bool {
        matches!(self.kind, SeatKind::Human)
    }

    pub fn personality(&self) -> Personality {
        match self.kind {
            SeatKind::Bot(p) => p,
            SeatKind::Human => Personality::neutral(),
        }
    }

    /// Chips won (positive) or lost (negative) so far this hand.
    pub fn delta(&self) -> i64 {
        i64::from(self.stack) - i64::from(self.starting_stack)
    }
}
