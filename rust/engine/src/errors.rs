use thiserror::Error;

use crate::engine::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient chips: action needs {needed}, stack is {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Invalid amount: {amount} (raises must be a positive whole number of chips)")]
    InvalidAmount { amount: u32 },
    #[error("Deck exhausted while dealing")]
    DeckUnderflow,
    #[error("Hand evaluation needs at least 5 cards, got {0}")]
    InsufficientCards(usize),
    #[error("Hand evaluation takes at most 7 cards, got {0}")]
    TooManyCards(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("A hand needs at least 2 players with chips, found {0}")]
    NotEnoughPlayers(usize),
    #[error("Pot settlement needs at least one winner")]
    NoWinners,
    #[error("Out of sequence: expected {expected:?}, hand is at {actual:?}")]
    OutOfSequence { expected: Phase, actual: Phase },
    #[error("Hand aborted by player")]
    HandAborted,
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
}

impl GameError {
    /// Errors the human seat can correct by deciding again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientChips { .. } | GameError::InvalidAmount { .. }
        )
    }
}
