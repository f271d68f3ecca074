use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits of the standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♠' | 's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Face value of a card. The discriminant is the numeric rank used by the
/// evaluator (Two = 2 .. Ace = 14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

const RANK_CHARS: &[u8; 13] = b"23456789TJQKA";

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        all_ranks().get(usize::from(v.checked_sub(2)?)).copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn to_char(self) -> char {
        RANK_CHARS[usize::from(self.value() - 2)] as char
    }

    fn from_char(c: char) -> Option<Rank> {
        let upper = c.to_ascii_uppercase() as u8;
        let idx = RANK_CHARS.iter().position(|&b| b == upper)?;
        Rank::from_u8(idx as u8 + 2)
    }
}

/// A single immutable playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

/// Parses `"A♠"`, `"As"`, `"T♥"` or `"td"`.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::InvalidCard(s.to_string()));
        };
        match (Rank::from_char(r), Suit::from_char(su)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(GameError::InvalidCard(s.to_string())),
        }
    }
}

/// Parses a whitespace separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split_whitespace().map(str::parse).collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_and_ascii_suits() {
        let a: Card = "A♠".parse().unwrap();
        let b: Card = "as".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("T♥".parse::<Card>().unwrap().rank, Rank::Ten);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("1x".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!(matches!("AsK".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in full_deck() {
            assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
        }
    }

    #[test]
    fn rank_from_u8_bounds() {
        assert_eq!(Rank::from_u8(2), Some(Rank::Two));
        assert_eq!(Rank::from_u8(14), Some(Rank::Ace));
        assert_eq!(Rank::from_u8(1), None);
        assert_eq!(Rank::from_u8(15), None);
    }
}
