use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Hand categories from weakest to strongest. The discriminant is the
/// category number used in hand records.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    /// Straight flush to the Ace.
    RoyalFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Totally ordered strength of a 5-card hand.
///
/// The derived ordering compares `category` first and then `tiebreakers`
/// lexicographically, so two hands tie only when both are identical.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Rank values (2..=14) ordered by significance.
    pub tiebreakers: Vec<u8>,
}

/// Best 5-card hand found among the evaluated cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub strength: HandStrength,
    pub cards: [Card; 5],
}

/// Evaluates 5 to 7 cards by ranking every 5-card subset and keeping the best.
///
/// # Errors
///
/// - [`GameError::InsufficientCards`] with fewer than 5 cards
/// - [`GameError::TooManyCards`] with more than 7 cards
///
/// # Examples
///
/// ```
/// use shortstack_engine::cards::parse_cards;
/// use shortstack_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("A♠ K♠ Q♠ J♠ T♠ 2♦ 3♣").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.strength.category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, GameError> {
    if cards.len() < 5 {
        return Err(GameError::InsufficientCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(GameError::TooManyCards(cards.len()));
    }

    let mut best: Option<Evaluation> = None;
    for combo in cards.iter().copied().combinations(5) {
        let hand = [combo[0], combo[1], combo[2], combo[3], combo[4]];
        let strength = classify(&hand);
        let better = best.as_ref().map_or(true, |b| strength > b.strength);
        if better {
            best = Some(Evaluation {
                strength,
                cards: hand,
            });
        }
    }
    best.ok_or(GameError::InsufficientCards(cards.len()))
}

/// Ranks exactly five cards.
pub fn classify(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in cards {
        rank_counts[usize::from(c.rank.value())] += 1;
    }

    // (count, rank) groups, largest group first, higher rank first within a size
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[usize::from(r)] > 0)
        .map(|r| (rank_counts[usize::from(r)], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let pattern: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let grouped: Vec<u8> = groups.iter().map(|g| g.1).collect();

    let mut descending: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&descending);

    let (category, tiebreakers) = match (straight, flush, pattern.as_slice()) {
        (Some(14), true, _) => (Category::RoyalFlush, vec![14]),
        (Some(high), true, _) => (Category::StraightFlush, vec![high]),
        (_, _, [4, 1]) => (Category::FourOfAKind, grouped),
        (_, _, [3, 2]) => (Category::FullHouse, grouped),
        (_, true, _) => (Category::Flush, descending),
        (Some(high), false, _) => (Category::Straight, vec![high]),
        (_, _, [3, 1, 1]) => (Category::ThreeOfAKind, grouped),
        (_, _, [2, 2, 1]) => (Category::TwoPair, grouped),
        (_, _, [2, 1, 1, 1]) => (Category::OnePair, grouped),
        _ => (Category::HighCard, descending),
    };
    HandStrength {
        category,
        tiebreakers,
    }
}

/// High card of a five-card run, with the wheel (A-2-3-4-5) ranked 5-high.
fn straight_high(descending: &[u8]) -> Option<u8> {
    if descending.len() != 5 || descending.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    if descending[0] - descending[4] == 4 {
        return Some(descending[0]);
    }
    if *descending == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}
