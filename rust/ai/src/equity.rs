//! Hand strength on a 0-100 scale.
//!
//! Before any community card is visible the score comes from a closed-form
//! starting-hand table. Afterwards the best hand is evaluated and its category
//! mapped to a fixed base score, nudged by the rank of its top card.

use shortstack_engine::cards::Card;
use shortstack_engine::hand::{Category, evaluate};

/// Unpaired starting hands never score above this.
const UNPAIRED_CAP: i32 = 85;
const SUITED_BONUS: i32 = 15;
/// Largest rank gap that still earns a connectedness bonus
const MAX_CONNECTED_GAP: i32 = 4;

/// Base score per made-hand category, indexed by [`Category::value`].
const CATEGORY_BASE: [i32; 10] = [10, 25, 45, 60, 75, 80, 90, 95, 98, 100];

/// Score for `hole` given the community cards seen so far.
///
/// # Examples
///
/// ```
/// use shortstack_ai::equity::hand_score;
/// use shortstack_engine::cards::parse_cards;
///
/// let aces = parse_cards("A♠ A♥").unwrap();
/// assert_eq!(hand_score([aces[0], aces[1]], &[]), 97);
/// ```
pub fn hand_score(hole: [Card; 2], board: &[Card]) -> u8 {
    if board.is_empty() {
        return preflop_score(hole);
    }
    postflop_score(hole, board).unwrap_or_else(|| preflop_score(hole))
}

/// Starting-hand score from the two private cards alone.
pub fn preflop_score(hole: [Card; 2]) -> u8 {
    let a = i32::from(hole[0].rank.value());
    let b = i32::from(hole[1].rank.value());
    let (high, low) = if a >= b { (a, b) } else { (b, a) };

    if high == low {
        let score = if high >= 10 {
            85 + (high - 10) * 3
        } else if high >= 7 {
            65 + (high - 7) * 5
        } else {
            45 + (high - 2) * 4
        };
        return to_score(score);
    }

    let suited = if hole[0].suit == hole[1].suit {
        SUITED_BONUS
    } else {
        0
    };
    let gap = high - low;
    let connected = if gap <= MAX_CONNECTED_GAP {
        10 - gap * 2
    } else {
        0
    };
    let base = match high {
        14 if low >= 10 => 70 + (low - 10) * 5,
        14 => 35 + (low - 2) * 3,
        11..=13 => 25 + (high - 11) * 10 + (low - 2) * 2,
        _ => 15 + (high - 2) * 2 + (low - 2),
    };
    to_score((base + suited + connected).min(UNPAIRED_CAP))
}

/// Made-hand score; `None` when there are not yet five cards to evaluate.
pub fn postflop_score(hole: [Card; 2], board: &[Card]) -> Option<u8> {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(board);
    let strength = evaluate(&cards).ok()?.strength;

    let top = strength
        .tiebreakers
        .first()
        .copied()
        .map(i32::from)
        .unwrap_or_default();
    let adjust = match strength.category {
        Category::HighCard => (top - 10).min(15),
        Category::OnePair => ((top - 8) * 2).min(10),
        Category::TwoPair | Category::ThreeOfAKind => (top - 10).min(8),
        _ => 0,
    };
    let base = CATEGORY_BASE[usize::from(strength.category.value())];
    Some(to_score(base + adjust))
}

/// Cost of calling as a percentage of the pot after the call. A free call
/// is reported as 100.
pub fn pot_odds(pot: u32, cost: u32) -> f64 {
    if cost == 0 {
        return 100.0;
    }
    f64::from(cost) / (f64::from(pot) + f64::from(cost)) * 100.0
}

fn to_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortstack_engine::cards::parse_cards;

    fn hole(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn pairs_by_tier() {
        assert_eq!(preflop_score(hole("T♠ T♥")), 85);
        assert_eq!(preflop_score(hole("K♠ K♥")), 94);
        assert_eq!(preflop_score(hole("7♠ 7♥")), 65);
        assert_eq!(preflop_score(hole("9♠ 9♥")), 75);
        assert_eq!(preflop_score(hole("2♠ 2♥")), 45);
        assert_eq!(preflop_score(hole("6♠ 6♥")), 61);
    }

    #[test]
    fn unpaired_components() {
        // 70 + 15 suited + 8 connected, capped
        assert_eq!(preflop_score(hole("A♠ K♠")), 85);
        // 70 + 3*5 + 8 = 93 -> 85
        assert_eq!(preflop_score(hole("A♠ K♥")), 85);
        // 35 + 0 + 0
        assert_eq!(preflop_score(hole("A♠ 2♥")), 35);
        // ace-five: 35 + 9, not connected (gap 9)
        assert_eq!(preflop_score(hole("A♠ 5♥")), 44);
        // 25 + 20 + 20 + 8 connected
        assert_eq!(preflop_score(hole("K♦ Q♣")), 73);
        // 15 + 10 + 0 + 15 suited, gap 5 is not connected
        assert_eq!(preflop_score(hole("7♥ 2♥")), 40);
        // 15 + 14 + 6 + 8 connected
        assert_eq!(preflop_score(hole("9♣ 8♦")), 43);
    }

    #[test]
    fn preflop_order_of_cards_does_not_matter() {
        assert_eq!(preflop_score(hole("Q♠ 4♦")), preflop_score(hole("4♦ Q♠")));
    }

    #[test]
    fn postflop_uses_category_and_top_rank() {
        // trips of queens: 60 + min(8, 2)
        let s = postflop_score(hole("Q♠ Q♥"), &parse_cards("Q♦ 7♣ 2♠").unwrap());
        assert_eq!(s, Some(62));
        // pair of fives: 25 + (5-8)*2
        let s = postflop_score(hole("5♠ 5♥"), &parse_cards("K♦ 9♣ 2♠").unwrap());
        assert_eq!(s, Some(19));
        // high card king: 10 + 3
        let s = postflop_score(hole("K♠ 3♥"), &parse_cards("9♦ 7♣ 2♠").unwrap());
        assert_eq!(s, Some(13));
        // royal flush
        let s = postflop_score(hole("A♠ K♠"), &parse_cards("Q♠ J♠ T♠").unwrap());
        assert_eq!(s, Some(100));
    }

    #[test]
    fn pot_odds_percent() {
        assert_eq!(pot_odds(10, 0), 100.0);
        assert!((pot_odds(30, 10) - 25.0).abs() < 1e-9);
    }
}
