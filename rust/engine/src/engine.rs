use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::betting::{run_betting_round, ActionProvider, BettingState, BotPolicy};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, Evaluation};
use crate::logger::{ActionRecord, BlindPost, Street};
use crate::player::{ensure_unique_names, Player, Seat};
use crate::pot::settle;

/// Progress of a hand. Each street phase means that street's betting is done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards dealt, nothing posted yet
    Init,
    Blinds,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Settled,
}

impl Phase {
    fn after(street: Street) -> Phase {
        match street {
            Street::Preflop => Phase::PreFlop,
            Street::Flop => Phase::Flop,
            Street::Turn => Phase::Turn,
            Street::River => Phase::River,
        }
    }

    fn before(street: Street) -> Phase {
        match street {
            Street::Preflop => Phase::Blinds,
            Street::Flop => Phase::PreFlop,
            Street::Turn => Phase::Flop,
            Street::River => Phase::Turn,
        }
    }
}

/// Fixed blind amounts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 1, big: 2 }
    }
}

/// Small and big blind seat indices for `count` seats.
///
/// With exactly two seats both blinds fall on the seat after the dealer.
pub fn blind_positions(dealer: usize, count: usize) -> (usize, usize) {
    let small = (dealer + 1) % count;
    let big = if count == 2 {
        (dealer + 1) % count
    } else {
        (dealer + 2) % count
    };
    (small, big)
}

/// What one call to [`HandState::run_street`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetResult {
    pub street: Street,
    pub actions: Vec<ActionRecord>,
    pub pot: u32,
    pub bet_to_call: u32,
    pub newly_folded: Vec<String>,
    pub board: Vec<Card>,
}

/// A seat's best hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownEntry {
    pub player: String,
    pub hole: [Card; 2],
    pub evaluation: Evaluation,
}

/// Result of a settled hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandOutcome {
    pub seed: u64,
    pub blinds: Vec<BlindPost>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub winners: Vec<String>,
    /// Pot shares in alphabetical order
    pub awards: Vec<(String, u32)>,
    /// Net chip change per seat for the whole hand, in seat order. Sums to zero.
    pub deltas: Vec<(String, i64)>,
    pub showdown: Option<Vec<ShowdownEntry>>,
}

impl HandOutcome {
    pub fn delta_for(&self, name: &str) -> Option<i64> {
        self.deltas.iter().find(|(n, _)| n == name).map(|(_, d)| *d)
    }
}

/// Everything owned by one hand: deck, seats, board, pot and the random
/// source. It works on copies of the players' stacks, so dropping it before
/// [`HandState::finish`] leaves the players untouched.
///
/// # Examples
///
/// ```
/// use shortstack_engine::betting::{BotPolicy, DecisionContext, NoHuman};
/// use shortstack_engine::engine::{Blinds, HandState};
/// use shortstack_engine::player::{Personality, Player, PlayerAction};
///
/// struct Caller;
/// impl BotPolicy for Caller {
///     fn decide(&self, _: &DecisionContext<'_>, _: &mut dyn rand::RngCore) -> PlayerAction {
///         PlayerAction::CheckCall
///     }
///     fn name(&self) -> &str {
///         "caller"
///     }
/// }
///
/// let players = vec![
///     Player::bot("Ana", 100, Personality::BALANCED),
///     Player::bot("Bob", 100, Personality::BALANCED),
///     Player::bot("Cid", 100, Personality::BALANCED),
/// ];
/// let hand = HandState::new(&players, 0, 42, Blinds::default()).unwrap();
/// let outcome = hand.play(&Caller, &mut NoHuman).unwrap();
/// assert_eq!(outcome.deltas.iter().map(|(_, d)| d).sum::<i64>(), 0);
/// assert_eq!(outcome.board.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct HandState {
    seed: u64,
    rng: ChaCha20Rng,
    deck: Deck,
    seats: Vec<Seat>,
    dealer: usize,
    blinds: Blinds,
    posted: Vec<BlindPost>,
    board: Vec<Card>,
    betting: BettingState,
    phase: Phase,
    actions: Vec<ActionRecord>,
    showdown: Option<Vec<ShowdownEntry>>,
}

impl HandState {
    /// Starts a hand: seats every player with chips in table order, shuffles
    /// a fresh deck from `seed` and deals two private cards to each seat.
    ///
    /// `dealer` indexes the seated players; an out-of-range index wraps to 0.
    ///
    /// # Errors
    ///
    /// - [`GameError::DuplicatePlayer`] when two players share a name
    /// - [`GameError::NotEnoughPlayers`] with fewer than two players holding chips
    /// - [`GameError::DeckUnderflow`] when the table is too large for one deck
    pub fn new(
        players: &[Player],
        dealer: usize,
        seed: u64,
        blinds: Blinds,
    ) -> Result<Self, GameError> {
        ensure_unique_names(players.iter().map(Player::name))?;
        let active: Vec<&Player> = players.iter().filter(|p| p.chips() > 0).collect();
        if active.len() < 2 {
            return Err(GameError::NotEnoughPlayers(active.len()));
        }
        let dealer = if dealer >= active.len() { 0 } else { dealer };

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        // two passes round the table
        let mut holes: Vec<Vec<Card>> = vec![Vec::with_capacity(2); active.len()];
        for _ in 0..2 {
            for hole in holes.iter_mut() {
                hole.push(deck.draw()?);
            }
        }
        let seats = active
            .iter()
            .zip(holes)
            .map(|(p, hole)| Seat {
                name: p.name().to_string(),
                kind: p.kind(),
                stack: p.chips(),
                starting_stack: p.chips(),
                hole: [hole[0], hole[1]],
            })
            .collect();

        debug!(seed, dealer, seats = active.len(), "hand dealt");
        Ok(Self {
            seed,
            rng,
            deck,
            seats,
            dealer,
            blinds,
            posted: Vec::with_capacity(2),
            board: Vec::with_capacity(5),
            betting: BettingState::default(),
            phase: Phase::Init,
            actions: Vec::new(),
            showdown: None,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn pot(&self) -> u32 {
        self.betting.pot
    }
    pub fn bet_to_call(&self) -> u32 {
        self.betting.bet_to_call
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn seat(&self, name: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.name == name)
    }

    pub fn is_folded(&self, name: &str) -> bool {
        self.seat_index(name)
            .is_some_and(|i| self.betting.folded.contains(&i))
    }

    /// Names of seats that have not folded.
    pub fn contenders(&self) -> Vec<&str> {
        self.betting
            .contenders(self.seats.len())
            .into_iter()
            .map(|i| self.seats[i].name.as_str())
            .collect()
    }

    /// `true` once a single seat is left holding cards.
    pub fn is_uncontested(&self) -> bool {
        self.betting.contenders(self.seats.len()).len() == 1
    }

    pub fn blind_positions(&self) -> (usize, usize) {
        blind_positions(self.dealer, self.seats.len())
    }

    /// Posts both blinds, each capped at the payer's stack, and opens
    /// betting at the big blind amount. Returns `(pot, bet_to_call)`.
    pub fn post_blinds(&mut self) -> Result<(u32, u32), GameError> {
        self.expect(Phase::Init)?;
        let (sb, bb) = self.blind_positions();
        for (idx, amount) in [(sb, self.blinds.small), (bb, self.blinds.big)] {
            let seat = &mut self.seats[idx];
            let paid = amount.min(seat.stack);
            seat.stack -= paid;
            self.betting.pot += paid;
            self.posted.push(BlindPost {
                player: seat.name.clone(),
                amount: paid,
            });
        }
        self.betting.bet_to_call = self.blinds.big;
        self.phase = Phase::Blinds;
        Ok((self.betting.pot, self.betting.bet_to_call))
    }

    /// Opens `street` (dealing its community cards and, after the flop,
    /// resetting the bet to zero) and runs its betting round.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfSequence`] when the previous step has not been
    ///   played, or the hand is already decided
    /// - [`GameError::HandAborted`] when the human quits
    pub fn run_street(
        &mut self,
        street: Street,
        bots: &dyn BotPolicy,
        human: &mut dyn ActionProvider,
    ) -> Result<StreetResult, GameError> {
        self.expect(Phase::before(street))?;
        if self.is_uncontested() {
            return Err(GameError::OutOfSequence {
                expected: Phase::Settled,
                actual: self.phase,
            });
        }

        if street != Street::Preflop {
            let dealt = self.deck.draw_n(street.cards_dealt())?;
            self.board.extend(dealt);
            self.betting.bet_to_call = 0;
        }

        let folded_before = self.betting.folded.clone();
        let actions = run_betting_round(
            street,
            &mut self.seats,
            &self.board,
            &mut self.betting,
            bots,
            human,
            &mut self.rng,
        )?;
        let newly_folded = self
            .betting
            .folded
            .difference(&folded_before)
            .map(|&i| self.seats[i].name.clone())
            .collect();

        self.actions.extend(actions.iter().cloned());
        self.phase = Phase::after(street);
        debug!(
            street = street.as_str(),
            pot = self.betting.pot,
            bet_to_call = self.betting.bet_to_call,
            "street complete"
        );
        Ok(StreetResult {
            street,
            actions,
            pot: self.betting.pot,
            bet_to_call: self.betting.bet_to_call,
            newly_folded,
            board: self.board.clone(),
        })
    }

    /// Evaluates every remaining seat after the river.
    pub fn showdown(&mut self) -> Result<&[ShowdownEntry], GameError> {
        self.expect(Phase::River)?;
        let remaining: Vec<&Seat> = self
            .betting
            .contenders(self.seats.len())
            .into_iter()
            .map(|i| &self.seats[i])
            .collect();
        let entries = evaluate_showdown(&remaining, &self.board)?;
        self.phase = Phase::Showdown;
        let entries: &[ShowdownEntry] = self.showdown.insert(entries);
        Ok(entries)
    }

    /// Awards the pot and closes the hand.
    ///
    /// A hand with one seat left is won uncontested at any street; otherwise
    /// the hand must have reached the river and goes to showdown.
    pub fn finish(mut self) -> Result<HandOutcome, GameError> {
        let contenders = self.betting.contenders(self.seats.len());
        let winners = if contenders.len() == 1 {
            if self.phase < Phase::PreFlop {
                return Err(GameError::OutOfSequence {
                    expected: Phase::PreFlop,
                    actual: self.phase,
                });
            }
            vec![self.seats[contenders[0]].name.clone()]
        } else {
            if self.phase == Phase::River {
                self.showdown()?;
            }
            self.expect(Phase::Showdown)?;
            showdown_winners(self.showdown.as_deref().unwrap_or_default())
        };

        let pot = self.betting.pot;
        let awards = settle(pot, &winners)?;
        for (name, amount) in &awards {
            let idx = self
                .seat_index(name)
                .ok_or_else(|| GameError::UnknownPlayer(name.clone()))?;
            self.seats[idx].stack += amount;
        }
        self.betting.pot = 0;
        self.phase = Phase::Settled;

        let deltas: Vec<(String, i64)> = self
            .seats
            .iter()
            .map(|s| (s.name.clone(), s.delta()))
            .collect();
        info!(
            seed = self.seed,
            pot,
            winners = ?winners,
            showdown = self.showdown.is_some(),
            "hand settled"
        );
        Ok(HandOutcome {
            seed: self.seed,
            blinds: self.posted,
            actions: self.actions,
            board: self.board,
            pot,
            winners,
            awards,
            deltas,
            showdown: self.showdown,
        })
    }

    /// Plays the whole hand: blinds, up to four streets, then settlement.
    pub fn play(
        mut self,
        bots: &dyn BotPolicy,
        human: &mut dyn ActionProvider,
    ) -> Result<HandOutcome, GameError> {
        self.post_blinds()?;
        for street in Street::ALL {
            if self.is_uncontested() {
                break;
            }
            self.run_street(street, bots, human)?;
        }
        self.finish()
    }

    fn seat_index(&self, name: &str) -> Option<usize> {
        self.seats.iter().position(|s| s.name == name)
    }

    fn expect(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::OutOfSequence {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Best hand of each seat from its two private cards and the board.
///
/// # Errors
///
/// [`GameError::InsufficientCards`] when the board has fewer than 3 cards.
pub fn evaluate_showdown(seats: &[&Seat], board: &[Card]) -> Result<Vec<ShowdownEntry>, GameError> {
    seats
        .iter()
        .map(|seat| {
            let mut cards = Vec::with_capacity(7);
            cards.extend_from_slice(&seat.hole);
            cards.extend_from_slice(board);
            Ok(ShowdownEntry {
                player: seat.name.clone(),
                hole: seat.hole,
                evaluation: evaluate(&cards)?,
            })
        })
        .collect()
}

/// Every player whose hand equals the best strength exactly.
pub fn showdown_winners(entries: &[ShowdownEntry]) -> Vec<String> {
    let Some(best) = entries.iter().map(|e| &e.evaluation.strength).max() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter(|e| &e.evaluation.strength == best)
        .map(|e| e.player.clone())
        .collect()
}
