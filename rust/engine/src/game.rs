use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::betting::{ActionProvider, BotPolicy};
use crate::engine::{Blinds, HandOutcome, HandState};
use crate::errors::GameError;
use crate::player::{ensure_unique_names, Personality, Player};

/// The table across hands: every player record and the dealer position.
/// Chip stacks are only written here, when a settled hand is applied.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    /// Index into the players that still have chips
    dealer: usize,
    blinds: Blinds,
    hands_played: u32,
}

impl GameState {
    /// # Errors
    ///
    /// [`GameError::DuplicatePlayer`] when two players share a name. Stacks
    /// are keyed by name, so every name must be unique.
    pub fn new(players: Vec<Player>, blinds: Blinds) -> Result<Self, GameError> {
        ensure_unique_names(players.iter().map(Player::name))?;
        Ok(Self {
            players,
            dealer: 0,
            blinds,
            hands_played: 0,
        })
    }

    /// One optional human seat followed by the named bots, all starting with
    /// `stack` chips.
    pub fn with_roster(
        human: Option<&str>,
        bots: &[(String, Personality)],
        stack: u32,
        blinds: Blinds,
    ) -> Result<Self, GameError> {
        let mut players = Vec::with_capacity(bots.len() + 1);
        if let Some(name) = human {
            players.push(Player::human(name, stack));
        }
        players.extend(
            bots.iter()
                .map(|(name, personality)| Player::bot(name.clone(), stack, *personality)),
        );
        Self::new(players, blinds)
    }

    /// Randomizes the seating order and the first dealer.
    pub fn shuffle_seats<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.players.shuffle(rng);
        self.dealer = rng.random_range(0..self.players.len().max(1));
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn blinds(&self) -> Blinds {
        self.blinds
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Players that will be dealt into the next hand.
    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.chips() > 0).count()
    }

    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.chips())).sum()
    }

    /// No further hand can be played: fewer than two players have chips, or
    /// the human seat (when there is one) is out.
    pub fn is_over(&self) -> bool {
        self.active_count() < 2
            || self
                .players
                .iter()
                .any(|p| p.is_human() && p.chips() == 0)
    }

    /// Deals the next hand without touching any stack.
    pub fn start_hand(&self, seed: u64) -> Result<HandState, GameError> {
        HandState::new(&self.players, self.dealer, seed, self.blinds)
    }

    /// Writes a settled hand back: applies every delta, then moves the
    /// dealer one seat among the players that still have chips.
    pub fn apply_outcome(&mut self, outcome: &HandOutcome) -> Result<(), GameError> {
        for (name, delta) in &outcome.deltas {
            let player = self
                .players
                .iter_mut()
                .find(|p| p.name() == name)
                .ok_or_else(|| GameError::UnknownPlayer(name.clone()))?;
            player.apply_delta(*delta);
        }
        let active = self.active_count();
        self.dealer = (self.dealer + 1) % active.max(1);
        self.hands_played += 1;
        info!(
            hand = self.hands_played,
            dealer = self.dealer,
            active,
            "hand applied"
        );
        Ok(())
    }

    /// Plays one full hand and applies it. An aborted hand
    /// ([`GameError::HandAborted`]) leaves every stack unchanged.
    pub fn play_hand(
        &mut self,
        seed: u64,
        bots: &dyn BotPolicy,
        human: &mut dyn ActionProvider,
    ) -> Result<HandOutcome, GameError> {
        let outcome = self.start_hand(seed)?.play(bots, human)?;
        self.apply_outcome(&outcome)?;
        Ok(outcome)
    }
}
