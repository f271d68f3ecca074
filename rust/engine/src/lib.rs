//! # shortstack-engine: Poker Table Engine Core
//!
//! A deterministic Texas Hold'em engine for one table of up to nine seats,
//! one of which may be driven interactively. Provides hand evaluation,
//! single-pass street betting and whole-hand orchestration with a seedable
//! random source, so a seed plus the same human decisions replays a hand
//! exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - 52-card deck with injected shuffling
//! - [`hand`] - Best-of-5 hand evaluation and strength ordering
//! - [`rules`] - Human action validation and bot action downgrades
//! - [`betting`] - Per-street betting state machine and decision seams
//! - [`pot`] - Pot splitting between tied winners
//! - [`engine`] - One hand from blinds to settlement
//! - [`game`] - Player records and dealer rotation across hands
//! - [`logger`] - Action records and JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use shortstack_engine::cards::parse_cards;
//! use shortstack_engine::hand::{evaluate, Category};
//!
//! // Evaluate a 7-card poker hand
//! let cards = parse_cards("A♥ K♥ Q♥ J♥ T♥ 2♣ 3♦").unwrap();
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use shortstack_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut a = Deck::shuffled(42);
//! let mut b = Deck::shuffled(42);
//! assert_eq!(a.draw_n(5).unwrap(), b.draw_n(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
