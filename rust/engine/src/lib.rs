//! # felt-engine: Casino Table Engine Core
//!
//! The card-game engine behind a casual two-game casino: blackjack and
//! 5-card-draw poker against the house, played down a shared bankroll.
//! Deterministic under a session seed, so whole sessions replay identically
//! for debugging and tests. Presentation lives elsewhere: callers hold a
//! [`table::Table`] and render the view payload each call returns.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`bankroll`] - Wager validation and the only balance mutators
//! - [`dealer`] - Fixed house policies (stand-on-17, exchange heuristic)
//! - [`blackjack`] - Ace-adjusted scoring and the deal/hit/stand round
//! - [`poker`] - 5-card hand ranking and the deal/exchange round
//! - [`table`] - Session object and the engine's public call surface
//! - [`logger`] - Round history serialization (JSONL)
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::table::Table;
//!
//! let mut table = Table::new(10.0, Some(42));
//!
//! let view = table.start_blackjack(5.0).expect("valid bet");
//! println!("dealt {} vs dealer {}", view.player_total, view.dealer_total);
//!
//! let view = table.stand().expect("round in progress");
//! println!("{} bankroll ${:.2}", view.message.unwrap_or_default(), view.bankroll);
//! ```
//!
//! ## Scoring and Ranking
//!
//! The scoring primitives are plain functions, usable without a table:
//!
//! ```rust
//! use felt_engine::blackjack::hand_total;
//! use felt_engine::cards::{Card, Rank, Suit};
//!
//! let hand = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Nine },
//! ];
//! assert_eq!(hand_total(&hand), 21); // one ace high, one low
//! ```
//!
//! ## Determinism
//!
//! Every shuffle and every dealer decision derives from the table seed:
//!
//! ```rust
//! use felt_engine::table::Table;
//!
//! let mut a = Table::new(100.0, Some(7));
//! let mut b = Table::new(100.0, Some(7));
//! let va = a.start_poker(1.0).unwrap();
//! let vb = b.start_poker(1.0).unwrap();
//! assert_eq!(va.player, vb.player);
//! ```

pub mod bankroll;
pub mod blackjack;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod logger;
pub mod poker;
pub mod table;
