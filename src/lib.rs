//! handrank: poker hand strength as one packed, ordered integer
//!
//! The whole comparison rulebook of poker (category first, then
//! tie-breakers in descending priority) collapses into a single `u64`:
//! nine 6-bit fields, one per hand category, strongest category in the
//! most significant slot. Two [`ranking::HandRank`] values compare with
//! plain unsigned comparison, so no category enum or comparator chain
//! ever exists.
//!
//! Goals:
//! - Deterministic, order-correct ranking for 5+ card hands
//! - Pure functions, no shared state, trivially parallelizable
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use handrank::cards::parse_cards;
//! use handrank::ranking::rank_hand;
//!
//! let full_house = rank_hand(&parse_cards("7c 7d 7h 2s 2c").unwrap()).unwrap();
//! let flush = rank_hand(&parse_cards("Ah Jh 9h 5h 2h").unwrap()).unwrap();
//! assert!(full_house > flush);
//! ```

pub mod cards;
pub mod ranking;

pub use cards::{Card, CardError, Rank, Suit};
pub use ranking::{rank_hand, HandRank, RankError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
