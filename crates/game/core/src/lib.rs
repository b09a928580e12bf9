//! Deterministic puzzle rules for Equation Pyramid.
//!
//! `pyramid-core` generates ten-tile decks, evaluates three-tile equations,
//! enumerates every equation a deck allows, and picks a target number with a
//! small number of solutions. Everything here is pure and synchronous; the
//! only source of randomness is the [`RngOracle`] handed to
//! [`PuzzleGenerator`], so a seeded [`PcgRng`] reproduces a game exactly.
//!
//! Frontends consume the resulting [`GameState`] and keep round, timer, and
//! score bookkeeping on their side.
pub mod config;
pub mod enumerate;
pub mod error;
pub mod evaluate;
pub mod generator;
pub mod rng;
pub mod selector;
pub mod tile;

pub use config::PuzzleConfig;
pub use enumerate::{Equation, enumerate, enumerate_in_range};
pub use error::{DeckError, ParseTileError, SelectionError};
pub use evaluate::{evaluate, evaluate_raw, try_evaluate};
pub use generator::{PuzzleGenerator, generate_deck};
pub use rng::{PcgRng, RngOracle};
pub use selector::{Bucket, GameState, GuessOutcome, ResultBuckets, generate_game_state};
pub use tile::{Deck, DeckTally, Operator, Tile};
