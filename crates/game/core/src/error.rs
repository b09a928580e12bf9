//! Error types for caller-supplied input.
//!
//! Generation and evaluation never fail: an unusable equation is reported
//! through [`PuzzleConfig::INVALID_RESULT`](crate::PuzzleConfig::INVALID_RESULT)
//! and an unlucky generation run degrades to an empty-solution game state.
//! The errors here cover only data handed to the engine from outside: decks
//! assembled by hand, tile text, and player selections.

use crate::tile::Operator;

/// A hand-assembled deck breaks one of the deck invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("a deck holds exactly {expected} tiles, got {got}")]
    WrongSize { expected: usize, got: usize },

    #[error("tile {operator}{number} appears more than once")]
    DuplicateTile { operator: Operator, number: u32 },

    #[error("tile {operator}{number} leaves its operand unchanged")]
    DegenerateTile { operator: Operator, number: u32 },

    #[error("{count} tiles use {operator}, at most {max} allowed")]
    OperatorCapExceeded {
        operator: Operator,
        count: usize,
        max: usize,
    },

    #[error("{count} tiles have numbers of {threshold} or more, at most {max} allowed")]
    BigNumberCapExceeded {
        count: usize,
        threshold: u32,
        max: usize,
    },
}

/// Tile text could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTileError {
    #[error("empty tile")]
    Empty,

    #[error("unknown operator in '{input}' (expected one of + - * /)")]
    UnknownOperator { input: String },

    #[error("invalid number in '{input}'")]
    InvalidNumber { input: String },

    #[error("invalid label in '{input}' (expected a letter A-J)")]
    InvalidLabel { input: String },
}

/// A player's three-tile selection does not name three distinct deck positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("position {position} is outside the deck (size {deck_size})")]
    OutOfRange { position: usize, deck_size: usize },

    #[error("position {position} is selected more than once")]
    Repeated { position: usize },
}
