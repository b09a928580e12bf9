//! Target selection and game state assembly.
//!
//! A deck's valid equations (results 1..=15) are grouped by result. A result
//! becomes the target when its group holds 2 to 4 equations: enough to be
//! findable, few enough to stay a puzzle. Among qualifying groups the largest
//! wins; ties go to the group whose result appeared first in enumeration order.
//!
//! Generation retries a bounded number of times and never fails. The last
//! resort is a state with target 1 and no valid equations, which frontends
//! treat as an instantly completed round.

use core::ops::RangeInclusive;

use crate::config::PuzzleConfig;
use crate::enumerate::{Equation, enumerate_in_range};
use crate::error::SelectionError;
use crate::generator::PuzzleGenerator;
use crate::rng::RngOracle;
use crate::tile::Deck;

// ============================================================================
// Result Buckets
// ============================================================================

/// Equations sharing one result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub result: u32,
    pub equations: Vec<Equation>,
}

/// Equations grouped by result, in the order each result was first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultBuckets {
    buckets: Vec<Bucket>,
}

impl ResultBuckets {
    /// Groups valid equations; invalid ones are skipped.
    pub fn from_equations<I>(equations: I) -> Self
    where
        I: IntoIterator<Item = Equation>,
    {
        let mut buckets: Vec<Bucket> = Vec::new();
        for equation in equations {
            let Some(result) = equation.value() else {
                continue;
            };
            match buckets.iter_mut().find(|bucket| bucket.result == result) {
                Some(bucket) => bucket.equations.push(equation),
                None => buckets.push(Bucket {
                    result,
                    equations: vec![equation],
                }),
            }
        }
        Self { buckets }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, result: u32) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| bucket.result == result)
    }

    /// Largest bucket whose size lies in `band`; the first seen wins ties.
    pub fn best_fit(&self, band: &RangeInclusive<usize>) -> Option<&Bucket> {
        let mut best: Option<&Bucket> = None;
        for bucket in self
            .buckets
            .iter()
            .filter(|bucket| band.contains(&bucket.equations.len()))
        {
            if best.is_none_or(|current| bucket.equations.len() > current.equations.len()) {
                best = Some(bucket);
            }
        }
        best
    }

    /// First bucket whose size lies in `band`.
    pub fn first_fit(&self, band: &RangeInclusive<usize>) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|bucket| band.contains(&bucket.equations.len()))
    }
}

// ============================================================================
// Game State
// ============================================================================

/// Everything a round needs: the deck, the target, and every way to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    pub tiles: Deck,
    pub target_number: u32,
    pub valid_equations: Vec<Equation>,
}

/// Verdict on a player's three-tile selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The selection is one of the valid equations.
    Correct(Equation),
    /// The selection evaluates to something else (possibly invalid).
    Incorrect(Equation),
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_))
    }

    pub fn equation(&self) -> &Equation {
        match self {
            Self::Correct(equation) | Self::Incorrect(equation) => equation,
        }
    }
}

impl GameState {
    fn from_bucket(tiles: Deck, bucket: &Bucket) -> Self {
        Self {
            tiles,
            target_number: bucket.result,
            valid_equations: bucket.equations.clone(),
        }
    }

    /// The empty-solution state returned when no deck yields a target.
    pub fn unsolvable(tiles: Deck) -> Self {
        Self {
            tiles,
            target_number: PuzzleConfig::FALLBACK_TARGET,
            valid_equations: Vec::new(),
        }
    }

    /// Picks a target for `tiles` by best fit, then first fit.
    pub fn for_deck(tiles: Deck) -> Option<Self> {
        let buckets = ResultBuckets::from_equations(enumerate_in_range(
            tiles.tiles(),
            PuzzleConfig::TARGET_RESULTS,
        ));
        let band = PuzzleConfig::TARGET_SOLUTIONS;
        let bucket = buckets
            .best_fit(&band)
            .or_else(|| buckets.first_fit(&band))?;
        Some(Self::from_bucket(tiles, bucket))
    }

    /// True for the degenerate state without any valid equation.
    pub fn is_unsolvable(&self) -> bool {
        self.valid_equations.is_empty()
    }

    pub fn solution_count(&self) -> usize {
        self.valid_equations.len()
    }

    /// Checks a player's selection of three deck positions.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] when a position is outside the deck or
    /// selected twice.
    pub fn check_guess(&self, selection: [usize; 3]) -> Result<GuessOutcome, SelectionError> {
        let deck_size = self.tiles.len();
        for (index, position) in selection.iter().enumerate() {
            if *position >= deck_size {
                return Err(SelectionError::OutOfRange {
                    position: *position,
                    deck_size,
                });
            }
            if selection[..index].contains(position) {
                return Err(SelectionError::Repeated {
                    position: *position,
                });
            }
        }

        let tiles = self.tiles.tiles();
        let equation = Equation::new(selection.map(|position| tiles[position]), selection);
        let found = self
            .valid_equations
            .iter()
            .any(|valid| valid.positions == selection);

        Ok(if found {
            GuessOutcome::Correct(equation)
        } else {
            GuessOutcome::Incorrect(equation)
        })
    }
}

// ============================================================================
// Generation
// ============================================================================

impl<R: RngOracle> PuzzleGenerator<R> {
    /// Generates a deck and target, retrying until a target with 2 to 4
    /// solutions exists. Never fails; see the module docs for the fallbacks.
    pub fn generate_game_state(&mut self) -> GameState {
        let band = PuzzleConfig::TARGET_SOLUTIONS;
        let max_attempts = self.config.max_generation_attempts;

        for attempt in 1..=max_attempts {
            let deck = self.generate_deck();
            let equations = enumerate_in_range(deck.tiles(), PuzzleConfig::TARGET_RESULTS);

            if equations.len() < self.config.min_valid_equations && attempt < max_attempts {
                tracing::debug!(
                    attempt,
                    valid = equations.len(),
                    "too few valid equations, regenerating deck"
                );
                continue;
            }

            let buckets = ResultBuckets::from_equations(equations);
            if let Some(bucket) = buckets.best_fit(&band) {
                tracing::debug!(
                    attempt,
                    target = bucket.result,
                    solutions = bucket.equations.len(),
                    "target selected"
                );
                return GameState::from_bucket(deck, bucket);
            }
            if let Some(bucket) = buckets.first_fit(&band) {
                tracing::debug!(attempt, target = bucket.result, "target selected by first fit");
                return GameState::from_bucket(deck, bucket);
            }
            tracing::debug!(attempt, results = buckets.len(), "no result has 2-4 solutions");
        }

        let deck = self.generate_deck();
        let buckets = ResultBuckets::from_equations(enumerate_in_range(
            deck.tiles(),
            PuzzleConfig::TARGET_RESULTS,
        ));
        if let Some(bucket) = buckets.first_fit(&band) {
            tracing::debug!(target = bucket.result, "target selected on final pass");
            return GameState::from_bucket(deck, bucket);
        }

        tracing::warn!(
            attempts = max_attempts.saturating_add(1),
            "no deck produced a usable target, returning an unsolvable state"
        );
        GameState::unsolvable(deck)
    }
}

/// Generates a game state with the default configuration.
pub fn generate_game_state<R: RngOracle>(rng: &mut R) -> GameState {
    PuzzleGenerator::new(rng).generate_game_state()
}
