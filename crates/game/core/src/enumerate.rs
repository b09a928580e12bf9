//! Exhaustive equation enumeration.
//!
//! Every ordered selection of three distinct positions is an equation, so a
//! set of `n` tiles yields `n * (n - 1) * (n - 2)` of them (720 for a deck).
//! The scan is a plain triple loop; decks are small enough that pruning would
//! buy nothing.

use core::fmt;
use core::ops::RangeInclusive;

use crate::config::PuzzleConfig;
use crate::evaluate::evaluate;
use crate::tile::Tile;

/// An ordered selection of three tiles together with its game-valid result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    pub tiles: [Tile; 3],
    /// Deck positions the tiles were taken from, in equation order.
    pub positions: [usize; 3],
    /// Positive result, or [`PuzzleConfig::INVALID_RESULT`].
    pub result: i64,
}

impl Equation {
    /// Evaluates the tiles at `positions`.
    pub fn new(tiles: [Tile; 3], positions: [usize; 3]) -> Self {
        Self {
            tiles,
            positions,
            result: evaluate(&tiles),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result != PuzzleConfig::INVALID_RESULT
    }

    /// Valid result as a target-comparable number.
    pub fn value(&self) -> Option<u32> {
        if !self.is_valid() {
            return None;
        }
        u32::try_from(self.result).ok()
    }

    pub fn labels(&self) -> [char; 3] {
        self.tiles.map(|tile| tile.label)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = &self.tiles;
        write!(
            f,
            "{} {} {} {} {} = ",
            first.number, second.operator, second.number, third.operator, third.number
        )?;
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("invalid"),
        }
    }
}

/// Ordered triples of pairwise distinct indices below `len`, lexicographic.
fn ordered_triples(len: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..len).flat_map(move |i| {
        (0..len).filter(move |j| *j != i).flat_map(move |j| {
            (0..len)
                .filter(move |k| *k != i && *k != j)
                .map(move |k| [i, j, k])
        })
    })
}

fn equations(tiles: &[Tile]) -> impl Iterator<Item = Equation> + '_ {
    ordered_triples(tiles.len())
        .map(|[i, j, k]| Equation::new([tiles[i], tiles[j], tiles[k]], [i, j, k]))
}

/// Every ordered equation over `tiles`, invalid ones included.
pub fn enumerate(tiles: &[Tile]) -> Vec<Equation> {
    equations(tiles).collect()
}

/// Valid equations over `tiles` whose result lies in `range`.
pub fn enumerate_in_range(tiles: &[Tile], range: RangeInclusive<u32>) -> Vec<Equation> {
    equations(tiles)
        .filter(|equation| equation.value().is_some_and(|value| range.contains(&value)))
        .collect()
}
