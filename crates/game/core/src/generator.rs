//! Deck generation.
//!
//! Positions `A..J` are filled in order. Each position samples candidate tiles
//! until one fits the deck caps, is not `*1`/`/1`, and does not repeat an
//! operator/number pair already in the deck. Sampling is bounded; when it runs
//! out the position is filled with a small `+`/`-` tile instead, which can
//! never break a cap.

use arrayvec::ArrayVec;

use crate::config::PuzzleConfig;
use crate::rng::RngOracle;
use crate::tile::{Deck, DeckTally, Operator, Tile};

/// Additive draws tried before the forced tile scans for a free pair.
const FORCED_TILE_ATTEMPTS: u32 = 20;

/// Puzzle generator owning its configuration and random source.
#[derive(Clone, Debug)]
pub struct PuzzleGenerator<R> {
    pub(crate) config: PuzzleConfig,
    pub(crate) rng: R,
}

impl<R: RngOracle> PuzzleGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(PuzzleConfig::default(), rng)
    }

    pub fn with_config(config: PuzzleConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Returns the random source, e.g. to continue a seeded stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Generates a fresh ten-tile deck.
    pub fn generate_deck(&mut self) -> Deck {
        let mut tiles: ArrayVec<Tile, { PuzzleConfig::DECK_SIZE }> = ArrayVec::new();
        let mut tally = DeckTally::default();

        for position in 0..PuzzleConfig::DECK_SIZE {
            let tile = match self.sample_tile(position, &tiles, &tally) {
                Some(tile) => tile,
                None => {
                    tracing::debug!(
                        position,
                        attempts = self.config.max_sampling_attempts,
                        "tile sampling exhausted, forcing an additive tile"
                    );
                    self.forced_tile(position, &tiles)
                }
            };
            tally.record(&tile);
            tiles.push(tile);
        }

        let deck = Deck::from_generated(tiles);
        tracing::trace!(%deck, "deck generated");
        deck
    }

    fn sample_tile(&mut self, position: usize, taken: &[Tile], tally: &DeckTally) -> Option<Tile> {
        for _ in 0..self.config.max_sampling_attempts {
            let operator = Operator::ALL[self.rng.range(0, 3) as usize];
            let number = self.sample_number(tally);
            let candidate = Tile::at(position, operator, number);

            if tally.admits(&candidate)
                && !candidate.is_degenerate()
                && !taken.iter().any(|tile| tile.same_face(&candidate))
            {
                return Some(candidate);
            }
        }
        None
    }

    fn sample_number(&mut self, tally: &DeckTally) -> u32 {
        let range = if tally.big_cap_reached() || !self.rng.chance(self.config.big_number_chance) {
            PuzzleConfig::SMALL_NUMBERS
        } else {
            PuzzleConfig::BIG_NUMBERS
        };
        self.rng.range(*range.start(), *range.end())
    }

    /// Small `+`/`-` tile not yet in the deck.
    fn forced_tile(&mut self, position: usize, taken: &[Tile]) -> Tile {
        let small = PuzzleConfig::SMALL_NUMBERS;
        let unused = |operator: Operator, number: u32| {
            !taken
                .iter()
                .any(|tile| tile.operator == operator && tile.number == number)
        };

        for _ in 0..FORCED_TILE_ATTEMPTS {
            let operator = if self.rng.chance(50) {
                Operator::Add
            } else {
                Operator::Subtract
            };
            let number = self.rng.range(*small.start(), *small.end());
            if unused(operator, number) {
                return Tile::at(position, operator, number);
            }
        }

        // 18 additive pairs against at most 9 taken tiles: the scan always hits.
        [Operator::Add, Operator::Subtract]
            .into_iter()
            .flat_map(|operator| small.clone().map(move |number| (operator, number)))
            .find(|(operator, number)| unused(*operator, *number))
            .map_or_else(
                || Tile::at(position, Operator::Add, 1),
                |(operator, number)| Tile::at(position, operator, number),
            )
    }
}

/// Generates a deck with the default configuration.
pub fn generate_deck<R: RngOracle>(rng: &mut R) -> Deck {
    PuzzleGenerator::new(rng).generate_deck()
}
