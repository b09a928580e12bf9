//! Tiles and decks.
//!
//! A [`Tile`] pairs an [`Operator`] with a number and carries a positional
//! label (`A` for the first tile of a deck, `B` for the second, ...). A
//! [`Deck`] is the fixed set of ten tiles one round is played with.

use core::fmt;
use core::str::FromStr;

use arrayvec::ArrayVec;

use crate::config::PuzzleConfig;
use crate::error::{DeckError, ParseTileError};

/// Arithmetic operator printed on a tile.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[strum(serialize = "+")]
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    #[strum(serialize = "-")]
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Subtract,
    #[strum(serialize = "*")]
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Multiply,
    #[strum(serialize = "/")]
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Divide,
}

impl Operator {
    /// Every operator, in sampling order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// `*` and `/` bind tighter than `+` and `-`.
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    pub const fn is_additive(self) -> bool {
        !self.is_multiplicative()
    }

    /// Cap on how many tiles of a deck may carry this operator, if any.
    pub const fn deck_cap(self) -> Option<usize> {
        match self {
            Self::Multiply => Some(PuzzleConfig::MAX_MULTIPLY_TILES),
            Self::Divide => Some(PuzzleConfig::MAX_DIVIDE_TILES),
            Self::Add | Self::Subtract => None,
        }
    }
}

/// A single puzzle tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub operator: Operator,
    pub number: u32,
    pub label: char,
}

impl Tile {
    pub const fn new(operator: Operator, number: u32, label: char) -> Self {
        Self {
            operator,
            number,
            label,
        }
    }

    /// Creates a tile labelled for the given deck position.
    pub fn at(position: usize, operator: Operator, number: u32) -> Self {
        Self::new(operator, number, Self::label_for(position))
    }

    /// Label of the tile at `position`: `A`, `B`, ... (`?` past `Z`).
    pub fn label_for(position: usize) -> char {
        u8::try_from(position)
            .ok()
            .filter(|offset| *offset < 26)
            .map_or('?', |offset| char::from(b'A' + offset))
    }

    /// Deck position encoded by a label, if it is a letter.
    pub fn position_of(label: char) -> Option<usize> {
        label
            .is_ascii_uppercase()
            .then(|| usize::from(label as u8 - b'A'))
    }

    /// Parses `"+5"` or `"C:+5"`. An explicit label overrides the positional one.
    pub fn parse_at(position: usize, text: &str) -> Result<Self, ParseTileError> {
        let text = text.trim();
        let (label, body) = match text.split_once(':') {
            Some((label, body)) => {
                let mut chars = label.trim().chars();
                let label = match (chars.next(), chars.next()) {
                    (Some(letter), None) => letter.to_ascii_uppercase(),
                    _ => {
                        return Err(ParseTileError::InvalidLabel {
                            input: text.to_string(),
                        });
                    }
                };
                let in_deck =
                    Self::position_of(label).is_some_and(|pos| pos < PuzzleConfig::DECK_SIZE);
                if !in_deck {
                    return Err(ParseTileError::InvalidLabel {
                        input: text.to_string(),
                    });
                }
                (label, body.trim())
            }
            None => (Self::label_for(position), text),
        };

        let mut chars = body.chars();
        let symbol = chars.next().ok_or(ParseTileError::Empty)?;
        let operator = Operator::from_str(symbol.encode_utf8(&mut [0; 4])).map_err(|_| {
            ParseTileError::UnknownOperator {
                input: text.to_string(),
            }
        })?;
        let number = chars
            .as_str()
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseTileError::InvalidNumber {
                input: text.to_string(),
            })?;

        Ok(Self::new(operator, number, label))
    }

    /// Big-number tiles count against [`PuzzleConfig::MAX_BIG_TILES`].
    pub const fn is_big(&self) -> bool {
        self.number >= PuzzleConfig::BIG_NUMBER_THRESHOLD
    }

    /// `*1` and `/1` leave their operand unchanged.
    pub const fn is_degenerate(&self) -> bool {
        self.operator.is_multiplicative() && self.number == 1
    }

    /// True when both tiles print the same operator and number.
    pub fn same_face(&self, other: &Tile) -> bool {
        self.operator == other.operator && self.number == other.number
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.label, self.operator, self.number)
    }
}

/// Running per-deck counts checked against the deck caps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeckTally {
    pub multiply: usize,
    pub divide: usize,
    pub big: usize,
}

impl DeckTally {
    pub fn of(tiles: &[Tile]) -> Self {
        let mut tally = Self::default();
        for tile in tiles {
            tally.record(tile);
        }
        tally
    }

    pub fn record(&mut self, tile: &Tile) {
        match tile.operator {
            Operator::Multiply => self.multiply += 1,
            Operator::Divide => self.divide += 1,
            Operator::Add | Operator::Subtract => {}
        }
        if tile.is_big() {
            self.big += 1;
        }
    }

    /// True once no further big-number tile may be added.
    pub fn big_cap_reached(&self) -> bool {
        self.big >= PuzzleConfig::MAX_BIG_TILES
    }

    /// Whether `tile` can join the deck without exceeding a cap.
    pub fn admits(&self, tile: &Tile) -> bool {
        let operator_ok = match tile.operator {
            Operator::Multiply => self.multiply < PuzzleConfig::MAX_MULTIPLY_TILES,
            Operator::Divide => self.divide < PuzzleConfig::MAX_DIVIDE_TILES,
            Operator::Add | Operator::Subtract => true,
        };
        operator_ok && (!tile.is_big() || !self.big_cap_reached())
    }
}

/// The ten tiles of one round.
///
/// Serialized as a plain tile list; deserialization goes through
/// [`Deck::from_tiles`], so a decoded deck always satisfies every invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Tile>", into = "Vec<Tile>")
)]
pub struct Deck {
    tiles: ArrayVec<Tile, { PuzzleConfig::DECK_SIZE }>,
}

impl Deck {
    /// Builds a deck from tiles in position order, relabelling them `A..J`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DeckError`] found: size first, then duplicate and
    /// degenerate tiles in position order, then operator and big-number caps.
    pub fn from_tiles<I>(tiles: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let tiles: Vec<Tile> = tiles.into_iter().collect();
        if tiles.len() != PuzzleConfig::DECK_SIZE {
            return Err(DeckError::WrongSize {
                expected: PuzzleConfig::DECK_SIZE,
                got: tiles.len(),
            });
        }

        let deck = Self {
            tiles: tiles
                .into_iter()
                .enumerate()
                .map(|(position, tile)| Tile::at(position, tile.operator, tile.number))
                .collect(),
        };
        deck.validate()?;
        Ok(deck)
    }

    /// Assembles a deck the generator has already checked tile by tile.
    pub(crate) fn from_generated(tiles: ArrayVec<Tile, { PuzzleConfig::DECK_SIZE }>) -> Self {
        debug_assert!(tiles.is_full());
        Self { tiles }
    }

    /// Checks every deck invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), DeckError> {
        for (position, tile) in self.tiles.iter().enumerate() {
            if tile.is_degenerate() {
                return Err(DeckError::DegenerateTile {
                    operator: tile.operator,
                    number: tile.number,
                });
            }
            if self.tiles[..position].iter().any(|seen| seen.same_face(tile)) {
                return Err(DeckError::DuplicateTile {
                    operator: tile.operator,
                    number: tile.number,
                });
            }
        }

        let tally = DeckTally::of(&self.tiles);
        for (operator, count) in [
            (Operator::Multiply, tally.multiply),
            (Operator::Divide, tally.divide),
        ] {
            if let Some(max) = operator.deck_cap().filter(|max| count > *max) {
                return Err(DeckError::OperatorCapExceeded {
                    operator,
                    count,
                    max,
                });
            }
        }
        if tally.big > PuzzleConfig::MAX_BIG_TILES {
            return Err(DeckError::BigNumberCapExceeded {
                count: tally.big,
                threshold: PuzzleConfig::BIG_NUMBER_THRESHOLD,
                max: PuzzleConfig::MAX_BIG_TILES,
            });
        }
        Ok(())
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Looks a tile up by its label.
    pub fn by_label(&self, label: char) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.label == label)
    }
}

impl TryFrom<Vec<Tile>> for Deck {
    type Error = DeckError;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<Deck> for Vec<Tile> {
    fn from(deck: Deck) -> Self {
        deck.tiles.to_vec()
    }
}

impl AsRef<[Tile]> for Deck {
    fn as_ref(&self) -> &[Tile] {
        &self.tiles
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Tile;
    type IntoIter = core::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, tile) in self.tiles.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
