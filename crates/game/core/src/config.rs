use core::ops::RangeInclusive;

/// Puzzle generation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleConfig {
    /// Sampling attempts per deck position before the generator forces a
    /// small additive tile.
    pub max_sampling_attempts: u32,
    /// Full generate/enumerate/select passes before the final fallback pass.
    pub max_generation_attempts: u32,
    /// Fewer valid equations than this triggers a retry.
    pub min_valid_equations: usize,
    /// Chance (0-100) that an unconstrained sample draws a big number.
    pub big_number_chance: u32,
}

impl PuzzleConfig {
    // ===== fixed rules shared with every frontend =====
    /// Tiles per deck. Labels run from `A` to `J`.
    pub const DECK_SIZE: usize = 10;
    /// Tiles per equation.
    pub const EQUATION_ARITY: usize = 3;
    /// Result reported by the game-valid evaluator for unusable equations.
    pub const INVALID_RESULT: i64 = -1;
    /// Numbers at or above this count as big-number tiles.
    pub const BIG_NUMBER_THRESHOLD: u32 = 10;
    pub const MAX_MULTIPLY_TILES: usize = 2;
    pub const MAX_DIVIDE_TILES: usize = 2;
    pub const MAX_BIG_TILES: usize = 3;
    /// Range for small numbers.
    pub const SMALL_NUMBERS: RangeInclusive<u32> = 1..=9;
    /// Range for big numbers.
    pub const BIG_NUMBERS: RangeInclusive<u32> = 10..=15;
    /// A target is only chosen when its solution count lies in this band.
    pub const TARGET_SOLUTIONS: RangeInclusive<usize> = 2..=4;
    /// Equations outside this range never become targets.
    pub const TARGET_RESULTS: RangeInclusive<u32> = 1..=15;
    /// Target of the degenerate empty-solution state.
    pub const FALLBACK_TARGET: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: u32 = 50;
    pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 10;
    pub const DEFAULT_MIN_VALID_EQUATIONS: usize = 2;
    pub const DEFAULT_BIG_NUMBER_CHANCE: u32 = 30;

    pub fn new() -> Self {
        Self {
            max_sampling_attempts: Self::DEFAULT_MAX_SAMPLING_ATTEMPTS,
            max_generation_attempts: Self::DEFAULT_MAX_GENERATION_ATTEMPTS,
            min_valid_equations: Self::DEFAULT_MIN_VALID_EQUATIONS,
            big_number_chance: Self::DEFAULT_BIG_NUMBER_CHANCE,
        }
    }

    #[must_use]
    pub fn with_max_sampling_attempts(mut self, attempts: u32) -> Self {
        self.max_sampling_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_big_number_chance(mut self, percent: u32) -> Self {
        self.big_number_chance = percent.min(100);
        self
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new()
    }
}
