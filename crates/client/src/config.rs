//! Client configuration loaded from the environment.
use std::env;

use pyramid_core::PuzzleConfig;

/// Settings for one client invocation.
///
/// Environment values are read first; command-line flags override them.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Seed for the puzzle generator. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub puzzle: PuzzleConfig,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PYRAMID_SEED` - Generator seed (default: clock-based)
    /// - `PYRAMID_MAX_ATTEMPTS` - Deck generations before the final fallback (default: 10)
    /// - `PYRAMID_SAMPLING_ATTEMPTS` - Tile samples per position (default: 50)
    /// - `PYRAMID_BIG_NUMBER_CHANCE` - Percent chance of a 10-15 tile (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u64>().ok());
        let mut config = Self {
            seed: read("PYRAMID_SEED"),
            ..Self::default()
        };

        if let Some(attempts) = read("PYRAMID_MAX_ATTEMPTS") {
            config.puzzle = config
                .puzzle
                .with_max_generation_attempts(saturate(attempts));
        }
        if let Some(attempts) = read("PYRAMID_SAMPLING_ATTEMPTS") {
            config.puzzle = config
                .puzzle
                .with_max_sampling_attempts(saturate(attempts));
        }
        if let Some(percent) = read("PYRAMID_BIG_NUMBER_CHANCE") {
            config.puzzle = config.puzzle.with_big_number_chance(saturate(percent));
        }

        config
    }

    /// Replaces the seed when one was given on the command line.
    #[must_use]
    pub fn with_seed_override(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
