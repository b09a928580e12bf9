//! Random number source for puzzle generation.
//!
//! Generation never touches an ambient global generator: every operation that
//! samples takes an [`RngOracle`]. Tests and replays seed a [`PcgRng`]; the
//! client seeds one from the clock when no seed is configured.
//!
//! # Determinism
//!
//! Given the same seed, a [`PcgRng`] yields the same stream, so the same seed
//! always produces the same deck and game state.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed random numbers.
pub trait RngOracle {
    /// Next raw 32-bit value of the stream.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[min, max]` inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        // multiply-shift reduction of the 32-bit draw onto the span
        min + ((u64::from(self.next_u32()) * span) >> 32) as u32
    }

    /// Returns true with probability `percent / 100`.
    fn chance(&mut self, percent: u32) -> bool {
        self.range(0, 99) < percent
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64 bits of LCG state, 32-bit output through an xorshift and a
/// state-dependent rotation.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose stream is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state);
        rng.state = rng.state.wrapping_add(mix_seed(seed));
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// Creates a generator seeded from the system clock.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos ^ u64::from(std::process::id()))
    }

    /// Advance the LCG state: `state' = state × multiplier + increment (mod 2^64)`.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// SplitMix64-style avalanche so that nearby seeds start far apart.
fn mix_seed(seed: u64) -> u64 {
    let mut hash = seed.wrapping_add(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^ (hash >> 33)
}
