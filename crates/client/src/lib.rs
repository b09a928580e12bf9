//! Command-line client for the Equation Pyramid engine.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment + flags)
//!   ├─→ logging (tracing subscriber on stderr)
//!   └─→ Client
//!         └─→ PuzzleGenerator<PcgRng> (pyramid-core)
//! ```
//!
//! The client owns no game rules. It seeds the generator, calls the engine,
//! and renders what comes back.

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;

use anyhow::{Context, Result};
use pyramid_core::{
    GameState, PcgRng, PuzzleConfig, PuzzleGenerator, ResultBuckets, Tile, enumerate,
    enumerate_in_range, evaluate, evaluate_raw,
};

pub use config::ClientConfig;

/// Generator wrapper used by every command.
pub struct Client {
    seed: Option<u64>,
    generator: PuzzleGenerator<PcgRng>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        let rng = config.seed.map_or_else(PcgRng::from_entropy, PcgRng::new);
        Self {
            seed: config.seed,
            generator: PuzzleGenerator::with_config(config.puzzle, rng),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs `generate`: a full game state, as text or JSON.
    ///
    /// # Errors
    ///
    /// Fails only if JSON encoding fails.
    pub fn generate(&mut self, json: bool, reveal: bool) -> Result<String> {
        let state = self.generator.generate_game_state();
        tracing::info!(
            target_number = state.target_number,
            solutions = state.solution_count(),
            "game state generated"
        );

        if json {
            return render_json(&state);
        }
        Ok(render::game_state(&state, reveal))
    }

    /// Runs `enumerate`: a fresh deck with its equations and per-result counts.
    pub fn enumerate(&mut self, all: bool) -> String {
        let deck = self.generator.generate_deck();
        let in_range = enumerate_in_range(deck.tiles(), PuzzleConfig::TARGET_RESULTS);

        let mut out = format!("Tiles: {}\n", render::deck(&deck));
        if all {
            let every = enumerate(deck.tiles());
            out.push_str(&format!("Equations ({}):\n", every.len()));
            out.push_str(&render::equations(&every));
        } else {
            out.push_str(&format!("Equations with results in 1-15 ({}):\n", in_range.len()));
            out.push_str(&render::equations(&in_range));
        }

        let buckets = ResultBuckets::from_equations(in_range);
        out.push_str("Solutions per result:\n");
        out.push_str(&render::bucket_summary(&buckets));
        out
    }
}

/// Runs `eval`: game-valid and raw results for three tiles.
///
/// # Errors
///
/// Returns an error when a tile does not parse.
pub fn eval_tiles(texts: &[String]) -> Result<String> {
    let [first, second, third] = texts else {
        anyhow::bail!("expected exactly 3 tiles, got {}", texts.len());
    };

    let tiles = [
        Tile::parse_at(0, first).with_context(|| format!("tile 1 ('{first}')"))?,
        Tile::parse_at(1, second).with_context(|| format!("tile 2 ('{second}')"))?,
        Tile::parse_at(2, third).with_context(|| format!("tile 3 ('{third}')"))?,
    ];

    let result = evaluate(&tiles);
    let shown = if result == PuzzleConfig::INVALID_RESULT {
        "invalid".to_string()
    } else {
        result.to_string()
    };
    Ok(format!(
        "{} {} {} {} {}\n  game result: {shown}\n  raw result:  {}\n",
        tiles[0].number,
        tiles[1].operator,
        tiles[1].number,
        tiles[2].operator,
        tiles[2].number,
        evaluate_raw(&tiles)
    ))
}

fn render_json(state: &GameState) -> Result<String> {
    serde_json::to_string_pretty(state).context("failed to encode game state as JSON")
}
