//! Command-line interface definition.
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pyramid", about = "Equation Pyramid puzzle generator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a deck and a target number
    Generate {
        /// Seed for reproducible puzzles (overrides PYRAMID_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,

        /// Also print every solution
        #[arg(long)]
        reveal: bool,
    },

    /// Evaluate three tiles, e.g. `pyramid eval +5 +3 '*2'`
    Eval {
        /// Tiles in equation order (`+5`, `C:*2`, ...)
        #[arg(num_args = 3, allow_hyphen_values = true, required = true)]
        tiles: Vec<String>,
    },

    /// Generate a deck and list the equations it allows
    Enumerate {
        /// Seed for reproducible decks (overrides PYRAMID_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Include invalid and out-of-range equations
        #[arg(long)]
        all: bool,
    },
}
