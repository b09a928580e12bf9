//! Equation Pyramid client binary.
//!
//! # Examples
//!
//! ```bash
//! # Reproducible puzzle with its solutions
//! cargo run -p pyramid-client -- generate --seed 7 --reveal
//!
//! # Evaluate a pick of three tiles
//! cargo run -p pyramid-client -- eval +10 /3 +2
//! ```

use anyhow::Result;
use clap::Parser;
use pyramid_client::cli::{Cli, Command};
use pyramid_client::{Client, ClientConfig, eval_tiles, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging()?;

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    let output = match cli.command {
        Command::Generate { seed, json, reveal } => {
            let mut client = Client::new(config.with_seed_override(seed));
            tracing::debug!(seed = ?client.seed(), "generating game state");
            client.generate(json, reveal)?
        }
        Command::Eval { tiles } => eval_tiles(&tiles)?,
        Command::Enumerate { seed, all } => {
            let mut client = Client::new(config.with_seed_override(seed));
            tracing::debug!(seed = ?client.seed(), "enumerating deck");
            client.enumerate(all)
        }
    };

    print!("{output}");
    Ok(())
}
