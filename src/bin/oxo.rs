//! oxo CLI - console Tic-Tac-Toe against a heuristic machine player

use std::io;

use anyhow::Result;
use clap::Parser;
use oxo::Session;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Console Tic-Tac-Toe against a heuristic machine player", long_about = None)]
struct Cli {
    /// Seed for the random number generator (reproducible games)
    #[arg(long)]
    seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let mut session = Session::new(build_rng(cli.seed), stdin, stdout);
    session.play()?;
    Ok(())
}
