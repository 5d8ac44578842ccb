//! Gridmark - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use gridmark::{Cli, Settings};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    gridmark::init_tracing(&settings)?;
    gridmark::run(&settings)
}
