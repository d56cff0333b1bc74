//! issue-chess binary: one command in, refreshed game state out.
//!
//! Usage: issue-chess --title "move|e2e4" [--pgn ./state/game.pgn] [--stats ./state/stats.json]

use clap::Parser;
use issue_chess::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();
    let transition = issue_chess::run(&config)?;
    tracing::info!(?transition, "Done");

    Ok(())
}
