//! Binary crate for the `skycast` terminal forecast viewer.
//!
//! This crate focuses on:
//! - The clap argument surface (the session itself takes no arguments)
//! - The interactive permission prompt and denial acknowledgment
//! - Rendering the view states as terminal output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod location;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
