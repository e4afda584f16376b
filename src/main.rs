//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geoconsole` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use geoconsole::initialization::init_logger_with;
use geoconsole::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Lookup failures are non-fatal and already surfaced inline; only
    // initialization errors exit nonzero
    match run(config).await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("geoconsole error: {:#}", e);
            process::exit(1);
        }
    }
}
