// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chain Reaction CLI - play in the terminal
//!
//! Reads commands from stdin, renders the board as text and, when enabled,
//! lets the greedy bot answer every Red move.

use anyhow::{Context, Result};
use chain_reaction_cli::{
    config::{self, CliConfig},
    parse_command,
    session::{self, Flow, Session},
};
use chain_reaction_core::{GameState, GridSize};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "chain-reaction",
    about = "Chain Reaction board game for the terminal",
    version
)]
struct Args {
    /// Grid size (2-10); overrides the config file
    #[clap(short, long)]
    size: Option<u8>,

    /// Let the bot play Blue
    #[clap(long)]
    bot: bool,

    /// Resume from a snapshot file
    #[clap(long)]
    load: Option<PathBuf>,

    /// Write a snapshot to this file after every move
    #[clap(long)]
    save: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[clap(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    match path {
        Some(path) => config::load_config(path),
        None => match config::get_config_path().and_then(|path| config::load_config(&path)) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Using default config: {:#}", e);
                Ok(CliConfig::default())
            }
        },
    }
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = resolve_config(args.config.as_ref())?;

    // Validate grid size before any board exists
    let grid_size = match args.size {
        Some(size) => GridSize::new(size).context("Invalid --size")?,
        None => config.grid_size,
    };
    let save_path = args.save.or(config.save_path);

    let mut state = args
        .load
        .as_deref()
        .and_then(session::load_snapshot_file)
        .unwrap_or_else(|| GameState::new(grid_size));
    if args.bot || config.bot_enabled {
        state.set_bot_enabled(true);
    }
    tracing::info!(size = %state.grid_size(), bot = state.bot_enabled(), "Starting game");

    run_game_loop(Session::new(state, save_path)).await
}

/// Run the main game loop
async fn run_game_loop(mut session: Session) -> Result<()> {
    println!("{}", session.view());

    let mut stdin_lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        if let Some(message) = session.run_bot()? {
            println!("\n{}\n\n{}", message, session.view());
            continue;
        }

        if session.state().is_game_over() {
            println!("\nGame over! Type 'reset' for a new game or 'quit' to leave.");
        } else {
            println!("\n{} to move. Enter a cell, or 'help':", session.state().current());
        }

        tokio::select! {
            // Handle Ctrl+C gracefully
            _ = signal::ctrl_c() => {
                println!("\nReceived Ctrl+C, shutting down gracefully...");
                break;
            }

            result = stdin_lines.next_line() => {
                let line = match result {
                    Ok(Some(line)) => line,
                    Ok(None) => break, // EOF
                    Err(e) => {
                        eprintln!("Error reading input: {}", e);
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match parse_command(&line, session.state().board()) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };

                match session.execute(command)? {
                    Flow::Continue(message) => println!("\n{}\n\n{}", message, session.view()),
                    Flow::Quit => break,
                }
            }
        }
    }

    Ok(())
}
