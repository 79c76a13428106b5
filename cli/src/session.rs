// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn controller: applies commands to a game and persists snapshots

use crate::command::{Command, HELP};
use crate::render;
use anyhow::{Context, Result};
use chain_reaction_core::{
    GameError, GameState, GreedyBot, MoveReport, PlayerBackend, Snapshot, BOT_COLOR,
};
use std::fs;
use std::path::{Path, PathBuf};

/// What the game loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the message and keep reading input
    Continue(String),
    /// Stop the loop
    Quit,
}

/// One running game plus where to save it
pub struct Session {
    state: GameState,
    bot: GreedyBot,
    save_path: Option<PathBuf>,
}

impl Session {
    pub fn new(state: GameState, save_path: Option<PathBuf>) -> Self {
        Self {
            state,
            bot: GreedyBot::new(BOT_COLOR),
            save_path,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board and status line
    pub fn view(&self) -> String {
        format!(
            "{}\n{}",
            render::render_board(self.state.board()),
            render::render_status(&self.state)
        )
    }

    /// Apply a command typed by the human player
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let message = match command {
            Command::Play(index) => match self.state.play(index) {
                Ok(report) => {
                    self.autosave()?;
                    describe(&report)
                }
                Err(err @ GameError::InvalidMove(_)) => {
                    tracing::debug!("Rejected move: {}", err);
                    format!("Cell {} is already full, pick another.", index)
                }
                Err(err) => format!("{}", err),
            },
            Command::Reset => {
                self.state.reset();
                self.autosave()?;
                "New game started.".to_string()
            }
            Command::Bot(enabled) => {
                self.state.set_bot_enabled(enabled);
                self.autosave()?;
                format!("Bot {}.", if enabled { "enabled" } else { "disabled" })
            }
            Command::Save => match &self.save_path {
                Some(path) => {
                    save_snapshot(path, &self.state)?;
                    format!("Saved to {}.", path.display())
                }
                None => "No save file configured (use --save <file>).".to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(message))
    }

    /// Let the bot move if it is its turn. Returns the rationale and the
    /// outcome of its move.
    pub fn run_bot(&mut self) -> Result<Option<String>> {
        if !self.state.is_bot_turn() {
            return Ok(None);
        }

        let Some(index) = self.bot.next_move(&self.state) else {
            return Ok(None);
        };
        let rationale = self
            .bot
            .last_move()
            .map(|chosen| chosen.rationale.clone())
            .unwrap_or_default();

        let report = self
            .state
            .play(index)
            .with_context(|| format!("Bot chose an unplayable cell {}", index))?;
        self.autosave()?;

        Ok(Some(format!("{}\n{}", rationale, describe(&report))))
    }

    fn autosave(&self) -> Result<()> {
        match &self.save_path {
            Some(path) => save_snapshot(path, &self.state),
            None => Ok(()),
        }
    }
}

fn describe(report: &MoveReport) -> String {
    let mut lines = vec![format!("{} played cell {}.", report.color, report.index)];
    if let Some(chain) = render::render_chain(report) {
        lines.push(chain);
    }
    lines.join("\n")
}

/// Write a snapshot; `.cbor` files are binary, anything else is JSON
pub fn save_snapshot(path: &Path, state: &GameState) -> Result<()> {
    let snapshot = Snapshot::from_state(state);
    let bytes = if path.extension().is_some_and(|ext| ext == "cbor") {
        snapshot.to_cbor()?
    } else {
        snapshot.to_json()?.into_bytes()
    };

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
    tracing::debug!("Saved snapshot to {}", path.display());
    Ok(())
}

/// Read a snapshot. A missing or malformed file yields `None`.
pub fn load_snapshot_file(path: &Path) -> Option<GameState> {
    match fs::read(path) {
        Ok(bytes) => chain_reaction_core::load_snapshot(&bytes),
        Err(err) => {
            tracing::info!("No snapshot loaded from {}: {}", path.display(), err);
            None
        }
    }
}
