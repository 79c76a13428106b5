// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chain Reaction Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Board representation (cells of four slots) and grid topology
//! - Move resolution with cascading chain reactions
//! - Outcome evaluation and a greedy one-ply bot
//! - Snapshot serialization (JSON and CBOR) for external stores

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod bot;
pub mod config;
pub mod engine;
pub mod outcome;
pub mod snapshot;
pub mod topology;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use board::{Board, Cell, Slot, SLOTS_PER_CELL};
pub use bot::{choose_move, BotMove, GreedyBot, PlayerBackend};
pub use config::GridSize;
pub use engine::{apply_move, ChainStep, Resolution};
pub use outcome::{evaluate, tally, SlotTally, Winner};
pub use snapshot::{load_snapshot, Snapshot, SnapshotError};
pub use topology::neighbors_of;

/// Color played by the automated opponent.
pub const BOT_COLOR: Color = Color::Second;

/// Player color. `First` is shown as red, `Second` as blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Red player (always moves first)
    #[serde(rename = "red")]
    First,
    /// Blue player
    #[serde(rename = "blue")]
    Second,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// Display name used in announcements
    pub fn name(&self) -> &'static str {
        match self {
            Color::First => "Red",
            Color::Second => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened when a move was accepted by [`GameState::play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The cell that was played
    pub index: usize,
    /// The color that played it
    pub color: Color,
    /// Originating cell followed by every cell converted by the chain
    pub steps: Vec<ChainStep>,
    /// Whether the played cell became full
    pub completed: bool,
    /// Set when this move filled the last empty slot
    pub winner: Option<Winner>,
}

impl MoveReport {
    /// Number of neighbor cells converted by the chain reaction
    pub fn converted(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Represents the current state of a game.
///
/// The board is replaced wholesale on every accepted move; the winner is
/// computed once, when the last slot is filled, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Color,
    winner: Option<Winner>,
    bot_enabled: bool,
    moves: Vec<usize>,
}

impl GameState {
    /// Create a new game with the specified grid size. Red moves first.
    pub fn new(size: GridSize) -> Self {
        Self {
            board: Board::new(size),
            current: Color::First,
            winner: None,
            bot_enabled: false,
            moves: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        current: Color,
        winner: Option<Winner>,
        bot_enabled: bool,
    ) -> Self {
        Self {
            board,
            current,
            winner,
            bot_enabled,
            moves: Vec::new(),
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move
    pub fn current(&self) -> Color {
        self.current
    }

    /// The final result, once the board is full
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Grid size of the board
    pub fn grid_size(&self) -> GridSize {
        self.board.grid_size()
    }

    /// Whether the bot plays [`BOT_COLOR`]
    pub fn bot_enabled(&self) -> bool {
        self.bot_enabled
    }

    /// Turn the bot on or off
    pub fn set_bot_enabled(&mut self, enabled: bool) {
        self.bot_enabled = enabled;
    }

    /// Cells played since this state was created or restored
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// True when the bot is enabled and it is the bot's turn
    pub fn is_bot_turn(&self) -> bool {
        self.bot_enabled && self.current == BOT_COLOR && self.winner.is_none()
    }

    /// Play `index` for the color to move.
    ///
    /// On error the state is left exactly as it was and the turn is not
    /// consumed.
    pub fn play(&mut self, index: usize) -> Result<MoveReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }

        let color = self.current;
        let resolution = apply_move(&self.board, index, color)?;
        let winner = evaluate(&resolution.board);

        self.board = resolution.board;
        self.moves.push(index);
        self.current = color.opposite();

        if let Some(result) = winner {
            let counts = tally(&self.board);
            tracing::info!(
                first = counts.first,
                second = counts.second,
                "Game finished: {}",
                result.announce(&counts)
            );
            self.winner = Some(result);
        }

        Ok(MoveReport {
            index,
            color,
            steps: resolution.filled_order,
            completed: resolution.completed,
            winner,
        })
    }

    /// Empty the board keeping its size. Red to move, bot switched off.
    pub fn reset(&mut self) {
        *self = Self::new(self.board.grid_size());
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The cell index is outside the board
    #[error("Invalid coordinate: cell {index} is outside a board of {cells} cells")]
    InvalidCoordinate {
        /// The requested cell
        index: usize,
        /// Number of cells on the board
        cells: usize,
    },

    /// The target cell has no empty slot
    #[error("Invalid move: cell {0} is already full")]
    InvalidMove(usize),

    /// Grid size outside the supported range
    #[error("Invalid configuration: grid size {0} is outside 2..=10")]
    InvalidConfiguration(u8),

    /// A winner has already been decided
    #[error("Game is already over")]
    GameOver,
}
