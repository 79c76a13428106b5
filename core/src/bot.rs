// SPDX-License-Identifier: MIT OR Apache-2.0

//! Player backends and the greedy bot
//!
//! The bot looks exactly one move ahead: every legal cell is simulated through
//! [`apply_move`] and the resulting board is scored by slot margin.

use crate::{board::Board, engine::apply_move, outcome::tally, Color, GameState};

/// Player backend trait for automated players
pub trait PlayerBackend {
    /// Get the next cell to play, or `None` if there is nothing to play
    fn next_move(&mut self, state: &GameState) -> Option<usize>;
}

/// A move picked by [`choose_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMove {
    /// Cell to play
    pub index: usize,
    /// Own slots minus opposing slots after the move
    pub score: isize,
    /// The move completes its cell and sets off a chain reaction
    pub triggers_chain: bool,
    /// Neighbor cells the chain converts
    pub converted: usize,
    /// Explanation for display
    pub rationale: String,
}

/// Pick the legal move with the highest slot margin for `bot_color`.
///
/// Ties go to the lowest index. Returns `None` only when no cell has an
/// empty slot.
pub fn choose_move(board: &Board, bot_color: Color) -> Option<BotMove> {
    let _span = tracing::debug_span!("bot.choose_move", color = ?bot_color).entered();
    let mut best: Option<BotMove> = None;

    for index in board.legal_moves() {
        let resolution = match apply_move(board, index, bot_color) {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(index, "Skipping candidate: {}", err);
                continue;
            }
        };

        let score = tally(&resolution.board).margin(bot_color);
        tracing::trace!(index, score, completed = resolution.completed, "Scored candidate");

        if best.as_ref().map_or(true, |current| score > current.score) {
            best = Some(BotMove {
                index,
                score,
                triggers_chain: resolution.completed,
                converted: resolution.converted(),
                rationale: String::new(),
            });
        }
    }

    let mut chosen = best?;
    chosen.rationale = if chosen.triggers_chain {
        format!(
            "Bot chooses cell {} to trigger a chain reaction and maximize {} slots (score: {}).",
            chosen.index,
            bot_color.name().to_lowercase(),
            chosen.score
        )
    } else {
        format!(
            "Bot chooses cell {} to maximize {} slots (score: {}).",
            chosen.index,
            bot_color.name().to_lowercase(),
            chosen.score
        )
    };
    tracing::debug!(index = chosen.index, score = chosen.score, "{}", chosen.rationale);
    Some(chosen)
}

/// Backend that plays [`choose_move`] for a fixed color
#[derive(Debug, Clone)]
pub struct GreedyBot {
    color: Color,
    last: Option<BotMove>,
}

impl GreedyBot {
    /// Create a bot playing `color`
    pub fn new(color: Color) -> Self {
        Self { color, last: None }
    }

    /// The color this bot plays
    pub fn color(&self) -> Color {
        self.color
    }

    /// The most recent decision, with its rationale
    pub fn last_move(&self) -> Option<&BotMove> {
        self.last.as_ref()
    }
}

impl PlayerBackend for GreedyBot {
    fn next_move(&mut self, state: &GameState) -> Option<usize> {
        if state.is_game_over() {
            self.last = None;
            return None;
        }
        self.last = choose_move(state.board(), self.color);
        self.last.as_ref().map(|chosen| chosen.index)
    }
}
