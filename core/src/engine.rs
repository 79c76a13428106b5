// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move resolution and chain reaction propagation
//!
//! A move fills the first empty slot of a cell. When that fill completes the
//! cell, every slot is forced to the mover's color and the cell starts a chain
//! reaction: full neighbors that are contested or owned by the opponent are
//! converted and propagate in turn, breadth-first from the originating cell.

use crate::{board::Board, topology::neighbors_of, Cell, Color, GameError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One cell touched by a resolution, for presentation layers that animate
/// the chain. Not used by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainStep {
    /// Cell index
    pub index: usize,
    /// Distance in propagation steps from the originating cell
    pub depth: usize,
}

/// Result of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The board after the move and its chain reaction
    pub board: Board,
    /// Originating cell (depth 0) followed by every converted cell in visit order
    pub filled_order: Vec<ChainStep>,
    /// Whether the move filled the last slot of its cell
    pub completed: bool,
}

impl Resolution {
    /// Number of neighbor cells converted by the chain
    pub fn converted(&self) -> usize {
        self.filled_order.len().saturating_sub(1)
    }
}

/// State of a cell just before it is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriorState {
    /// At least one slot was empty
    Open,
    /// Full and owned by one color
    Mono(Color),
    /// Full with both colors present
    Contested,
}

impl PriorState {
    fn of(cell: &Cell) -> Self {
        if !cell.is_full() {
            PriorState::Open
        } else {
            match cell.mono_color() {
                Some(color) => PriorState::Mono(color),
                None => PriorState::Contested,
            }
        }
    }

    /// Whether a cell that is now full and mono-`color` propagates.
    ///
    /// A cell with no prior owner counts as having changed color.
    fn triggers(self, color: Color, forced: bool) -> bool {
        forced || self != PriorState::Mono(color)
    }
}

/// Apply a move for `color` at `index`, returning the resulting board.
///
/// The input board is never modified. Fails with
/// [`GameError::InvalidMove`] if the cell has no empty slot and
/// [`GameError::InvalidCoordinate`] if the index is off the board.
pub fn apply_move(board: &Board, index: usize, color: Color) -> Result<Resolution, GameError> {
    let _span = tracing::trace_span!("engine.apply_move", index, color = ?color).entered();

    let invalid_coordinate = GameError::InvalidCoordinate {
        index,
        cells: board.cell_count(),
    };
    let cell = board.cell(index).ok_or_else(|| invalid_coordinate.clone())?;
    if cell.is_full() {
        tracing::debug!(index, "Cell is already full, rejecting move");
        return Err(GameError::InvalidMove(index));
    }

    let prior = PriorState::of(cell);
    let mut next = board.clone();
    let target = next.cell_mut(index).ok_or(invalid_coordinate)?;
    let slot = target.fill(color).ok_or(GameError::InvalidMove(index))?;
    tracing::debug!(index, slot, color = ?color, "Filled slot");

    let completed = target.is_full();
    if completed {
        target.paint(color);
        tracing::debug!(index, color = ?color, "Last slot filled, cell normalized");
    }

    let mut filled_order = vec![ChainStep { index, depth: 0 }];
    if completed && prior.triggers(color, false) {
        propagate(&mut next, index, color, &mut filled_order);
    }

    Ok(Resolution {
        board: next,
        filled_order,
        completed,
    })
}

/// Breadth-first conversion of full neighbors starting at `origin`.
///
/// Every converted cell becomes mono-`color`, so it is skipped if reached
/// again; each cell is converted at most once per call.
fn propagate(board: &mut Board, origin: usize, color: Color, filled_order: &mut Vec<ChainStep>) {
    let size = board.size();
    let mut queue = VecDeque::from([(origin, 0usize)]);

    while let Some((index, depth)) = queue.pop_front() {
        for neighbor in neighbors_of(index, size) {
            let Some(cell) = board.cell_mut(neighbor) else {
                continue;
            };

            // Chains never cross into cells with empty slots
            if !cell.is_full() || cell.mono_color() == Some(color) {
                continue;
            }

            let prior = PriorState::of(cell);
            cell.paint(color);
            tracing::debug!(
                from = index,
                neighbor,
                depth = depth + 1,
                prior = ?prior,
                "Chain reaction converted cell"
            );
            filled_order.push(ChainStep {
                index: neighbor,
                depth: depth + 1,
            });

            if prior.triggers(color, true) {
                queue.push_back((neighbor, depth + 1));
            }
        }
    }
}
