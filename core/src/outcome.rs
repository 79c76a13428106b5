// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game-over detection and slot counting

use crate::{board::Board, Color};
use serde::{Deserialize, Serialize};

/// Slot counts across the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotTally {
    /// Slots owned by Red
    pub first: usize,
    /// Slots owned by Blue
    pub second: usize,
    /// Unoccupied slots
    pub empty: usize,
}

impl SlotTally {
    /// Slots owned by `color`
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::First => self.first,
            Color::Second => self.second,
        }
    }

    /// Own slots minus opposing slots, from the point of view of `color`
    pub fn margin(&self, color: Color) -> isize {
        self.of(color) as isize - self.of(color.opposite()) as isize
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// One color owns more slots
    Player(Color),
    /// Both colors own the same number of slots
    Draw,
}

impl Winner {
    /// Human-readable result line, e.g. `Red wins! (9 vs 7)`
    pub fn announce(&self, tally: &SlotTally) -> String {
        match self {
            Winner::Player(color) => format!(
                "{} wins! ({} vs {})",
                color.name(),
                tally.of(*color),
                tally.of(color.opposite())
            ),
            Winner::Draw => format!("It's a tie! ({} vs {})", tally.first, tally.second),
        }
    }
}

/// Count slots per color across the board
pub fn tally(board: &Board) -> SlotTally {
    board
        .cells()
        .iter()
        .flat_map(|cell| cell.slots().iter())
        .fold(SlotTally::default(), |mut acc, slot| {
            match slot {
                Some(Color::First) => acc.first += 1,
                Some(Color::Second) => acc.second += 1,
                None => acc.empty += 1,
            }
            acc
        })
}

/// Determine the winner of a full board.
///
/// Returns `None` while any slot is empty.
pub fn evaluate(board: &Board) -> Option<Winner> {
    let counts = tally(board);
    if counts.empty > 0 {
        return None;
    }

    Some(match counts.first.cmp(&counts.second) {
        std::cmp::Ordering::Greater => Winner::Player(Color::First),
        std::cmp::Ordering::Less => Winner::Player(Color::Second),
        std::cmp::Ordering::Equal => Winner::Draw,
    })
}
