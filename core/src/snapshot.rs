// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted game snapshots
//!
//! A [`Snapshot`] is the record handed to an external store (a file, a cookie,
//! a key-value entry). It is encoded as JSON or CBOR. Loading validates every
//! field before a [`GameState`] is built; anything malformed is treated as if
//! no snapshot existed.

use crate::{
    board::{Board, Cell, Slot, SLOTS_PER_CELL},
    config::GridSize,
    outcome::{evaluate, Winner},
    Color, GameError, GameState,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serializable game record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// One entry per cell, row-major
    pub board: Vec<[Slot; SLOTS_PER_CELL]>,
    /// Color to move
    pub current_color: Color,
    /// Cells per side
    pub grid_size: u8,
    /// Result, if the game is over
    pub winner: Option<Winner>,
    /// Whether the bot plays Blue
    #[serde(default)]
    pub bot_enabled: bool,
}

/// Reasons a snapshot is rejected
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON could not be parsed or produced
    #[error("JSON snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR could not be parsed or produced
    #[error("CBOR snapshot error: {0}")]
    Cbor(#[from] serde_cbor::Error),

    /// Grid size outside the supported range
    #[error("Snapshot has an unsupported grid size: {0}")]
    GridSize(#[from] GameError),

    /// Number of cells does not match the grid size
    #[error("Snapshot board has {found} cells, expected {expected}")]
    BoardLength {
        /// size × size
        expected: usize,
        /// cells present in the snapshot
        found: usize,
    },

    /// A full cell mixes both colors
    #[error("Snapshot cell {0} is full but contested")]
    ContestedCell(usize),

    /// Stored winner disagrees with the board
    #[error("Snapshot winner {stored:?} does not match board result {actual:?}")]
    WinnerMismatch {
        /// Winner recorded in the snapshot
        stored: Option<Winner>,
        /// Winner computed from the board
        actual: Option<Winner>,
    },
}

impl Snapshot {
    /// Capture a game state
    pub fn from_state(state: &GameState) -> Self {
        Self {
            board: state.board().cells().iter().map(|cell| *cell.slots()).collect(),
            current_color: state.current(),
            grid_size: state.grid_size().get(),
            winner: state.winner(),
            bot_enabled: state.bot_enabled(),
        }
    }

    /// Validate and rebuild the game state
    pub fn into_state(self) -> Result<GameState, SnapshotError> {
        let size = GridSize::new(self.grid_size)?;
        let found = self.board.len();
        let cells: Vec<Cell> = self.board.into_iter().map(Cell::from_slots).collect();
        let board = Board::from_cells(size, cells).ok_or(SnapshotError::BoardLength {
            expected: size.cells(),
            found,
        })?;

        if let Some(index) = board.cells().iter().position(Cell::is_contested) {
            return Err(SnapshotError::ContestedCell(index));
        }

        let actual = evaluate(&board);
        if actual != self.winner {
            return Err(SnapshotError::WinnerMismatch {
                stored: self.winner,
                actual,
            });
        }

        Ok(GameState::from_parts(
            board,
            self.current_color,
            self.winner,
            self.bot_enabled,
        ))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON without validating the contents
    pub fn from_json(data: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Serialize to CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_cbor::to_vec(self)?)
    }

    /// Deserialize from CBOR without validating the contents
    pub fn from_cbor(data: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_cbor::from_slice(data)?)
    }

    /// Decode JSON when the data starts with `{`, CBOR otherwise
    pub fn decode(data: &[u8]) -> Result<Self, SnapshotError> {
        match data.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Ok(serde_json::from_slice(data)?),
            _ => Self::from_cbor(data),
        }
    }
}

/// Restore a game from stored bytes.
///
/// Returns `None` for empty input and for any snapshot that fails to decode or
/// validate; the failure is logged and nothing is partially applied.
pub fn load_snapshot(data: &[u8]) -> Option<GameState> {
    if data.is_empty() {
        return None;
    }

    match Snapshot::decode(data).and_then(Snapshot::into_state) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!("Ignoring invalid snapshot: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let state = GameState::new(GridSize::new(2).unwrap());
        let json = Snapshot::from_state(&state).to_json().unwrap();
        assert!(json.contains("\"currentColor\":\"red\""));
        assert!(json.contains("\"gridSize\":2"));
        assert!(json.contains("\"botEnabled\":false"));
        assert!(json.contains("\"winner\":null"));
        assert!(json.contains("[null,null,null,null]"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let mut snapshot = Snapshot::from_state(&GameState::new(GridSize::new(3).unwrap()));
        snapshot.board.pop();
        assert!(matches!(
            snapshot.into_state(),
            Err(SnapshotError::BoardLength { expected: 9, found: 8 })
        ));
    }

    #[test]
    fn test_rejects_bad_grid_size() {
        let mut snapshot = Snapshot::from_state(&GameState::new(GridSize::new(2).unwrap()));
        snapshot.grid_size = 1;
        snapshot.board.truncate(1);
        assert!(matches!(snapshot.into_state(), Err(SnapshotError::GridSize(_))));
    }

    #[test]
    fn test_rejects_contested_cell() {
        let mut snapshot = Snapshot::from_state(&GameState::new(GridSize::new(2).unwrap()));
        snapshot.board[2] = [
            Some(Color::First),
            Some(Color::Second),
            Some(Color::First),
            Some(Color::First),
        ];
        assert!(matches!(snapshot.into_state(), Err(SnapshotError::ContestedCell(2))));
    }

    #[test]
    fn test_rejects_premature_winner() {
        let mut snapshot = Snapshot::from_state(&GameState::new(GridSize::new(2).unwrap()));
        snapshot.winner = Some(Winner::Draw);
        assert!(matches!(
            snapshot.into_state(),
            Err(SnapshotError::WinnerMismatch { actual: None, .. })
        ));
    }

    #[test]
    fn test_load_ignores_garbage() {
        assert!(load_snapshot(b"").is_none());
        assert!(load_snapshot(b"{\"board\": 3}").is_none());
        assert!(load_snapshot(&[0xff, 0x00, 0x13]).is_none());
    }

    #[test]
    fn test_rejects_unknown_slot_value() {
        let json = r#"{"board":[["green",null,null,null],[null,null,null,null],[null,null,null,null],[null,null,null,null]],"currentColor":"red","gridSize":2,"winner":null,"botEnabled":false}"#;
        assert!(Snapshot::from_json(json).is_err());
    }
}
