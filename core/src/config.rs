// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grid size validation

use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest supported grid
pub const MIN_GRID_SIZE: u8 = 2;
/// Largest supported grid
pub const MAX_GRID_SIZE: u8 = 10;
/// Grid used when nothing else is configured
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Cells per side of a board, always within `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
///
/// Sizes are validated here, before any board exists; there is no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    /// Validate a raw size
    pub fn new(size: u8) -> Result<Self, GameError> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(GameError::InvalidConfiguration(size))
        }
    }

    /// Cells per side
    pub fn get(self) -> u8 {
        self.0
    }

    /// Total cells on a board of this size
    pub fn cells(self) -> usize {
        self.0 as usize * self.0 as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(GridSize::new(MIN_GRID_SIZE).is_ok());
        assert!(GridSize::new(MAX_GRID_SIZE).is_ok());
        assert_eq!(GridSize::new(0), Err(GameError::InvalidConfiguration(0)));
        assert_eq!(GridSize::new(11), Err(GameError::InvalidConfiguration(11)));
    }

    #[test]
    fn test_default_size() {
        assert_eq!(GridSize::default().get(), 4);
        assert_eq!(GridSize::default().cells(), 16);
        assert_eq!(GridSize::default().to_string(), "4x4");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<GridSize>("7").unwrap().get(), 7);
        assert!(serde_json::from_str::<GridSize>("12").is_err());
    }
}
