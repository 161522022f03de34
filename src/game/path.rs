use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    game::grid::are_adjacent,
    models::{CellIndex, BOARD_SIZE},
};

/// Whether a selection is underway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathState {
    Empty,
    InProgress,
}

/// Why a cell could not be added to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    #[error("cell {0} is not on the board")]
    OutOfBounds(CellIndex),
    #[error("cell {0} is already part of the word")]
    AlreadyUsed(CellIndex),
    #[error("cell {index} is not adjacent to cell {last}")]
    NotAdjacent { index: CellIndex, last: CellIndex },
}

/// Tracks the player's in-progress selection of adjacent cells.
///
/// Each accepted cell is consumed until `reset`.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    path: Vec<CellIndex>,
}

impl PathTracker {
    pub fn new() -> Self {
        Self {
            path: Vec::with_capacity(BOARD_SIZE),
        }
    }

    pub fn state(&self) -> PathState {
        if self.path.is_empty() {
            PathState::Empty
        } else {
            PathState::InProgress
        }
    }

    pub fn path(&self) -> &[CellIndex] {
        &self.path
    }

    pub fn is_consumed(&self, index: CellIndex) -> bool {
        self.path.contains(&index)
    }

    /// Try to extend the path with `index`. On rejection the path is unchanged.
    pub fn select_cell(&mut self, index: CellIndex) -> Result<(), MoveRejection> {
        if index >= BOARD_SIZE {
            return Err(MoveRejection::OutOfBounds(index));
        }

        if let Some(&last) = self.path.last() {
            if self.is_consumed(index) {
                return Err(MoveRejection::AlreadyUsed(index));
            }
            if !are_adjacent(last, index) {
                return Err(MoveRejection::NotAdjacent { index, last });
            }
        }

        self.path.push(index);
        Ok(())
    }

    /// Clear the path and release every consumed cell
    pub fn reset(&mut self) {
        self.path.clear();
    }
}
