//! State management errors.
//!
//! Errors raised while building or mutating the maze and the hero roster.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Errors raised by maze loading and hazard cycling.
///
/// Every variant describes a map or configuration problem that must be fixed
/// before a session can run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell stored at {expected} declares position {found}")]
    MisplacedCell { expected: Position, found: Position },

    #[error("{required} hazard cells requested but only {available} passage cells exist")]
    NotEnoughPassages { required: usize, available: usize },

    #[error("{0} hazard cells are still burning")]
    HazardsStillBurning(usize),

    #[error("start position {0} lies outside the maze")]
    StartOutOfBounds(Position),
}

impl GameError for MazeError {
    fn severity(&self) -> ErrorSeverity {
        use MazeError::*;
        match self {
            Empty
            | RaggedRow { .. }
            | MisplacedCell { .. }
            | NotEnoughPassages { .. }
            | StartOutOfBounds(_) => ErrorSeverity::Validation,

            // The engine always extinguishes before igniting again.
            HazardsStillBurning(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MazeError::*;
        match self {
            Empty => "MAZE_EMPTY",
            RaggedRow { .. } => "MAZE_RAGGED_ROW",
            MisplacedCell { .. } => "MAZE_MISPLACED_CELL",
            NotEnoughPassages { .. } => "MAZE_NOT_ENOUGH_PASSAGES",
            HazardsStillBurning(_) => "MAZE_HAZARDS_STILL_BURNING",
            StartOutOfBounds(_) => "MAZE_START_OUT_OF_BOUNDS",
        }
    }
}

/// Errors raised while assembling the hero roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("a hero named '{0}' already exists")]
    DuplicateName(String),

    #[error("hero name must not be empty")]
    EmptyName,
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RosterError::DuplicateName(_) => "ROSTER_DUPLICATE_NAME",
            RosterError::EmptyName => "ROSTER_EMPTY_NAME",
        }
    }
}
