//! Authoritative game state representation.
//!
//! This module owns the maze grid, the hero roster and the free items lying
//! in the maze. Boundary layers read this state but mutate it exclusively
//! through the engine.
mod error;
pub mod types;

pub use error::{MazeError, RosterError};
pub use types::{
    Cell, CellKind, Direction, GameStatus, Hero, HeroId, Item, Maze, Position, Roster, RoundState,
};

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Base seed for hazard placement, combined with the round number.
    pub game_seed: u64,
    pub turn: RoundState,
    pub maze: Maze,
    pub roster: Roster,
    /// Items lying in the maze, not held by anyone.
    pub items: Vec<Item>,
}

impl GameState {
    pub fn new(maze: Maze, roster: Roster, items: Vec<Item>) -> Self {
        Self {
            game_seed: 0,
            turn: RoundState::new(),
            maze,
            roster,
            items,
        }
    }

    pub fn with_seed(game_seed: u64, maze: Maze, roster: Roster, items: Vec<Item>) -> Self {
        Self {
            game_seed,
            ..Self::new(maze, roster, items)
        }
    }

    pub fn is_won(&self) -> bool {
        self.turn.is_won()
    }

    /// True once a hero won or every hero has been removed.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.roster.is_empty()
    }

    /// Free items lying on `position`.
    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.position == position)
    }
}
