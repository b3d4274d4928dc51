pub mod common;
pub mod hero;
pub mod item;
pub mod roster;
pub mod turn;
pub mod world;

// Re-export common types
pub use common::{Direction, HeroId, Position};

// Re-export entity types
pub use hero::Hero;
pub use item::Item;
pub use roster::Roster;

// Re-export round bookkeeping
pub use turn::{GameStatus, RoundState};

// Re-export world types
pub use world::{Cell, CellKind, Maze};
