//! Data-driven content and persistence for the maze heroes game.
//!
//! This crate reads maze layouts (JSON) and rule configuration (TOML) from a
//! data directory and writes the final game state back out as JSON:
//! - Maze layouts with their free items
//! - Game configuration
//! - Save files
//!
//! Content is parsed into `maze-core` types; the core never touches files.

pub mod loaders;
pub mod save;

pub use loaders::{ConfigLoader, ContentFactory, MapData, MapLoader};
pub use save::{FileSaveRepository, SaveData};
