//! Items lying in the maze or carried in a hero's inventory.

use super::Position;

/// A named item. While carried, its position is stale and gets overwritten
/// when the carrier drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub position: Position,
}

impl Item {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
