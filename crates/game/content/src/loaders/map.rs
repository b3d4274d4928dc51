//! Maze layout loader.
//!
//! Reads the JSON map format:
//!
//! ```json
//! {
//!   "game_map": [[{ "x": 0, "y": 0, "cell_type": "wall" }, ...], ...],
//!   "items": [{ "x": 2, "y": 1, "name": "key" }]
//! }
//! ```
//!
//! `items` may be omitted.

use std::path::Path;

use maze_core::{Cell, CellKind, Item, Maze, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One grid cell as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub cell_type: String,
}

impl CellRecord {
    pub fn from_cell(cell: &Cell) -> Self {
        Self {
            x: cell.position.x,
            y: cell.position.y,
            cell_type: cell.kind.to_string(),
        }
    }

    fn into_cell(self) -> LoadResult<Cell> {
        let position = Position::new(self.x, self.y);
        let kind: CellKind = self.cell_type.parse().map_err(|_| {
            anyhow::anyhow!("Unknown cell type '{}' at {}", self.cell_type, position)
        })?;
        Ok(Cell::new(position, kind))
    }
}

/// One item as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ItemRecord {
    pub x: i32,
    pub y: i32,
    pub name: String,
}

impl ItemRecord {
    pub fn from_item(item: &Item) -> Self {
        Self {
            x: item.position.x,
            y: item.position.y,
            name: item.name.clone(),
        }
    }

    pub fn into_item(self) -> Item {
        Item::new(self.name, Position::new(self.x, self.y))
    }
}

/// Map file structure for JSON files.
#[derive(Debug, Clone, Deserialize)]
struct MapFile {
    game_map: Vec<Vec<CellRecord>>,
    #[serde(default)]
    items: Vec<ItemRecord>,
}

/// A parsed maze together with the items lying in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub maze: Maze,
    pub items: Vec<Item>,
}

/// Loader for maze layouts from JSON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a maze layout from a JSON file.
    pub fn load(path: &Path) -> LoadResult<MapData> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    /// Parse a maze layout from JSON text.
    pub fn parse(content: &str) -> LoadResult<MapData> {
        let data: MapFile = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map JSON: {}", e))?;

        let rows = cells_from_records(data.game_map)?;
        let maze =
            Maze::from_rows(rows).map_err(|e| anyhow::anyhow!("Invalid maze layout: {}", e))?;

        let items: Vec<Item> = data.items.into_iter().map(ItemRecord::into_item).collect();
        for item in items.iter().filter(|item| !maze.contains(item.position)) {
            tracing::warn!(item = %item.name, position = %item.position, "item lies outside the maze");
        }

        tracing::debug!(
            width = maze.width(),
            height = maze.height(),
            items = items.len(),
            "map parsed"
        );

        Ok(MapData { maze, items })
    }
}

pub(crate) fn cells_from_records(rows: Vec<Vec<CellRecord>>) -> LoadResult<Vec<Vec<Cell>>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(CellRecord::into_cell).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_MAP: &str = r#"{
        "game_map": [
            [{"x": 0, "y": 0, "cell_type": "passage"}, {"x": 1, "y": 0, "cell_type": "Wall"}],
            [{"x": 0, "y": 1, "cell_type": "extra_passage"}, {"x": 1, "y": 1, "cell_type": "end"}]
        ],
        "items": [{"x": 0, "y": 1, "name": "key"}]
    }"#;

    #[test]
    fn parses_cells_and_items() {
        let data = MapLoader::parse(SMALL_MAP).expect("valid map");

        assert_eq!(data.maze.width(), 2);
        assert_eq!(data.maze.height(), 2);
        assert_eq!(data.maze.cell_kind_at(Position::new(1, 0)), CellKind::Wall);
        assert_eq!(
            data.maze.cell_kind_at(Position::new(0, 1)),
            CellKind::ExtraPassage
        );
        assert_eq!(data.items, vec![Item::new("key", Position::new(0, 1))]);
    }

    #[test]
    fn items_default_to_empty() {
        let data = MapLoader::parse(r#"{"game_map": [[{"x": 0, "y": 0, "cell_type": "passage"}]]}"#)
            .expect("valid map");
        assert!(data.items.is_empty());
    }

    #[test]
    fn rejects_unknown_cell_types() {
        let error = MapLoader::parse(r#"{"game_map": [[{"x": 0, "y": 0, "cell_type": "lava"}]]}"#)
            .unwrap_err();
        assert!(error.to_string().contains("lava"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let ragged = r#"{"game_map": [
            [{"x": 0, "y": 0, "cell_type": "passage"}, {"x": 1, "y": 0, "cell_type": "passage"}],
            [{"x": 0, "y": 1, "cell_type": "passage"}]
        ]}"#;
        let error = MapLoader::parse(ragged).unwrap_err();
        assert!(error.to_string().contains("Invalid maze layout"));
    }

    #[test]
    fn rejects_empty_grids() {
        assert!(MapLoader::parse(r#"{"game_map": []}"#).is_err());
    }
}
