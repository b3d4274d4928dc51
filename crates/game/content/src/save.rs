//! JSON save files.
//!
//! The final game state is written as one document:
//!
//! ```json
//! {
//!   "game_map": [[{ "x": 0, "y": 0, "cell_type": "wall" }, ...], ...],
//!   "heroes": [{ "x": 1, "y": 3, "object_type": "hero", "name": "Arthur",
//!                "health": 4, "medical_kits": 2, "inventory": [] }],
//!   "items": [{ "x": 2, "y": 1, "name": "key" }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use maze_core::{GameState, Hero, HeroId, Item, Maze, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{CellRecord, ItemRecord, LoadResult, cells_from_records, read_file};

const HERO_OBJECT_TYPE: &str = "hero";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HeroRecord {
    x: i32,
    y: i32,
    object_type: String,
    name: String,
    health: i32,
    medical_kits: u32,
    #[serde(default)]
    inventory: Vec<ItemRecord>,
}

impl HeroRecord {
    fn from_hero(hero: &Hero) -> Self {
        Self {
            x: hero.position.x,
            y: hero.position.y,
            object_type: HERO_OBJECT_TYPE.to_owned(),
            name: hero.name.clone(),
            health: hero.health,
            medical_kits: hero.medical_kits,
            inventory: hero.inventory.iter().map(ItemRecord::from_item).collect(),
        }
    }

    fn into_hero(self, id: HeroId) -> Hero {
        let mut hero = Hero::new(
            id,
            self.name,
            Position::new(self.x, self.y),
            self.health,
            self.medical_kits,
        );
        hero.inventory = self
            .inventory
            .into_iter()
            .map(ItemRecord::into_item)
            .collect();
        hero
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveFile {
    game_map: Vec<Vec<CellRecord>>,
    heroes: Vec<HeroRecord>,
    items: Vec<ItemRecord>,
}

impl SaveFile {
    fn from_state(state: &GameState) -> Self {
        Self {
            game_map: state
                .maze
                .rows()
                .iter()
                .map(|row| row.iter().map(CellRecord::from_cell).collect())
                .collect(),
            heroes: state.roster.iter().map(HeroRecord::from_hero).collect(),
            items: state.items.iter().map(ItemRecord::from_item).collect(),
        }
    }
}

/// Contents of a save file read back from disk.
///
/// Heroes get fresh ids in file order; retreat tracking is not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    pub maze: Maze,
    pub heroes: Vec<Hero>,
    pub items: Vec<Item>,
}

/// Single-file save slot.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written save behind.
pub struct FileSaveRepository {
    path: PathBuf,
}

impl FileSaveRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `state` to the save file, creating parent directories as needed.
    pub fn save(&self, state: &GameState) -> LoadResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create save directory {}: {}", parent.display(), e)
            })?;
        }

        let json = serde_json::to_string_pretty(&SaveFile::from_state(state))
            .map_err(|e| anyhow::anyhow!("Failed to serialize save: {}", e))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", temp_path.display(), e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| anyhow::anyhow!("Failed to replace {}: {}", self.path.display(), e))?;

        tracing::debug!("Saved game to {}", self.path.display());

        Ok(())
    }

    /// Read the save file back, or `None` when nothing has been saved yet.
    pub fn load(&self) -> LoadResult<Option<SaveData>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = read_file(&self.path)?;
        let file: SaveFile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse save {}: {}", self.path.display(), e))?;

        let maze = Maze::from_rows(cells_from_records(file.game_map)?)
            .map_err(|e| anyhow::anyhow!("Invalid maze in save: {}", e))?;
        let heroes = file
            .heroes
            .into_iter()
            .zip(0..)
            .map(|(record, index)| record.into_hero(HeroId(index)))
            .collect();
        let items = file.items.into_iter().map(ItemRecord::into_item).collect();

        tracing::debug!("Loaded game from {}", self.path.display());

        Ok(Some(SaveData {
            maze,
            heroes,
            items,
        }))
    }
}
