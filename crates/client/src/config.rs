//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Where the client finds its content and writes its save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Map file name inside `data_dir`.
    pub map_file: String,
    pub save_path: PathBuf,
    /// Overrides the seed from `config.toml`.
    pub seed: Option<u64>,
    /// Log directory name; generated from the clock when unset.
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            map_file: "map.json".to_owned(),
            save_path: PathBuf::from("JSON").join("save.json"),
            seed: None,
            session_id: None,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_DATA_DIR` - Content directory (default: `data`)
    /// - `MAZE_MAP` - Map file inside the content directory (default: `map.json`)
    /// - `MAZE_SAVE_PATH` - Save file location (default: `JSON/save.json`)
    /// - `MAZE_SEED` - Hazard placement seed
    /// - `MAZE_SESSION_ID` - Session name used for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("MAZE_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(map) = read_env::<String>("MAZE_MAP") {
            config.map_file = map;
        }
        if let Some(path) = read_env::<PathBuf>("MAZE_SAVE_PATH") {
            config.save_path = path;
        }
        config.seed = read_env("MAZE_SEED");
        config.session_id = read_env::<String>("MAZE_SESSION_ID").filter(|id| !id.is_empty());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
