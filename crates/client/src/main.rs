//! Maze heroes console client.
//!
//! Composition root: reads the environment, installs logging, loads the map
//! and rules from the data directory, asks for the roster, plays the session
//! and saves the final state.
//!
//! ```bash
//! MAZE_SEED=42 cargo run -p maze-client
//! ```

use std::io;

use anyhow::Result;
use maze_client::{ClientConfig, Console, ConsoleReporter, logging};
use maze_content::{ContentFactory, FileSaveRepository};
use maze_core::Session;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    tracing::info!("Starting maze client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let factory = ContentFactory::new(&config.data_dir);
    let mut game_config = factory.load_config()?;
    if let Some(seed) = config.seed {
        game_config.seed = seed;
    }
    let map = factory.load_map(&config.map_file)?;
    tracing::info!(
        map = %config.map_file,
        hazards = game_config.hazard_count,
        seed = game_config.seed,
        "content loaded"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let roster = console.read_roster(&game_config)?;

    let mut session = Session::new(game_config, map.maze, map.items, roster)?;
    let mut reporter = ConsoleReporter::new(io::stdout());
    let outcome = session.run(&mut console, &mut reporter)?;
    tracing::info!(?outcome, "session finished");

    let repository = FileSaveRepository::new(&config.save_path);
    repository.save(&session.snapshot())?;
    println!("Game saved to {}", repository.path().display());

    Ok(())
}
