//! Rules and data types for the maze heroes game.
//!
//! `maze-core` defines the maze grid, the hero roster, the round engine and
//! the session controller. It performs no file or console I/O: actions come in
//! through [`ActionProvider`] and every visible change goes out as a
//! [`GameEvent`]. All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod provider;
pub mod session;
pub mod state;

pub use action::{
    ActionError, ActionTransition, AttackAction, HealAction, HeroAction, MoveAction,
    ParseActionError, PickItemAction,
};
pub use config::GameConfig;
pub use engine::{EngineError, ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{GameEnv, PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use event::{EventSink, GameEvent};
pub use provider::{ActionProvider, ProviderError, ScriptedActionProvider};
pub use session::{Session, SessionOutcome};
pub use state::{
    Cell, CellKind, Direction, GameState, GameStatus, Hero, HeroId, Item, Maze, MazeError,
    Position, Roster, RosterError, RoundState,
};
