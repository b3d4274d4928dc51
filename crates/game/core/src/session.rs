//! Session controller.
//!
//! A [`Session`] owns the game state for one play-through and drives rounds
//! until a hero wins or the roster is empty.

use crate::config::GameConfig;
use crate::engine::{EngineError, GameEngine};
use crate::env::{GameEnv, PcgRng, RngOracle};
use crate::event::{EventSink, GameEvent};
use crate::provider::ActionProvider;
use crate::state::{GameState, GameStatus, HeroId, Item, Maze, MazeError, Roster};

/// How a finished session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { hero: HeroId, rounds: u32 },
    AllEliminated { rounds: u32 },
}

pub struct Session {
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    state: GameState,
}

impl Session {
    /// Builds a session from a loaded maze, its free items and a prepared
    /// roster.
    ///
    /// Fails when the maze cannot host the configured number of hazards or
    /// when the start position lies outside the grid.
    pub fn new(
        config: GameConfig,
        maze: Maze,
        items: Vec<Item>,
        roster: Roster,
    ) -> Result<Self, MazeError> {
        let available = maze.passage_count();
        if available < config.hazard_count {
            return Err(MazeError::NotEnoughPassages {
                required: config.hazard_count,
                available,
            });
        }
        if !maze.contains(config.start_position) {
            return Err(MazeError::StartOutOfBounds(config.start_position));
        }

        tracing::info!(
            width = maze.width(),
            height = maze.height(),
            heroes = roster.len(),
            items = items.len(),
            seed = config.seed,
            "session created"
        );

        let state = GameState::with_seed(config.seed, maze, roster, items);
        Ok(Self {
            config,
            rng: Box::new(PcgRng),
            state,
        })
    }

    /// Replaces the hazard placement oracle.
    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Copy of the current state, for persistence.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Terminal outcome, if the session is over.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        let rounds = self.state.turn.round;
        match self.state.turn.status {
            GameStatus::Won(hero) => Some(SessionOutcome::Won { hero, rounds }),
            GameStatus::Ongoing if self.state.roster.is_empty() => {
                Some(SessionOutcome::AllEliminated { rounds })
            }
            GameStatus::Ongoing => None,
        }
    }

    /// Plays a single round.
    pub fn play_round(
        &mut self,
        provider: &mut dyn ActionProvider,
        events: &mut dyn EventSink,
    ) -> Result<(), EngineError> {
        let env = GameEnv::new(&self.config, self.rng.as_ref());
        GameEngine::new(&mut self.state).run_round(env, provider, events)
    }

    /// Plays rounds until the session reaches a terminal outcome.
    pub fn run(
        &mut self,
        provider: &mut dyn ActionProvider,
        events: &mut dyn EventSink,
    ) -> Result<SessionOutcome, EngineError> {
        loop {
            if let Some(outcome) = self.outcome() {
                self.report_outcome(&outcome, events);
                return Ok(outcome);
            }
            self.play_round(provider, events)?;
        }
    }

    fn report_outcome(&self, outcome: &SessionOutcome, events: &mut dyn EventSink) {
        match *outcome {
            SessionOutcome::Won { hero, rounds } => {
                let name = self
                    .state
                    .roster
                    .get(hero)
                    .map(|hero| hero.name.clone())
                    .unwrap_or_default();
                tracing::info!(hero = %name, rounds, "game won");
                events.emit(GameEvent::GameWon { hero: name, rounds });
            }
            SessionOutcome::AllEliminated { rounds } => {
                tracing::info!(rounds, "all heroes eliminated");
                events.emit(GameEvent::AllEliminated { rounds });
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
