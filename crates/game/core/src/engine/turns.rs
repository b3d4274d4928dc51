use crate::env::{GameEnv, compute_seed};
use crate::error::GameError;
use crate::event::{EventSink, GameEvent};
use crate::provider::ActionProvider;
use crate::state::{Hero, HeroId};

use super::{EngineError, GameEngine};

/// Context tag mixed into the hazard placement seed.
const IGNITION_CONTEXT: u32 = 0;

/// Round and turn methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Plays one full round: ignite, one turn per hero, extinguish.
    ///
    /// The turn order is the roster order captured when the round starts.
    /// A win ends the round early. Hazards are extinguished even when a turn
    /// fails, so the maze never carries fire into the next round.
    pub fn run_round(
        &mut self,
        env: GameEnv<'_>,
        provider: &mut dyn ActionProvider,
        events: &mut dyn EventSink,
    ) -> Result<(), EngineError> {
        self.state.turn.round += 1;
        let round = self.state.turn.round;
        tracing::info!(round, heroes = self.state.roster.len(), "round started");
        events.emit(GameEvent::RoundStarted { round });

        let seed = compute_seed(self.state.game_seed, round, IGNITION_CONTEXT);
        let cells = self
            .state
            .maze
            .ignite_random_hazards(env.config().hazard_count, env.rng(), seed)?
            .to_vec();
        tracing::debug!(round, ?cells, "hazards ignited");
        events.emit(GameEvent::HazardsIgnited { cells });

        let result = self.run_turns(env, provider, events);

        let cells = self.state.maze.extinguish_hazards();
        events.emit(GameEvent::HazardsExtinguished { cells });
        self.state.turn.current_hero = None;

        result
    }

    fn run_turns(
        &mut self,
        env: GameEnv<'_>,
        provider: &mut dyn ActionProvider,
        events: &mut dyn EventSink,
    ) -> Result<(), EngineError> {
        for id in self.state.roster.ids() {
            if self.state.is_won() {
                break;
            }
            if self.state.roster.get(id).is_none() {
                continue;
            }
            self.take_turn(env, id, provider, events)?;
        }
        Ok(())
    }

    /// Runs a single hero's turn.
    ///
    /// A hero that starts the turn dead is removed without acting. Rejected
    /// actions are reported and the provider is asked again until one
    /// succeeds.
    pub fn take_turn(
        &mut self,
        env: GameEnv<'_>,
        id: HeroId,
        provider: &mut dyn ActionProvider,
        events: &mut dyn EventSink,
    ) -> Result<(), EngineError> {
        let hero = self
            .state
            .roster
            .get(id)
            .ok_or(EngineError::HeroNotFound(id))?;

        if hero.is_dead() {
            self.handle_death(id, events);
            return Ok(());
        }

        self.state.turn.current_hero = Some(id);
        events.emit(GameEvent::TurnStarted {
            hero: hero.name.clone(),
            burning: self.state.maze.burning_cells().to_vec(),
        });

        loop {
            let hero = self
                .state
                .roster
                .get(id)
                .ok_or(EngineError::HeroNotFound(id))?;
            let action = provider.provide_action(hero, &*self.state)?;

            match self.execute(env, id, action, events) {
                Ok(()) => break,
                Err(error) if error.is_rejection() => {
                    let name = self.hero_name(id);
                    tracing::warn!(
                        hero = %name,
                        %action,
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        "action rejected"
                    );
                    events.emit(GameEvent::ActionRejected {
                        hero: name,
                        error: error.action_error().clone(),
                    });
                }
                Err(error) => return Err(error.into()),
            }
        }

        if self.state.roster.get(id).is_some_and(Hero::is_dead) {
            self.handle_death(id, events);
        }

        Ok(())
    }

    /// Removes a dead hero and drops its inventory on its cell.
    ///
    /// Returns the removed hero, or `None` if it was already gone.
    pub fn handle_death(&mut self, id: HeroId, events: &mut dyn EventSink) -> Option<Hero> {
        let mut hero = self.state.roster.remove(id)?;
        tracing::info!(hero = %hero.name, position = %hero.position, "hero eliminated");
        events.emit(GameEvent::HeroEliminated {
            hero: hero.name.clone(),
        });

        for mut item in hero.inventory.drain(..) {
            item.position = hero.position;
            events.emit(GameEvent::ItemDropped {
                item: item.name.clone(),
                position: item.position,
            });
            self.state.items.push(item);
        }

        Some(hero)
    }

    fn hero_name(&self, id: HeroId) -> String {
        self.state
            .roster
            .get(id)
            .map(|hero| hero.name.clone())
            .unwrap_or_default()
    }
}
