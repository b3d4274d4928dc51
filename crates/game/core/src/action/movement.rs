use crate::action::{ActionError, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{CellKind, Direction, GameState, GameStatus, HeroId};

/// One-cell step in a cardinal direction.
///
/// A move is always accepted; walls, fire and the exit only change what
/// happens to the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: HeroId,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(actor: HeroId, direction: Direction) -> Self {
        Self { actor, direction }
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;

    fn actor(&self) -> HeroId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state
            .roster
            .get(self.actor)
            .map(|_| ())
            .ok_or(ActionError::HeroNotFound(self.actor))
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut dyn EventSink,
    ) -> Result<(), Self::Error> {
        let config = env.config();
        let hero = state
            .roster
            .get_mut(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;
        let origin = hero.position;
        let origin_kind = state.maze.cell_kind_at(origin);

        // Turning straight back outside an extra passage scares the hero off.
        // The hero dies on the cell it tried to leave.
        if hero.last_direction == Some(self.direction.opposite())
            && origin_kind != CellKind::ExtraPassage
        {
            hero.die();
            tracing::debug!(hero = %hero.name, direction = %self.direction, "hero retreated");
            events.emit(GameEvent::FledInFear {
                hero: hero.name.clone(),
            });
            return Ok(());
        }

        let destination = origin.step(self.direction);
        let destination_kind = state.maze.cell_kind_at(destination);
        let name = hero.name.clone();
        let mut slain = false;

        match destination_kind {
            CellKind::Wall => {
                hero.take_damage(GameConfig::DAMAGE_PER_HIT);
                events.emit(GameEvent::HitWall {
                    hero: name.clone(),
                    health: hero.health,
                });
            }
            CellKind::Fire => {
                hero.position = destination;
                hero.take_damage(GameConfig::DAMAGE_PER_HIT);
                events.emit(GameEvent::Burned {
                    hero: name.clone(),
                    health: hero.health,
                });
            }
            CellKind::End => {
                hero.position = destination;
                if hero.holds(&config.key_item) {
                    state.turn.status = GameStatus::Won(self.actor);
                    events.emit(GameEvent::ReachedExit { hero: name.clone() });
                } else {
                    events.emit(GameEvent::KilledByGuardian { hero: name.clone() });
                    if config.guardian_kills {
                        hero.die();
                        slain = true;
                    }
                }
            }
            CellKind::Passage | CellKind::ExtraPassage => {
                hero.position = destination;
            }
        }

        tracing::debug!(
            hero = %name,
            direction = %self.direction,
            from = %origin,
            to = %hero.position,
            cell = %destination_kind,
            "move resolved"
        );
        events.emit(GameEvent::Moved {
            hero: name,
            direction: self.direction,
            position: hero.position,
        });

        if destination_kind != CellKind::ExtraPassage
            && hero.position != origin
            && origin_kind != CellKind::ExtraPassage
        {
            hero.last_direction = Some(self.direction);
        }

        if slain {
            return Ok(());
        }

        resolve_encounters(state, self.actor, env, events)
    }
}

/// Reacts to whatever shares the hero's cell after a move.
///
/// A heart item restores full health; other items and heroes are only
/// reported. Nothing is picked up here.
pub(crate) fn resolve_encounters(
    state: &mut GameState,
    actor: HeroId,
    env: &GameEnv<'_>,
    events: &mut dyn EventSink,
) -> Result<(), ActionError> {
    let config = env.config();
    let position = state
        .roster
        .get(actor)
        .ok_or(ActionError::HeroNotFound(actor))?
        .position;

    let items: Vec<String> = state
        .items_at(position)
        .map(|item| item.name.clone())
        .collect();
    let others: Vec<String> = state
        .roster
        .others_at(actor, position)
        .into_iter()
        .filter_map(|id| state.roster.get(id))
        .map(|hero| hero.name.clone())
        .collect();

    let hero = state
        .roster
        .get_mut(actor)
        .ok_or(ActionError::HeroNotFound(actor))?;

    for item in items {
        if item == config.heart_item {
            hero.health = config.max_health;
            events.emit(GameEvent::HeartRestored {
                hero: hero.name.clone(),
                health: hero.health,
            });
        } else {
            events.emit(GameEvent::ItemPresent {
                hero: hero.name.clone(),
                item,
            });
        }
    }

    for other in others {
        events.emit(GameEvent::HeroPresent {
            hero: hero.name.clone(),
            other,
        });
    }

    Ok(())
}
