//! Round scheduling and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! hero action runs through the same two phases, `pre_validate` then `apply`,
//! and every visible change is reported through an [`EventSink`].

mod errors;
mod turns;

pub use errors::{EngineError, ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{
    ActionError, ActionTransition, AttackAction, HealAction, HeroAction, MoveAction,
    PickItemAction,
};
use crate::env::GameEnv;
use crate::event::EventSink;
use crate::state::{GameState, HeroId};

/// Game engine that executes hero actions and drives rounds.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes one action for `actor`.
    ///
    /// A pre-validation failure leaves the state untouched.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        actor: HeroId,
        action: HeroAction,
        events: &mut dyn EventSink,
    ) -> Result<(), ExecuteError> {
        let result = match action {
            HeroAction::Move(direction) => drive_transition(
                &MoveAction::new(actor, direction),
                self.state,
                &env,
                events,
            ),
            HeroAction::Heal => {
                drive_transition(&HealAction::new(actor), self.state, &env, events)
            }
            HeroAction::Attack => {
                drive_transition(&AttackAction::new(actor), self.state, &env, events)
            }
            HeroAction::PickItem => {
                drive_transition(&PickItemAction::new(actor), self.state, &env, events)
            }
        };

        result.map_err(|source| ExecuteError::new(action, source))
    }
}

#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut dyn EventSink,
) -> Result<(), TransitionPhaseError<ActionError>>
where
    T: ActionTransition<Error = ActionError>,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env, events)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))
}
