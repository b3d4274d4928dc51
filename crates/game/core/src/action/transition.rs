use crate::env::GameEnv;
use crate::event::EventSink;
use crate::state::{GameState, HeroId};

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` decides whether the action is possible at all and must stay
/// side-effect free; a rejection there leaves the state untouched so the
/// participant can be asked again. `apply` assumes `pre_validate` passed and
/// reports every change it makes through `events`.
pub trait ActionTransition {
    type Error;

    /// Hero performing the action.
    fn actor(&self) -> HeroId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut dyn EventSink,
    ) -> Result<(), Self::Error>;
}
