//! Action provider boundary.
//!
//! The engine asks an [`ActionProvider`] for each hero's action; the console
//! client implements it over stdin and tests replay a fixed script.

use std::collections::VecDeque;

use crate::action::HeroAction;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Hero};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The input source ended before the session did.
    #[error("action input closed")]
    InputClosed,

    #[error("failed to read action input: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError for ProviderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ProviderError::InputClosed => "PROVIDER_INPUT_CLOSED",
            ProviderError::Io(_) => "PROVIDER_IO",
        }
    }
}

/// Source of hero actions.
pub trait ActionProvider {
    /// Provide the next action for `hero` given a read-only view of the game.
    ///
    /// Called again with the same hero whenever the previous action was
    /// rejected.
    fn provide_action(&mut self, hero: &Hero, state: &GameState)
    -> Result<HeroAction, ProviderError>;
}

impl<P: ActionProvider + ?Sized> ActionProvider for &mut P {
    fn provide_action(
        &mut self,
        hero: &Hero,
        state: &GameState,
    ) -> Result<HeroAction, ProviderError> {
        (**self).provide_action(hero, state)
    }
}

/// Replays a fixed action list regardless of which hero asks.
///
/// Returns [`ProviderError::InputClosed`] once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedActionProvider {
    script: VecDeque<HeroAction>,
}

impl ScriptedActionProvider {
    pub fn new(script: impl IntoIterator<Item = HeroAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn provide_action(
        &mut self,
        _hero: &Hero,
        _state: &GameState,
    ) -> Result<HeroAction, ProviderError> {
        self.script.pop_front().ok_or(ProviderError::InputClosed)
    }
}
