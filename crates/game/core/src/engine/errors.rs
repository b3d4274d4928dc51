//! Error types for the action pipeline and round loop.

use crate::action::{ActionError, HeroAction};
use crate::error::{ErrorSeverity, GameError};
use crate::provider::ProviderError;
use crate::state::{HeroId, MazeError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Error surfaced while executing one hero action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{action} action failed: {source}")]
pub struct ExecuteError {
    pub action: HeroAction,
    pub source: TransitionPhaseError<ActionError>,
}

impl ExecuteError {
    pub fn new(action: HeroAction, source: TransitionPhaseError<ActionError>) -> Self {
        Self { action, source }
    }

    pub fn action_error(&self) -> &ActionError {
        &self.source.error
    }

    /// True when the action was refused up front and the hero may choose again.
    pub fn is_rejection(&self) -> bool {
        self.source.phase == TransitionPhase::PreValidate
            && self.source.error.severity().is_recoverable()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.source.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.source.error.error_code()
    }
}

/// Errors that stop a round.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("hero {0} is not in the roster")]
    HeroNotFound(HeroId),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::Maze(error) => error.severity(),
            EngineError::Execute(error) => error.severity(),
            EngineError::Provider(error) => error.severity(),
            EngineError::HeroNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::Maze(error) => error.error_code(),
            EngineError::Execute(error) => error.error_code(),
            EngineError::Provider(error) => error.error_code(),
            EngineError::HeroNotFound(_) => "ENGINE_HERO_NOT_FOUND",
        }
    }
}
