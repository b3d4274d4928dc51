//! Action rejection and parsing errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::HeroId;

/// Reasons an action could not be carried out.
///
/// Everything except [`ActionError::HeroNotFound`] is a normal rejection: the
/// hero's state is untouched and the participant is asked again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no medical kits left")]
    NoMedicalKits,

    #[error("there is no one to attack at this position")]
    NoAttackTarget,

    #[error("there is nothing to pick up at this position")]
    NothingToPick,

    #[error("hero {0} not found")]
    HeroNotFound(HeroId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            NoMedicalKits | NoAttackTarget | NothingToPick => ErrorSeverity::Recoverable,
            HeroNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            NoMedicalKits => "ACTION_NO_MEDICAL_KITS",
            NoAttackTarget => "ACTION_NO_ATTACK_TARGET",
            NothingToPick => "ACTION_NOTHING_TO_PICK",
            HeroNotFound(_) => "ACTION_HERO_NOT_FOUND",
        }
    }
}

/// Input that is not one of the action codes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown action code '{0}'")]
pub struct ParseActionError(pub String);
