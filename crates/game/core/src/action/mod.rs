//! Hero actions.
//!
//! Each action has its own [`ActionTransition`] implementation. A rejected
//! action leaves the state untouched and reports an [`ActionError`] so the
//! hero can choose again.
mod combat;
mod error;
mod heal;
mod inventory;
mod movement;
mod transition;

pub use combat::AttackAction;
pub use error::{ActionError, ParseActionError};
pub use heal::HealAction;
pub use inventory::PickItemAction;
pub use movement::MoveAction;
pub use transition::ActionTransition;

use core::fmt;
use core::str::FromStr;

use crate::state::Direction;

/// Action chosen by a participant for one turn.
///
/// Parsed from single-letter codes: `l`, `r`, `u`, `d` move, `h` heals,
/// `a` attacks and `p` picks up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroAction {
    Move(Direction),
    Heal,
    Attack,
    PickItem,
}

impl HeroAction {
    pub fn code(&self) -> char {
        match self {
            HeroAction::Move(direction) => direction.code(),
            HeroAction::Heal => 'h',
            HeroAction::Attack => 'a',
            HeroAction::PickItem => 'p',
        }
    }
}

impl fmt::Display for HeroAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroAction::Move(direction) => write!(f, "move {direction}"),
            HeroAction::Heal => f.write_str("heal"),
            HeroAction::Attack => f.write_str("attack"),
            HeroAction::PickItem => f.write_str("pick"),
        }
    }
}

impl FromStr for HeroAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        match code.to_ascii_lowercase().as_str() {
            "h" | "heal" => Ok(HeroAction::Heal),
            "a" | "attack" => Ok(HeroAction::Attack),
            "p" | "pick" => Ok(HeroAction::PickItem),
            other => other
                .parse::<Direction>()
                .map(HeroAction::Move)
                .map_err(|_| ParseActionError(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action_code() {
        assert_eq!("l".parse(), Ok(HeroAction::Move(Direction::Left)));
        assert_eq!("r".parse(), Ok(HeroAction::Move(Direction::Right)));
        assert_eq!("u".parse(), Ok(HeroAction::Move(Direction::Up)));
        assert_eq!("d".parse(), Ok(HeroAction::Move(Direction::Down)));
        assert_eq!("h".parse(), Ok(HeroAction::Heal));
        assert_eq!("a".parse(), Ok(HeroAction::Attack));
        assert_eq!("p".parse(), Ok(HeroAction::PickItem));
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_whitespace() {
        assert_eq!(" H\n".parse(), Ok(HeroAction::Heal));
        assert_eq!("L".parse(), Ok(HeroAction::Move(Direction::Left)));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            "x".parse::<HeroAction>(),
            Err(ParseActionError("x".to_string()))
        );
        assert!("".parse::<HeroAction>().is_err());
    }

    #[test]
    fn code_round_trips_through_parse() {
        for action in [
            HeroAction::Move(Direction::Up),
            HeroAction::Heal,
            HeroAction::Attack,
            HeroAction::PickItem,
        ] {
            assert_eq!(action.code().to_string().parse(), Ok(action));
        }
    }
}
