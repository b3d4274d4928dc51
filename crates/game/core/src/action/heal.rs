use crate::action::{ActionError, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{GameState, HeroId};

/// Spends one medical kit to restore a point of health.
///
/// There is no cap: healing at full health still adds a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealAction {
    pub actor: HeroId,
}

impl HealAction {
    pub fn new(actor: HeroId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for HealAction {
    type Error = ActionError;

    fn actor(&self) -> HeroId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let hero = state
            .roster
            .get(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;

        if hero.medical_kits == 0 {
            return Err(ActionError::NoMedicalKits);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut dyn EventSink,
    ) -> Result<(), Self::Error> {
        let hero = state
            .roster
            .get_mut(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;

        hero.heal(GameConfig::HEAL_AMOUNT);
        events.emit(GameEvent::Healed {
            hero: hero.name.clone(),
            health: hero.health,
            medical_kits: hero.medical_kits,
        });

        Ok(())
    }
}
