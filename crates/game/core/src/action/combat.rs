use crate::action::{ActionError, ActionTransition};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{GameState, HeroId};

/// Strikes every other hero standing on the attacker's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackAction {
    pub actor: HeroId,
}

impl AttackAction {
    pub fn new(actor: HeroId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for AttackAction {
    type Error = ActionError;

    fn actor(&self) -> HeroId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let attacker = state
            .roster
            .get(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;

        if state
            .roster
            .others_at(self.actor, attacker.position)
            .is_empty()
        {
            return Err(ActionError::NoAttackTarget);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut dyn EventSink,
    ) -> Result<(), Self::Error> {
        let attacker = state
            .roster
            .get(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;
        let attacker_name = attacker.name.clone();
        let targets = state.roster.others_at(self.actor, attacker.position);

        for target_id in targets {
            let Some(target) = state.roster.get_mut(target_id) else {
                continue;
            };
            target.take_damage(GameConfig::DAMAGE_PER_HIT);
            tracing::debug!(
                attacker = %attacker_name,
                target = %target.name,
                health = target.health,
                "attack landed"
            );
            events.emit(GameEvent::Attacked {
                attacker: attacker_name.clone(),
                target: target.name.clone(),
                health: target.health,
            });
        }

        Ok(())
    }
}
