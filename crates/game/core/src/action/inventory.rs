use crate::action::{ActionError, ActionTransition};
use crate::env::GameEnv;
use crate::event::{EventSink, GameEvent};
use crate::state::{GameState, HeroId, Item};

/// Picks up every key lying on the hero's cell.
///
/// Only items named after the configured key can be carried; anything else
/// stays where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickItemAction {
    pub actor: HeroId,
}

impl PickItemAction {
    pub fn new(actor: HeroId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickItemAction {
    type Error = ActionError;

    fn actor(&self) -> HeroId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let hero = state
            .roster
            .get(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;
        let key = &env.config().key_item;

        if !state.items_at(hero.position).any(|item| item.is_named(key)) {
            return Err(ActionError::NothingToPick);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut dyn EventSink,
    ) -> Result<(), Self::Error> {
        let key = &env.config().key_item;
        let hero = state
            .roster
            .get_mut(self.actor)
            .ok_or(ActionError::HeroNotFound(self.actor))?;
        let position = hero.position;

        let (picked, remaining): (Vec<Item>, Vec<Item>) = std::mem::take(&mut state.items)
            .into_iter()
            .partition(|item| item.position == position && item.is_named(key));
        state.items = remaining;

        for item in picked {
            events.emit(GameEvent::PickedUp {
                hero: hero.name.clone(),
                item: item.name.clone(),
            });
            hero.inventory.push(item);
        }

        Ok(())
    }
}
