//! Hero roster: an ordered arena with stable ids and a name index.

use std::collections::BTreeMap;

use crate::config::GameConfig;
use crate::state::RosterError;

use super::{Hero, HeroId, Position};

/// Active heroes in fixed turn order.
///
/// Ids are allocated sequentially and never reused. Removing a hero keeps the
/// relative order of the others, so a round can iterate a snapshot of
/// [`Roster::ids`] while heroes die.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    heroes: Vec<Hero>,
    names: BTreeMap<String, HeroId>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hero with the configured starting stats.
    ///
    /// Names are trimmed and must be unique among the heroes currently in
    /// the roster.
    pub fn add(
        &mut self,
        name: &str,
        position: Position,
        config: &GameConfig,
    ) -> Result<HeroId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.names.contains_key(name) {
            return Err(RosterError::DuplicateName(name.to_owned()));
        }

        let id = HeroId(self.next_id);
        self.next_id += 1;

        self.heroes.push(Hero::new(
            id,
            name,
            position,
            config.max_health,
            config.medical_kits,
        ));
        self.names.insert(name.to_owned(), id);

        Ok(id)
    }

    /// Builds a roster of heroes on the configured start cell.
    pub fn from_names<I, S>(names: I, config: &GameConfig) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref(), config.start_position, config)?;
        }
        Ok(roster)
    }

    pub fn get(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    pub fn get_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|hero| hero.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Hero> {
        self.names.get(name).and_then(|&id| self.get(id))
    }

    /// Removes a hero, returning it so its inventory can be dropped.
    pub fn remove(&mut self, id: HeroId) -> Option<Hero> {
        let index = self.heroes.iter().position(|hero| hero.id == id)?;
        let hero = self.heroes.remove(index);
        self.names.remove(&hero.name);
        Some(hero)
    }

    /// Snapshot of the current turn order.
    pub fn ids(&self) -> Vec<HeroId> {
        self.heroes.iter().map(|hero| hero.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }

    /// Ids of heroes other than `id` standing on `position`.
    pub fn others_at(&self, id: HeroId, position: Position) -> Vec<HeroId> {
        self.heroes
            .iter()
            .filter(|hero| hero.id != id && hero.position == position)
            .map(|hero| hero.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}
