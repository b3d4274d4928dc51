use super::{Direction, HeroId, Item, Position};

/// A hero taking part in the session.
///
/// Heroes are identified by [`HeroId`] inside the engine and by name at the
/// roster boundary; `PartialEq` compares full state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub position: Position,
    /// Can drop below zero; anything `<= 0` counts as dead.
    pub health: i32,
    pub medical_kits: u32,
    pub inventory: Vec<Item>,
    /// Last direction that counted toward retreat tracking.
    pub last_direction: Option<Direction>,
}

impl Hero {
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        position: Position,
        health: i32,
        medical_kits: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            health,
            medical_kits,
            inventory: Vec::new(),
            last_direction: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn die(&mut self) {
        self.health = 0;
    }

    /// Spends one medical kit. Callers check availability first.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
        self.medical_kits = self.medical_kits.saturating_sub(1);
    }

    pub fn holds(&self, item_name: &str) -> bool {
        self.inventory.iter().any(|item| item.is_named(item_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Hero {
        Hero::new(HeroId(0), "Arthur", Position::new(0, 3), 5, 3)
    }

    #[test]
    fn health_at_or_below_zero_is_dead() {
        let mut hero = hero();
        assert!(!hero.is_dead());
        hero.take_damage(5);
        assert!(hero.is_dead());
        hero.take_damage(1);
        assert_eq!(hero.health, -1);
        assert!(hero.is_dead());
    }

    #[test]
    fn heal_spends_a_kit() {
        let mut hero = hero();
        hero.take_damage(2);
        hero.heal(1);
        assert_eq!(hero.health, 4);
        assert_eq!(hero.medical_kits, 2);
    }

    #[test]
    fn holds_checks_item_names() {
        let mut hero = hero();
        assert!(!hero.holds("key"));
        hero.inventory.push(Item::new("key", Position::ORIGIN));
        assert!(hero.holds("key"));
        assert!(!hero.holds("heart"));
    }
}
