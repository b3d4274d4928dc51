use crate::state::Position;

/// Game rules constants and tunable parameters.
///
/// Every field has a default so a partial TOML file only overrides what it
/// names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Passage cells set on fire at the start of every round.
    pub hazard_count: usize,
    /// Starting health, and the value a heart restores.
    pub max_health: i32,
    /// Medical kits each hero starts with.
    pub medical_kits: u32,
    /// Cell every hero starts on.
    pub start_position: Position,
    /// Name of the item that opens the exit. Only this item can be picked up.
    pub key_item: String,
    /// Name of the item that restores full health when stepped on.
    pub heart_item: String,
    /// Whether reaching the exit without the key eliminates the hero.
    /// When false the guardian encounter is reported and nothing else happens.
    pub guardian_kills: bool,
    /// Session seed for hazard placement.
    pub seed: u64,
}

impl GameConfig {
    // ===== fixed rule amounts =====
    pub const DAMAGE_PER_HIT: i32 = 1;
    pub const HEAL_AMOUNT: i32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HAZARD_COUNT: usize = 4;
    pub const DEFAULT_MAX_HEALTH: i32 = 5;
    pub const DEFAULT_MEDICAL_KITS: u32 = 3;
    pub const DEFAULT_START_POSITION: Position = Position::new(0, 3);
    pub const DEFAULT_KEY_ITEM: &'static str = "key";
    pub const DEFAULT_HEART_ITEM: &'static str = "heart";

    pub fn new() -> Self {
        Self {
            hazard_count: Self::DEFAULT_HAZARD_COUNT,
            max_health: Self::DEFAULT_MAX_HEALTH,
            medical_kits: Self::DEFAULT_MEDICAL_KITS,
            start_position: Self::DEFAULT_START_POSITION,
            key_item: Self::DEFAULT_KEY_ITEM.to_owned(),
            heart_item: Self::DEFAULT_HEART_ITEM.to_owned(),
            guardian_kills: true,
            seed: 0,
        }
    }

    pub fn with_hazard_count(mut self, hazard_count: usize) -> Self {
        self.hazard_count = hazard_count;
        self
    }

    pub fn with_start_position(mut self, start_position: Position) -> Self {
        self.start_position = start_position;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
