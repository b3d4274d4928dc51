use super::HeroId;

/// Whether the session is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// A hero carried the key onto the exit.
    Won(HeroId),
}

/// Round bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Number of the round in progress, or of the last finished round.
    /// Zero before the first round starts.
    pub round: u32,

    /// Hero whose turn is being resolved, if any.
    pub current_hero: Option<HeroId>,

    pub status: GameStatus,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }
}
