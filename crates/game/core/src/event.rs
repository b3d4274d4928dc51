//! Reportable state changes.
//!
//! The engine never prints. Every change a participant should hear about is
//! emitted as a [`GameEvent`] into an [`EventSink`]; the client renders them
//! as console text and tests collect them into a `Vec`.

use crate::action::ActionError;
use crate::state::{Direction, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        round: u32,
    },
    HazardsIgnited {
        cells: Vec<Position>,
    },
    TurnStarted {
        hero: String,
        burning: Vec<Position>,
    },
    Moved {
        hero: String,
        direction: Direction,
        position: Position,
    },
    HitWall {
        hero: String,
        health: i32,
    },
    Burned {
        hero: String,
        health: i32,
    },
    FledInFear {
        hero: String,
    },
    ReachedExit {
        hero: String,
    },
    KilledByGuardian {
        hero: String,
    },
    HeroPresent {
        hero: String,
        other: String,
    },
    HeartRestored {
        hero: String,
        health: i32,
    },
    ItemPresent {
        hero: String,
        item: String,
    },
    Healed {
        hero: String,
        health: i32,
        medical_kits: u32,
    },
    Attacked {
        attacker: String,
        target: String,
        health: i32,
    },
    PickedUp {
        hero: String,
        item: String,
    },
    ActionRejected {
        hero: String,
        error: ActionError,
    },
    HeroEliminated {
        hero: String,
    },
    ItemDropped {
        item: String,
        position: Position,
    },
    HazardsExtinguished {
        cells: Vec<Position>,
    },
    GameWon {
        hero: String,
        rounds: u32,
    },
    AllEliminated {
        rounds: u32,
    },
}

/// Destination for [`GameEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
