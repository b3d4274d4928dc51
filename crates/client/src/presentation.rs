//! Console rendering of game events.

use std::io::Write;

use maze_core::{ActionError, EventSink, GameEvent, Position};

const RULE: &str = "------------------------------";

/// Writes every event as human-readable text.
pub struct ConsoleReporter<W> {
    output: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> EventSink for ConsoleReporter<W> {
    fn emit(&mut self, event: GameEvent) {
        let Some(text) = describe(&event) else {
            return;
        };
        if let Err(error) = writeln!(self.output, "{text}") {
            tracing::warn!(%error, "failed to write game output");
        }
    }
}

/// Text shown for `event`, or `None` for events the console doesn't print.
pub fn describe(event: &GameEvent) -> Option<String> {
    let text = match event {
        GameEvent::RoundStarted { round } => {
            format!("\n\n{0}ROUND - {round}{0}", "-".repeat(10))
        }
        GameEvent::HazardsIgnited { .. } | GameEvent::HazardsExtinguished { .. } => return None,
        GameEvent::TurnStarted { hero, burning } => {
            format!(
                "\n{RULE}\nBurning cells [{}]\nHero {hero} is moving",
                list(burning)
            )
        }
        GameEvent::Moved { hero, position, .. } => format!("Position of {hero}: {position}"),
        GameEvent::HitWall { hero, health } => {
            format!("{hero} hit the wall, -1 health | Current health: {health}")
        }
        GameEvent::Burned { hero, health } => {
            format!("{hero} is on fire, -1 health | Current health: {health}")
        }
        GameEvent::FledInFear { hero } => format!("{hero} got scared and ran away"),
        GameEvent::ReachedExit { hero } => format!("{hero} reached the end and won!!!"),
        GameEvent::KilledByGuardian { hero } => {
            format!("The golem guards the exit and {hero} has no key")
        }
        GameEvent::HeroPresent { other, .. } => format!("Hero {other} at this position"),
        GameEvent::HeartRestored { health, .. } => format!(
            "Hero stepped on a green heart and regained health | Current health: {health}"
        ),
        GameEvent::ItemPresent { item, .. } => format!("Object '{item}' at this position"),
        GameEvent::Healed {
            hero,
            health,
            medical_kits,
        } => format!(
            "{hero} used a medical kit | Current health: {health} | Medical kits left: {medical_kits}"
        ),
        GameEvent::Attacked {
            attacker,
            target,
            health,
        } => format!("{attacker} attacked {target} | {target} health: {health}"),
        GameEvent::PickedUp { hero, item } => format!("{hero} picked up '{item}'"),
        GameEvent::ActionRejected { error, .. } => rejection(error).to_owned(),
        GameEvent::HeroEliminated { hero } => {
            format!("Hero {hero} has 0 health points and is eliminated")
        }
        GameEvent::ItemDropped { item, position } => format!("'{item}' dropped at {position}"),
        GameEvent::GameWon { hero, rounds } => {
            format!("***Game Over***\n{hero} escaped after {rounds} rounds")
        }
        GameEvent::AllEliminated { .. } => {
            "All heroes have been eliminated from the game".to_owned()
        }
    };
    Some(text)
}

fn rejection(error: &ActionError) -> &'static str {
    match error {
        ActionError::NoMedicalKits => "No medical kits left",
        ActionError::NoAttackTarget => "There is no one to attack here",
        ActionError::NothingToPick => "There is nothing to pick up here",
        ActionError::HeroNotFound(_) => "That hero is no longer in the game",
    }
}

fn list(positions: &[Position]) -> String {
    positions
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_header_lists_burning_cells() {
        let text = describe(&GameEvent::TurnStarted {
            hero: "Arthur".into(),
            burning: vec![Position::new(1, 2), Position::new(3, 1)],
        })
        .expect("printed");

        assert!(text.contains("Burning cells [(1, 2), (3, 1)]"));
        assert!(text.ends_with("Hero Arthur is moving"));
    }

    #[test]
    fn hazard_bookkeeping_is_not_printed() {
        assert_eq!(
            describe(&GameEvent::HazardsExtinguished { cells: vec![] }),
            None
        );
    }

    #[test]
    fn reporter_writes_one_block_per_event() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.emit(GameEvent::HitWall {
            hero: "Arthur".into(),
            health: 4,
        });
        reporter.emit(GameEvent::ActionRejected {
            hero: "Arthur".into(),
            error: ActionError::NoAttackTarget,
        });

        let text = String::from_utf8(reporter.into_inner()).expect("utf-8 output");
        assert_eq!(
            text,
            "Arthur hit the wall, -1 health | Current health: 4\nThere is no one to attack here\n"
        );
    }
}
