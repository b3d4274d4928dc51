//! Single-action scenarios executed directly through the engine.

use maze_core::CellKind::{End, ExtraPassage, Fire, Passage, Wall};
use maze_core::{
    ActionError, Direction, GameConfig, GameEngine, GameEnv, GameEvent, GameState, GameStatus,
    HeroAction, HeroId, Item, Maze, PcgRng, Position, Roster,
};

/// ```text
///   x: 0 1 2 3 4
/// y0:  P P W X E
/// y1:  P F P X P
/// y2:  P P P P P
/// ```
fn maze() -> Maze {
    Maze::from_kinds(vec![
        vec![Passage, Passage, Wall, ExtraPassage, End],
        vec![Passage, Fire, Passage, ExtraPassage, Passage],
        vec![Passage, Passage, Passage, Passage, Passage],
    ])
    .expect("fixture maze is rectangular")
}

struct Fixture {
    config: GameConfig,
    state: GameState,
    events: Vec<GameEvent>,
}

impl Fixture {
    fn new(heroes: &[(&str, Position)], items: Vec<Item>) -> Self {
        Self::with_config(GameConfig::default().with_hazard_count(0), heroes, items)
    }

    fn with_config(config: GameConfig, heroes: &[(&str, Position)], items: Vec<Item>) -> Self {
        let mut roster = Roster::new();
        for (name, position) in heroes {
            roster
                .add(name, *position, &config)
                .expect("fixture names are unique");
        }
        Self {
            state: GameState::new(maze(), roster, items),
            config,
            events: Vec::new(),
        }
    }

    fn act(&mut self, hero: u32, action: HeroAction) -> Result<(), ActionError> {
        let rng = PcgRng;
        let env = GameEnv::new(&self.config, &rng);
        GameEngine::new(&mut self.state)
            .execute(env, HeroId(hero), action, &mut self.events)
            .map_err(|error| error.action_error().clone())
    }

    fn step(&mut self, hero: u32, direction: Direction) {
        self.act(hero, HeroAction::Move(direction))
            .expect("moves are always accepted");
    }

    fn hero(&self, hero: u32) -> &maze_core::Hero {
        self.state
            .roster
            .get(HeroId(hero))
            .expect("hero is in the roster")
    }
}

#[test]
fn walking_into_a_wall_hurts_and_keeps_position() {
    let mut game = Fixture::new(&[("Arthur", Position::new(1, 0))], vec![]);

    game.step(0, Direction::Right);

    let hero = game.hero(0);
    assert_eq!(hero.position, Position::new(1, 0));
    assert_eq!(hero.health, 4);
    assert_eq!(hero.last_direction, None);
    assert!(game.events.contains(&GameEvent::HitWall {
        hero: "Arthur".into(),
        health: 4,
    }));
}

#[test]
fn stepping_off_the_grid_counts_as_a_wall() {
    let mut game = Fixture::new(&[("Arthur", Position::ORIGIN)], vec![]);

    game.step(0, Direction::Left);
    game.step(0, Direction::Up);

    let hero = game.hero(0);
    assert_eq!(hero.position, Position::ORIGIN);
    assert_eq!(hero.health, 3);
}

#[test]
fn stepping_into_fire_moves_and_burns() {
    let mut game = Fixture::new(&[("Arthur", Position::new(1, 0))], vec![]);

    game.step(0, Direction::Down);

    let hero = game.hero(0);
    assert_eq!(hero.position, Position::new(1, 1));
    assert_eq!(hero.health, 4);
    assert_eq!(hero.last_direction, Some(Direction::Down));
}

#[test]
fn reversing_direction_scares_the_hero_to_death() {
    let mut game = Fixture::new(&[("Arthur", Position::new(0, 2))], vec![]);

    game.step(0, Direction::Right);
    game.step(0, Direction::Left);

    let hero = game.hero(0);
    assert_eq!(hero.health, 0);
    assert_eq!(hero.position, Position::new(1, 2));
    assert!(game.events.contains(&GameEvent::FledInFear {
        hero: "Arthur".into()
    }));
}

#[test]
fn extra_passages_do_not_count_toward_retreat() {
    let mut game = Fixture::new(&[("Arthur", Position::new(2, 2))], vec![]);

    game.step(0, Direction::Up);
    assert_eq!(game.hero(0).last_direction, Some(Direction::Up));

    game.step(0, Direction::Right);
    assert_eq!(game.hero(0).position, Position::new(3, 1));
    assert_eq!(game.hero(0).last_direction, Some(Direction::Up));

    // Reversing while standing on an extra passage is safe.
    game.step(0, Direction::Down);

    let hero = game.hero(0);
    assert_eq!(hero.position, Position::new(3, 2));
    assert_eq!(hero.health, 5);
    assert_eq!(hero.last_direction, Some(Direction::Up));
}

#[test]
fn reaching_the_exit_with_the_key_wins() {
    let mut game = Fixture::new(&[("Arthur", Position::new(4, 1))], vec![]);
    game.state
        .roster
        .get_mut(HeroId(0))
        .expect("hero present")
        .inventory
        .push(Item::new("key", Position::new(4, 1)));

    game.step(0, Direction::Up);

    assert_eq!(game.state.turn.status, GameStatus::Won(HeroId(0)));
    assert!(game.events.contains(&GameEvent::ReachedExit {
        hero: "Arthur".into()
    }));
}

#[test]
fn reaching_the_exit_without_the_key_is_fatal() {
    let mut game = Fixture::new(&[("Arthur", Position::new(4, 1))], vec![]);

    game.step(0, Direction::Up);

    let hero = game.hero(0);
    assert_eq!(hero.position, Position::new(4, 0));
    assert!(hero.is_dead());
    assert_eq!(game.state.turn.status, GameStatus::Ongoing);
    assert!(game.events.contains(&GameEvent::KilledByGuardian {
        hero: "Arthur".into()
    }));
}

#[test]
fn a_lenient_guardian_only_reports_the_encounter() {
    let config = GameConfig {
        guardian_kills: false,
        ..GameConfig::default().with_hazard_count(0)
    };
    let mut game = Fixture::with_config(config, &[("Arthur", Position::new(4, 1))], vec![]);

    game.step(0, Direction::Up);

    let hero = game.hero(0);
    assert_eq!(hero.health, 5);
    assert_eq!(game.state.turn.status, GameStatus::Ongoing);
    assert!(game.events.contains(&GameEvent::KilledByGuardian {
        hero: "Arthur".into()
    }));
}

#[test]
fn heal_spends_a_kit_and_restores_one_point() {
    let mut game = Fixture::new(&[("Arthur", Position::new(1, 0))], vec![]);
    game.step(0, Direction::Right);

    game.act(0, HeroAction::Heal).expect("hero is hurt");

    let hero = game.hero(0);
    assert_eq!(hero.health, 5);
    assert_eq!(hero.medical_kits, 2);
}

#[test]
fn heal_at_full_health_goes_past_the_maximum() {
    let mut game = Fixture::new(&[("Arthur", Position::ORIGIN)], vec![]);

    game.act(0, HeroAction::Heal).expect("a kit is available");

    let hero = game.hero(0);
    assert_eq!(hero.health, 6);
    assert_eq!(hero.medical_kits, 2);
    assert!(game.events.contains(&GameEvent::Healed {
        hero: "Arthur".into(),
        health: 6,
        medical_kits: 2,
    }));
}

#[test]
fn heal_is_rejected_without_kits() {
    let mut game = Fixture::new(&[("Arthur", Position::ORIGIN)], vec![]);
    {
        let hero = game.state.roster.get_mut(HeroId(0)).expect("hero present");
        hero.health = 2;
        hero.medical_kits = 0;
    }

    let before = game.state.clone();

    assert_eq!(
        game.act(0, HeroAction::Heal),
        Err(ActionError::NoMedicalKits)
    );
    assert_eq!(game.state, before);
    assert!(game.events.is_empty());
}

#[test]
fn attack_hits_every_hero_on_the_cell() {
    let here = Position::new(0, 1);
    let mut game = Fixture::new(
        &[
            ("Arthur", here),
            ("Lancelot", here),
            ("Gawain", here),
            ("Percival", Position::ORIGIN),
        ],
        vec![],
    );

    game.act(0, HeroAction::Attack).expect("targets are present");

    assert_eq!(game.hero(0).health, 5);
    assert_eq!(game.hero(1).health, 4);
    assert_eq!(game.hero(2).health, 4);
    assert_eq!(game.hero(3).health, 5);
}

#[test]
fn attack_without_targets_is_rejected() {
    let mut game = Fixture::new(
        &[("Arthur", Position::ORIGIN), ("Lancelot", Position::new(0, 1))],
        vec![],
    );

    assert_eq!(
        game.act(0, HeroAction::Attack),
        Err(ActionError::NoAttackTarget)
    );
    assert_eq!(game.hero(1).health, 5);
}

#[test]
fn pick_takes_only_keys() {
    let here = Position::new(0, 1);
    let mut game = Fixture::new(
        &[("Arthur", here)],
        vec![
            Item::new("key", here),
            Item::new("coin", here),
            Item::new("key", Position::ORIGIN),
        ],
    );

    game.act(0, HeroAction::PickItem).expect("a key lies here");

    let hero = game.hero(0);
    assert_eq!(hero.inventory, vec![Item::new("key", here)]);
    assert_eq!(
        game.state.items,
        vec![Item::new("coin", here), Item::new("key", Position::ORIGIN)]
    );
}

#[test]
fn pick_without_a_key_is_rejected() {
    let here = Position::new(0, 1);
    let mut game = Fixture::new(&[("Arthur", here)], vec![Item::new("coin", here)]);

    assert_eq!(
        game.act(0, HeroAction::PickItem),
        Err(ActionError::NothingToPick)
    );
    assert_eq!(game.state.items.len(), 1);
}

#[test]
fn stepping_on_a_heart_restores_full_health() {
    let heart = Position::new(0, 1);
    let mut game = Fixture::new(
        &[("Arthur", Position::ORIGIN)],
        vec![Item::new("heart", heart)],
    );
    game.state
        .roster
        .get_mut(HeroId(0))
        .expect("hero present")
        .health = 2;

    game.step(0, Direction::Down);

    assert_eq!(game.hero(0).health, 5);
    assert_eq!(game.state.items, vec![Item::new("heart", heart)]);
    assert!(game.events.contains(&GameEvent::HeartRestored {
        hero: "Arthur".into(),
        health: 5,
    }));
}

#[test]
fn arriving_next_to_others_reports_them_and_items() {
    let here = Position::new(0, 1);
    let mut game = Fixture::new(
        &[("Arthur", Position::ORIGIN), ("Lancelot", here)],
        vec![Item::new("coin", here)],
    );

    game.step(0, Direction::Down);

    assert!(game.events.contains(&GameEvent::HeroPresent {
        hero: "Arthur".into(),
        other: "Lancelot".into(),
    }));
    assert!(game.events.contains(&GameEvent::ItemPresent {
        hero: "Arthur".into(),
        item: "coin".into(),
    }));
}
