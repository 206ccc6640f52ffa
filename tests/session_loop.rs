//! Session loop tests: feed scripted input through `session::run` and check the
//! terminal status and what was printed.

use std::io::Cursor;
use std::time::Duration;

use cosmic_escape::config::{Overrides, Settings};
use cosmic_escape::session::{self, Clock, FrozenClock};
use cosmic_escape::world::load_default_world;
use cosmic_escape::{GameState, LossReason, Status, WinReason};

struct FakeClock(Duration);

impl Clock for FakeClock {
    fn lap(&mut self) -> Duration {
        self.0
    }
}

fn game(overrides: Overrides) -> GameState {
    let world = load_default_world().unwrap();
    let settings = Settings::resolve(
        &world.settings,
        &Overrides {
            seed: Some(5),
            ..overrides
        },
    );
    GameState::new(world, &settings)
}

fn play(state: &mut GameState, script: &str, clock: &mut dyn Clock) -> (Status, String) {
    let mut out: Vec<u8> = Vec::new();
    let status = session::run(state, Cursor::new(script.to_string()), &mut out, clock).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn end_of_input_quits() {
    let mut state = game(Overrides::default());
    let (status, text) = play(&mut state, "look\n", &mut FrozenClock);
    assert_eq!(status, Status::Quit);
    assert!(text.contains("Cyber Control Room"));
    assert!(text.contains("Goodbye."));
}

#[test]
fn quit_command_stops_reading() {
    let mut state = game(Overrides::default());
    let (status, text) = play(&mut state, "quit\ngo north\n", &mut FrozenClock);
    assert_eq!(status, Status::Quit);
    assert_eq!(state.player.current_room, "control");
    assert!(text.contains("Thanks for playing"));
}

#[test]
fn key_route_through_default_world() {
    let mut state = game(Overrides::default());
    let script = "go north\ntake key\ngo west\ngo south\nuse key\nlook\n";
    let (status, _) = play(&mut state, script, &mut FrozenClock);
    assert_eq!(status, Status::Won(WinReason::DoorUnlocked));
    assert_eq!(state.player.current_room, "living");
}

#[test]
fn repeated_wrong_answers_exhaust_energy() {
    let mut state = game(Overrides::default());
    let id = state.quests.quests()[0].quest.id;
    let script: String = (0..12).map(|_| format!("start {id}\nnot it\n")).collect();

    let (status, text) = play(&mut state, &script, &mut FrozenClock);
    assert_eq!(status, Status::Lost(LossReason::EnergyDepleted));
    assert_eq!(state.player.stats.energy, 0);
    assert!(text.contains("ENERGY DEPLETED"));
}

#[test]
fn solving_the_session_from_the_prompt_wins() {
    let mut state = game(Overrides {
        quest_count: Some(2),
        ..Default::default()
    });
    let script: String = state
        .quests
        .quests()
        .iter()
        .map(|q| format!("start {}\n{}\n", q.quest.id, q.quest.solution.to_uppercase()))
        .collect();

    let (status, text) = play(&mut state, &script, &mut FrozenClock);
    assert_eq!(status, Status::Won(WinReason::AllQuestsSolved));
    assert_eq!(state.player.completed, 2);
    assert!(text.contains("completed all quests"));
}

// Time budget behavior: by default the budget is displayed but never spent,
// so it cannot end the game no matter how long play takes.
#[test]
fn time_budget_is_frozen_by_default() {
    let mut state = game(Overrides::default());
    let before = state.player.stats.time_left;
    let (status, _) = play(&mut state, "look\nstats\nlook\n", &mut FrozenClock);
    assert_eq!(status, Status::Quit);
    assert_eq!(state.player.stats.time_left, before);
}

#[test]
fn running_clock_can_end_the_game() {
    let mut state = game(Overrides {
        time_limit_minutes: Some(1),
        ..Default::default()
    });
    let mut clock = FakeClock(Duration::from_secs(25));
    let (status, text) = play(&mut state, "look\nlook\nlook\nlook\n", &mut clock);
    assert_eq!(status, Status::Lost(LossReason::TimeUp));
    assert!(text.contains("TIME'S UP"));
}

#[test]
fn time_is_checked_before_energy() {
    let mut state = game(Overrides {
        time_limit_minutes: Some(0),
        ..Default::default()
    });
    state.player.stats.energy = 0;
    let (status, _) = play(&mut state, "look\n", &mut FrozenClock);
    assert_eq!(status, Status::Lost(LossReason::TimeUp));
}
