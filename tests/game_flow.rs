//! Integration tests for the command loop: movement, items, quests and the
//! win/lose conditions, driven through `GameState::step`.

use cosmic_escape::config::Settings;
use cosmic_escape::engine::QuestLookup;
use cosmic_escape::world::load_world_from_str;
use cosmic_escape::{GameState, LossReason, Status, WinReason};

const WORLD: &str = r#"
[world]
id = "test"
name = "Test Station"
start_room = "kitchen"

[settings]
quest_count = 3

[[room]]
id = "kitchen"
name = "Kitchen"
desc = "Pots and pans."

[[room.exit]]
direction = "south"
target = "living"

[[room]]
id = "living"
name = "Living Room"
desc = "A locked door."

[[room.exit]]
direction = "north"
target = "kitchen"

[[item]]
name = "key"
start_location = "room:kitchen"
usable = true

[[quest]]
id = 1
name = "Binary Hack"
category = "hacker"
difficulty = 2
reward = "Cyber key"
solution = "Hacker"
hints = ["Each byte is a letter.", "The word is in English."]
example = "01001000 = H"

[[quest]]
id = 2
name = "Math Sequence"
category = "hacker"
difficulty = 3
reward = "Neuro implant"
solution = "128"
hints = ["Each number doubles."]

[[quest]]
id = 41
name = "Star Map"
category = "astronomical"
difficulty = 2
reward = "Navigation chip"
solution = "Orion"
"#;

fn new_game() -> GameState {
    let world = load_world_from_str(WORLD).expect("test world loads");
    let mut settings = Settings::resolve(&world.settings, &Default::default());
    settings.seed = Some(11);
    GameState::new(world, &settings)
}

fn solve(game: &mut GameState, id: u32, answer: &str) -> Status {
    let (_, status) = game.step(&format!("start {id}"));
    assert_eq!(status, Status::Running);
    assert_eq!(game.pending_answer, Some(id));
    game.step(answer).1
}

#[test]
fn mixed_case_direction_moves_player() {
    let mut game = new_game();
    let (out, status) = game.step("go SOUTH");
    assert_eq!(status, Status::Running);
    assert_eq!(game.player.current_room, "living");
    assert!(out.contains("Living Room"));
}

#[test]
fn undefined_exit_keeps_player_in_place() {
    let mut game = new_game();
    let (out, _) = game.step("go north");
    assert_eq!(game.player.current_room, "kitchen");
    assert!(out.contains("can't go north"));
}

#[test]
fn take_moves_item_out_of_room() {
    let mut game = new_game();
    game.step("take KEY");
    assert!(game.room_items["kitchen"].is_empty());
    assert_eq!(game.player.inventory.len(), 1);

    let (out, _) = game.step("take key");
    assert!(out.contains("no key here"));
    assert_eq!(game.player.inventory.len(), 1);
}

#[test]
fn key_in_living_room_wins() {
    let mut game = new_game();
    game.step("take key");
    let (_, status) = game.step("use key");
    assert_eq!(status, Status::Running);

    game.step("go south");
    let (out, status) = game.step("use key");
    assert_eq!(status, Status::Won(WinReason::DoorUnlocked));
    assert!(out.contains("escaped"));
}

#[test]
fn solved_quest_is_not_available_again() {
    let mut game = new_game();
    assert_eq!(solve(&mut game, 2, "128"), Status::Running);
    assert_eq!(game.player.completed, 1);
    assert_eq!(game.player.stats.hacking, 65);
    assert!(game.player.carried("neuro implant").is_some());

    let (out, status) = game.step("start 2");
    assert_eq!(status, Status::Running);
    assert!(out.contains("not found or already completed"));
    assert_eq!(game.pending_answer, None);

    // The next line is an ordinary command again, so nothing is charged
    game.step("64");
    assert_eq!(game.player.stats.energy, 100);
    assert_eq!(game.player.completed, 1);
}

#[test]
fn wrong_answer_costs_ten_energy() {
    let mut game = new_game();
    assert_eq!(solve(&mut game, 1, "cracker"), Status::Running);
    assert_eq!(game.player.stats.energy, 90);
    assert!(matches!(game.quests.find(1), QuestLookup::Open(_)));
}

#[test]
fn empty_answer_line_is_a_wrong_answer() {
    let mut game = new_game();
    solve(&mut game, 41, "   ");
    assert_eq!(game.player.stats.energy, 90);
}

#[test]
fn solving_every_session_quest_wins() {
    let mut game = new_game();
    assert_eq!(game.quests.len(), 3);

    assert_eq!(solve(&mut game, 1, "hacker"), Status::Running);
    assert_eq!(solve(&mut game, 41, "ORION"), Status::Running);
    assert!(!game.quests.all_solved());

    assert_eq!(
        solve(&mut game, 2, " 128 "),
        Status::Won(WinReason::AllQuestsSolved)
    );
    assert!(game.quests.all_solved());

    // Nothing happens after the game is over
    let (out, status) = game.step("look");
    assert!(out.blocks.is_empty());
    assert_eq!(status, Status::Won(WinReason::AllQuestsSolved));
}

#[test]
fn energy_depletion_is_detected_before_next_read() {
    let mut game = new_game();
    for _ in 0..10 {
        solve(&mut game, 1, "wrong");
    }
    assert_eq!(game.player.stats.energy, 0);
    assert_eq!(game.check_depletion(), Status::Lost(LossReason::EnergyDepleted));
}

#[test]
fn non_numeric_quest_id_changes_nothing() {
    let mut game = new_game();
    let (out, status) = game.step("start abc");
    assert_eq!(status, Status::Running);
    assert!(out.contains("Invalid quest ID"));
    assert_eq!(game.pending_answer, None);
    assert_eq!(game.player.stats.energy, 100);
}

#[test]
fn oversized_quest_id_is_reported_as_not_found() {
    let mut game = new_game();
    let (out, status) = game.step("start 99999999999");
    assert_eq!(status, Status::Running);
    assert!(out.contains("Quest not found or already completed!"));
    assert!(!out.contains("Invalid quest ID"));
    assert_eq!(game.pending_answer, None);

    let (out, _) = game.step("hints 99999999999");
    assert!(out.contains("Quest not found!"));
}

#[test]
fn missing_arguments_prompt() {
    let mut game = new_game();
    assert!(game.step("take").0.contains("Take what?"));
    assert!(game.step("use").0.contains("Use what?"));
    assert!(game.step("go").0.contains("Go where?"));
}

#[test]
fn unknown_command_is_harmless() {
    let mut game = new_game();
    let (out, status) = game.step("xyzzy");
    assert_eq!(status, Status::Running);
    assert!(out.contains("I don't understand"));
    assert_eq!(game.player.current_room, "kitchen");
}

#[test]
fn hints_available_after_completion() {
    let mut game = new_game();
    solve(&mut game, 1, "hacker");
    let (out, _) = game.step("hints 1");
    assert!(out.contains("Each byte is a letter."));
    assert!(out.contains("01001000 = H"));

    let (out, _) = game.step("hints 99");
    assert!(out.contains("Quest not found"));
}

#[test]
fn look_lists_items_and_exits() {
    let game = new_game();
    let out = game.initialize();
    assert!(out.contains("Kitchen"));
    assert!(out.contains("key"));
    assert!(out.contains("Exits: south"));
}

#[test]
fn stats_report_completed_count() {
    let mut game = new_game();
    solve(&mut game, 41, "orion");
    let (out, _) = game.step("stats");
    assert!(out.contains("Quests completed: 1/3"));
    assert!(out.contains("Astronomy: 60"));
}

#[test]
fn quit_ends_session() {
    let mut game = new_game();
    assert_eq!(game.step("exit").1, Status::Quit);
}

#[test]
fn quest_commands_unknown_without_quests() {
    let world = load_world_from_str(WORLD).unwrap();
    let mut settings = Settings::resolve(&world.settings, &Default::default());
    settings.game.quests_enabled = false;
    let mut game = GameState::new(world, &settings);

    assert!(game.quests.is_empty());
    assert!(game.step("quests").0.contains("I don't understand"));
    assert!(game.step("start 1").0.contains("I don't understand"));
}
