pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod world;

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::Settings;
use engine::{
    AttemptOutcome, Command, Output, Player, QuestLookup, QuestTracker, UseResult,
    handle_inventory, handle_take, handle_use, initial_placement, render_help, render_hints,
    render_quest_brief, render_quest_list, render_quest_unavailable, render_room, render_stats,
};
use world::{World, WorldSettings};

pub use error::WorldError;
pub use world::{load_default_world, load_world_from_file, load_world_from_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    AllQuestsSolved,
    DoorUnlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    TimeUp,
    EnergyDepleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Won(WinReason),
    Lost(LossReason),
    Quit,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::Running
    }
}

/// The whole mutable game: world templates, item placement, player and quests.
pub struct GameState {
    pub world: World,
    pub settings: WorldSettings,
    /// Items currently lying in each room, keyed by room id.
    pub room_items: HashMap<String, Vec<world::Item>>,
    pub player: Player,
    pub quests: QuestTracker,
    /// Quest whose answer the next input line supplies.
    pub pending_answer: Option<u32>,
    pub status: Status,
}

impl GameState {
    pub fn new(world: World, settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(world, settings.game.clone(), &mut rng)
    }

    pub fn with_rng(world: World, settings: WorldSettings, rng: &mut StdRng) -> Self {
        let (room_items, inventory) = initial_placement(&world);
        let mut player = Player::new(&world.start_room, &settings);
        player.inventory = inventory;

        let quests = if settings.quests_enabled {
            QuestTracker::select_session(&world.quests, settings.quest_count, rng)
        } else {
            QuestTracker::empty()
        };

        info!(
            "new session in '{}' with {} quest(s)",
            world.id,
            quests.len()
        );

        GameState {
            world,
            settings,
            room_items,
            player,
            quests,
            pending_answer: None,
            status: Status::Running,
        }
    }

    /// Welcome text and the first room view.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        out.say(format!("Welcome to {}!", self.world.name));
        out.say(self.world.desc.clone());
        out.say("Type 'help' for commands or 'quit' to exit.");
        self.look(&mut out);
        out
    }

    pub fn look(&self, out: &mut Output) {
        if let Some(room) = self.world.rooms.get(&self.player.current_room) {
            let items = self
                .room_items
                .get(&room.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            render_room(out, room, items, &self.player.stats);
        }
    }

    /// Advance the time budget. Only called when the clock is running.
    pub fn tick(&mut self, elapsed: Duration) {
        self.player.stats.spend_time(elapsed);
    }

    /// Loss checks run once per input cycle, before the line is read: time first,
    /// then energy.
    pub fn check_depletion(&mut self) -> Status {
        if self.status == Status::Running {
            if self.player.stats.out_of_time() {
                self.status = Status::Lost(LossReason::TimeUp);
            } else if self.player.stats.exhausted() {
                self.status = Status::Lost(LossReason::EnergyDepleted);
            }
        }
        self.status
    }

    /// Process a single player input; returns the output and the resulting status.
    pub fn step(&mut self, input: &str) -> (Output, Status) {
        let mut out = Output::new();
        if self.status.is_over() {
            return (out, self.status);
        }

        if let Some(id) = self.pending_answer.take() {
            self.answer_quest(&mut out, id, input);
            return (out, self.status);
        }

        let line = input.trim();
        if line.is_empty() {
            return (out, self.status);
        }

        match engine::parse(line, self.settings.quests_enabled) {
            Ok(cmd) => {
                debug!("command {:?}", cmd);
                self.dispatch(&mut out, cmd);
            }
            Err(e) => {
                debug!("rejected input '{}': {:?}", line, e);
                out.say(e.to_string());
            }
        }

        (out, self.status)
    }

    fn dispatch(&mut self, out: &mut Output, cmd: Command) {
        match cmd {
            Command::Look => self.look(out),
            Command::Inventory => handle_inventory(out, &self.player),
            Command::Take(name) => {
                if handle_take(out, &mut self.room_items, &mut self.player, &name) {
                    self.look(out);
                }
            }
            Command::Use(name) => {
                if handle_use(out, &self.player, &self.world, &name) == UseResult::DoorUnlocked {
                    out.event("You have escaped the room! Congratulations!");
                    self.status = Status::Won(WinReason::DoorUnlocked);
                }
            }
            Command::Go(direction) => {
                if engine::handle_go(out, &mut self.player, &self.world, &direction) {
                    self.look(out);
                }
            }
            Command::Quests => render_quest_list(out, &self.quests),
            Command::Start(id) => match self.quests.find(id) {
                QuestLookup::Open(quest) => {
                    render_quest_brief(out, quest);
                    self.pending_answer = Some(id);
                }
                QuestLookup::Solved(_) | QuestLookup::NotFound => {
                    render_quest_unavailable(out, &self.quests);
                }
            },
            Command::Hints(id) => match (self.quests.find(id), self.quests.hints(id)) {
                (QuestLookup::Open(quest) | QuestLookup::Solved(quest), Some((hints, example))) => {
                    render_hints(out, quest, hints, example);
                }
                _ => out.say("Quest not found!"),
            },
            Command::Stats => render_stats(out, &self.player, &self.quests),
            Command::Help => render_help(out, self.settings.quests_enabled),
            Command::Quit => {
                out.event("Thanks for playing! Goodbye!");
                self.status = Status::Quit;
            }
        }
    }

    /// Submit an answer for a quest directly, as if typed after `start`.
    pub fn answer_quest(&mut self, out: &mut Output, id: u32, answer: &str) -> AttemptOutcome {
        let outcome = self.quests.attempt(id, answer.trim(), &mut self.player);
        match &outcome {
            AttemptOutcome::Correct {
                reward,
                skill,
                gained,
                all_solved,
                ..
            } => {
                out.event(format!("QUEST COMPLETED! You earned: {}", reward));
                out.event(format!("{:?} improved by {}.", skill, gained));
                if *all_solved {
                    out.event("CONGRATULATIONS! You completed all quests!");
                    out.event("You have successfully escaped the facility!");
                    self.status = Status::Won(WinReason::AllQuestsSolved);
                }
            }
            AttemptOutcome::Incorrect { energy_left } => {
                out.event("Incorrect solution! Try again.");
                out.say(format!("Energy: {}/{}", energy_left, engine::MAX_ENERGY));
            }
            AttemptOutcome::NotAvailable => render_quest_unavailable(out, &self.quests),
        }
        outcome
    }
}
