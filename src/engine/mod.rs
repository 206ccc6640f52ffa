mod command;
mod helpers;
mod items;
mod movement;
mod output;
mod player;
mod quests;
mod render;
mod stats;

pub use command::{Command, CommandError, parse};

pub use helpers::{names_match, normalize};

pub use items::{UseResult, handle_inventory, handle_take, handle_use, initial_placement};

pub use movement::{find_exit, handle_go};
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use quests::{AttemptOutcome, QuestLookup, QuestTracker, SessionQuest};
pub use render::{
    format_duration, render_help, render_hints, render_quest_brief, render_quest_list,
    render_quest_unavailable, render_room, render_stats,
};
pub use stats::{MAX_ENERGY, PlayerStats, SKILL_PER_DIFFICULTY, WRONG_ANSWER_ENERGY_COST};
