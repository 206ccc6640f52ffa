use std::time::Duration;

use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::engine::quests::QuestTracker;
use crate::engine::stats::{MAX_ENERGY, PlayerStats};
use crate::world;

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h{:02}m{:02}s", h, m, s)
    } else {
        format!("{}m{:02}s", m, s)
    }
}

fn stat_lines(out: &mut Output, stats: &PlayerStats) {
    out.say(format!(
        "  Hacking: {}    Engineering: {}",
        stats.hacking, stats.engineering
    ));
    out.say(format!(
        "  Astronomy: {}  Biology: {}",
        stats.astronomy, stats.biology
    ));
    out.say(format!(
        "  Physics: {}    Energy: {}/{}",
        stats.physics, stats.energy, MAX_ENERGY
    ));
    out.say(format!("  Time left: {}", format_duration(stats.time_left)));
}

pub fn render_room(out: &mut Output, room: &world::Room, items: &[world::Item], stats: &PlayerStats) {
    out.title(room.name.clone());
    out.say(room.desc.clone());

    out.say("Your stats:");
    stat_lines(out, stats);

    if !items.is_empty() {
        out.say("You can see:");
        for item in items {
            if item.desc.is_empty() {
                out.say(format!("  {}", item.name));
            } else {
                out.say(format!("  {} - {}", item.name, item.desc));
            }
        }
    }

    if room.exits.is_empty() {
        out.set_exits("Exits: (none)");
    } else {
        let mut dirs: Vec<&str> = room.exits.iter().map(|e| e.direction.as_str()).collect();
        dirs.sort();
        dirs.dedup();
        out.set_exits(format!("Exits: {}", dirs.join(", ")));
    }
}

pub fn render_stats(out: &mut Output, player: &Player, quests: &QuestTracker) {
    out.title("Detailed stats");
    stat_lines(out, &player.stats);
    out.say(format!(
        "  Quests completed: {}/{}",
        player.completed,
        quests.len()
    ));
}

fn quest_header(out: &mut Output, quest: &world::Quest) {
    let info = quest.category.info();
    out.say(format!("{} Category: {}", info.icon, info.label));
    out.say(format!("Difficulty: {}/5", quest.difficulty));
}

fn open_ids_line(quests: &QuestTracker) -> String {
    quests
        .open_ids()
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_quest_list(out: &mut Output, quests: &QuestTracker) {
    out.title("Your quests");

    if quests.is_empty() {
        out.say("No active quests!");
        return;
    }

    for entry in quests.quests() {
        let q = &entry.quest;
        let status = if entry.solved { "[x]" } else { "[ ]" };
        let info = q.category.info();
        out.say(format!(
            "{} {} {} (ID: {}) - {}",
            status, info.icon, q.name, q.id, info.label
        ));
        out.say(format!("    Difficulty: {}/5", q.difficulty));
        out.say(format!("    Time limit: {}", format_duration(q.time_limit)));
        out.say(format!("    Reward: {}", q.reward));
        out.say(format!("    Description: {}", q.desc));
    }

    let open = open_ids_line(quests);
    if open.is_empty() {
        out.say("All quests are completed.");
    } else {
        out.say(format!("Available quest IDs: {}", open));
    }
}

/// Shown by `start` before the answer prompt.
pub fn render_quest_brief(out: &mut Output, quest: &world::Quest) {
    out.title(format!("Starting quest: {}", quest.name));
    quest_header(out, quest);
    out.say(format!("Time limit: {}", format_duration(quest.time_limit)));
    out.say(format!("Reward: {}", quest.reward));
    if !quest.requirements.is_empty() {
        out.say(format!("Requires: {}", quest.requirements.join(", ")));
    }
    out.say(quest.desc.clone());
    out.say("Enter your solution:");
}

pub fn render_quest_unavailable(out: &mut Output, quests: &QuestTracker) {
    out.say("Quest not found or already completed!");
    let open = open_ids_line(quests);
    if open.is_empty() {
        out.say("No available quests! All quests are completed.");
    } else {
        out.say(format!("Available quest IDs: {}", open));
    }
}

pub fn render_hints(out: &mut Output, quest: &world::Quest, hints: &[String], example: &str) {
    out.title(format!("Hints for: {}", quest.name));
    quest_header(out, quest);
    out.say(quest.desc.clone());
    if hints.is_empty() {
        out.say("No hints for this one.");
    }
    for (i, hint) in hints.iter().enumerate() {
        out.say(format!("Hint {}: {}", i + 1, hint));
    }
    if !example.is_empty() {
        out.say(format!("Example: {}", example));
    }
}

pub fn render_help(out: &mut Output, quests_enabled: bool) {
    out.title("Game help");
    out.say("Available commands:");
    out.say("  look/l - Look around the current room");
    out.say("  take <item> - Pick up an item");
    out.say("  inventory/i - Check your inventory");
    out.say("  use <item> - Use an item");
    out.say("  go <direction> - Move in a direction");
    if quests_enabled {
        out.say("  quests/q - Show your quests");
        out.say("  start <quest_id> - Start a quest");
        out.say("  hints <quest_id> - Show hints for a quest");
    }
    out.say("  stats/s - Show detailed stats");
    out.say("  help/h - Show this help");
    out.say("  quit/exit - Exit the game");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h00m00s");
        assert_eq!(format_duration(Duration::from_secs(7 * 60 + 5)), "7m05s");
    }

    #[test]
    fn help_hides_quest_commands_when_disabled() {
        let mut out = Output::new();
        render_help(&mut out, false);
        assert!(!out.contains("start <quest_id>"));
        assert!(out.contains("quit/exit"));
    }
}
