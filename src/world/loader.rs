use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::model::{
    ClockMode, Exit, Item, ItemLocation, Quest, QuestCategory, Room, World, WorldSettings,
};
use super::validator::validate_world;
use crate::error::WorldError;

/// The built-in world, compiled into the binary.
pub const DEFAULT_WORLD: &str = include_str!("../../worlds/cosmic.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    settings: SettingsConfig,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
    #[serde(default)]
    quest: Vec<QuestConfig>, // [[quest]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize, Default)]
struct SettingsConfig {
    start_energy: Option<u8>,
    base_skill: Option<u32>,
    time_limit_minutes: Option<u64>,
    quest_count: Option<usize>,
    quests_enabled: Option<bool>,
    clock: Option<ClockMode>,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    solved: bool,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    name: String,

    /// Where the item starts: "room:kitchen" or "inventory".
    start_location: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    usable: bool,

    #[serde(default)]
    quest: u32,
}

#[derive(Deserialize)]
struct QuestConfig {
    id: u32,
    name: String,
    #[serde(default)]
    desc: String,
    category: QuestCategory,
    difficulty: u8,
    #[serde(default)]
    time_limit_minutes: u64,
    reward: String,
    #[serde(default)]
    requirements: Vec<String>,
    solution: String,
    #[serde(default)]
    hints: Vec<String>,
    #[serde(default)]
    example: String,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Load the world that ships with the game.
pub fn load_default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Public API: load a world from a TOML string.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Data("world.id may not be empty".into()));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Data("world.start_room may not be empty".into()));
    }

    // Build rooms map
    let mut rooms_map: HashMap<String, Room> = HashMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.id) {
            return Err(WorldError::Data(format!(
                "Duplicate room id: {}",
                room_cfg.id
            )));
        }

        let exits = room_cfg
            .exit
            .into_iter()
            .map(|e| Exit {
                direction: e.direction.trim().to_lowercase(),
                target: e.target,
            })
            .collect();

        rooms_map.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name: room_cfg.name,
                desc: normalize_multiline_desc(&room_cfg.desc),
                exits,
                solved: room_cfg.solved,
            },
        );
    }

    let mut items = Vec::with_capacity(world_file.item.len());
    for item_cfg in world_file.item {
        let start_location = parse_location(&item_cfg.start_location)?;
        items.push(Item {
            name: item_cfg.name,
            desc: normalize_multiline_desc(&item_cfg.desc),
            usable: item_cfg.usable,
            quest_id: item_cfg.quest,
            start_location,
        });
    }

    let mut quests = Vec::with_capacity(world_file.quest.len());
    for q in world_file.quest {
        quests.push(Quest {
            id: q.id,
            name: q.name,
            desc: normalize_multiline_desc(&q.desc),
            category: q.category,
            difficulty: q.difficulty,
            time_limit: minutes(q.time_limit_minutes)?,
            reward: q.reward,
            requirements: q.requirements,
            solution: q.solution,
            hints: q.hints,
            example: q.example,
        });
    }

    let defaults = WorldSettings::default();
    let s = world_file.settings;
    let settings = WorldSettings {
        start_energy: s.start_energy.unwrap_or(defaults.start_energy),
        base_skill: s.base_skill.unwrap_or(defaults.base_skill),
        time_limit: match s.time_limit_minutes {
            Some(m) => minutes(m)?,
            None => defaults.time_limit,
        },
        quest_count: s.quest_count.unwrap_or(defaults.quest_count),
        quests_enabled: s.quests_enabled.unwrap_or(defaults.quests_enabled),
        clock: s.clock.unwrap_or(defaults.clock),
    };

    let world = World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: normalize_multiline_desc(&world_file.world.desc),
        start_room: world_file.world.start_room,
        rooms: rooms_map,
        items,
        quests,
        settings,
    };

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    Ok(world)
}

fn minutes(m: u64) -> Result<Duration, WorldError> {
    m.checked_mul(60)
        .map(Duration::from_secs)
        .ok_or_else(|| WorldError::Data(format!("time_limit_minutes {} is too large", m)))
}

fn parse_location(raw: &str) -> Result<ItemLocation, WorldError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("inventory") {
        return Ok(ItemLocation::Inventory);
    }
    match raw.split_once(':') {
        Some((kind, room)) if kind.eq_ignore_ascii_case("room") && !room.trim().is_empty() => {
            Ok(ItemLocation::Room(room.trim().to_string()))
        }
        _ => Err(WorldError::Data(format!(
            "unrecognized start_location '{}'",
            raw
        ))),
    }
}

/// Collapse TOML multi-line strings: strip indentation, join wrapped lines with a
/// space, keep blank lines as paragraph breaks.
fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !first_text_seen {
            result.push_str(trimmed);
            first_text_seen = true;
        } else if pending_blank_lines > 0 {
            result.push_str("\n\n");
            result.push_str(trimmed);
        } else {
            result.push(' ');
            result.push_str(trimmed);
        }
        pending_blank_lines = 0;
    }

    result
}
