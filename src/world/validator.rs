use std::collections::HashSet;

use super::model::{ItemLocation, World};
use crate::engine::normalize;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Validate exits
    for (room_id, room) in &world.rooms {
        let mut seen_dirs: HashSet<String> = HashSet::new();
        for exit in &room.exits {
            if !world.rooms.contains_key(&exit.target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_id, exit.direction, exit.target
                )));
            }
            if !seen_dirs.insert(normalize(&exit.direction)) {
                errors.push(ValidationError::new(format!(
                    "room '{}' has more than one '{}' exit",
                    room_id, exit.direction
                )));
            }
        }
    }

    // Any item can end up in the inventory, so names are unique world-wide
    let mut seen_items: HashSet<String> = HashSet::new();
    for item in &world.items {
        if let ItemLocation::Room(r) = &item.start_location {
            if !world.rooms.contains_key(r) {
                errors.push(ValidationError::new(format!(
                    "item '{}' start_location room '{}' not found",
                    item.name, r
                )));
            }
        }

        if normalize(&item.name).is_empty() {
            errors.push(ValidationError::new("item with an empty name"));
        } else if !seen_items.insert(normalize(&item.name)) {
            errors.push(ValidationError::new(format!(
                "item name '{}' is used more than once",
                item.name
            )));
        }
    }

    // Quests
    let mut seen_quests: HashSet<u32> = HashSet::new();
    for quest in &world.quests {
        if quest.id == 0 {
            errors.push(ValidationError::new(format!(
                "quest '{}' uses reserved id 0",
                quest.name
            )));
        }
        if !seen_quests.insert(quest.id) {
            errors.push(ValidationError::new(format!(
                "duplicate quest id {}",
                quest.id
            )));
        }
        if !(1..=5).contains(&quest.difficulty) {
            errors.push(ValidationError::new(format!(
                "quest {} difficulty {} is outside 1-5",
                quest.id, quest.difficulty
            )));
        }
        // Rewards land in the inventory beside the items
        if !seen_items.insert(normalize(&quest.reward)) {
            errors.push(ValidationError::new(format!(
                "quest {} reward '{}' clashes with another item name",
                quest.id, quest.reward
            )));
        }
        if normalize(&quest.solution).is_empty() {
            errors.push(ValidationError::new(format!(
                "quest {} has an empty solution",
                quest.id
            )));
        }
    }

    for item in &world.items {
        if item.quest_id != 0 && !seen_quests.contains(&item.quest_id) {
            errors.push(ValidationError::new(format!(
                "item '{}' references unknown quest {}",
                item.name, item.quest_id
            )));
        }
    }

    if world.settings.start_energy > 100 {
        errors.push(ValidationError::new(format!(
            "start_energy {} exceeds 100",
            world.settings.start_energy
        )));
    }

    errors
}
