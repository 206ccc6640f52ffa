use std::collections::HashMap;

use log::{debug, info};

use crate::engine::helpers::names_match;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world;

// The one hard-coded escape: this item, used in this room.
const DOOR_KEY: &str = "key";
const DOOR_ROOM: &str = "living room";

#[derive(Debug, PartialEq, Eq)]
pub enum UseResult {
    NotCarried,
    DoorUnlocked,
    NoEffect,
}

/// Place the world's starting items. Returns the per-room item lists and the
/// starting inventory.
pub fn initial_placement(world: &world::World) -> (HashMap<String, Vec<world::Item>>, Vec<world::Item>) {
    use world::ItemLocation;

    let mut room_items: HashMap<String, Vec<world::Item>> = world
        .rooms
        .keys()
        .map(|id| (id.clone(), Vec::new()))
        .collect();
    let mut inventory = Vec::new();

    for item in &world.items {
        match &item.start_location {
            ItemLocation::Room(room_id) => {
                room_items
                    .entry(room_id.clone())
                    .or_default()
                    .push(item.clone());
            }
            ItemLocation::Inventory => inventory.push(item.clone()),
        }
    }

    (room_items, inventory)
}

pub fn handle_inventory(out: &mut Output, player: &Player) {
    if player.inventory.is_empty() {
        out.say("Your inventory is empty.");
        return;
    }

    out.say("You are carrying:");
    for item in &player.inventory {
        if item.desc.is_empty() {
            out.say(format!("  {}", item.name));
        } else {
            out.say(format!("  {} - {}", item.name, item.desc));
        }
    }
}

/// Move a named item from the current room into the inventory. Returns true on
/// success; on failure neither container changes.
pub fn handle_take(
    out: &mut Output,
    room_items: &mut HashMap<String, Vec<world::Item>>,
    player: &mut Player,
    target_name: &str,
) -> bool {
    let Some(items) = room_items.get_mut(&player.current_room) else {
        out.say(format!("There's no {} here.", target_name.trim()));
        return false;
    };

    match items.iter().position(|i| names_match(&i.name, target_name)) {
        Some(idx) => {
            let mut item = items.remove(idx);
            item.start_location = world::ItemLocation::Inventory;
            debug!("took '{}' from {}", item.name, player.current_room);
            out.event(format!("You take the {}.", item.name));
            player.inventory.push(item);
            true
        }
        None => {
            out.say(format!("There's no {} here.", target_name.trim()));
            false
        }
    }
}

/// Use a carried item. Only the key in the living room does anything.
pub fn handle_use(
    out: &mut Output,
    player: &Player,
    world: &world::World,
    target_name: &str,
) -> UseResult {
    let Some(item) = player.carried(target_name) else {
        out.say(format!("You don't have a {}.", target_name.trim()));
        return UseResult::NotCarried;
    };

    let in_door_room = world
        .rooms
        .get(&player.current_room)
        .is_some_and(|room| names_match(&room.name, DOOR_ROOM));

    if names_match(&item.name, DOOR_KEY) && in_door_room {
        info!("door unlocked with the key");
        out.event("You try the key in the locked door...");
        out.event("SUCCESS! The door unlocks!");
        UseResult::DoorUnlocked
    } else {
        out.say(format!("You can't use the {} here.", item.name));
        UseResult::NoEffect
    }
}
