use log::debug;

use crate::engine::helpers::names_match;
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::world;

pub fn find_exit<'a>(room: &'a world::Room, direction: &str) -> Option<&'a world::Exit> {
    room.exits
        .iter()
        .find(|e| names_match(&e.direction, direction))
}

/// Move through a named exit of the current room. Returns true when the player
/// changed rooms; otherwise nothing changes. Room `solved` flags are not consulted.
pub fn handle_go(
    out: &mut Output,
    player: &mut Player,
    world: &world::World,
    direction: &str,
) -> bool {
    let Some(room) = world.rooms.get(&player.current_room) else {
        out.say(format!(
            "Error: you are in an unknown room '{}'",
            player.current_room
        ));
        return false;
    };

    match find_exit(room, direction) {
        Some(exit) => {
            debug!("move {} -> {}", room.id, exit.target);
            player.current_room = exit.target.clone();
            out.event(format!("You go {}...", exit.direction));
            true
        }
        None => {
            out.say(format!("You can't go {} from here.", direction.trim()));
            false
        }
    }
}
