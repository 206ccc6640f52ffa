use crate::engine::helpers::names_match;
use crate::engine::stats::PlayerStats;
use crate::world::{Item, WorldSettings};

pub struct Player {
    /// Room id; always a key of `World::rooms`.
    pub current_room: String,
    /// Acquisition order.
    pub inventory: Vec<Item>,
    pub stats: PlayerStats,
    pub completed: usize,
}

impl Player {
    pub fn new(start_room: &str, settings: &WorldSettings) -> Self {
        Player {
            current_room: start_room.to_string(),
            inventory: Vec::new(),
            stats: PlayerStats::from_settings(settings),
            completed: 0,
        }
    }

    pub fn carried(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| names_match(&i.name, name))
    }
}
