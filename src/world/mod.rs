mod loader;
mod model;
mod validator;

pub use loader::{DEFAULT_WORLD, load_default_world, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{
    CategoryInfo, ClockMode, Exit, Item, ItemLocation, Quest, QuestCategory, Room, Skill, World,
    WorldSettings,
};
pub use validator::{ValidationError, validate_world};
