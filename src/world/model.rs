use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Static world templates. Runtime placement lives in `GameState`.
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub items: Vec<Item>,
    pub quests: Vec<Quest>,
    pub settings: WorldSettings,
}

pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub exits: Vec<Exit>,
    // Reserved for puzzle-gated exits; movement never checks it.
    pub solved: bool,
}

pub struct Exit {
    pub direction: String,
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemLocation {
    Room(String),
    Inventory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub desc: String,
    pub usable: bool,
    /// 0 when the item is not tied to a quest.
    pub quest_id: u32,
    pub start_location: ItemLocation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Hacker,
    Engineering,
    Astronomical,
    Biological,
    Physical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Skill {
    Hacking,
    Engineering,
    Astronomy,
    Biology,
    Physics,
}

/// Display metadata carried per category.
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub skill: Skill,
}

static CATEGORY_INFO: [CategoryInfo; 5] = [
    CategoryInfo {
        label: "Hacker",
        icon: "[HCK]",
        skill: Skill::Hacking,
    },
    CategoryInfo {
        label: "Engineering",
        icon: "[ENG]",
        skill: Skill::Engineering,
    },
    CategoryInfo {
        label: "Astronomical",
        icon: "[AST]",
        skill: Skill::Astronomy,
    },
    CategoryInfo {
        label: "Biological",
        icon: "[BIO]",
        skill: Skill::Biology,
    },
    CategoryInfo {
        label: "Physical",
        icon: "[PHY]",
        skill: Skill::Physics,
    },
];

impl QuestCategory {
    pub const ALL: [QuestCategory; 5] = [
        QuestCategory::Hacker,
        QuestCategory::Engineering,
        QuestCategory::Astronomical,
        QuestCategory::Biological,
        QuestCategory::Physical,
    ];

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_INFO[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn skill(self) -> Skill {
        self.info().skill
    }
}

#[derive(Clone, Debug)]
pub struct Quest {
    /// Authored id; stable but not sequential.
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub category: QuestCategory,
    /// 1..=5
    pub difficulty: u8,
    /// Advisory only.
    pub time_limit: Duration,
    pub reward: String,
    /// Descriptive only; never enforced.
    pub requirements: Vec<String>,
    pub solution: String,
    pub hints: Vec<String>,
    pub example: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Time budget is displayed and checked but never spent.
    Frozen,
    /// Real elapsed time is subtracted between input cycles.
    Wall,
}

#[derive(Clone, Debug)]
pub struct WorldSettings {
    pub start_energy: u8,
    pub base_skill: u32,
    pub time_limit: Duration,
    pub quest_count: usize,
    pub quests_enabled: bool,
    pub clock: ClockMode,
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            start_energy: 100,
            base_skill: 50,
            time_limit: Duration::from_secs(60 * 60),
            quest_count: 5,
            quests_enabled: true,
            clock: ClockMode::Frozen,
        }
    }
}
