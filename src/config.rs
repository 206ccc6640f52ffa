//! Run settings: the world file's `[settings]` table with command-line overrides
//! applied on top (CLI > world file > defaults).

use std::time::Duration;

use crate::world::{ClockMode, WorldSettings};

/// Upper bound accepted for `--time-limit`: one week.
pub const MAX_TIME_LIMIT_MINUTES: u64 = 7 * 24 * 60;

/// Values the command line may override. `None` keeps the world file's value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub quest_count: Option<usize>,
    pub quests_enabled: Option<bool>,
    pub clock: Option<ClockMode>,
    pub time_limit_minutes: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub game: WorldSettings,
    /// Fixed seed for quest selection; entropy when absent.
    pub seed: Option<u64>,
}

impl Settings {
    pub fn resolve(world: &WorldSettings, overrides: &Overrides) -> Self {
        let mut game = world.clone();
        if let Some(n) = overrides.quest_count {
            game.quest_count = n;
        }
        if let Some(enabled) = overrides.quests_enabled {
            game.quests_enabled = enabled;
        }
        if let Some(clock) = overrides.clock {
            game.clock = clock;
        }
        if let Some(minutes) = overrides.time_limit_minutes {
            game.time_limit = Duration::from_secs(minutes.saturating_mul(60));
        }
        Settings {
            game,
            seed: overrides.seed,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::resolve(&WorldSettings::default(), &Overrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_values_survive_without_overrides() {
        let mut world = WorldSettings::default();
        world.quest_count = 3;
        let s = Settings::resolve(&world, &Overrides::default());
        assert_eq!(s.game.quest_count, 3);
        assert_eq!(s.game.clock, ClockMode::Frozen);
        assert!(s.seed.is_none());
    }

    #[test]
    fn cli_overrides_win() {
        let overrides = Overrides {
            quest_count: Some(2),
            quests_enabled: Some(false),
            clock: Some(ClockMode::Wall),
            time_limit_minutes: Some(10),
            seed: Some(42),
        };
        let s = Settings::resolve(&WorldSettings::default(), &overrides);
        assert_eq!(s.game.quest_count, 2);
        assert!(!s.game.quests_enabled);
        assert_eq!(s.game.clock, ClockMode::Wall);
        assert_eq!(s.game.time_limit, Duration::from_secs(600));
        assert_eq!(s.seed, Some(42));
    }

    #[test]
    fn huge_time_limit_saturates() {
        let overrides = Overrides {
            time_limit_minutes: Some(u64::MAX),
            ..Default::default()
        };
        let s = Settings::resolve(&WorldSettings::default(), &overrides);
        assert_eq!(s.game.time_limit, Duration::from_secs(u64::MAX));
    }
}
