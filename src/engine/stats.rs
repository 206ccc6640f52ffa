use std::time::Duration;

use crate::world::{Skill, WorldSettings};

pub const MAX_ENERGY: u8 = 100;
pub const WRONG_ANSWER_ENERGY_COST: u8 = 10;
pub const SKILL_PER_DIFFICULTY: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub hacking: u32,
    pub engineering: u32,
    pub astronomy: u32,
    pub biology: u32,
    pub physics: u32,
    /// 0..=MAX_ENERGY
    pub energy: u8,
    pub time_left: Duration,
}

impl PlayerStats {
    pub fn from_settings(settings: &WorldSettings) -> Self {
        PlayerStats {
            hacking: settings.base_skill,
            engineering: settings.base_skill,
            astronomy: settings.base_skill,
            biology: settings.base_skill,
            physics: settings.base_skill,
            energy: settings.start_energy.min(MAX_ENERGY),
            time_left: settings.time_limit,
        }
    }

    pub fn skill(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Hacking => self.hacking,
            Skill::Engineering => self.engineering,
            Skill::Astronomy => self.astronomy,
            Skill::Biology => self.biology,
            Skill::Physics => self.physics,
        }
    }

    fn skill_mut(&mut self, skill: Skill) -> &mut u32 {
        match skill {
            Skill::Hacking => &mut self.hacking,
            Skill::Engineering => &mut self.engineering,
            Skill::Astronomy => &mut self.astronomy,
            Skill::Biology => &mut self.biology,
            Skill::Physics => &mut self.physics,
        }
    }

    /// Skills are uncapped.
    pub fn train(&mut self, skill: Skill, difficulty: u8) {
        let gain = u32::from(difficulty) * SKILL_PER_DIFFICULTY;
        let slot = self.skill_mut(skill);
        *slot = slot.saturating_add(gain);
    }

    /// Returns the energy left after the penalty. Never goes below zero.
    pub fn drain_energy(&mut self, amount: u8) -> u8 {
        self.energy = self.energy.saturating_sub(amount);
        self.energy
    }

    pub fn spend_time(&mut self, elapsed: Duration) {
        self.time_left = self.time_left.saturating_sub(elapsed);
    }

    pub fn out_of_time(&self) -> bool {
        self.time_left.is_zero()
    }

    pub fn exhausted(&self) -> bool {
        self.energy == 0
    }
}
