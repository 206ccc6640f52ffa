//! Quest tracker: the session's randomly drawn quest subset and its bookkeeping.

use log::{debug, info};
use rand::Rng;
use rand::seq::index;

use crate::engine::helpers::names_match;
use crate::engine::player::Player;
use crate::engine::stats::WRONG_ANSWER_ENERGY_COST;
use crate::world::{Item, ItemLocation, Quest, Skill};

pub struct SessionQuest {
    pub quest: Quest,
    /// Never reverts once set.
    pub solved: bool,
}

/// Result of looking a quest id up in the session subset.
#[derive(Debug)]
pub enum QuestLookup<'a> {
    NotFound,
    Solved(&'a Quest),
    Open(&'a Quest),
}

#[derive(Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    Correct {
        quest_name: String,
        reward: String,
        skill: Skill,
        gained: u32,
        all_solved: bool,
    },
    Incorrect {
        energy_left: u8,
    },
    /// Not in the session subset, or already solved.
    NotAvailable,
}

pub struct QuestTracker {
    quests: Vec<SessionQuest>,
}

impl QuestTracker {
    /// Draw `count` distinct quests from the catalog in random order (all of them
    /// when the catalog is smaller).
    pub fn select_session<R: Rng + ?Sized>(catalog: &[Quest], count: usize, rng: &mut R) -> Self {
        let amount = count.min(catalog.len());
        let quests: Vec<SessionQuest> = index::sample(rng, catalog.len(), amount)
            .into_iter()
            .map(|i| SessionQuest {
                quest: catalog[i].clone(),
                solved: false,
            })
            .collect();

        info!(
            "session quests selected: {:?}",
            quests.iter().map(|q| q.quest.id).collect::<Vec<_>>()
        );
        QuestTracker { quests }
    }

    /// A tracker holding no quests, for worlds played without them.
    pub fn empty() -> Self {
        QuestTracker { quests: Vec::new() }
    }

    pub fn quests(&self) -> &[SessionQuest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn open_ids(&self) -> Vec<u32> {
        self.quests
            .iter()
            .filter(|q| !q.solved)
            .map(|q| q.quest.id)
            .collect()
    }

    pub fn find(&self, id: u32) -> QuestLookup<'_> {
        match self.quests.iter().find(|q| q.quest.id == id) {
            None => QuestLookup::NotFound,
            Some(q) if q.solved => QuestLookup::Solved(&q.quest),
            Some(q) => QuestLookup::Open(&q.quest),
        }
    }

    /// Check an answer against an open quest. A correct answer marks the quest
    /// solved, trains the matching skill and puts the reward in the inventory; a
    /// wrong one only costs energy.
    pub fn attempt(&mut self, id: u32, answer: &str, player: &mut Player) -> AttemptOutcome {
        let Some(entry) = self.quests.iter_mut().find(|q| q.quest.id == id && !q.solved) else {
            debug!("attempt on unavailable quest {}", id);
            return AttemptOutcome::NotAvailable;
        };

        if !names_match(answer, &entry.quest.solution) {
            let energy_left = player.stats.drain_energy(WRONG_ANSWER_ENERGY_COST);
            debug!("wrong answer for quest {}; energy now {}", id, energy_left);
            return AttemptOutcome::Incorrect { energy_left };
        }

        entry.solved = true;
        let quest = &entry.quest;
        let skill = quest.category.skill();
        let before = player.stats.skill(skill);
        player.stats.train(skill, quest.difficulty);
        player.completed += 1;
        player.inventory.push(Item {
            name: quest.reward.clone(),
            desc: format!("Reward for completing: {}", quest.name),
            usable: true,
            quest_id: quest.id,
            start_location: ItemLocation::Inventory,
        });
        info!("quest {} solved", quest.id);

        let quest_name = quest.name.clone();
        let reward = quest.reward.clone();
        let gained = player.stats.skill(skill) - before;

        AttemptOutcome::Correct {
            quest_name,
            reward,
            skill,
            gained,
            all_solved: self.all_solved(),
        }
    }

    pub fn all_solved(&self) -> bool {
        self.quests.iter().all(|q| q.solved)
    }

    /// Hints and example text, available whether or not the quest is solved.
    pub fn hints(&self, id: u32) -> Option<(&[String], &str)> {
        self.quests
            .iter()
            .find(|q| q.quest.id == id)
            .map(|q| (q.quest.hints.as_slice(), q.quest.example.as_str()))
    }
}
