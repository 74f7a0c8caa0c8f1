use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{earn_per_minute, RewardItem};
use crate::config::TunerConfig;
use crate::error::{EngineError, Result};
use crate::profile::ProfileStore;
use crate::rarity::display_rarity;
use crate::registry::{SimulatorRegistry, SimulatorSpec, Target};
use crate::tune::{apply_tune, reset_tune};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RareEntry {
    pub name: String,
    pub icon: String,
    pub drop_chance: f64,
    pub rarity: u8,
    pub earn_min_per_minute: f64,
    pub earn_max_per_minute: f64,
}

impl From<&RewardItem> for RareEntry {
    fn from(item: &RewardItem) -> Self {
        let (earn_min_per_minute, earn_max_per_minute) = earn_per_minute(item);
        Self {
            name: item.name.clone(),
            icon: item.icon.clone(),
            drop_chance: item.drop_chance,
            rarity: display_rarity(item),
            earn_min_per_minute,
            earn_max_per_minute,
        }
    }
}

/// Items for one simulator, rarest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RareSection {
    pub simulator: String,
    pub items: Vec<RareEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RareListing {
    pub target: String,
    pub total: usize,
    pub sections: Vec<RareSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TuneReport {
    pub target: String,
    pub cost: u64,
    pub battle_points_left: u64,
    pub total_tuned: usize,
    pub sections: Vec<RareSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResetReport {
    pub target: String,
    pub total_reset: usize,
    pub simulators: Vec<String>,
}

/// Tune, list and reset actions over a registry and a profile store.
pub struct Tuner<'a> {
    registry: &'a SimulatorRegistry,
    store: &'a dyn ProfileStore,
    config: &'a TunerConfig,
}

impl<'a> Tuner<'a> {
    pub fn new(
        registry: &'a SimulatorRegistry,
        store: &'a dyn ProfileStore,
        config: &'a TunerConfig,
    ) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    fn resolve(&self, target: &Target) -> Result<Vec<&'a SimulatorSpec>> {
        self.registry.resolve(target, &self.config.default_simulators)
    }

    /// Rare items per simulator, as shown before tuning.
    pub fn list_rare(&self, target: &Target) -> Result<RareListing> {
        let rule = self.config.rule();
        let sections: Vec<RareSection> = self
            .resolve(target)?
            .into_iter()
            .map(|sim| RareSection {
                simulator: sim.key.clone(),
                items: rule
                    .select_rare(&sim.items)
                    .into_iter()
                    .map(RareEntry::from)
                    .collect(),
            })
            .filter(|s| !s.items.is_empty())
            .collect();

        let total = sections.iter().map(|s| s.items.len()).sum();
        if total == 0 {
            return Err(EngineError::EmptyCatalog(target.to_string()));
        }
        Ok(RareListing {
            target: target.to_string(),
            total,
            sections,
        })
    }

    /// Mark the rarest items of each targeted simulator for `user`, stamped `now` (epoch ms).
    pub fn tune(&self, user: &str, target: &Target, now: i64) -> Result<TuneReport> {
        let sims = self.resolve(target)?;
        let mut profile = self.store.load(user)?;

        let cost = self.config.tune_cost;
        if profile.battle_points < cost {
            return Err(EngineError::InsufficientFunds {
                have: profile.battle_points,
                need: cost,
            });
        }

        let rule = self.config.rule();
        let mut sections = Vec::new();
        for sim in sims {
            let picked = rule.select_targets(&sim.items);
            if picked.is_empty() {
                debug!(simulator = %sim.key, "nothing to tune");
                continue;
            }
            let record = apply_tune(&profile.tune_for(&sim.key), &picked, now)?;
            profile.tunes.insert(sim.key.clone(), record);
            sections.push(RareSection {
                simulator: sim.key.clone(),
                items: picked.into_iter().map(RareEntry::from).collect(),
            });
        }

        let total_tuned: usize = sections.iter().map(|s| s.items.len()).sum();
        if total_tuned == 0 {
            return Err(EngineError::EmptyCatalog(target.to_string()));
        }

        profile.battle_points -= cost;
        self.store.save(user, &profile)?;
        info!(user, total_tuned, cost, "tuned rare items");

        Ok(TuneReport {
            target: target.to_string(),
            cost,
            battle_points_left: profile.battle_points,
            total_tuned,
            sections,
        })
    }

    /// Clear tune marks for each targeted simulator that has any.
    pub fn reset(&self, user: &str, target: &Target) -> Result<ResetReport> {
        let sims = self.resolve(target)?;
        let mut profile = self.store.load(user)?;

        let mut total_reset = 0;
        let mut simulators = Vec::new();
        for sim in sims {
            let Some(record) = profile.tunes.get_mut(&sim.key) else {
                continue;
            };
            if record.tuned_names.is_empty() {
                continue;
            }
            total_reset += record.tuned_names.len();
            *record = reset_tune(record);
            simulators.push(sim.key.clone());
        }

        if total_reset == 0 {
            return Err(EngineError::NothingToReset(target.to_string()));
        }

        self.store.save(user, &profile)?;
        info!(user, total_reset, "reset tuning data");

        Ok(ResetReport {
            target: target.to_string(),
            total_reset,
            simulators,
        })
    }
}
