use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::catalog::{Catalog, RewardItem};

/// Seeded roller; the same seed always replays the same drops.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// One attempt at `item`: true with probability `drop_chance`.
    pub fn attempt(&mut self, item: &RewardItem) -> bool {
        self.rng.gen_bool(item.drop_chance.clamp(0.0, 1.0))
    }

    /// Sale price for one unit, uniform over the item's price range.
    pub fn price(&mut self, item: &RewardItem) -> f64 {
        if item.price_high <= item.price_low {
            item.price_low
        } else {
            self.rng.gen_range(item.price_low..=item.price_high)
        }
    }

    /// One attempt at every item in the catalog.
    pub fn roll_catalog<'a>(&mut self, catalog: &'a Catalog) -> Vec<Haul<'a>> {
        let mut drops = Vec::new();
        for item in catalog {
            if self.attempt(item) {
                let value = self.price(item);
                drops.push(Haul { item, value });
            }
        }
        drops
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Haul<'a> {
    pub item: &'a RewardItem,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemTally {
    pub name: String,
    pub drops: u32,
    pub expected: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RollSummary {
    pub rounds: u32,
    pub total_drops: u32,
    pub total_value: f64,
    pub items: Vec<ItemTally>,
}

/// Roll the whole catalog `rounds` times from a single stream seeded by `seed`.
pub fn roll_many(catalog: &Catalog, rounds: u32, seed: u64) -> RollSummary {
    let mut dice = Dice::from_seed(seed);
    let mut items: Vec<ItemTally> = catalog
        .iter()
        .map(|i| ItemTally {
            name: i.name.clone(),
            drops: 0,
            expected: i.drop_chance * f64::from(rounds),
            value: 0.0,
        })
        .collect();

    for _ in 0..rounds {
        for (idx, item) in catalog.iter().enumerate() {
            if dice.attempt(item) {
                let value = dice.price(item);
                items[idx].drops += 1;
                items[idx].value += value;
            }
        }
    }

    RollSummary {
        rounds,
        total_drops: items.iter().map(|t| t.drops).sum(),
        total_value: items.iter().map(|t| t.value).sum(),
        items,
    }
}
