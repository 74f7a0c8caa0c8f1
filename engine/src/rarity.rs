//! Rarity ordering over a catalog: which items count as "rare" and which of
//! them a tune should mark.
//!
//! Lower `drop_chance` means rarer. An item with a chance of exactly 0 passes
//! the threshold filter and sorts ahead of everything else.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, RewardItem};

/// Items at or below this chance are rare.
pub const RARE_THRESHOLD: f64 = 0.15;
/// Upper bound on how many items one tune marks.
pub const MAX_TUNED: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RarityRule {
    pub threshold: f64,
    pub max_tuned: usize,
}

impl Default for RarityRule {
    fn default() -> Self {
        Self {
            threshold: RARE_THRESHOLD,
            max_tuned: MAX_TUNED,
        }
    }
}

impl RarityRule {
    /// Rare items ordered rarest first.
    ///
    /// If any item sits at or under the threshold, every such item is returned.
    /// Otherwise the catalog falls back to its `max_tuned` rarest entries, so a
    /// non-empty catalog never yields an empty list.
    pub fn select_rare<'a>(&self, catalog: &'a Catalog) -> Vec<&'a RewardItem> {
        let has_high_rarity = catalog.iter().any(|i| i.drop_chance <= self.threshold);

        let mut picked: Vec<&RewardItem> = if has_high_rarity {
            catalog
                .iter()
                .filter(|i| i.drop_chance <= self.threshold)
                .collect()
        } else {
            catalog.iter().collect()
        };
        // `sort_by` is stable: equal chances keep catalog order.
        picked.sort_by(|a, b| by_chance(a, b));

        if !has_high_rarity {
            picked.truncate(self.max_tuned);
        }
        debug!(
            total = catalog.len(),
            picked = picked.len(),
            fallback = !has_high_rarity,
            "selected rare items"
        );
        picked
    }

    /// The items a tune marks: the rare list capped at `max_tuned`.
    pub fn select_targets<'a>(&self, catalog: &'a Catalog) -> Vec<&'a RewardItem> {
        let mut picked = self.select_rare(catalog);
        picked.truncate(self.max_tuned);
        picked
    }
}

fn by_chance(a: &RewardItem, b: &RewardItem) -> Ordering {
    a.drop_chance
        .partial_cmp(&b.drop_chance)
        .unwrap_or(Ordering::Equal)
}

pub fn select_rare_items(catalog: &Catalog) -> Vec<&RewardItem> {
    RarityRule::default().select_rare(catalog)
}

pub fn select_tune_targets(catalog: &Catalog) -> Vec<&RewardItem> {
    RarityRule::default().select_targets(catalog)
}

/// Rarity shown to players: `round(100 - chance * 100)`, kept within 0..=100.
pub fn display_rarity(item: &RewardItem) -> u8 {
    let pct = (100.0 - item.drop_chance * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}
