use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One possible outcome of a single action attempt (a dive, a harvest, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RewardItem {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(alias = "priceA")]
    pub price_low: f64,
    #[serde(alias = "priceB")]
    pub price_high: f64,
    #[serde(alias = "chance")]
    pub drop_chance: f64,
    #[serde(alias = "delay", default)]
    pub delay_seconds: f64,
}

impl RewardItem {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, drop_chance: f64) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            price_low: 0.0,
            price_high: 0.0,
            drop_chance,
            delay_seconds: 0.0,
        }
    }

    pub fn with_prices(mut self, low: f64, high: f64) -> Self {
        self.price_low = low;
        self.price_high = high;
        self
    }

    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay_seconds = seconds;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.drop_chance.is_finite() || !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(EngineError::InvalidChance {
                name: self.name.clone(),
                chance: self.drop_chance,
            });
        }
        if !self.delay_seconds.is_finite() || self.delay_seconds < 0.0 {
            return Err(EngineError::InvalidDelay {
                name: self.name.clone(),
                delay: self.delay_seconds,
            });
        }
        let prices_ok = self.price_low.is_finite()
            && self.price_high.is_finite()
            && self.price_low >= 0.0
            && self.price_low <= self.price_high;
        if !prices_ok {
            return Err(EngineError::InvalidPrice {
                name: self.name.clone(),
                low: self.price_low,
                high: self.price_high,
            });
        }
        Ok(())
    }
}

/// Ordered item table for one activity. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RewardItem>", into = "Vec<RewardItem>")]
pub struct Catalog {
    items: Vec<RewardItem>,
}

impl Catalog {
    pub fn new(items: Vec<RewardItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.name.as_str()) {
                return Err(EngineError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[RewardItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RewardItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RewardItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl TryFrom<Vec<RewardItem>> for Catalog {
    type Error = EngineError;

    fn try_from(items: Vec<RewardItem>) -> Result<Self> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<RewardItem> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RewardItem;
    type IntoIter = std::slice::Iter<'a, RewardItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Expected (min, max) coins per minute from a single item, given one attempt per `delay_seconds`.
pub fn earn_per_minute(item: &RewardItem) -> (f64, f64) {
    if item.delay_seconds <= 0.0 {
        return (0.0, 0.0);
    }
    let attempts = 60.0 / item.delay_seconds;
    (
        item.price_low * item.drop_chance * attempts,
        item.price_high * item.drop_chance * attempts,
    )
}
