use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::RewardItem;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuneState {
    Untuned,
    Tuned,
}

/// A user's tune marks for one catalog. `tuned_at` is epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TuneRecord {
    #[serde(default)]
    pub tuned_names: IndexSet<String>,
    #[serde(default)]
    pub tuned_at: Option<i64>,
}

impl TuneRecord {
    pub fn state(&self) -> TuneState {
        if self.tuned_names.is_empty() && self.tuned_at.is_none() {
            TuneState::Untuned
        } else {
            TuneState::Tuned
        }
    }

    pub fn is_tuned(&self) -> bool {
        self.state() == TuneState::Tuned
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tuned_names.contains(name)
    }
}

/// Mark `items` as tuned at `now`, replacing whatever `record` held.
pub fn apply_tune(_record: &TuneRecord, items: &[&RewardItem], now: i64) -> Result<TuneRecord> {
    if items.is_empty() {
        return Err(EngineError::Validation(
            "cannot tune an empty selection".to_string(),
        ));
    }
    Ok(TuneRecord {
        tuned_names: items.iter().map(|i| i.name.clone()).collect(),
        tuned_at: Some(now),
    })
}

pub fn reset_tune(_record: &TuneRecord) -> TuneRecord {
    TuneRecord::default()
}
