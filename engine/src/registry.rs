use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::content::builtin_simulators;
use crate::error::{EngineError, Result};

/// Declared metadata every command publishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommandMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub permissions: Vec<u8>,
    #[serde(default, alias = "otherNames")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default, alias = "shopPrice")]
    pub shop_price: u64,
    #[serde(default)]
    pub requirement: String,
}

/// One idle activity: its presentation words, storage, and reward table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatorSpec {
    pub key: String,
    pub verb: String,
    pub verbing: String,
    #[serde(alias = "pastTense")]
    pub past_tense: String,
    #[serde(default, alias = "checkIcon")]
    pub check_icon: String,
    #[serde(default, alias = "actionEmoji")]
    pub action_emoji: String,
    #[serde(default, alias = "initialStorage")]
    pub initial_storage: u32,
    #[serde(default, alias = "storagePrice")]
    pub storage_price: u64,
    pub meta: CommandMeta,
    #[serde(alias = "itemData")]
    pub items: Catalog,
}

/// Which simulators an action covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    All,
    One(String),
}

impl Target {
    /// `None`, empty and `all` (any case) mean every default simulator.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Target::All,
            Some(s) if s.eq_ignore_ascii_case("all") => Target::All,
            Some(s) => Target::One(s.to_string()),
        }
    }

    /// The command-line spelling of this target.
    pub fn as_arg(&self) -> &str {
        match self {
            Target::All => "all",
            Target::One(key) => key,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::All => write!(f, "specified simulators"),
            Target::One(key) => write!(f, "simulator {}", key),
        }
    }
}

/// Simulators known to this process, in registration order.
#[derive(Debug, Clone, Default)]
pub struct SimulatorRegistry {
    sims: IndexMap<String, SimulatorSpec>,
}

impl SimulatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Result<Self> {
        let mut reg = Self::new();
        for (id, text) in builtin_simulators() {
            let spec: SimulatorSpec = serde_json::from_str(text)?;
            debug!(id, items = spec.items.len(), "loaded builtin simulator");
            reg.register(spec)?;
        }
        Ok(reg)
    }

    /// Keys and aliases share one case-insensitive namespace across simulators.
    pub fn register(&mut self, spec: SimulatorSpec) -> Result<()> {
        if self.sims.keys().any(|k| k.eq_ignore_ascii_case(&spec.key)) {
            return Err(EngineError::DuplicateSimulator(spec.key));
        }
        let names = std::iter::once(&spec.key).chain(&spec.meta.aliases);
        for name in names {
            if let Some(existing) = self.find_by_name(name) {
                return Err(EngineError::AliasCollision {
                    key: spec.key.clone(),
                    alias: name.clone(),
                    existing: existing.key.clone(),
                });
            }
        }
        self.sims.insert(spec.key.clone(), spec);
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Option<&SimulatorSpec> {
        self.sims.values().find(|s| {
            s.key.eq_ignore_ascii_case(name)
                || s.meta.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }

    /// Lookup by key or by any of the command's aliases, ignoring case.
    pub fn get(&self, key: &str) -> Option<&SimulatorSpec> {
        self.sims.get(key).or_else(|| self.find_by_name(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sims.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimulatorSpec> {
        self.sims.values()
    }

    pub fn len(&self) -> usize {
        self.sims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sims.is_empty()
    }

    /// Expand a target into simulators. `All` uses `defaults` when given,
    /// otherwise every registered simulator.
    pub fn resolve(&self, target: &Target, defaults: &[String]) -> Result<Vec<&SimulatorSpec>> {
        match target {
            Target::One(key) => self
                .get(key)
                .map(|s| vec![s])
                .ok_or_else(|| EngineError::UnknownSimulator(key.clone())),
            Target::All if defaults.is_empty() => Ok(self.iter().collect()),
            Target::All => defaults
                .iter()
                .map(|key| {
                    self.get(key)
                        .ok_or_else(|| EngineError::UnknownSimulator(key.clone()))
                })
                .collect(),
        }
    }
}
