use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::tune::TuneRecord;

/// Everything persisted for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Profile {
    #[serde(default)]
    pub battle_points: u64,
    /// Tune marks keyed by simulator key.
    #[serde(default)]
    pub tunes: BTreeMap<String, TuneRecord>,
}

impl Profile {
    pub fn tune_for(&self, simulator: &str) -> TuneRecord {
        self.tunes.get(simulator).cloned().unwrap_or_default()
    }
}

/// Keyed profile storage. Unknown users load as `Profile::default()`.
pub trait ProfileStore {
    fn load(&self, user: &str) -> Result<Profile>;
    fn save(&self, user: &str, profile: &Profile) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, user: &str) -> Result<Profile> {
        let map = self.profiles.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(user).cloned().unwrap_or_default())
    }

    fn save(&self, user: &str, profile: &Profile) -> Result<()> {
        let mut map = self.profiles.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(user.to_string(), profile.clone());
        Ok(())
    }
}

/// All profiles in one pretty-printed JSON object, rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, Profile>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, user: &str) -> Result<Profile> {
        Ok(self.read_all()?.remove(user).unwrap_or_default())
    }

    fn save(&self, user: &str, profile: &Profile) -> Result<()> {
        let mut all = self.read_all()?;
        all.insert(user.to_string(), profile.clone());
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        debug!(user, path = %self.path.display(), "saved profile");
        Ok(())
    }
}
