pub mod api;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod profile;
pub mod rarity;
pub mod registry;
pub mod sample;
pub mod tune;

pub use catalog::{earn_per_minute, Catalog, RewardItem};
pub use config::TunerConfig;
pub use error::{EngineError, Result};
pub use profile::{JsonFileStore, MemoryStore, Profile, ProfileStore};
pub use rarity::{
    display_rarity, select_rare_items, select_tune_targets, RarityRule, MAX_TUNED, RARE_THRESHOLD,
};
pub use registry::{CommandMeta, SimulatorRegistry, SimulatorSpec, Target};
pub use sample::Dice;
pub use tune::{apply_tune, reset_tune, TuneRecord, TuneState};
