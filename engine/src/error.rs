use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// An operation was handed input it cannot act on (e.g. tuning zero items).
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no tunable items in {0}")]
    EmptyCatalog(String),

    #[error("duplicate item '{0}' in catalog")]
    DuplicateItem(String),

    #[error("item '{name}' has drop chance {chance}, expected 0..=1")]
    InvalidChance { name: String, chance: f64 },

    #[error("item '{name}' has negative delay {delay}")]
    InvalidDelay { name: String, delay: f64 },

    #[error("item '{name}' has price range {low}..{high}, expected finite 0 <= low <= high")]
    InvalidPrice { name: String, low: f64, high: f64 },

    #[error("simulator '{0}' is already registered")]
    DuplicateSimulator(String),

    #[error("simulator '{key}' alias '{alias}' collides with simulator '{existing}'")]
    AliasCollision {
        key: String,
        alias: String,
        existing: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("simulator '{0}' not found")]
    UnknownSimulator(String),

    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds { have: u64, need: u64 },

    #[error("no tuning data to reset in {0}")]
    NothingToReset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
