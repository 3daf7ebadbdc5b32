use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building motion controllers
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("waypoint set must contain at least one point")]
    EmptyWaypointSet,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the coin economy
#[derive(Debug, Error)]
pub enum EconomyError {
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: i64, available: i64 },

    #[error("no free slot on the crop grid")]
    GridFull,

    #[error("store failure: {0}")]
    Store(#[from] std::io::Error),

    #[error("store data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
