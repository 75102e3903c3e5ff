//! Error types.

use thiserror::Error;

/// Content/data mismatch in level or wave configuration. Fatal for the
/// operation that hit it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown level {0}")]
    UnknownLevel(u32),
    #[error("zone {zone}: unknown spawn point `{name}`")]
    UnknownSpawnPoint { zone: usize, name: String },
    #[error("zone {zone}: no spawn points")]
    NoSpawnPoints { zone: usize },
    #[error("zone {zone}: min corner {min:?} is above max corner {max:?}")]
    InvalidBounds {
        zone: usize,
        min: [f32; 3],
        max: [f32; 3],
    },
    #[error("zone {zone}: {field} {reason}")]
    InvalidZone {
        zone: usize,
        field: &'static str,
        reason: &'static str,
    },
    #[error("robot characteristics: {field} {reason}")]
    InvalidCharacteristics {
        field: &'static str,
        reason: &'static str,
    },
    #[error("level {0} has no waves")]
    EmptyLevel(u32),
    #[error("bad level file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Leaderboard storage failure. Always recovered by the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt leaderboard: {0}")]
    Corrupt(#[from] serde_json::Error),
}
