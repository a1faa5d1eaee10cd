//! Persisted upgrade lookup.
//!
//! Upgrades live in a flat JSON object (`{"vida": 3, ...}`) written by the
//! upgrade shop. The simulation only ever reads the life level, and any
//! failure along the way degrades to the default instead of reaching the
//! caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Key of the life upgrade level in the upgrades file.
pub const LIFE_UPGRADE_KEY: &str = "vida";

/// Life level used when nothing usable is persisted.
pub const DEFAULT_LIFE_LEVEL: u32 = 1;

/// Where the upgrade shop writes its state, relative to the working directory.
pub const DEFAULT_UPGRADES_PATH: &str = "data/upgrades.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access upgrades file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse upgrades file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("upgrades file has no `{0}` entry")]
    MissingKey(String),

    #[error("upgrade `{key}` is not a non-negative integer: {value}")]
    InvalidValue { key: String, value: Value },
}

/// Read-only source of persisted upgrade levels.
pub trait UpgradeSource {
    /// Player life upgrade level. Infallible; implementations fall back to
    /// [`DEFAULT_LIFE_LEVEL`].
    fn life_level(&self) -> u32;
}

/// No persisted upgrades at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpgrades;

impl UpgradeSource for NoUpgrades {
    fn life_level(&self) -> u32 {
        DEFAULT_LIFE_LEVEL
    }
}

/// Fixed in-memory upgrade levels.
#[derive(Debug, Clone, Copy)]
pub struct StaticUpgrades {
    pub life: u32,
}

impl UpgradeSource for StaticUpgrades {
    fn life_level(&self) -> u32 {
        self.life
    }
}

/// Upgrades read from a JSON file on every lookup.
#[derive(Debug, Clone)]
pub struct JsonUpgradeFile {
    path: PathBuf,
}

impl JsonUpgradeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one integer level, surfacing every failure.
    pub fn read_level(&self, key: &str) -> Result<u32, PersistenceError> {
        let upgrades = read_upgrades(&self.path)?;
        let value = upgrades
            .get(key)
            .ok_or_else(|| PersistenceError::MissingKey(key.to_string()))?;
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| PersistenceError::InvalidValue {
                key: key.to_string(),
                value: value.clone(),
            })
    }
}

impl Default for JsonUpgradeFile {
    fn default() -> Self {
        Self::new(DEFAULT_UPGRADES_PATH)
    }
}

impl UpgradeSource for JsonUpgradeFile {
    fn life_level(&self) -> u32 {
        match self.read_level(LIFE_UPGRADE_KEY) {
            Ok(level) => level,
            Err(PersistenceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no upgrades file, using default life");
                DEFAULT_LIFE_LEVEL
            }
            Err(PersistenceError::MissingKey(_)) => DEFAULT_LIFE_LEVEL,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load life upgrade");
                DEFAULT_LIFE_LEVEL
            }
        }
    }
}

fn read_upgrades(path: &Path) -> Result<Map<String, Value>, PersistenceError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Write the life level, keeping any other keys already in the file.
pub fn save_life_upgrade(path: &Path, level: u32) -> Result<(), PersistenceError> {
    let mut upgrades = match read_upgrades(path) {
        Ok(map) => map,
        Err(PersistenceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Map::new(),
        Err(e) => return Err(e),
    };
    upgrades.insert(LIFE_UPGRADE_KEY.to_string(), Value::from(level));

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, serde_json::to_string_pretty(&upgrades)?)?;
    Ok(())
}
