//! Save game persistence.
//!
//! The record is a flat JSON object with exactly four keys. A missing or
//! unreadable save is never fatal: loading falls back to a fresh game.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::entities::GameState;
use crate::error::SaveError;
use crate::player::{STARTING_FUEL, STARTING_SHIELD};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub score: u32,
    pub shield: i32,
    pub fuel: f32,
    pub level: u32,
}

impl Default for SaveRecord {
    fn default() -> Self {
        SaveRecord {
            score: 0,
            shield: STARTING_SHIELD,
            fuel: STARTING_FUEL,
            level: 1,
        }
    }
}

impl SaveRecord {
    /// Snapshot the persisted subset of a running game.
    pub fn from_state(state: &GameState) -> Self {
        SaveRecord {
            score: state.player.score,
            shield: state.player.shield,
            fuel: state.player.fuel,
            level: state.level,
        }
    }

    /// Restore the player stats and level. Entity waves are left alone.
    pub fn apply(&self, state: &mut GameState) {
        state.player.score = self.score;
        state.player.shield = self.shield;
        state.player.fuel = self.fuel;
        state.level = self.level;
    }
}

/// Write `state`'s record to `path`, replacing any earlier save.
pub fn save(path: &Path, state: &GameState) -> Result<SaveRecord, SaveError> {
    let record = SaveRecord::from_state(state);
    write_record(path, &record)?;
    Ok(record)
}

pub fn write_record(path: &Path, record: &SaveRecord) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "saved game to {} (level {}, score {})",
        path.display(),
        record.level,
        record.score
    );
    Ok(())
}

/// Read the record at `path`. `Ok(None)` when there is no save yet.
pub fn try_load(path: &Path) -> Result<Option<SaveRecord>, SaveError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SaveError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let record = serde_json::from_str(&contents).map_err(|source| SaveError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(record))
}

/// Read the record at `path`, or defaults if it is missing or unusable.
pub fn load(path: &Path) -> SaveRecord {
    match try_load(path) {
        Ok(Some(record)) => {
            info!("loaded save from {} (level {})", path.display(), record.level);
            record
        }
        Ok(None) => SaveRecord::default(),
        Err(e) => {
            warn!("{e}; starting a fresh game");
            SaveRecord::default()
        }
    }
}
