//! Save/load — JSON snapshots of the world and player state.
//!
//! The browser original persisted the entity collection as JSON in local
//! storage; this keeps the same shape behind a version gate so an old save
//! is rejected cleanly instead of deserializing into nonsense.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use biobots_logic::Entity;

use crate::commands::PlayerState;

/// Increment when the save shape changes.
const SAVE_VERSION: u32 = 1;

/// Everything a save file carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    /// Wall-clock milliseconds when the save was taken.
    pub saved_at: u64,
    pub player: PlayerState,
    pub entities: Vec<Entity>,
}

impl SaveData {
    pub fn new(saved_at: u64, player: PlayerState, entities: Vec<Entity>) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at,
            player,
            entities,
        }
    }
}

/// What went wrong while saving or loading.
#[derive(Debug)]
pub enum SnapshotError {
    Io(std::io::Error),
    Format(serde_json::Error),
    /// The save file was written by an incompatible version.
    Version {
        found: u32,
        expected: u32,
    },
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "snapshot io error: {e}"),
            Self::Format(e) => write!(f, "snapshot format error: {e}"),
            Self::Version { found, expected } => {
                write!(f, "save version {found} is not supported (expected {expected})")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// Serialize a snapshot to a writer.
pub fn save<W: Write>(writer: W, data: &SaveData) -> Result<(), SnapshotError> {
    serde_json::to_writer(writer, data)?;
    Ok(())
}

/// Deserialize a snapshot from a reader, rejecting incompatible versions.
pub fn load<R: Read>(reader: R) -> Result<SaveData, SnapshotError> {
    let data: SaveData = serde_json::from_reader(reader)?;
    if data.version != SAVE_VERSION {
        return Err(SnapshotError::Version {
            found: data.version,
            expected: SAVE_VERSION,
        });
    }
    Ok(data)
}
