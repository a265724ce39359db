//! Mansion file type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Mansion, SuspectLookup, DEFAULT_BUCKET_COUNT};
use crate::domain::services::MansionBuilder;
use crate::domain::value_objects::Direction;
use crate::error::{DetectiveError, DetectiveResult};

use super::loader;

/// A whole mansion: rooms, how they connect, and who each clue points at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MansionConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Bucket count of the suspect hash table
    #[serde(default = "default_buckets")]
    pub buckets: usize,

    #[serde(default)]
    pub rooms: Vec<RoomConfig>,

    #[serde(default)]
    pub suspects: Vec<SuspectConfig>,
}

/// One room. The entrance is the only room without `parent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,

    #[serde(default)]
    pub clue: Option<String>,

    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default)]
    pub side: Option<Direction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectConfig {
    pub clue: String,
    pub suspect: String,
}

fn default_title() -> String {
    "Detective Quest".to_string()
}

fn default_buckets() -> usize {
    DEFAULT_BUCKET_COUNT
}

const BUILTIN: &str = include_str!("default_mansion.toml");

impl MansionConfig {
    /// The mansion that ships with the game.
    pub fn builtin() -> DetectiveResult<Self> {
        loader::parse_with_warnings(BUILTIN, Path::new("<built-in>")).map(|(config, _)| config)
    }

    /// Load a mansion file, discarding warnings.
    pub fn load(path: &Path) -> DetectiveResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Feed every room into a [`MansionBuilder`].
    pub fn to_builder(&self) -> DetectiveResult<MansionBuilder> {
        let mut builder = MansionBuilder::new(self.title.clone());
        for room in &self.rooms {
            let clue = room.clue.as_deref();
            match (&room.parent, room.side) {
                (None, None) => {
                    builder.entrance(room.name.clone(), clue);
                }
                (Some(parent), Some(side)) => {
                    builder.room(parent.clone(), side, room.name.clone(), clue);
                }
                _ => {
                    return Err(DetectiveError::IncompleteEdge {
                        room: room.name.clone(),
                    })
                }
            }
        }
        Ok(builder)
    }

    pub fn build_mansion(&self) -> DetectiveResult<Mansion> {
        self.to_builder()?.build()
    }

    /// Register every suspect entry, in file order.
    pub fn build_suspects(&self) -> DetectiveResult<SuspectLookup> {
        let mut lookup = SuspectLookup::with_buckets(self.buckets)?;
        for entry in &self.suspects {
            lookup.register(entry.clue.clone(), entry.suspect.clone());
        }
        Ok(lookup)
    }
}
