//! Static generation configuration, loaded once per level.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size and exit bounds for one class of room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min_size: [u32; 2],
    pub max_size: [u32; 2],
    pub max_exits: u32,
}

/// Dungeon generation parameters.
///
/// Defaults reproduce the shipped level tuning: a 100x100 grid of up to 20
/// rooms joined by short corridors, with one extra interconnect loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Grid dimensions, width x height.
    pub size: [u32; 2],

    /// Bounds for the first room placed (also the spawn room).
    pub initial_room: RoomBounds,

    /// Bounds for every subsequent room.
    pub any_room: RoomBounds,

    pub min_corridor_length: u32,
    pub max_corridor_length: u32,

    /// Probability in [0, 1] that a given attachment attempt proceeds.
    pub corridor_density: f32,

    /// Force square rooms.
    pub symmetric_rooms: bool,

    /// Extra corridors carved between already-placed rooms to introduce
    /// loops.
    pub interconnects: u32,
    pub max_interconnect_length: u32,

    /// Target number of rooms; generation stops early when the retry budget
    /// runs out.
    pub room_count: u32,
}

fn default_initial_room() -> RoomBounds {
    RoomBounds {
        min_size: [3, 3],
        max_size: [6, 6],
        max_exits: 1,
    }
}

fn default_any_room() -> RoomBounds {
    RoomBounds {
        min_size: [3, 3],
        max_size: [6, 6],
        max_exits: 4,
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            size: [100, 100],
            initial_room: default_initial_room(),
            any_room: default_any_room(),
            min_corridor_length: 2,
            max_corridor_length: 6,
            corridor_density: 0.5,
            symmetric_rooms: false,
            interconnects: 1,
            max_interconnect_length: 10,
            room_count: 20,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be non-zero, got {0}x{1}")]
    EmptyGrid(u32, u32),
    #[error("room min size {min:?} exceeds max size {max:?}")]
    RoomBoundsInverted { min: [u32; 2], max: [u32; 2] },
    #[error("room size must be non-zero")]
    EmptyRoom,
    #[error("corridor length bounds inverted: {0}..={1}")]
    CorridorBoundsInverted(u32, u32),
    #[error("corridor length must be non-zero")]
    ZeroCorridor,
    #[error("corridor density must lie in [0, 1], got {0}")]
    DensityOutOfRange(f32),
    #[error("largest room ({0}x{1}) cannot fit inside the grid")]
    RoomLargerThanGrid(u32, u32),
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [w, h] = self.size;
        if w == 0 || h == 0 {
            return Err(ConfigError::EmptyGrid(w, h));
        }

        for bounds in [&self.initial_room, &self.any_room] {
            if bounds.min_size[0] == 0 || bounds.min_size[1] == 0 {
                return Err(ConfigError::EmptyRoom);
            }
            if bounds.min_size[0] > bounds.max_size[0] || bounds.min_size[1] > bounds.max_size[1] {
                return Err(ConfigError::RoomBoundsInverted {
                    min: bounds.min_size,
                    max: bounds.max_size,
                });
            }
            // A 1-cell wall border must survive on every side.
            if bounds.max_size[0] + 2 > w || bounds.max_size[1] + 2 > h {
                return Err(ConfigError::RoomLargerThanGrid(
                    bounds.max_size[0],
                    bounds.max_size[1],
                ));
            }
        }

        if self.min_corridor_length == 0 {
            return Err(ConfigError::ZeroCorridor);
        }
        if self.min_corridor_length > self.max_corridor_length {
            return Err(ConfigError::CorridorBoundsInverted(
                self.min_corridor_length,
                self.max_corridor_length,
            ));
        }
        if !(0.0..=1.0).contains(&self.corridor_density) {
            return Err(ConfigError::DensityOutOfRange(self.corridor_density));
        }

        Ok(())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("failed to parse dungeon config")?;
        config.validate().context("invalid dungeon config")?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dungeon config from {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("failed to load dungeon config from {}", path.display()))
    }
}
