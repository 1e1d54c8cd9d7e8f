//! Procedural room/corridor dungeon generation and tile classification.
//!
//! The pipeline is `generate` -> raw wall grid -> `classify` -> decorated
//! tile map + collision predicate. Both halves are pure functions of
//! (seed, config): the same inputs reproduce a level bit for bit.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;
pub mod room;
pub mod tile;

pub use config::{ConfigError, DungeonConfig, RoomBounds};
pub use generate::{generate, Dungeon};
pub use room::Room;
pub use tile::{classify, TileKind, TileMap, TileVariant};
