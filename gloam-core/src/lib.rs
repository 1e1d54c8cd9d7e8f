//! Deterministic, engine-agnostic dungeon kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod rng;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use cell::{grid_to_world, Cell};
pub use direction::Direction;
pub use grid::Grid;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use world::WorldView;
