//! Perception-driven enemy behavior: a tagged-union state machine with a
//! pure transition function, driven once per frame by the host loop.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod cue;
pub mod state;
pub mod world;

pub use config::AgentConfig;
pub use controller::{AgentController, Intent};
pub use cue::{CueError, CueKey, CueSink, NoCues};
pub use state::{transition, AgentEvent, PathFollow, PerceptionState, StateKind};
pub use world::PerceptionView;
