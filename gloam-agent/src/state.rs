#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use gloam_core::{Cell, DeterministicRng, Direction};
use gloam_nav::PathTicket;

use crate::AgentConfig;

/// A resolved path being walked one cell per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathFollow {
    pub cells: Vec<Cell>,
    pub next: usize,
}

impl PathFollow {
    pub fn new(cells: Vec<Cell>, next: usize) -> Self {
        Self { cells, next }
    }
}

/// Behavioral mode plus the timers and resources that mode owns. Everything
/// a state carries dies with it on exit, so a stale timer or ticket can
/// never outlive its state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PerceptionState {
    Patrol {
        dir: Direction,
        until_resample: f32,
    },
    Detected {
        remaining: f32,
    },
    Pursuing {
        until_poll: f32,
        ticket: Option<PathTicket>,
        path: Option<PathFollow>,
    },
    /// Terminal; no transition leaves it.
    Incapacitated,
}

impl PerceptionState {
    /// Fresh patrol with a uniformly drawn direction and a full resample
    /// timer.
    pub fn patrol(config: &AgentConfig, rng: &mut impl DeterministicRng) -> Self {
        PerceptionState::Patrol {
            dir: Direction::ALL[rng.next_range(4) as usize],
            until_resample: config.patrol_resample_secs,
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            PerceptionState::Patrol { .. } => StateKind::Patrol,
            PerceptionState::Detected { .. } => StateKind::Detected,
            PerceptionState::Pursuing { .. } => StateKind::Pursuing,
            PerceptionState::Incapacitated => StateKind::Incapacitated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StateKind {
    Patrol,
    Detected,
    Pursuing,
    Incapacitated,
}

/// Everything that can drive a transition: host lifecycle events plus the
/// conditions the controller synthesizes each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AgentEvent {
    /// Target within detection radius and not down.
    TargetSpotted,
    /// Detection pause has elapsed.
    AlertElapsed,
    /// Target moved outside the detection radius.
    TargetLost,
    /// The tracked target was incapacitated.
    TargetDown,
    /// Router reported no path to the target.
    PathUnreachable,
    /// Patrol direction timer elapsed.
    ResampleElapsed,
    /// Host collision layer reports a wall hit.
    BumpedWall,
    /// Host damage event; plays a cue, changes no state.
    Damaged,
    /// Host defeat event; terminal.
    Defeated,
}

/// Pure transition function. Side effects (cues, ticket cancellation) happen
/// in the controller's dispatch, keyed by the kind change this returns.
pub fn transition(
    config: &AgentConfig,
    state: PerceptionState,
    event: AgentEvent,
    rng: &mut impl DeterministicRng,
) -> PerceptionState {
    use AgentEvent as E;
    use PerceptionState as S;

    match (state, event) {
        (S::Incapacitated, _) => S::Incapacitated,
        (_, E::Defeated) => S::Incapacitated,

        (S::Patrol { dir, .. }, E::ResampleElapsed | E::BumpedWall) => S::Patrol {
            dir: Direction::random_excluding(rng, dir),
            until_resample: config.patrol_resample_secs,
        },
        (S::Patrol { .. }, E::TargetSpotted) => S::Detected {
            remaining: config.detection_delay_secs,
        },

        (S::Detected { .. }, E::TargetDown) => S::patrol(config, rng),
        (S::Detected { .. }, E::AlertElapsed) => S::Pursuing {
            until_poll: 0.0,
            ticket: None,
            path: None,
        },

        (S::Pursuing { .. }, E::TargetDown | E::TargetLost | E::PathUnreachable) => {
            S::patrol(config, rng)
        }

        (state, _) => state,
    }
}
