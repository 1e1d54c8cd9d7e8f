#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-agent behavior tuning. Distances are in cells, timers in seconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentConfig {
    /// Straight-line range at which a live target is noticed.
    /// 3.75 cells = the shipped 60 world units at 8 px tiles, scale 2.
    pub detection_radius: f32,

    /// Patrol picks a fresh direction this often, or sooner on a wall bump.
    pub patrol_resample_secs: f32,

    /// Pause between noticing the target and giving chase.
    pub detection_delay_secs: f32,

    /// Minimum time between path requests while pursuing.
    pub path_poll_secs: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            detection_radius: 3.75,
            patrol_resample_secs: 2.0,
            detection_delay_secs: 1.0,
            path_poll_secs: 0.2,
        }
    }
}
