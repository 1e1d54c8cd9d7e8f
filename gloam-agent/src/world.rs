use gloam_core::{Cell, WorldView};

/// What an agent is allowed to observe each tick: its own cell and the
/// tracked target. Grid access stays read-only; movement is applied by the
/// host from the returned intents.
pub trait PerceptionView: WorldView {
    fn agent_cell(&self, agent: Self::Agent) -> Cell;
    fn target_cell(&self) -> Cell;
    fn target_down(&self) -> bool;
}
