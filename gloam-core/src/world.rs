use crate::AgentId;

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; specific subsystems (dungeon, perception, etc.) define extension
/// traits on top of this. Mutation stays with the host, which applies the
/// intents the controllers return.
pub trait WorldView {
    type Agent: AgentId;
}
