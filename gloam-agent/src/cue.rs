use thiserror::Error;

/// Name of an audio/visual cue owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CueKey(pub &'static str);

pub const DETECTED: CueKey = CueKey("grunt-detected");
pub const HURT: CueKey = CueKey("grunt-hurt");
pub const DEATH: CueKey = CueKey("grunt-death");

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cue `{key}` is not loaded")]
pub struct CueError {
    pub key: &'static str,
}

/// Playback seam. A missing resource is an error the caller logs and drops;
/// it must never abort a state transition.
pub trait CueSink {
    fn play(&mut self, cue: CueKey) -> Result<(), CueError>;
}

/// Sink for headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCues;

impl CueSink for NoCues {
    fn play(&mut self, _cue: CueKey) -> Result<(), CueError> {
        Ok(())
    }
}
