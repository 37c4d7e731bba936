use serde::{Deserialize, Serialize};

/// Execution state of the simulation loop.
///
/// The variants are mutually exclusive, so "running and paused at the same
/// time" cannot be represented. The machine is driven entirely by the caller:
/// the simulation itself executes whatever it is asked to and never consults
/// this state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlState {
    /// Update steps are applied on every tick of the caller's loop.
    #[default]
    Running,
    /// The loop is frozen; the simulation state is held as-is.
    Paused,
}

impl ControlState {
    /// Whether update steps should be applied.
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// Whether the loop is frozen.
    #[must_use]
    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }

    /// Freezes the loop.
    pub fn pause(&mut self) {
        *self = Self::Paused;
    }

    /// Resumes stepping.
    pub fn resume(&mut self) {
        *self = Self::Running;
    }

    /// Returns to [`Running`](Self::Running), the post-reset state, from
    /// either state.
    pub fn reset(&mut self) {
        *self = Self::Running;
    }
}
