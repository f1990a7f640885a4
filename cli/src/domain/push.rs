//! Push outcome reported by the push engine.

use std::time::Duration;

/// One of the timed stages of a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initialisation,
    Creating,
    Uploading,
    Staging,
    Starting,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 5] = [
        Phase::Initialisation,
        Phase::Creating,
        Phase::Uploading,
        Phase::Staging,
        Phase::Starting,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Initialisation => "initialisation",
            Self::Creating => "creating",
            Self::Uploading => "uploading",
            Self::Staging => "staging",
            Self::Starting => "starting",
        }
    }
}

/// Time spent in each phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub initialisation: Duration,
    pub creating: Duration,
    pub uploading: Duration,
    pub staging: Duration,
    pub starting: Duration,
}

impl PhaseTimings {
    #[must_use]
    pub fn get(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Initialisation => self.initialisation,
            Phase::Creating => self.creating,
            Phase::Uploading => self.uploading,
            Phase::Staging => self.staging,
            Phase::Starting => self.starting,
        }
    }

    pub fn set(&mut self, phase: Phase, elapsed: Duration) {
        match phase {
            Phase::Initialisation => self.initialisation = elapsed,
            Phase::Creating => self.creating = elapsed,
            Phase::Uploading => self.uploading = elapsed,
            Phase::Staging => self.staging = elapsed,
            Phase::Starting => self.starting = elapsed,
        }
    }
}

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// Wall-clock time of the whole push.
    pub elapsed: Duration,
    pub phases: PhaseTimings,
    /// Buildpack that staged the app.
    pub buildpack: String,
    /// Stack the app runs on.
    pub stack: String,
}
