use std::time::Duration;

use tokio::time::Instant;

/// Notice written to the operator when the session stays silent for a full
/// monitoring interval.
pub const STILL_WORKING_NOTICE: &str = "Agent is still working...";

/// Default monitoring interval between liveness checks.
pub const DEFAULT_LIVENESS_INTERVAL: Duration = Duration::from_secs(60);

/// Tracks time since the last observed upstream activity.
///
/// Only new activity resets the clock via [`touch`](Self::touch); the
/// periodic check never does, so a session that stays silent for several
/// intervals reports stalled on each of them. The repeating timer that
/// drives the checks is owned by the coordinator's run scope.
#[derive(Debug)]
pub struct LivenessMonitor {
    last_activity: Instant,
    interval: Duration,
}

impl LivenessMonitor {
    /// Creates a monitor whose silence clock starts now.
    pub fn new(interval: Duration) -> Self {
        Self {
            last_activity: Instant::now(),
            interval,
        }
    }

    /// Records upstream activity, resetting the silence clock.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    /// Returns true when at least one full interval has elapsed without
    /// activity.
    pub fn is_stalled(&self) -> bool {
        self.last_activity.elapsed() >= self.interval
    }
}
