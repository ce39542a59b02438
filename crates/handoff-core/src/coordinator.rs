use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::classify::apply_item;
use crate::errors::{RunError, STREAM_ERROR_FALLBACK, TURN_FAILED_FALLBACK};
use crate::event::{SessionEvent, classify_event};
use crate::liveness::{DEFAULT_LIVENESS_INTERVAL, LivenessMonitor, STILL_WORKING_NOTICE};
use crate::report::TaskReport;
use crate::sink::OutputSink;
use crate::source::EventSource;

/// Configuration for one coordinator run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Overall wall-clock budget in minutes. Must be at least one.
    pub timeout_minutes: u64,
    /// Mirror every raw serialized event to the primary output.
    pub verbose: bool,
    /// Interval between liveness checks during upstream silence.
    pub liveness_interval: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: 10,
            verbose: false,
            liveness_interval: DEFAULT_LIVENESS_INTERVAL,
        }
    }
}

impl RunConfig {
    /// Creates a config with the given timeout and defaults elsewhere.
    pub fn from_minutes(timeout_minutes: u64) -> Self {
        Self {
            timeout_minutes,
            ..Self::default()
        }
    }

    /// Overall deadline as a duration.
    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout_minutes.saturating_mul(60))
    }
}

/// Drives one run: pulls events from `source` until the sequence ends, a
/// terminal event arrives, or the deadline elapses.
///
/// Every observed event is written to `raw_log` when present (one serialized
/// line each, independent of verbosity), mirrored to `out` when verbose, and
/// fed to the liveness monitor and the classifier. Completed items
/// additionally produce always-on one-line progress echoes on `out`.
///
/// `source.close()` is awaited exactly once on every exit path, including
/// timeout and upstream iteration failure; both timers live inside the pull
/// loop's scope and are dropped exactly once when it returns. On failure the
/// partially filled report is discarded.
pub async fn run<S>(
    mut source: S,
    config: RunConfig,
    out: &mut dyn OutputSink,
    raw_log: Option<&mut dyn OutputSink>,
) -> Result<TaskReport, RunError>
where
    S: EventSource,
{
    let outcome = drive(&mut source, &config, out, raw_log).await;
    source.close().await;
    outcome
}

async fn drive<S>(
    source: &mut S,
    config: &RunConfig,
    out: &mut dyn OutputSink,
    mut raw_log: Option<&mut dyn OutputSink>,
) -> Result<TaskReport, RunError>
where
    S: EventSource,
{
    if config.timeout_minutes == 0 {
        return Err(RunError::Config(
            "timeout must be at least one minute".into(),
        ));
    }

    let mut report = TaskReport::default();
    let mut liveness = LivenessMonitor::new(config.liveness_interval);
    debug!(
        timeout_minutes = config.timeout_minutes,
        verbose = config.verbose,
        "agent stream run started"
    );

    let deadline = tokio::time::sleep(config.deadline());
    tokio::pin!(deadline);
    let mut ticker = tokio::time::interval_at(
        Instant::now() + config.liveness_interval,
        config.liveness_interval,
    );
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // The in-flight pull is pinned outside the timer race and polled by
        // reference, so a tick firing never cancels it; a new pull starts
        // only after the previous one completes.
        let pull = source.next_event();
        tokio::pin!(pull);
        let next = loop {
            tokio::select! {
                _ = &mut deadline => {
                    debug!("deadline elapsed before the agent stream finished");
                    return Err(RunError::Timeout { minutes: config.timeout_minutes });
                }
                _ = ticker.tick() => {
                    if liveness.is_stalled() {
                        out.line(STILL_WORKING_NOTICE);
                    }
                }
                next = &mut pull => break next,
            }
        };
        match next {
            None => {
                debug!("agent stream finished");
                return Ok(report);
            }
            Some(Err(err)) => {
                debug!(error = %err, "agent stream pull failed");
                return Err(err.into());
            }
            Some(Ok(event)) => {
                let serialized = event.to_string();
                if let Some(log) = raw_log.as_deref_mut() {
                    log.line(&serialized);
                }
                if config.verbose {
                    out.line(&serialized);
                }
                liveness.touch();
                match classify_event(&event) {
                    SessionEvent::ItemCompleted { item } => {
                        for line in apply_item(&mut report, &item) {
                            out.line(&line);
                        }
                    }
                    SessionEvent::TurnCompleted { usage } => {
                        if let Some(usage) = usage {
                            report.usage_summary = usage.summary();
                        }
                    }
                    SessionEvent::TurnFailed { message } => {
                        return Err(RunError::TurnFailed {
                            message: message.unwrap_or_else(|| TURN_FAILED_FALLBACK.to_owned()),
                        });
                    }
                    SessionEvent::StreamError { message } => {
                        return Err(RunError::Stream {
                            message: message.unwrap_or_else(|| STREAM_ERROR_FALLBACK.to_owned()),
                        });
                    }
                    SessionEvent::Other => {}
                }
            }
        }
    }
}
