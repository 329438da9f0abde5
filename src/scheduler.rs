use std::time::Duration;

use crate::game::Status;

/// Most periods of backlog kept when a frame runs long (window hidden,
/// debugger pause). Anything older is dropped instead of replayed.
pub const MAX_BACKLOG_PERIODS: u32 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickPolicy {
    Fixed { period_ms: u64 },
    /// `max(min_ms, base_ms - (score / 10) * step_ms)`
    ScoreScaled { base_ms: u64, min_ms: u64, step_ms: u64 },
}

impl TickPolicy {
    pub const BASIC: TickPolicy = TickPolicy::Fixed { period_ms: 150 };
    pub const ENHANCED: TickPolicy = TickPolicy::ScoreScaled { base_ms: 150, min_ms: 60, step_ms: 5 };

    pub fn period_for(&self, score: u32) -> Duration {
        let ms = match *self {
            TickPolicy::Fixed { period_ms } => period_ms,
            TickPolicy::ScoreScaled { base_ms, min_ms, step_ms } => {
                let speedup = u64::from(score / 10).saturating_mul(step_ms);
                base_ms.saturating_sub(speedup).max(min_ms)
            }
        };
        Duration::from_millis(ms)
    }
}

/// Frame-driven stand-in for an interval timer.
///
/// The owner calls `sync` with the latest status and score, then `poll`
/// with the frame delta. The timer only runs while the game is Running, and
/// restarts from zero whenever its period changes, so a speed-up applies on
/// the very next tick and nothing queued under the old period leaks through.
#[derive(Debug)]
pub struct TickScheduler {
    policy: TickPolicy,
    period: Option<Duration>,
    elapsed: Duration,
}

impl TickScheduler {
    pub fn new(policy: TickPolicy) -> Self {
        Self { policy, period: None, elapsed: Duration::ZERO }
    }

    pub fn policy(&self) -> TickPolicy {
        self.policy
    }

    /// Current period, or `None` while stopped.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.period.is_some()
    }

    pub fn sync(&mut self, status: Status, score: u32) {
        if status != Status::Running {
            self.stop();
            return;
        }
        let wanted = self.policy.period_for(score);
        if self.period != Some(wanted) {
            log::debug!("tick period -> {}ms", wanted.as_millis());
            self.period = Some(wanted);
            self.elapsed = Duration::ZERO;
        }
    }

    pub fn stop(&mut self) {
        self.period = None;
        self.elapsed = Duration::ZERO;
    }

    /// Adds `dt` and reports whether a tick is due, consuming one period if
    /// so. Call again with `Duration::ZERO` (after re-syncing) to drain any
    /// remaining backlog.
    pub fn poll(&mut self, dt: Duration) -> bool {
        let Some(period) = self.period else {
            return false;
        };
        self.elapsed = (self.elapsed + dt).min(period * MAX_BACKLOG_PERIODS);
        if self.elapsed >= period {
            self.elapsed -= period;
            true
        } else {
            false
        }
    }
}
