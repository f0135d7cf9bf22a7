//! Host animation clock seam.
//!
//! The engine never owns a timer. It asks the host to deliver per-frame ticks (or a single
//! timeout, in reduced-motion mode) tagged with a [`RunId`], and the host calls back into
//! [`crate::Transition::on_frame`] / [`crate::Transition::on_timeout`]. A tick whose id no
//! longer matches the active run is stale and is ignored.

/// Liveness token identifying one clock subscription.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RunId(pub u64);

/// Per-frame callback provider implemented by the host platform.
pub trait FrameClock {
    /// Start delivering a frame tick for `run` on every display frame until cancelled.
    fn subscribe_frames(&mut self, run: RunId);

    /// Deliver a single timeout for `run` after `delay_ms`.
    fn schedule_timeout(&mut self, run: RunId, delay_ms: f64);

    /// Stop delivering anything for `run`. Unknown ids are ignored.
    fn cancel(&mut self, run: RunId);

    /// Reduced-motion preference, queried at run start.
    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

/// A callback the host owes the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockSignal {
    /// Display frame for a frame subscription.
    Frame {
        /// Subscription the tick belongs to.
        run: RunId,
        /// Monotonic timestamp in milliseconds.
        now_ms: f64,
    },
    /// Elapsed timeout.
    Timeout {
        /// Subscription the timeout belongs to.
        run: RunId,
        /// Monotonic timestamp in milliseconds.
        now_ms: f64,
    },
}

impl ClockSignal {
    /// Subscription the signal targets.
    pub fn run(&self) -> RunId {
        match *self {
            Self::Frame { run, .. } | Self::Timeout { run, .. } => run,
        }
    }
}

/// Deterministic in-memory clock, advanced explicitly by the caller.
///
/// Used by the test suite and by the CLI sequence renderer.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
    reduced_motion: bool,
    frames: Vec<RunId>,
    timeouts: Vec<(RunId, f64)>,
    subscriptions_total: u64,
}

impl ManualClock {
    /// Clock starting at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock reporting the given reduced-motion preference.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Current timestamp.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Runs with a live frame subscription.
    pub fn active_frame_runs(&self) -> &[RunId] {
        &self.frames
    }

    /// Number of timeouts not yet delivered.
    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.len()
    }

    /// Total subscriptions ever made (frames and timeouts).
    pub fn subscriptions_total(&self) -> u64 {
        self.subscriptions_total
    }

    /// `true` when nothing is subscribed or scheduled.
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timeouts.is_empty()
    }

    /// Move time forward and collect what is due, ordered by timestamp.
    ///
    /// Timeouts that came due inside the step are reported at their due time, followed by one
    /// frame tick per live subscription at the new `now`.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<ClockSignal> {
        self.now_ms += dt_ms.max(0.0);
        let now = self.now_ms;

        let mut due: Vec<(RunId, f64)> = Vec::new();
        self.timeouts.retain(|&(run, at)| {
            if at <= now {
                due.push((run, at));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut out: Vec<ClockSignal> = due
            .into_iter()
            .map(|(run, at)| ClockSignal::Timeout { run, now_ms: at })
            .collect();
        out.extend(
            self.frames
                .iter()
                .map(|&run| ClockSignal::Frame { run, now_ms: now }),
        );
        out
    }
}

impl FrameClock for ManualClock {
    fn subscribe_frames(&mut self, run: RunId) {
        self.subscriptions_total += 1;
        if !self.frames.contains(&run) {
            self.frames.push(run);
        }
    }

    fn schedule_timeout(&mut self, run: RunId, delay_ms: f64) {
        self.subscriptions_total += 1;
        self.timeouts.push((run, self.now_ms + delay_ms.max(0.0)));
    }

    fn cancel(&mut self, run: RunId) {
        self.frames.retain(|r| *r != run);
        self.timeouts.retain(|(r, _)| *r != run);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
