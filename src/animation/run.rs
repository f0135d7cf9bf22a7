use crate::{animation::clock::RunId, animation::ease::Ease, foundation::math::clamp01};

/// Which way tiles animate during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RunDirection {
    /// Tiles start at full size and shrink, exposing the layer underneath (Entering).
    Reveal,
    /// Tiles start empty and grow until the surface is covered (Exiting).
    Hide,
}

impl RunDirection {
    /// Easing curve applied to each tile's local progress.
    pub fn ease(self) -> Ease {
        match self {
            Self::Reveal => Ease::OutQuart,
            Self::Hide => Ease::InQuart,
        }
    }

    /// Drawn tile radius for an eased progress value.
    pub fn radius_at(self, draw_radius: f64, eased: f64) -> f64 {
        match self {
            Self::Reveal => draw_radius * (1.0 - eased),
            Self::Hide => draw_radius * eased,
        }
    }
}

/// One timed pass of the compositor, created per Entering/Exiting invocation.
///
/// The start timestamp is anchored on the first tick the clock delivers, so the first
/// frame of every run is drawn at progress 0.
#[derive(Clone, Debug)]
pub struct AnimationRun {
    id: RunId,
    start_ms: Option<f64>,
    duration_ms: f64,
    direction: RunDirection,
}

impl AnimationRun {
    /// Create a run that has not seen a tick yet.
    pub fn new(id: RunId, duration_ms: f64, direction: RunDirection) -> Self {
        Self {
            id,
            start_ms: None,
            duration_ms,
            direction,
        }
    }

    /// Liveness token the clock subscription was registered with.
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Timestamp of the first tick, once one has been delivered.
    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    /// Configured run length.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Reveal or hide.
    pub fn direction(&self) -> RunDirection {
        self.direction
    }

    /// Global progress at `now_ms`, anchoring the start on the first call.
    pub fn progress_at(&mut self, now_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(now_ms);
        global_progress(now_ms - start, self.duration_ms)
    }
}

/// `clamp(elapsed / duration, 0, 1)`; a non-positive duration completes immediately.
pub fn global_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        return 1.0;
    }
    clamp01(elapsed_ms / duration_ms)
}

/// Per-tile progress: `clamp((global - delay) / (1 - spread), 0, 1)`.
pub fn local_progress(global: f64, delay: f64, spread: f64) -> f64 {
    let window = 1.0 - spread;
    if window.is_nan() || window <= 0.0 {
        return if global >= 1.0 { 1.0 } else { 0.0 };
    }
    clamp01((global - delay) / window)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/run.rs"]
mod tests;
