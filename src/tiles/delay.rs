use crate::{
    animation::run::RunDirection,
    foundation::core::{Point, Viewport},
    foundation::math::Rng64,
};

/// Reference used to order tiles in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WaveOrigin {
    /// Delay grows with distance from a normalized point (`0..1` on each axis).
    Radial {
        /// Horizontal origin as a fraction of viewport width.
        x: f64,
        /// Vertical origin as a fraction of viewport height.
        y: f64,
    },
    /// Horizontal sweep. Reveal runs travel left to right, hide runs right to left.
    Directional,
}

impl WaveOrigin {
    /// Radial wave from the viewport center.
    pub fn center() -> Self {
        Self::Radial { x: 0.5, y: 0.5 }
    }
}

/// One hexagon of the field, immutable for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    /// Center in viewport pixels.
    pub center: Point,
    /// Start offset as a fraction of the run, in `[0, spread]`.
    pub delay: f64,
}

/// Shape of the delay field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DelayParams {
    /// Largest fraction of the run consumed by stagger, in `(0, 1)`.
    pub spread: f64,
    /// Maximum absolute uniform jitter added per tile.
    pub jitter: f64,
    /// Amplitude of the sinusoidal vertical ripple (directional waves only).
    pub ripple_amplitude: f64,
    /// Ripple cycles across the viewport height.
    pub ripple_frequency: f64,
    /// Jitter RNG seed.
    pub seed: u64,
}

/// Assign every center a delay in `[0, spread]`.
///
/// Output preserves input order. For fixed inputs (including `seed`) the result is identical
/// across calls.
pub fn assign_delays(
    centers: &[Point],
    viewport: Viewport,
    wave: WaveOrigin,
    direction: RunDirection,
    params: &DelayParams,
) -> Vec<Tile> {
    let spread = if params.spread.is_finite() {
        params.spread.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let jitter = finite_non_negative(params.jitter);
    let ripple = finite_non_negative(params.ripple_amplitude);
    let mut rng = Rng64::new(params.seed);

    let freq = if params.ripple_frequency.is_finite() {
        params.ripple_frequency
    } else {
        0.0
    };
    let (w, h) = (viewport.width, viewport.height);
    let (origin, max_dist) = match wave {
        WaveOrigin::Radial { x, y } => {
            let origin = viewport.denormalize(x, y);
            let max_dist = [
                Point::new(0.0, 0.0),
                Point::new(w, 0.0),
                Point::new(0.0, h),
                Point::new(w, h),
            ]
            .into_iter()
            .map(|corner| corner.distance(origin))
            .fold(0.0, f64::max);
            (origin, max_dist)
        }
        WaveOrigin::Directional => (Point::ORIGIN, 0.0),
    };

    let base = |p: Point| match wave {
        WaveOrigin::Radial { .. } if max_dist > 0.0 => p.distance(origin) / max_dist * spread,
        WaveOrigin::Radial { .. } => 0.0,
        WaveOrigin::Directional if w <= 0.0 || h <= 0.0 => 0.0,
        WaveOrigin::Directional => {
            let axis = match direction {
                RunDirection::Reveal => p.x / w,
                RunDirection::Hide => (w - p.x) / w,
            };
            axis * spread + ripple * (std::f64::consts::TAU * freq * p.y / h).sin()
        }
    };

    centers
        .iter()
        .map(|&center| {
            let j = rng.next_symmetric(jitter);
            let d = base(center) + j;
            Tile {
                center,
                delay: if d.is_nan() { 0.0 } else { d.clamp(0.0, spread) },
            }
        })
        .collect()
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/tiles/delay.rs"]
mod tests;
