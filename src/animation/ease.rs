/// The two easing curves the compositor applies to per-tile progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Quartic ease-in, `t^4`. Slow start, used when tiles grow to cover.
    InQuart,
    /// Quartic ease-out, `1 - (1 - t)^4`. Fast start, used when tiles shrink to reveal.
    OutQuart,
}

impl Ease {
    /// Apply the curve to `t`, clamped to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
