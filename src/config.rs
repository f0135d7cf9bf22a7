use std::path::Path;

use crate::{
    foundation::core::Rgba8Premul,
    foundation::error::{HexwipeError, HexwipeResult},
    tiles::delay::{DelayParams, WaveOrigin},
    tiles::grid::GridParams,
};

/// Default seed for tile jitter.
pub const DEFAULT_SEED: u64 = 0x6865_7877_6970_6531;

/// The two full-screen visual states a transition moves between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    /// Near-black background.
    Dark,
    /// Warm off-white background.
    Paper,
}

impl Backdrop {
    /// Straight RGBA8 colour of the backdrop.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Self::Dark => [0x0b, 0x0b, 0x0d, 0xff],
            Self::Paper => [0xf4, 0xef, 0xe6, 0xff],
        }
    }

    /// Premultiplied colour of the backdrop.
    pub fn premul(self) -> Rgba8Premul {
        let [r, g, b, a] = self.rgba();
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }

    /// The other backdrop.
    pub fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Paper,
            Self::Paper => Self::Dark,
        }
    }
}

/// Tunable constants of the transition.
///
/// Every field has a default, so a partial JSON object is enough to override a single knob.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Hexagon circumradius used for the packing pitch. Non-positive disables the tiles.
    pub tile_radius: f64,
    /// Drawn radius as a multiple of `tile_radius`; values below 1 are raised to 1.
    pub draw_radius_scale: f64,
    /// Pitch multiplier in `(0, 1]`.
    pub packing_factor: f64,
    /// Overscan margin in tile widths (at least 2 is always used).
    pub overscan_tiles: u32,
    /// Maximum fraction of the run consumed by stagger.
    pub spread: f64,
    /// Maximum absolute per-tile jitter.
    pub jitter: f64,
    /// Amplitude of the vertical ripple in directional waves.
    pub ripple_amplitude: f64,
    /// Ripple cycles over the viewport height.
    pub ripple_frequency: f64,
    /// Run length in milliseconds.
    pub duration_ms: f64,
    /// Global progress at which Entering fires its partial-reveal callback.
    pub partial_reveal_threshold: f64,
    /// Gap between the callbacks of a reduced-motion run.
    pub reduced_motion_delay_ms: f64,
    /// Base seed for jitter; mixed with a per-run counter.
    pub seed: u64,
    /// Tile fill, straight RGBA8.
    pub tile_color: [u8; 4],
    /// Wave model used when covering for an exit.
    pub exit_wave: WaveOrigin,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            tile_radius: 40.0,
            draw_radius_scale: 1.08,
            packing_factor: 0.92,
            overscan_tiles: 2,
            spread: 0.5,
            jitter: 0.03,
            ripple_amplitude: 0.04,
            ripple_frequency: 2.0,
            duration_ms: 950.0,
            partial_reveal_threshold: 0.5,
            reduced_motion_delay_ms: 16.0,
            seed: DEFAULT_SEED,
            tile_color: Backdrop::Dark.rgba(),
            exit_wave: WaveOrigin::Directional,
        }
    }
}

impl TransitionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(s: &str) -> HexwipeResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| HexwipeError::serde(format!("invalid transition config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> HexwipeResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            HexwipeError::Other(anyhow::anyhow!(
                "failed to read config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_json(&s)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> HexwipeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HexwipeError::serde(e.to_string()))
    }

    /// Reject values that cannot be degraded into a no-op effect.
    ///
    /// Tile radius is deliberately not checked: a non-positive radius yields an empty grid.
    pub fn validate(&self) -> HexwipeResult<()> {
        if !self.spread.is_finite() || self.spread <= 0.0 || self.spread >= 1.0 {
            return Err(HexwipeError::validation("spread must be in (0, 1)"));
        }
        for (name, value) in [
            ("jitter", self.jitter),
            ("ripple_amplitude", self.ripple_amplitude),
        ] {
            if !value.is_finite() || value < 0.0 || value >= self.spread * 0.5 {
                return Err(HexwipeError::validation(format!(
                    "{name} must be finite, >= 0 and < spread / 2"
                )));
            }
        }
        if !self.ripple_frequency.is_finite() {
            return Err(HexwipeError::validation("ripple_frequency must be finite"));
        }
        if !self.packing_factor.is_finite()
            || self.packing_factor <= 0.0
            || self.packing_factor > 1.0
        {
            return Err(HexwipeError::validation("packing_factor must be in (0, 1]"));
        }
        if !self.draw_radius_scale.is_finite() {
            return Err(HexwipeError::validation("draw_radius_scale must be finite"));
        }
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(HexwipeError::validation("duration_ms must be finite and > 0"));
        }
        if !self.partial_reveal_threshold.is_finite()
            || self.partial_reveal_threshold <= 0.0
            || self.partial_reveal_threshold >= 1.0
        {
            return Err(HexwipeError::validation(
                "partial_reveal_threshold must be in (0, 1)",
            ));
        }
        if !self.reduced_motion_delay_ms.is_finite() || self.reduced_motion_delay_ms <= 0.0 {
            return Err(HexwipeError::validation(
                "reduced_motion_delay_ms must be finite and > 0",
            ));
        }
        if let WaveOrigin::Radial { x, y } = self.exit_wave
            && !(x.is_finite() && y.is_finite())
        {
            return Err(HexwipeError::validation("exit_wave origin must be finite"));
        }
        Ok(())
    }

    /// Fully grown tile radius (`>= tile_radius`).
    pub fn draw_radius(&self) -> f64 {
        self.tile_radius * self.draw_radius_scale.max(1.0)
    }

    /// Grid inputs derived from this config.
    pub fn grid_params(&self) -> GridParams {
        GridParams {
            tile_radius: self.tile_radius,
            packing_factor: self.packing_factor,
            overscan_tiles: self.overscan_tiles,
        }
    }

    /// Delay-field inputs derived from this config with the given seed.
    pub fn delay_params(&self, seed: u64) -> DelayParams {
        DelayParams {
            spread: self.spread,
            jitter: self.jitter,
            ripple_amplitude: self.ripple_amplitude,
            ripple_frequency: self.ripple_frequency,
            seed,
        }
    }

    /// Premultiplied tile colour.
    pub fn tile_premul(&self) -> Rgba8Premul {
        let [r, g, b, a] = self.tile_color;
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
