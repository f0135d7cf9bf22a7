use crate::foundation::{
    core::{Point, Rgba8Premul},
    error::{HexwipeError, HexwipeResult},
};

/// The single rectangular drawing target the compositor paints into.
///
/// Implemented by the host. Every frame is a full `clear` followed by zero or more
/// `fill_hexagon` calls and a final `present`.
pub trait DrawSurface {
    /// `false` while the target is not yet attached (or already gone).
    fn is_attached(&self) -> bool {
        true
    }

    /// Erase the whole surface back to the under-layer.
    fn clear(&mut self) -> HexwipeResult<()>;

    /// Fill a flat-topped hexagon with circumradius `radius` centered at `center`.
    fn fill_hexagon(&mut self, center: Point, radius: f64, color: Rgba8Premul)
    -> HexwipeResult<()>;

    /// Finish the frame.
    fn present(&mut self) -> HexwipeResult<()> {
        Ok(())
    }
}

/// A hexagon recorded by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawnHex {
    /// Center in viewport pixels.
    pub center: Point,
    /// Drawn circumradius.
    pub radius: f64,
}

/// Surface that records draw calls instead of producing pixels.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    attached: bool,
    fail_draws: bool,
    clears: u64,
    draw_calls: u64,
    presents: u64,
    current: Vec<DrawnHex>,
    last_frame: Vec<DrawnHex>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            attached: true,
            fail_draws: false,
            clears: 0,
            draw_calls: 0,
            presents: 0,
            current: Vec::new(),
            last_frame: Vec::new(),
        }
    }
}

impl RecordingSurface {
    /// Attached surface with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that reports itself as not attached.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::default()
        }
    }

    /// Attach or detach the surface.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Make every subsequent `fill_hexagon` fail.
    pub fn set_fail_draws(&mut self, fail: bool) {
        self.fail_draws = fail;
    }

    /// Number of `clear` calls.
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Number of successful `fill_hexagon` calls across all frames.
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Number of `present` calls.
    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Hexagons of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawnHex] {
        &self.last_frame
    }
}

impl DrawSurface for RecordingSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn clear(&mut self) -> HexwipeResult<()> {
        self.clears += 1;
        self.current.clear();
        Ok(())
    }

    fn fill_hexagon(
        &mut self,
        center: Point,
        radius: f64,
        _color: Rgba8Premul,
    ) -> HexwipeResult<()> {
        if self.fail_draws {
            return Err(HexwipeError::surface("recording surface rejected draw"));
        }
        self.draw_calls += 1;
        self.current.push(DrawnHex { center, radius });
        Ok(())
    }

    fn present(&mut self) -> HexwipeResult<()> {
        self.presents += 1;
        self.last_frame = std::mem::take(&mut self.current);
        Ok(())
    }
}
