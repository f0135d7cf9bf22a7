use crate::{
    foundation::core::{BezPath, Point, Rgba8Premul},
    foundation::error::{HexwipeError, HexwipeResult},
    render::surface::DrawSurface,
    tiles::grid::hexagon_path,
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(i..i + 4)
            .and_then(|px| px.try_into().ok())
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// `clear` paints the under-layer colour, hexagons are filled on top, and `present`
/// rasterizes the frame into an internal pixmap readable through [`CpuSurface::frame`].
pub struct CpuSurface {
    width: u16,
    height: u16,
    backdrop: Rgba8Premul,
    attached: bool,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Allocate a surface of `width x height` pixels cleared to `backdrop`.
    pub fn new(width: u32, height: u32, backdrop: Rgba8Premul) -> HexwipeResult<Self> {
        if width == 0 || height == 0 {
            return Err(HexwipeError::surface("surface width/height must be > 0"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| HexwipeError::surface(format!("surface width exceeds u16: {width}")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| HexwipeError::surface(format!("surface height exceeds u16: {height}")))?;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        clear_pixmap(&mut pixmap, backdrop.to_array());
        Ok(Self {
            width: w,
            height: h,
            backdrop,
            attached: true,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Attach or detach the surface; detached surfaces make the transition skip its effect.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Copy of the last presented frame.
    pub fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl DrawSurface for CpuSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn clear(&mut self) -> HexwipeResult<()> {
        self.ctx.reset();
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(to_cpu_color(self.backdrop));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn fill_hexagon(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgba8Premul,
    ) -> HexwipeResult<()> {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
            return Err(HexwipeError::surface("hexagon geometry must be finite"));
        }
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(&hexagon_path(center, radius)));
        Ok(())
    }

    fn present(&mut self) -> HexwipeResult<()> {
        clear_pixmap(&mut self.pixmap, self.backdrop.to_array());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn unpremul_rgba8(c: Rgba8Premul) -> [u8; 4] {
    if c.a == 0 {
        return [0, 0, 0, 0];
    }
    let a = u16::from(c.a);
    let unpremul = |v: u8| -> u8 { ((u16::from(v) * 255 + a / 2) / a).min(255) as u8 };
    [unpremul(c.r), unpremul(c.g), unpremul(c.b), c.a]
}

fn to_cpu_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = unpremul_rgba8(c);
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
