use crate::foundation::core::{BezPath, Point, Viewport};

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const CONTAINS_EPS: f64 = 1e-9;

/// Inputs for the staggered hexagonal packing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridParams {
    /// Hexagon circumradius the pitch is derived from.
    pub tile_radius: f64,
    /// Pitch multiplier in `(0, 1]`; values below 1 over-pack the grid.
    pub packing_factor: f64,
    /// Margin beyond each viewport edge, in tile widths. At least 2 is always used.
    pub overscan_tiles: u32,
}

impl GridParams {
    /// Horizontal distance between adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        1.5 * self.tile_radius * self.packing()
    }

    /// Vertical distance between adjacent rows within a column.
    pub fn row_pitch(&self) -> f64 {
        SQRT_3 * self.tile_radius * self.packing()
    }

    /// Pixel margin the grid extends past every viewport edge.
    pub fn overscan_px(&self) -> f64 {
        f64::from(self.overscan_tiles.max(2)) * 2.0 * self.tile_radius
    }

    fn packing(&self) -> f64 {
        if self.packing_factor.is_finite() && self.packing_factor > 0.0 {
            self.packing_factor.min(1.0)
        } else {
            1.0
        }
    }
}

/// Tile centers for a flat-topped hexagonal grid covering `viewport` plus overscan.
///
/// Columns are laid out left to right; odd columns are shifted down by half a row pitch.
/// Output order is column-major and fully determined by the inputs. Degenerate inputs
/// (non-positive radius or viewport) yield an empty set. A grid too large to allocate is
/// logged and also yields an empty set.
pub fn hex_grid(viewport: Viewport, params: &GridParams) -> Vec<Point> {
    let r = params.tile_radius;
    if viewport.is_degenerate() || !r.is_finite() || r <= 0.0 {
        return Vec::new();
    }

    let hp = params.column_pitch();
    let vp = params.row_pitch();
    let margin = params.overscan_px();

    let cols = ((viewport.width + 2.0 * margin) / hp).ceil() + 1.0;
    let rows = ((viewport.height + 2.0 * margin) / vp).ceil() + 1.0;
    let Some(count) = tile_count(cols, rows) else {
        tracing::warn!(cols, rows, "tile grid cannot be addressed; skipping effect");
        return Vec::new();
    };
    let (cols, rows) = (cols as usize, rows as usize);

    let mut out = Vec::new();
    if let Err(err) = out.try_reserve_exact(count) {
        tracing::warn!(count, %err, "tile grid allocation failed; skipping effect");
        return Vec::new();
    }
    for c in 0..cols {
        let x = -margin + c as f64 * hp;
        let y0 = if c % 2 == 1 { -margin + vp * 0.5 } else { -margin };
        for row in 0..rows {
            out.push(Point::new(x, y0 + row as f64 * vp));
        }
    }
    out
}

fn tile_count(cols: f64, rows: f64) -> Option<usize> {
    if !(cols.is_finite() && rows.is_finite()) || cols > usize::MAX as f64 {
        return None;
    }
    (cols as usize).checked_mul(rows as usize)
}

/// Corners of a flat-topped hexagon, starting at the rightmost vertex and turning clockwise
/// in screen space.
pub fn hexagon_vertices(center: Point, radius: f64) -> [Point; 6] {
    let h = radius * SQRT_3 * 0.5;
    let half = radius * 0.5;
    [
        Point::new(center.x + radius, center.y),
        Point::new(center.x + half, center.y + h),
        Point::new(center.x - half, center.y + h),
        Point::new(center.x - radius, center.y),
        Point::new(center.x - half, center.y - h),
        Point::new(center.x + half, center.y - h),
    ]
}

/// Closed outline of a flat-topped hexagon.
pub fn hexagon_path(center: Point, radius: f64) -> BezPath {
    let v = hexagon_vertices(center, radius);
    let mut p = BezPath::new();
    p.move_to(v[0]);
    for &pt in &v[1..] {
        p.line_to(pt);
    }
    p.close_path();
    p
}

/// Inclusive point-in-hexagon test for a flat-topped hexagon.
pub fn hexagon_contains(center: Point, radius: f64, p: Point) -> bool {
    let dx = (p.x - center.x).abs();
    let dy = (p.y - center.y).abs();
    let h = radius * SQRT_3 * 0.5;
    dy <= h + CONTAINS_EPS && SQRT_3 * dx + dy <= SQRT_3 * radius + CONTAINS_EPS
}

#[cfg(test)]
#[path = "../../tests/unit/tiles/grid.rs"]
mod tests;
