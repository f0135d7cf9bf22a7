use crate::{
    animation::run::{RunDirection, local_progress},
    foundation::core::Rgba8Premul,
    foundation::error::HexwipeResult,
    render::surface::DrawSurface,
    tiles::delay::Tile,
};

/// Tiles whose drawn radius falls below this many pixels are not drawn.
pub const MIN_DRAW_RADIUS_PX: f64 = 0.25;

/// Everything the compositor needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Run progress in `[0, 1]`.
    pub global_progress: f64,
    /// Reveal shrinks tiles, hide grows them.
    pub direction: RunDirection,
    /// Stagger fraction the delays were generated with.
    pub spread: f64,
    /// Fully grown tile radius.
    pub draw_radius: f64,
    /// Tile fill.
    pub color: Rgba8Premul,
}

/// Draw-call counters for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tiles drawn.
    pub drawn: usize,
    /// Tiles skipped because their radius was below [`MIN_DRAW_RADIUS_PX`].
    pub skipped: usize,
}

/// Eased progress of `tile` for the frame described by `params`.
pub fn tile_eased_progress(tile: &Tile, params: &FrameParams) -> f64 {
    let local = local_progress(params.global_progress, tile.delay, params.spread);
    params.direction.ease().apply(local)
}

/// Drawn radius of `tile` for the frame described by `params`.
pub fn tile_radius(tile: &Tile, params: &FrameParams) -> f64 {
    params
        .direction
        .radius_at(params.draw_radius, tile_eased_progress(tile, params))
}

/// Clear the surface and redraw every visible tile.
///
/// Partial invalidation is never attempted: tiles overlap, so each frame starts from a
/// cleared surface.
pub fn render_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    tiles: &[Tile],
    params: &FrameParams,
) -> HexwipeResult<FrameStats> {
    surface.clear()?;
    let mut stats = FrameStats::default();
    for tile in tiles {
        let r = tile_radius(tile, params);
        if r < MIN_DRAW_RADIUS_PX {
            stats.skipped += 1;
            continue;
        }
        surface.fill_hexagon(tile.center, r, params.color)?;
        stats.drawn += 1;
    }
    surface.present()?;
    tracing::trace!(
        progress = params.global_progress,
        drawn = stats.drawn,
        skipped = stats.skipped,
        "composited frame"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
