pub(crate) mod delay;
pub(crate) mod grid;

use crate::{
    animation::run::RunDirection,
    foundation::core::Viewport,
    tiles::delay::{DelayParams, Tile, WaveOrigin, assign_delays},
    tiles::grid::{GridParams, hex_grid},
};

/// Generate the grid for `viewport` and assign its delay field in one step.
#[tracing::instrument(skip(grid, delays), fields(tiles = tracing::field::Empty))]
pub fn build_tile_field(
    viewport: Viewport,
    grid: &GridParams,
    wave: WaveOrigin,
    direction: RunDirection,
    delays: &DelayParams,
) -> Vec<Tile> {
    let centers = hex_grid(viewport, grid);
    let tiles = assign_delays(&centers, viewport, wave, direction, delays);
    tracing::Span::current().record("tiles", tiles.len());
    tracing::debug!(count = tiles.len(), "built tile field");
    tiles
}
