//! hexwipe is a procedural hexagon-tile wipe transition engine.
//!
//! A field of hexagonal tiles covers or reveals a drawing surface. Each tile grows or shrinks
//! on its own, offset in time by a procedurally generated delay, so the tiles read as a
//! traveling wave. The effect masks a navigation between two full-screen states.
//!
//! # Pipeline overview
//!
//! 1. **Grid**: `Viewport + GridParams -> Vec<Point>` (staggered flat-topped hex packing plus overscan)
//! 2. **Delays**: `centers + WaveOrigin -> Vec<Tile>` (radial or directional, seeded jitter)
//! 3. **Composite**: `tiles + progress -> DrawSurface` (full clear and redraw every tick)
//! 4. **Orchestrate**: [`Transition`] drives Entering / Visible / Exiting from host clock ticks
//!    and fires the partial-reveal, completion and navigation callbacks.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: grids and delay fields are pure functions of their inputs
//!   and seed.
//! - **Host-owned time**: the engine never sleeps or spawns; a [`FrameClock`] delivers ticks.
//! - **Degrade, never fail**: runtime problems skip the effect but keep the callback contract.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod config;
mod foundation;
mod render;
mod tiles;
mod transition;

pub use animation::clock::{ClockSignal, FrameClock, ManualClock, RunId};
pub use animation::ease::Ease;
pub use animation::run::{AnimationRun, RunDirection, global_progress, local_progress};
pub use config::{Backdrop, DEFAULT_SEED, TransitionConfig};
pub use foundation::core::{BezPath, Point, Rgba8Premul, Vec2, Viewport};
pub use foundation::error::{HexwipeError, HexwipeResult};
pub use foundation::math::Rng64;
pub use render::compositor::{
    FrameParams, FrameStats, MIN_DRAW_RADIUS_PX, render_frame, tile_eased_progress, tile_radius,
};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::surface::{DrawSurface, DrawnHex, RecordingSurface};
pub use tiles::build_tile_field;
pub use tiles::delay::{DelayParams, Tile, WaveOrigin, assign_delays};
pub use tiles::grid::{
    GridParams, hex_grid, hexagon_contains, hexagon_path, hexagon_vertices,
};
pub use transition::controller::Transition;
pub use transition::navigation::NavigationCoordinator;
pub use transition::phase::{Phase, PhaseEvent, PhaseMachine};
