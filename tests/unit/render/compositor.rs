use super::*;
use crate::{foundation::core::Point, render::surface::RecordingSurface};

fn tiles() -> Vec<Tile> {
    [0.0, 0.25, 0.5]
        .into_iter()
        .enumerate()
        .map(|(i, delay)| Tile {
            center: Point::new(i as f64 * 10.0, 0.0),
            delay,
        })
        .collect()
}

fn params(progress: f64, direction: RunDirection) -> FrameParams {
    FrameParams {
        global_progress: progress,
        direction,
        spread: 0.5,
        draw_radius: 43.2,
        color: Rgba8Premul::from_straight_rgba(11, 11, 13, 255),
    }
}

#[test]
fn reveal_starts_fully_covered_and_ends_empty() {
    let mut s = RecordingSurface::new();
    let stats = render_frame(&mut s, &tiles(), &params(0.0, RunDirection::Reveal)).unwrap();
    assert_eq!(stats, FrameStats { drawn: 3, skipped: 0 });
    assert!(s.last_frame().iter().all(|h| h.radius == 43.2));

    let stats = render_frame(&mut s, &tiles(), &params(1.0, RunDirection::Reveal)).unwrap();
    assert_eq!(stats, FrameStats { drawn: 0, skipped: 3 });
    assert!(s.last_frame().is_empty());
}

#[test]
fn hide_starts_empty_and_ends_fully_covered() {
    let mut s = RecordingSurface::new();
    let stats = render_frame(&mut s, &tiles(), &params(0.0, RunDirection::Hide)).unwrap();
    assert_eq!(stats.drawn, 0);

    render_frame(&mut s, &tiles(), &params(1.0, RunDirection::Hide)).unwrap();
    assert_eq!(s.last_frame().len(), 3);
    assert!(s.last_frame().iter().all(|h| h.radius == 43.2));
}

#[test]
fn delayed_tiles_lag_behind() {
    let p = params(0.3, RunDirection::Hide);
    let t = tiles();
    let r0 = tile_radius(&t[0], &p);
    let r1 = tile_radius(&t[1], &p);
    let r2 = tile_radius(&t[2], &p);
    assert!(r0 > r1);
    assert!(r1 > 0.0);
    assert_eq!(r2, 0.0);
}

#[test]
fn every_frame_clears_and_presents() {
    let mut s = RecordingSurface::new();
    for i in 0..=4 {
        let p = params(f64::from(i) / 4.0, RunDirection::Reveal);
        render_frame(&mut s, &tiles(), &p).unwrap();
    }
    assert_eq!(s.clears(), 5);
    assert_eq!(s.presents(), 5);
}

#[test]
fn empty_tile_set_is_a_noop_cover() {
    let mut s = RecordingSurface::new();
    let stats = render_frame(&mut s, &[], &params(0.5, RunDirection::Hide)).unwrap();
    assert_eq!(stats, FrameStats::default());
    assert_eq!(s.draw_calls(), 0);
}

#[test]
fn surface_failure_propagates() {
    let mut s = RecordingSurface::new();
    s.set_fail_draws(true);
    assert!(render_frame(&mut s, &tiles(), &params(0.0, RunDirection::Reveal)).is_err());
}
