use super::*;

fn params(r: f64) -> GridParams {
    GridParams {
        tile_radius: r,
        packing_factor: 0.92,
        overscan_tiles: 2,
    }
}

#[test]
fn non_positive_inputs_yield_empty_grid() {
    let vp = Viewport::new(800.0, 600.0);
    assert!(hex_grid(vp, &params(0.0)).is_empty());
    assert!(hex_grid(vp, &params(-4.0)).is_empty());
    assert!(hex_grid(vp, &params(f64::NAN)).is_empty());
    assert!(hex_grid(Viewport::new(0.0, 600.0), &params(40.0)).is_empty());
}

#[test]
fn small_tiles_on_a_4k_viewport_still_cover_it() {
    let vp = Viewport::new(3840.0, 2160.0);
    let p = params(3.0);
    let pts = hex_grid(vp, &p);
    assert!(pts.len() > 250_000);
    let draw_r = p.tile_radius * 1.08;
    for probe in [
        Point::new(0.0, 0.0),
        Point::new(1920.0, 1080.0),
        Point::new(3840.0, 2160.0),
        Point::new(1234.5, 987.25),
    ] {
        assert!(
            pts.iter().any(|&c| hexagon_contains(c, draw_r, probe)),
            "{probe:?} uncovered"
        );
    }
}

#[test]
fn unaddressable_grid_is_skipped() {
    let vp = Viewport::new(1.0e300, 1.0e300);
    assert!(hex_grid(vp, &params(1.0e-300)).is_empty());
}

#[test]
fn grid_is_deterministic() {
    let vp = Viewport::new(1920.0, 1080.0);
    assert_eq!(hex_grid(vp, &params(40.0)), hex_grid(vp, &params(40.0)));
}

#[test]
fn grid_extends_two_tile_widths_past_every_edge() {
    let vp = Viewport::new(640.0, 480.0);
    let p = params(20.0);
    let pts = hex_grid(vp, &p);
    let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let two_widths = 2.0 * 2.0 * p.tile_radius;
    assert!(min_x <= -two_widths);
    assert!(min_y <= -two_widths);
    assert!(max_x >= vp.width + two_widths);
    assert!(max_y >= vp.height + two_widths);
}

#[test]
fn odd_columns_are_offset_by_half_a_row() {
    let p = params(10.0);
    let pts = hex_grid(Viewport::new(100.0, 100.0), &p);
    let col0_y = pts[0].y;
    let col1 = pts
        .iter()
        .find(|q| (q.x - (pts[0].x + p.column_pitch())).abs() < 1e-9)
        .unwrap();
    assert!((col1.y - col0_y - p.row_pitch() * 0.5).abs() < 1e-9);
}

#[test]
fn overscan_never_drops_below_two_tiles() {
    let mut p = params(10.0);
    p.overscan_tiles = 0;
    assert_eq!(p.overscan_px(), 40.0);
}

#[test]
fn hexagon_containment_matches_vertices() {
    let c = Point::new(50.0, 50.0);
    for v in hexagon_vertices(c, 10.0) {
        assert!(hexagon_contains(c, 10.0, v));
    }
    assert!(hexagon_contains(c, 10.0, c));
    assert!(!hexagon_contains(c, 10.0, Point::new(50.0, 59.0)));
    assert!(hexagon_contains(c, 10.0, Point::new(50.0, 58.6)));
}

#[test]
fn hexagon_path_is_closed_with_six_corners() {
    let path = hexagon_path(Point::new(0.0, 0.0), 5.0);
    // move_to + 5 line_to + close_path
    assert_eq!(path.elements().len(), 7);
}
