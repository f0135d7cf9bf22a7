use super::*;

#[test]
fn degenerate_viewports_are_flagged() {
    assert!(Viewport::new(0.0, 100.0).is_degenerate());
    assert!(Viewport::new(100.0, -1.0).is_degenerate());
    assert!(Viewport::new(f64::NAN, 10.0).is_degenerate());
    assert!(!Viewport::new(1.0, 1.0).is_degenerate());
}

#[test]
fn denormalize_maps_unit_square_to_pixels() {
    let vp = Viewport::new(200.0, 100.0);
    assert_eq!(vp.denormalize(0.5, 1.0), Point::new(100.0, 100.0));
    assert_eq!(vp.diagonal(), 200f64.hypot(100.0));
}

#[test]
fn premultiply_opaque_is_identity_and_half_alpha_halves() {
    let c = Rgba8Premul::from_straight_rgba(10, 20, 30, 255);
    assert_eq!(c.to_array(), [10, 20, 30, 255]);

    let c = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    assert_eq!(c.to_array(), [100, 50, 0, 128]);
    assert_eq!(Rgba8Premul::transparent().a, 0);
}
