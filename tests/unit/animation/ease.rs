use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in [Ease::InQuart, Ease::OutQuart] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [Ease::InQuart, Ease::OutQuart] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn in_and_out_are_mirrors() {
    for t in [0.1, 0.3, 0.5, 0.9] {
        let mirrored = 1.0 - Ease::InQuart.apply(1.0 - t);
        assert!((Ease::OutQuart.apply(t) - mirrored).abs() < 1e-12);
    }
    assert_eq!(Ease::InQuart.apply(0.5), 0.0625);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::OutQuart.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuart.apply(2.0), 1.0);
}
