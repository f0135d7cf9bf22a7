use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn symmetric_samples_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_symmetric(0.03);
        assert!((-0.03..=0.03).contains(&v));
    }
}

#[test]
fn derived_seeds_differ_per_salt() {
    assert_ne!(derive_seed(42, 1), derive_seed(42, 2));
    assert_eq!(derive_seed(42, 0), 42);
}

#[test]
fn clamp01_handles_nan_and_bounds() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-3.0), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(clamp01(0.25), 0.25);
}
