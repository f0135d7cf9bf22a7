use super::*;

#[test]
fn defaults_validate() {
    let cfg = TransitionConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.duration_ms, 950.0);
    assert!(cfg.draw_radius() > cfg.tile_radius);
}

#[test]
fn partial_json_overrides_single_field() {
    let cfg = TransitionConfig::from_json(r#"{ "tile_radius": 24.0 }"#).unwrap();
    assert_eq!(cfg.tile_radius, 24.0);
    assert_eq!(cfg.spread, TransitionConfig::default().spread);
}

#[test]
fn wave_model_parses_from_tagged_json() {
    let cfg =
        TransitionConfig::from_json(r#"{ "exit_wave": { "mode": "radial", "x": 1.0, "y": 0.0 } }"#)
            .unwrap();
    assert_eq!(cfg.exit_wave, WaveOrigin::Radial { x: 1.0, y: 0.0 });
}

#[test]
fn unknown_fields_are_rejected_as_serde_errors() {
    let err = TransitionConfig::from_json(r#"{ "tile_radios": 1 }"#).unwrap_err();
    assert!(matches!(err, HexwipeError::Serde(_)));
}

#[test]
fn bad_spread_and_threshold_fail_validation() {
    for json in [
        r#"{ "spread": 0.0 }"#,
        r#"{ "spread": 1.0 }"#,
        r#"{ "partial_reveal_threshold": 1.0 }"#,
        r#"{ "duration_ms": 0.0 }"#,
        r#"{ "jitter": 0.3 }"#,
        r#"{ "packing_factor": 1.5 }"#,
    ] {
        let err = TransitionConfig::from_json(json).unwrap_err();
        assert!(matches!(err, HexwipeError::Validation(_)), "{json}");
    }
}

#[test]
fn non_positive_radius_is_accepted() {
    let cfg = TransitionConfig::from_json(r#"{ "tile_radius": -1.0 }"#).unwrap();
    assert!(cfg.grid_params().tile_radius < 0.0);
}

#[test]
fn draw_radius_never_shrinks_below_tile_radius() {
    let cfg = TransitionConfig {
        draw_radius_scale: 0.5,
        ..TransitionConfig::default()
    };
    assert_eq!(cfg.draw_radius(), cfg.tile_radius);
}

#[test]
fn draw_radius_scale_does_not_move_the_grid() {
    let base = TransitionConfig::default();
    let wide = TransitionConfig {
        draw_radius_scale: 1.5,
        ..TransitionConfig::default()
    };
    assert_eq!(base.grid_params(), wide.grid_params());
    assert!(wide.draw_radius() > base.draw_radius());
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = TransitionConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    let back = TransitionConfig::from_json(&json).unwrap();
    assert_eq!(back.seed, cfg.seed);
    assert_eq!(back.tile_color, cfg.tile_color);
    assert_eq!(back.exit_wave, cfg.exit_wave);
    assert!((back.packing_factor - cfg.packing_factor).abs() < 1e-12);
}

#[test]
fn backdrops_are_opposites() {
    assert_eq!(Backdrop::Dark.opposite(), Backdrop::Paper);
    assert_eq!(Backdrop::Paper.premul().a, 255);
}
