use super::*;

#[test]
fn progress_reaches_exactly_one_at_duration() {
    assert_eq!(global_progress(0.0, 950.0), 0.0);
    assert_eq!(global_progress(950.0, 950.0), 1.0);
    assert_eq!(global_progress(2000.0, 950.0), 1.0);
    assert_eq!(global_progress(-5.0, 950.0), 0.0);
}

#[test]
fn zero_duration_completes_immediately() {
    assert_eq!(global_progress(0.0, 0.0), 1.0);
}

#[test]
fn run_anchors_on_first_tick() {
    let mut run = AnimationRun::new(RunId(1), 100.0, RunDirection::Reveal);
    assert_eq!(run.start_ms(), None);
    assert_eq!(run.progress_at(5_000.0), 0.0);
    assert_eq!(run.start_ms(), Some(5_000.0));
    assert_eq!(run.progress_at(5_050.0), 0.5);
    assert_eq!(run.progress_at(5_100.0), 1.0);
}

#[test]
fn local_progress_respects_delay_and_window() {
    // Tile delayed by the full spread still finishes exactly at global = 1.
    assert_eq!(local_progress(1.0, 0.5, 0.5), 1.0);
    assert_eq!(local_progress(0.5, 0.5, 0.5), 0.0);
    assert_eq!(local_progress(0.75, 0.5, 0.5), 0.5);
    // Undelayed tile completes once (1 - spread) of the run elapsed.
    assert_eq!(local_progress(0.5, 0.0, 0.5), 1.0);
}

#[test]
fn direction_maps_to_ease_and_radius() {
    assert_eq!(RunDirection::Reveal.ease(), Ease::OutQuart);
    assert_eq!(RunDirection::Hide.ease(), Ease::InQuart);
    assert_eq!(RunDirection::Reveal.radius_at(40.0, 0.0), 40.0);
    assert_eq!(RunDirection::Reveal.radius_at(40.0, 1.0), 0.0);
    assert_eq!(RunDirection::Hide.radius_at(40.0, 1.0), 40.0);
}
