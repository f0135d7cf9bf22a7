use super::*;

#[test]
fn frame_subscription_ticks_until_cancelled() {
    let mut clock = ManualClock::new();
    clock.subscribe_frames(RunId(1));

    let signals = clock.advance(16.0);
    assert_eq!(
        signals,
        vec![ClockSignal::Frame {
            run: RunId(1),
            now_ms: 16.0
        }]
    );

    clock.cancel(RunId(1));
    assert!(clock.advance(16.0).is_empty());
    assert!(clock.is_idle());
}

#[test]
fn timeouts_fire_once_at_their_due_time() {
    let mut clock = ManualClock::new();
    clock.schedule_timeout(RunId(3), 10.0);
    clock.schedule_timeout(RunId(2), 5.0);

    assert!(clock.advance(4.0).is_empty());
    let signals = clock.advance(20.0);
    assert_eq!(
        signals,
        vec![
            ClockSignal::Timeout {
                run: RunId(2),
                now_ms: 5.0
            },
            ClockSignal::Timeout {
                run: RunId(3),
                now_ms: 10.0
            },
        ]
    );
    assert_eq!(clock.pending_timeouts(), 0);
}

#[test]
fn cancel_drops_pending_timeouts() {
    let mut clock = ManualClock::new().with_reduced_motion(true);
    assert!(clock.prefers_reduced_motion());
    clock.schedule_timeout(RunId(9), 1.0);
    clock.cancel(RunId(9));
    assert!(clock.advance(100.0).is_empty());
    assert_eq!(clock.subscriptions_total(), 1);
}

#[test]
fn duplicate_frame_subscription_is_not_doubled() {
    let mut clock = ManualClock::new();
    clock.subscribe_frames(RunId(1));
    clock.subscribe_frames(RunId(1));
    assert_eq!(clock.active_frame_runs(), &[RunId(1)]);
    assert_eq!(clock.advance(1.0).len(), 1);
}
