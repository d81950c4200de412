use std::time::{Duration, Instant};

use draglist::{Easing, Transition};

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_midpoints() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
}

// =============================================================================
// Transition
// =============================================================================

#[test]
fn test_transition_interpolates_and_finishes() {
    let start = Instant::now();
    let t = Transition::new(4, 0, start, Duration::from_millis(100), Easing::Linear);

    assert_eq!(t.value(start), 4);
    assert_eq!(t.value(start + Duration::from_millis(50)), 2);
    assert_eq!(t.value(start + Duration::from_millis(100)), 0);
    assert_eq!(t.value(start + Duration::from_secs(5)), 0);
    assert!(!t.is_finished(start + Duration::from_millis(99)));
    assert!(t.is_finished(start + Duration::from_millis(100)));
}

#[test]
fn test_transition_before_start_holds_initial_value() {
    let start = Instant::now() + Duration::from_millis(10);
    let t = Transition::new(-3, 0, start, Duration::from_millis(100), Easing::EaseOut);
    assert_eq!(t.progress(start - Duration::from_millis(5)), 0.0);
    assert_eq!(t.value(start - Duration::from_millis(5)), -3);
}

#[test]
fn test_zero_duration_transition_is_done() {
    let start = Instant::now();
    let t = Transition::new(7, 0, start, Duration::ZERO, Easing::Linear);
    assert!(t.is_finished(start));
    assert_eq!(t.value(start), 0);
}
