// Intro tween timing and progress overrides.

use gallery_core::*;
use std::time::Duration;

#[test]
fn ease_curves_hit_endpoints() {
    for ease in [Ease::Linear, Ease::QuadOut, Ease::CubicInOut] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        // Out of range input is clamped.
        assert_eq!(ease.apply(-3.0), 0.0);
        assert!((ease.apply(7.0) - 1.0).abs() < 1e-6);
    }
    assert!(Ease::QuadOut.apply(0.5) > 0.5);
    assert!((Ease::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn tween_is_time_based() {
    let mut tween = Tween::new(0.0, 1.0, Duration::from_secs(2), Ease::Linear);
    tween.advance(Duration::from_millis(500));
    assert!((tween.value() - 0.25).abs() < 1e-6);
    // One long frame covers the same ground as many short ones.
    tween.advance(Duration::from_secs(1));
    assert!((tween.value() - 0.75).abs() < 1e-6);
    assert!(!tween.is_finished());
    tween.advance(Duration::from_secs(5));
    assert!(tween.is_finished());
    assert_eq!(tween.value(), 1.0);
}

#[test]
fn zero_duration_tween_lands_immediately() {
    let tween = Tween::new(0.3, 1.0, Duration::ZERO, Ease::QuadOut);
    assert_eq!(tween.value(), 1.0);
    assert!(tween.is_finished());
}

#[test]
fn play_runs_from_current_value_to_one() {
    let mut p = IntroProgress::default();
    p.set(0.5);
    p.play(Duration::from_secs(1), Ease::Linear);
    assert!(p.is_playing());
    assert!(!p.advance(Duration::from_millis(500)));
    assert!((p.value() - 0.75).abs() < 1e-6);
    assert!(p.advance(Duration::from_millis(600)));
    assert_eq!(p.value(), 1.0);
    assert!(!p.is_playing());
}

#[test]
fn progress_stays_at_one_after_completion() {
    let mut p = IntroProgress::default();
    p.play(Duration::from_millis(100), Ease::QuadOut);
    p.advance(Duration::from_millis(200));
    for _ in 0..100 {
        assert!(!p.advance(Duration::from_millis(16)));
        assert_eq!(p.value(), 1.0);
    }
}

#[test]
fn set_clamps_and_cancels_tween() {
    let mut p = IntroProgress::default();
    p.play(Duration::from_secs(1), Ease::Linear);
    p.set(1.7);
    assert_eq!(p.value(), 1.0);
    assert!(!p.is_playing());
    p.set(-0.2);
    assert_eq!(p.value(), 0.0);
    p.set(0.4);
    p.reset();
    assert_eq!(p.value(), 0.0);
}
