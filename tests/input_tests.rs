// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pixel_wheel_maps_through_view_height() {
    // 100px down on an 800px tall window showing 3.2 world units.
    let d = wheel_scroll_delta(0.0, 100.0, 0, 3.2, 800.0);
    assert!((d - 0.4).abs() < 1e-6);
}

#[test]
fn line_wheel_is_scaled_to_pixels_first() {
    // Three lines = 120px.
    let d = wheel_scroll_delta(0.0, 3.0, 1, 4.0, 480.0);
    assert!((d - 1.0).abs() < 1e-6);
}

#[test]
fn page_wheel_uses_page_height() {
    let d = wheel_scroll_delta(0.0, -1.0, 2, 1.0, 800.0);
    assert!((d + 1.0).abs() < 1e-6);
}

#[test]
fn horizontal_only_wheel_does_not_scroll() {
    assert_eq!(wheel_scroll_delta(50.0, 0.0, 0, 3.0, 900.0), 0.0);
}

#[test]
fn zero_height_window_is_safe() {
    assert_eq!(wheel_scroll_delta(0.0, 100.0, 0, 3.0, 0.0), 0.0);
}

#[test]
fn backing_size_scales_and_never_hits_zero() {
    assert_eq!(backing_size(640.0, 360.0, 2.0), (1280, 720));
    assert_eq!(backing_size(640.5, 360.0, 1.0), (640, 360));
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
}

#[test]
fn slider_values_are_parsed_and_clamped() {
    assert_eq!(parse_slider("0.25", 0.9), 0.25);
    assert_eq!(parse_slider(" 1.5 ", 0.9), 1.0);
    assert_eq!(parse_slider("-2", 0.9), 0.0);
    assert_eq!(parse_slider("abc", 0.9), 0.9);
    assert_eq!(parse_slider("NaN", 0.4), 0.4);
}

#[test]
fn key_bindings() {
    assert!(is_toggle_key("h"));
    assert!(is_toggle_key("H"));
    assert!(!is_toggle_key("j"));
    assert!(is_reset_key("r"));
    assert!(!is_reset_key("h"));
}
