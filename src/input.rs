// Pure helpers for DOM input; no web-sys types so they run in host tests.

use gallery_core::input::{normalize_wheel, scroll_delta, WheelDeltaMode};

/// World-unit scroll delta for one DOM wheel event.
#[inline]
pub fn wheel_scroll_delta(
    delta_x: f64,
    delta_y: f64,
    delta_mode: u32,
    view_height: f32,
    inner_height: f64,
) -> f32 {
    let wheel = normalize_wheel(delta_x, delta_y, WheelDeltaMode::from_dom(delta_mode));
    scroll_delta(wheel.pixel_y, view_height, inner_height)
}

/// Backing-store size in device pixels, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio) as u32;
    let h = (css_height * pixel_ratio) as u32;
    (w.max(1), h.max(1))
}

/// Parse a range input's value, falling back to `current` on junk.
#[inline]
pub fn parse_slider(value: &str, current: f32) -> f32 {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(current)
}

#[inline]
pub fn is_toggle_key(key: &str) -> bool {
    key == "h" || key == "H"
}

#[inline]
pub fn is_reset_key(key: &str) -> bool {
    key == "r" || key == "R"
}
