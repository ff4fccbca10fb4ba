//! Wheel delta normalization.
//!
//! Browsers report wheel deltas in pixels, lines or pages depending on the
//! device. Everything is converted to pixels first, then to world units using
//! the camera's visible height.

use crate::constants::{WHEEL_LINE_HEIGHT, WHEEL_PAGE_HEIGHT, WHEEL_PIXEL_STEP};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    /// Map the DOM `WheelEvent.deltaMode` value.
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => WheelDeltaMode::Line,
            2 => WheelDeltaMode::Page,
            _ => WheelDeltaMode::Pixel,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedWheel {
    pub spin_x: f64,
    pub spin_y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

pub fn normalize_wheel(delta_x: f64, delta_y: f64, mode: WheelDeltaMode) -> NormalizedWheel {
    let scale = match mode {
        WheelDeltaMode::Pixel => 1.0,
        WheelDeltaMode::Line => WHEEL_LINE_HEIGHT,
        WheelDeltaMode::Page => WHEEL_PAGE_HEIGHT,
    };
    let pixel_x = delta_x * scale;
    let pixel_y = delta_y * scale;
    NormalizedWheel {
        spin_x: spin(pixel_x),
        spin_y: spin(pixel_y),
        pixel_x,
        pixel_y,
    }
}

#[inline]
fn spin(pixels: f64) -> f64 {
    if pixels == 0.0 {
        0.0
    } else if pixels.abs() < WHEEL_PIXEL_STEP {
        pixels.signum()
    } else {
        pixels / WHEEL_PIXEL_STEP
    }
}

/// Convert a pixel delta into world units for the scroll controller.
#[inline]
pub fn scroll_delta(pixel_y: f64, view_height: f32, viewport_height_px: f64) -> f32 {
    if viewport_height_px <= 0.0 {
        return 0.0;
    }
    (pixel_y * view_height as f64 / viewport_height_px) as f32
}
