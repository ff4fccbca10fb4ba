/// Page wiring and asset constants for the web front-end.
///
/// Gallery tuning lives in `gallery_core::constants`; this file only names
/// DOM ids and resources the page provides.
// Canvas the WebGPU surface is attached to
pub const CANVAS_ID: &str = "webgl";

// Atlas images, in display order
pub const IMAGE_PATHS: [&str; 6] = [
    "images/1.jpg",
    "images/2.jpg",
    "images/3.jpg",
    "images/4.jpg",
    "images/5.jpg",
    "images/6.jpg",
];

// Label rasterized for the text reveal layer
pub const LABEL_TEXT: &str = "12";

// Debug panel (toggled with 'h')
pub const DEBUG_PANEL_ID: &str = "debug-panel";
pub const INTRO_SLIDER_ID: &str = "intro-progress";
pub const TEXT_SLIDER_ID: &str = "text-progress";
pub const HIDDEN_STYLE: &str = "display:none";
pub const PANEL_STYLE: &str = "position:fixed;top:8px;right:8px;padding:8px 10px;\
background:rgba(20,20,24,0.85);color:#eee;font:12px monospace;z-index:10";
