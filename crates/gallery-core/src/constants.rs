// Shared gallery tuning constants used by both web and native frontends.

// Instance layout
pub const DEFAULT_MESH_COUNT: usize = 100;
pub const DEFAULT_MESH_SIDE: f32 = 1.0; // world-space plane edge length
pub const DEFAULT_MESH_GAP: f32 = 0.5; // spacing between consecutive instances
pub const PLANE_SEGMENTS: u32 = 32; // subdivisions per plane edge (for vertex bending)

// Scroll smoothing (per-frame lerp factors)
pub const PLAIN_SCROLL_LERP: f32 = 0.10;
pub const ATLAS_SCROLL_LERP: f32 = 0.12;
pub const SPEED_DECAY: f32 = 0.835; // per-frame multiplier for the scroll speed impulse

// Intro reveal
pub const INTRO_DURATION_SEC: f32 = 2.5;
pub const DEBUG_PROGRESS_STEP: f32 = 0.001;

// Text overlay
pub const TEXT_GRID_SIZE: f32 = 12.0;
pub const TEXT_INITIAL_PROGRESS: f32 = 0.5;
pub const TEXT_FONT_VW: f64 = 30.0; // font size as a percentage of viewport width
pub const TEXT_FONT_FAMILY: &str = "Arial";
pub const TEXT_BACKGROUND: &str = "white";
pub const TEXT_FOREGROUND: &str = "black";

// Display
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_EYE: [f32; 3] = [2.7, 1.0, 5.0];
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Wheel normalization (DOM deltaMode units)
pub const WHEEL_PIXEL_STEP: f64 = 10.0;
pub const WHEEL_LINE_HEIGHT: f64 = 40.0;
pub const WHEEL_PAGE_HEIGHT: f64 = 800.0;
