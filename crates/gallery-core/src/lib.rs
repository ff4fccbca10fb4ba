pub mod atlas;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod host;
pub mod input;
pub mod intro;
pub mod layout;
pub mod loader;
pub mod overlay;
pub mod scroll;

pub use atlas::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gallery::*;
pub use geometry::*;
pub use host::*;
pub use intro::*;
pub use layout::*;
pub use loader::*;
pub use overlay::*;
pub use scroll::*;

// Shaders bundled as string constants
pub static GALLERY_WGSL: &str = include_str!("../shaders/gallery.wgsl");
pub static TEXT_WGSL: &str = include_str!("../shaders/text.wgsl");
