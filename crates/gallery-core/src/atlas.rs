//! Vertical-stack texture atlas.
//!
//! Images are drawn top to bottom into a single RGBA surface as wide as the
//! widest image and as tall as all images combined. UV rectangles use a
//! bottom-left origin, so `y_start > y_end` for every entry; the shader
//! consumes them as-is.

use crate::error::GalleryError;
use image::RgbaImage;

/// Normalized sub-rectangle of the atlas, bottom-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
}

impl UvRect {
    /// The whole texture, top edge first.
    pub const FULL: UvRect = UvRect {
        x_start: 0.0,
        x_end: 1.0,
        y_start: 1.0,
        y_end: 0.0,
    };

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x_start, self.x_end, self.y_start, self.y_end]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f32,
    pub uv: UvRect,
}

/// A decoded source image, tagged with the identifier it was loaded from.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub source_id: String,
    pub pixels: RgbaImage,
}

impl DecodedImage {
    pub fn new(source_id: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            source_id: source_id.into(),
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Placement of every image inside the atlas, without pixel data.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    pub images: Vec<ImageInfo>,
    /// Top edge of each image in surface pixels.
    pub offsets: Vec<u32>,
}

/// Compute the stacked placement for images of the given `(width, height)`.
pub fn layout_stack(sizes: &[(u32, u32)]) -> Result<AtlasLayout, GalleryError> {
    if sizes.is_empty() {
        return Err(GalleryError::EmptyImageList);
    }
    if let Some((index, &(width, height))) = sizes
        .iter()
        .enumerate()
        .find(|(_, (w, h))| *w == 0 || *h == 0)
    {
        return Err(GalleryError::ZeroDimension {
            index,
            width,
            height,
        });
    }

    let atlas_width = sizes.iter().map(|(w, _)| *w).max().unwrap_or(1);
    let atlas_height: u32 = sizes.iter().map(|(_, h)| *h).sum();
    let aw = atlas_width as f32;
    let ah = atlas_height as f32;

    let mut images = Vec::with_capacity(sizes.len());
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut current_y = 0u32;
    for &(width, height) in sizes {
        images.push(ImageInfo {
            width,
            height,
            aspect_ratio: width as f32 / height as f32,
            uv: UvRect {
                x_start: 0.0,
                x_end: width as f32 / aw,
                y_start: 1.0 - current_y as f32 / ah,
                y_end: 1.0 - (current_y + height) as f32 / ah,
            },
        });
        offsets.push(current_y);
        current_y += height;
    }

    Ok(AtlasLayout {
        width: atlas_width,
        height: atlas_height,
        images,
        offsets,
    })
}

/// Packed atlas surface plus one [`ImageInfo`] per input image, in input order.
#[derive(Clone, Debug)]
pub struct Atlas {
    pub surface: RgbaImage,
    pub images: Vec<ImageInfo>,
}

impl Atlas {
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }
}

/// Draw `images` into a fresh surface following [`layout_stack`].
pub fn pack(images: &[DecodedImage]) -> Result<Atlas, GalleryError> {
    let sizes: Vec<(u32, u32)> = images.iter().map(|i| (i.width(), i.height())).collect();
    let layout = layout_stack(&sizes)?;

    let mut surface = RgbaImage::new(layout.width, layout.height);
    for (img, &y) in images.iter().zip(&layout.offsets) {
        image::imageops::replace(&mut surface, &img.pixels, 0, i64::from(y));
    }
    log::info!(
        "[atlas] packed {} images into {}x{}",
        images.len(),
        layout.width,
        layout.height
    );

    Ok(Atlas {
        surface,
        images: layout.images,
    })
}
