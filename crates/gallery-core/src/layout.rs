use crate::atlas::{ImageInfo, UvRect};
use crate::config::{LayoutStrategy, ScrollAxis};
use crate::error::GalleryError;
use glam::Vec3;

/// Per-instance attribute data in structure-of-arrays form, ready for upload.
///
/// - `positions`: 3 floats per instance
/// - `uv_rects`: 4 floats per instance (`x_start, x_end, y_start, y_end`)
/// - `indices`: 1 float per instance, the stable instance index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InstanceLayout {
    pub positions: Vec<f32>,
    pub uv_rects: Vec<f32>,
    pub indices: Vec<f32>,
    pub image_indices: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutParams {
    pub count: usize,
    pub gap: f32,
    pub strategy: LayoutStrategy,
    pub mirrored: bool,
    pub axis: ScrollAxis,
}

/// Offset of instance `i` along the scroll axis.
#[inline]
pub fn axis_offset(i: usize, params: &LayoutParams) -> f32 {
    let raw = match params.strategy {
        LayoutStrategy::Sequential => i as f32 * params.gap,
        LayoutStrategy::Centered => (params.count as f32 * 0.5 - i as f32) * params.gap,
    };
    if params.mirrored {
        -raw
    } else {
        raw
    }
}

impl InstanceLayout {
    /// Assign `images` round-robin (`i mod M`) over `params.count` instances.
    pub fn build(params: &LayoutParams, images: &[ImageInfo]) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptyImageList);
        }
        let rects: Vec<UvRect> = images.iter().map(|i| i.uv).collect();
        Ok(Self::from_rects(params, &rects))
    }

    /// Every instance samples the full texture.
    pub fn plain(params: &LayoutParams) -> Self {
        Self::from_rects(params, &[UvRect::FULL])
    }

    /// One instance at the origin, used for full-screen overlays.
    pub fn single() -> Self {
        Self {
            positions: vec![0.0; 3],
            uv_rects: UvRect::FULL.to_array().to_vec(),
            indices: vec![0.0],
            image_indices: vec![0],
        }
    }

    fn from_rects(params: &LayoutParams, rects: &[UvRect]) -> Self {
        let n = params.count;
        let m = rects.len();
        let [ax, ay] = params.axis.unit();
        let mut out = Self {
            positions: Vec::with_capacity(n * 3),
            uv_rects: Vec::with_capacity(n * 4),
            indices: Vec::with_capacity(n),
            image_indices: Vec::with_capacity(n),
        };
        for i in 0..n {
            let d = axis_offset(i, params);
            out.positions.extend_from_slice(&[d * ax, d * ay, 0.0]);
            let image_index = i % m;
            out.uv_rects.extend_from_slice(&rects[image_index].to_array());
            out.indices.push(i as f32);
            out.image_indices.push(image_index);
        }
        out
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn position(&self, i: usize) -> Option<Vec3> {
        self.positions
            .get(i * 3..i * 3 + 3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
    }

    pub fn uv_rect(&self, i: usize) -> Option<UvRect> {
        self.uv_rects.get(i * 4..i * 4 + 4).map(|r| UvRect {
            x_start: r[0],
            x_end: r[1],
            y_start: r[2],
            y_end: r[3],
        })
    }
}
