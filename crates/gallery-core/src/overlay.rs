//! Text label drawn over the gallery.
//!
//! The host rasterizes the label (a 2D canvas on the web) following
//! [`LabelRaster`]; [`TextOverlay`] turns the pixels into a single textured
//! plane sized to the visible world area and drives its reveal uniforms.

use crate::camera::VisibleSize;
use crate::config::ScrollAxis;
use crate::constants::*;
use crate::error::GalleryError;
use crate::geometry::PlaneGeometry;
use crate::host::{
    MaterialKind, MeshDescriptor, MeshId, RenderHost, TextureData, TextureFilter, Uniform,
};
use crate::layout::InstanceLayout;

/// Canvas parameters for rasterizing a label at the current viewport size.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelRaster {
    pub text: String,
    pub font_family: &'static str,
    pub font_size_px: f64,
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub foreground: &'static str,
}

impl LabelRaster {
    /// Viewport-filling canvas at `ceil(min(2, dpr))` scale, font at 30vw.
    pub fn for_viewport(
        text: impl Into<String>,
        inner_width: f64,
        inner_height: f64,
        device_pixel_ratio: f64,
    ) -> Self {
        let scale = device_pixel_ratio.min(MAX_PIXEL_RATIO).ceil().max(1.0);
        let vw = |s: f64| inner_width * s / 100.0;
        Self {
            text: text.into(),
            font_family: TEXT_FONT_FAMILY,
            font_size_px: vw(TEXT_FONT_VW) * scale,
            width: (inner_width * scale).max(1.0) as u32,
            height: (inner_height * scale).max(1.0) as u32,
            background: TEXT_BACKGROUND,
            foreground: TEXT_FOREGROUND,
        }
    }

    /// CSS font shorthand, e.g. `"384px Arial"`.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size_px, self.font_family)
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

pub struct TextOverlay<H: RenderHost> {
    host: H,
    mesh: MeshId,
    progress: f32,
    grid_size: f32,
}

impl<H: RenderHost> TextOverlay<H> {
    /// Upload the rasterized label and insert its plane into the scene.
    pub fn new(
        mut host: H,
        raster: &LabelRaster,
        rgba: &[u8],
        sizes: VisibleSize,
        screen_aspect: f32,
    ) -> Result<Self, GalleryError> {
        if rgba.len() != raster.byte_len() {
            return Err(GalleryError::InvalidConfig(format!(
                "label pixels: expected {} bytes, got {}",
                raster.byte_len(),
                rgba.len()
            )));
        }
        let texture = host
            .upload_texture(&TextureData {
                label: "label_texture",
                width: raster.width,
                height: raster.height,
                rgba,
                filter: TextureFilter::Nearest,
            })
            .map_err(GalleryError::host)?;
        let geometry = PlaneGeometry::new(1.0, 1.0, 1, 1);
        let instances = InstanceLayout::single();
        let mesh = host
            .create_mesh(&MeshDescriptor {
                label: "text_overlay",
                geometry: &geometry,
                material: MaterialKind::TextReveal,
                texture: Some(texture),
                instances: &instances,
                scale: [sizes.width, sizes.height],
                axis: ScrollAxis::Horizontal,
            })
            .map_err(GalleryError::host)?;
        host.insert_mesh(mesh);

        let mut overlay = Self {
            host,
            mesh,
            progress: TEXT_INITIAL_PROGRESS,
            grid_size: TEXT_GRID_SIZE,
        };
        overlay
            .host
            .set_uniform(mesh, Uniform::GridSize, overlay.grid_size);
        overlay
            .host
            .set_uniform(mesh, Uniform::Progress, overlay.progress);
        overlay
            .host
            .set_uniform(mesh, Uniform::ScreenAspectRatio, screen_aspect);
        log::info!(
            "[overlay] label \"{}\" {}x{}",
            raster.text,
            raster.width,
            raster.height
        );
        Ok(overlay)
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_progress(&mut self, value: f32) {
        self.progress = value.clamp(0.0, 1.0);
        self.host
            .set_uniform(self.mesh, Uniform::Progress, self.progress);
    }

    pub fn on_resize(&mut self, sizes: VisibleSize, screen_aspect: f32) {
        self.host
            .set_mesh_scale(self.mesh, [sizes.width, sizes.height]);
        self.host
            .set_uniform(self.mesh, Uniform::ScreenAspectRatio, screen_aspect);
    }

    #[inline]
    pub fn mesh(&self) -> MeshId {
        self.mesh
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
