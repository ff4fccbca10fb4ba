//! Gallery orchestrator.
//!
//! Lifecycle: `Uninitialized -> AtlasLoading -> Ready -> IntroPlaying -> Idle`,
//! with `Failed` terminal when the atlas cannot be built. Plain galleries skip
//! `AtlasLoading` and have no intro trigger.
//!
//! Scroll input is accepted in every state and simply accumulates until a mesh
//! exists. Per-frame updates are no-ops before `Ready`.

use crate::atlas::{self, DecodedImage, ImageInfo};
use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::geometry::PlaneGeometry;
use crate::host::{
    MaterialKind, MeshDescriptor, MeshId, RenderHost, TextureData, TextureFilter, TextureId,
    Uniform,
};
use crate::intro::IntroProgress;
use crate::layout::{InstanceLayout, LayoutParams};
use crate::loader::{self, ImageSource};
use crate::scroll::ScrollState;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Uninitialized,
    AtlasLoading,
    Ready,
    IntroPlaying,
    Idle,
    Failed,
}

impl GalleryState {
    /// True once a mesh exists and uniforms can be pushed.
    #[inline]
    pub fn has_mesh(self) -> bool {
        matches!(
            self,
            GalleryState::Ready | GalleryState::IntroPlaying | GalleryState::Idle
        )
    }
}

impl fmt::Display for GalleryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GalleryState::Uninitialized => "uninitialized",
            GalleryState::AtlasLoading => "atlas-loading",
            GalleryState::Ready => "ready",
            GalleryState::IntroPlaying => "intro-playing",
            GalleryState::Idle => "idle",
            GalleryState::Failed => "failed",
        };
        f.write_str(s)
    }
}

pub struct Gallery<H: RenderHost> {
    host: H,
    config: GalleryConfig,
    state: GalleryState,
    geometry: PlaneGeometry,
    scroll: ScrollState,
    intro: IntroProgress,
    intro_armed: bool,
    images: Vec<ImageInfo>,
    layout: Option<InstanceLayout>,
    texture: Option<TextureId>,
    mesh: Option<MeshId>,
}

impl<H: RenderHost> Gallery<H> {
    /// Validate `config` and build the shared plane geometry. No GPU work yet.
    pub fn new(config: GalleryConfig, host: H) -> Result<Self, GalleryError> {
        config.validate()?;
        let geometry = PlaneGeometry::new(
            config.mesh_side,
            config.mesh_side,
            config.segments,
            config.segments,
        );
        let scroll = ScrollState::new(config.scroll_lerp, config.speed_decay);
        Ok(Self {
            host,
            config,
            state: GalleryState::Uninitialized,
            geometry,
            scroll,
            intro: IntroProgress::default(),
            intro_armed: false,
            images: Vec::new(),
            layout: None,
            texture: None,
            mesh: None,
        })
    }

    /// Start the lifecycle. Atlas galleries move to `AtlasLoading` and expose
    /// their sources through [`Gallery::pending_sources`]; plain galleries
    /// build their mesh immediately.
    pub fn begin(&mut self) -> Result<(), GalleryError> {
        match self.state {
            GalleryState::Uninitialized => {}
            GalleryState::AtlasLoading => return Err(GalleryError::LoadInFlight),
            actual => {
                return Err(GalleryError::UnexpectedState {
                    expected: GalleryState::Uninitialized,
                    actual,
                })
            }
        }
        if self.config.with_atlas {
            self.state = GalleryState::AtlasLoading;
            log::info!(
                "[gallery] loading atlas from {} sources",
                self.config.image_sources.len()
            );
            return Ok(());
        }

        let layout = InstanceLayout::plain(&self.layout_params());
        // No reveal for the plain variant.
        self.intro.set(1.0);
        self.install_mesh(layout, None)
            .inspect_err(|_| self.state = GalleryState::Failed)?;
        self.state = GalleryState::Ready;
        log::info!("[gallery] plain gallery ready ({} instances)", self.config.mesh_count);
        Ok(())
    }

    /// Sources still to be fetched while in `AtlasLoading`.
    pub fn pending_sources(&self) -> Option<&[String]> {
        (self.state == GalleryState::AtlasLoading).then_some(self.config.image_sources.as_slice())
    }

    /// Finish an atlas load with the loader's result.
    pub fn complete_atlas(
        &mut self,
        loaded: Result<Vec<DecodedImage>, GalleryError>,
    ) -> Result<(), GalleryError> {
        if self.state != GalleryState::AtlasLoading {
            return Err(GalleryError::UnexpectedState {
                expected: GalleryState::AtlasLoading,
                actual: self.state,
            });
        }
        match loaded.and_then(|images| self.build_atlas(&images)) {
            Ok(()) => {
                self.state = GalleryState::Ready;
                self.intro_armed = true;
                log::info!(
                    "[gallery] ready: {} instances over {} images",
                    self.config.mesh_count,
                    self.images.len()
                );
                Ok(())
            }
            Err(e) => {
                self.state = GalleryState::Failed;
                log::error!("[gallery] atlas failed: {e}");
                Err(e)
            }
        }
    }

    /// Run the whole `begin -> load -> complete_atlas` sequence.
    ///
    /// Only for owners that can hold `&mut self` across the await; shared
    /// frontends call the three steps separately.
    pub async fn load<S: ImageSource>(&mut self, source: &S) -> Result<(), GalleryError> {
        self.begin()?;
        let Some(ids) = self.pending_sources().map(<[String]>::to_vec) else {
            return Ok(());
        };
        let loaded = loader::load_images(source, &ids).await;
        self.complete_atlas(loaded)
    }

    fn build_atlas(&mut self, images: &[DecodedImage]) -> Result<(), GalleryError> {
        let packed = atlas::pack(images)?;
        let layout = InstanceLayout::build(&self.layout_params(), &packed.images)?;
        let texture = self
            .host
            .upload_texture(&TextureData {
                label: "gallery_atlas",
                width: packed.width(),
                height: packed.height(),
                rgba: packed.surface.as_raw(),
                filter: TextureFilter::Linear,
            })
            .map_err(GalleryError::host)?;
        self.images = packed.images;
        self.install_mesh(layout, Some(texture))
    }

    fn install_mesh(
        &mut self,
        layout: InstanceLayout,
        texture: Option<TextureId>,
    ) -> Result<(), GalleryError> {
        let side = self.config.mesh_side;
        let mesh = self
            .host
            .create_mesh(&MeshDescriptor {
                label: "gallery",
                geometry: &self.geometry,
                material: MaterialKind::Gallery,
                texture,
                instances: &layout,
                scale: [1.0, 1.0],
                axis: self.config.axis,
            })
            .map_err(GalleryError::host)?;
        self.host.insert_mesh(mesh);
        self.host
            .set_uniform(mesh, Uniform::MaxY, self.config.max_extent());
        self.host
            .set_uniform(mesh, Uniform::Progress, self.intro.value());
        log::debug!("[gallery] mesh {:?} side={side} inserted", mesh);
        self.texture = texture;
        self.layout = Some(layout);
        self.mesh = Some(mesh);
        Ok(())
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            count: self.config.mesh_count,
            gap: self.config.mesh_gap,
            strategy: self.config.layout,
            mirrored: self.config.mirrored,
            axis: self.config.axis,
        }
    }

    /// Forward one normalized wheel delta. Accepted in every state.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll.push(delta);
    }

    /// Per-frame tick: smooth scroll, advance the intro tween, push uniforms.
    pub fn update(&mut self, dt: Duration) {
        let Some(mesh) = self.mesh.filter(|_| self.state.has_mesh()) else {
            return;
        };
        self.scroll.tick();
        if self.intro.advance(dt) && self.state == GalleryState::IntroPlaying {
            self.state = GalleryState::Idle;
            log::info!("[gallery] intro complete");
        }
        self.host
            .set_uniform(mesh, Uniform::ScrollY, self.scroll.current());
        self.host
            .set_uniform(mesh, Uniform::Speed, self.scroll.speed());
        self.host
            .set_uniform(mesh, Uniform::Progress, self.intro.value());
    }

    /// Fire the one-shot intro. Returns `Ok(false)` once already used.
    pub fn trigger_intro(&mut self) -> Result<bool, GalleryError> {
        if !self.state.has_mesh() {
            return Err(GalleryError::NotReady(self.state));
        }
        if !self.intro_armed {
            log::debug!("[gallery] intro trigger ignored (state: {})", self.state);
            return Ok(false);
        }
        self.intro_armed = false;
        self.intro
            .play(self.config.intro_duration, self.config.intro_ease);
        self.state = GalleryState::IntroPlaying;
        log::info!(
            "[gallery] intro from {:.3} over {:.2}s",
            self.intro.value(),
            self.config.intro_duration.as_secs_f32()
        );
        Ok(true)
    }

    /// Debug override of the intro progress, clamped to `[0, 1]`.
    pub fn set_intro_progress(&mut self, value: f32) -> Result<(), GalleryError> {
        let Some(mesh) = self.mesh.filter(|_| self.state.has_mesh()) else {
            return Err(GalleryError::NotReady(self.state));
        };
        self.intro.set(value);
        if self.state == GalleryState::IntroPlaying {
            self.state = GalleryState::Idle;
        }
        self.host
            .set_uniform(mesh, Uniform::Progress, self.intro.value());
        Ok(())
    }

    /// Set progress back to 0. Does not re-arm the trigger.
    pub fn reset_intro(&mut self) -> Result<(), GalleryError> {
        self.set_intro_progress(0.0)
    }

    /// Remove the mesh from the scene. The gallery cannot be reused afterwards.
    pub fn dispose(&mut self) {
        if let Some(mesh) = self.mesh.take() {
            self.host.remove_mesh(mesh);
            log::info!("[gallery] disposed mesh {:?}", mesh);
        }
        self.intro_armed = false;
        self.state = GalleryState::Failed;
    }

    #[inline]
    pub fn state(&self) -> GalleryState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.has_mesh()
    }

    #[inline]
    pub fn intro_armed(&self) -> bool {
        self.intro_armed
    }

    #[inline]
    pub fn intro_progress(&self) -> f32 {
        self.intro.value()
    }

    #[inline]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[inline]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[inline]
    pub fn geometry(&self) -> &PlaneGeometry {
        &self.geometry
    }

    #[inline]
    pub fn images(&self) -> &[ImageInfo] {
        &self.images
    }

    #[inline]
    pub fn layout(&self) -> Option<&InstanceLayout> {
        self.layout.as_ref()
    }

    #[inline]
    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }

    #[inline]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
