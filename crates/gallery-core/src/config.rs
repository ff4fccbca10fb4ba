use crate::constants::*;
use crate::error::GalleryError;
use crate::intro::Ease;
use std::time::Duration;

/// How instance positions are distributed along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// `i * gap`, a single increasing run starting at the origin.
    #[default]
    Sequential,
    /// `(N / 2 - i) * gap`, symmetric around the origin.
    Centered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    /// Unit vector in the XY plane along which instances are laid out.
    #[inline]
    pub fn unit(self) -> [f32; 2] {
        match self {
            ScrollAxis::Horizontal => [1.0, 0.0],
            ScrollAxis::Vertical => [0.0, 1.0],
        }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub mesh_count: usize,
    pub mesh_side: f32,
    pub mesh_gap: f32,
    pub segments: u32,
    pub layout: LayoutStrategy,
    /// Negate positions so the intro sweeps in from the opposite side.
    pub mirrored: bool,
    pub axis: ScrollAxis,
    pub with_atlas: bool,
    pub image_sources: Vec<String>,
    pub scroll_lerp: f32,
    pub speed_decay: f32,
    pub intro_duration: Duration,
    pub intro_ease: Ease,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::plain()
    }
}

impl GalleryConfig {
    /// Untextured instanced planes spread symmetrically around the origin.
    pub fn plain() -> Self {
        Self {
            mesh_count: DEFAULT_MESH_COUNT,
            mesh_side: DEFAULT_MESH_SIDE,
            mesh_gap: DEFAULT_MESH_GAP,
            segments: PLANE_SEGMENTS,
            layout: LayoutStrategy::Centered,
            mirrored: false,
            axis: ScrollAxis::Horizontal,
            with_atlas: false,
            image_sources: Vec::new(),
            scroll_lerp: PLAIN_SCROLL_LERP,
            speed_decay: SPEED_DECAY,
            intro_duration: Duration::from_secs_f32(INTRO_DURATION_SEC),
            intro_ease: Ease::default(),
        }
    }

    /// Atlas-backed gallery cycling through `sources` in order.
    pub fn atlas<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            layout: LayoutStrategy::Sequential,
            with_atlas: true,
            image_sources: sources.into_iter().map(Into::into).collect(),
            scroll_lerp: ATLAS_SCROLL_LERP,
            ..Self::plain()
        }
    }

    /// Half the length of one full loop of instances (`uMaxY` in the shader).
    #[inline]
    pub fn max_extent(&self) -> f32 {
        self.mesh_count as f32 * self.mesh_gap * 0.5
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.mesh_count == 0 {
            return Err(GalleryError::InvalidConfig("mesh_count must be at least 1".into()));
        }
        if !(self.mesh_side.is_finite() && self.mesh_side > 0.0) {
            return Err(GalleryError::InvalidConfig(format!(
                "mesh_side must be positive, got {}",
                self.mesh_side
            )));
        }
        if !self.mesh_gap.is_finite() {
            return Err(GalleryError::InvalidConfig("mesh_gap must be finite".into()));
        }
        if self.segments == 0 {
            return Err(GalleryError::InvalidConfig("segments must be at least 1".into()));
        }
        if !(self.scroll_lerp > 0.0 && self.scroll_lerp <= 1.0) {
            return Err(GalleryError::InvalidConfig(format!(
                "scroll_lerp must be in (0, 1], got {}",
                self.scroll_lerp
            )));
        }
        if !(0.0..1.0).contains(&self.speed_decay) {
            return Err(GalleryError::InvalidConfig(format!(
                "speed_decay must be in [0, 1), got {}",
                self.speed_decay
            )));
        }
        if self.with_atlas && self.image_sources.is_empty() {
            return Err(GalleryError::EmptyImageList);
        }
        Ok(())
    }
}
