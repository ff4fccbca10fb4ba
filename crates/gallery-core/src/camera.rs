//! Camera description shared by the web and native hosts.
//!
//! These types avoid platform APIs. Hosts use them to build the view
//! projection and to convert pixel-space input into world units.

use crate::constants::{CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// World-space extent visible at the camera's distance from the origin plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleSize {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    /// The gallery's fixed three-quarter view onto the origin.
    pub fn gallery(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Aspect ratio for a `width x height` target, guarding against zero height.
    #[inline]
    pub fn aspect_for(width: u32, height: u32) -> f32 {
        width.max(1) as f32 / height.max(1) as f32
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Visible size measured along the camera's Z distance.
    pub fn visible_size(&self) -> VisibleSize {
        let height = self.eye.z * (self.fovy_radians * 0.5).tan() * 2.0;
        VisibleSize {
            width: height * self.aspect,
            height,
        }
    }
}
