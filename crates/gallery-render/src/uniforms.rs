use gallery_core::{MaterialKind, Uniform};

/// Per-mesh uniform block shared by `gallery.wgsl` and `text.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub scale: [f32; 2],
    pub axis: [f32; 2],
    pub scroll: f32,
    pub max_extent: f32,
    pub speed: f32,
    pub progress: f32,
    pub grid_size: f32,
    pub screen_aspect: f32,
    pub instance_count: f32,
    pub textured: f32,
}

impl MeshUniforms {
    pub fn new(
        material: MaterialKind,
        scale: [f32; 2],
        axis: [f32; 2],
        instances: usize,
        textured: bool,
    ) -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            scale,
            axis,
            scroll: 0.0,
            max_extent: 0.0,
            speed: 0.0,
            // Text starts half revealed; gallery waits for the intro.
            progress: match material {
                MaterialKind::Gallery => 0.0,
                MaterialKind::TextReveal => 0.5,
            },
            grid_size: 1.0,
            screen_aspect: 1.0,
            instance_count: instances as f32,
            textured: if textured { 1.0 } else { 0.0 },
        }
    }

    /// Route a named uniform to its slot in the block.
    pub fn set(&mut self, uniform: Uniform, value: f32) {
        match uniform {
            Uniform::ScrollY => self.scroll = value,
            Uniform::MaxY => self.max_extent = value,
            Uniform::Speed => self.speed = value,
            Uniform::Progress => self.progress = value,
            Uniform::GridSize => self.grid_size = value,
            Uniform::ScreenAspectRatio => self.screen_aspect = value,
        }
    }

    pub fn get(&self, uniform: Uniform) -> f32 {
        match uniform {
            Uniform::ScrollY => self.scroll,
            Uniform::MaxY => self.max_extent,
            Uniform::Speed => self.speed,
            Uniform::Progress => self.progress,
            Uniform::GridSize => self.grid_size,
            Uniform::ScreenAspectRatio => self.screen_aspect,
        }
    }
}
