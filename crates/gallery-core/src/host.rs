//! Boundary between the gallery core and the rendering surface.

use crate::config::ScrollAxis;
use crate::geometry::PlaneGeometry;
use crate::layout::InstanceLayout;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    /// Instanced gallery planes: scroll wrap, speed bend, staggered intro.
    Gallery,
    /// Full-screen label with a grid reveal.
    TextReveal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureFilter {
    #[default]
    Linear,
    /// Nearest magnification, for crisp text.
    Nearest,
}

/// Named float uniforms understood by the shaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    ScrollY,
    MaxY,
    Speed,
    Progress,
    GridSize,
    ScreenAspectRatio,
}

impl Uniform {
    pub fn name(self) -> &'static str {
        match self {
            Uniform::ScrollY => "uScrollY",
            Uniform::MaxY => "uMaxY",
            Uniform::Speed => "uSpeed",
            Uniform::Progress => "uProgress",
            Uniform::GridSize => "uGridSize",
            Uniform::ScreenAspectRatio => "uScreenAspectRatio",
        }
    }
}

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Clone, Copy, Debug)]
pub struct TextureData<'a> {
    pub label: &'a str,
    pub width: u32,
    pub height: u32,
    pub rgba: &'a [u8],
    pub filter: TextureFilter,
}

#[derive(Clone, Copy, Debug)]
pub struct MeshDescriptor<'a> {
    pub label: &'a str,
    pub geometry: &'a PlaneGeometry,
    pub material: MaterialKind,
    pub texture: Option<TextureId>,
    pub instances: &'a InstanceLayout,
    /// Non-uniform scale applied to the geometry before instancing.
    pub scale: [f32; 2],
    pub axis: ScrollAxis,
}

/// What the core needs from a scene graph and GPU: texture upload, instanced
/// mesh creation, scene membership and named float uniforms.
pub trait RenderHost {
    fn upload_texture(&mut self, data: &TextureData<'_>) -> anyhow::Result<TextureId>;
    fn create_mesh(&mut self, desc: &MeshDescriptor<'_>) -> anyhow::Result<MeshId>;
    fn insert_mesh(&mut self, mesh: MeshId);
    fn remove_mesh(&mut self, mesh: MeshId);
    fn set_uniform(&mut self, mesh: MeshId, uniform: Uniform, value: f32);
    fn set_mesh_scale(&mut self, mesh: MeshId, scale: [f32; 2]);
}

// Shared host handle for single-threaded frontends. Each call takes a short
// borrow, so the caller must not hold one across a core call.
impl<H: RenderHost> RenderHost for Rc<RefCell<H>> {
    fn upload_texture(&mut self, data: &TextureData<'_>) -> anyhow::Result<TextureId> {
        self.borrow_mut().upload_texture(data)
    }

    fn create_mesh(&mut self, desc: &MeshDescriptor<'_>) -> anyhow::Result<MeshId> {
        self.borrow_mut().create_mesh(desc)
    }

    fn insert_mesh(&mut self, mesh: MeshId) {
        self.borrow_mut().insert_mesh(mesh)
    }

    fn remove_mesh(&mut self, mesh: MeshId) {
        self.borrow_mut().remove_mesh(mesh)
    }

    fn set_uniform(&mut self, mesh: MeshId, uniform: Uniform, value: f32) {
        self.borrow_mut().set_uniform(mesh, uniform, value)
    }

    fn set_mesh_scale(&mut self, mesh: MeshId, scale: [f32; 2]) {
        self.borrow_mut().set_mesh_scale(mesh, scale)
    }
}
