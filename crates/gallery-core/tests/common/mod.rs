// Test doubles shared by the gallery-core integration tests.

#![allow(dead_code)]

use gallery_core::*;
use std::collections::HashMap;

/// Everything a `create_mesh` call carried, copied out of the borrowed descriptor.
#[derive(Clone, Debug)]
pub struct MeshRecord {
    pub label: String,
    pub material: MaterialKind,
    pub texture: Option<TextureId>,
    pub instances: InstanceLayout,
    pub vertex_count: usize,
    pub scale: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct TextureRecord {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
    pub filter: TextureFilter,
}

/// In-memory `RenderHost` that records every call.
#[derive(Default)]
pub struct RecordingHost {
    pub textures: Vec<TextureRecord>,
    pub meshes: Vec<MeshRecord>,
    pub scene: Vec<MeshId>,
    pub uniforms: HashMap<(MeshId, Uniform), f32>,
    pub uniform_writes: Vec<(MeshId, Uniform, f32)>,
    pub scales: HashMap<MeshId, [f32; 2]>,
    pub fail_uploads: bool,
}

impl RecordingHost {
    pub fn uniform(&self, mesh: MeshId, uniform: Uniform) -> Option<f32> {
        self.uniforms.get(&(mesh, uniform)).copied()
    }
}

impl RenderHost for RecordingHost {
    fn upload_texture(&mut self, data: &TextureData<'_>) -> anyhow::Result<TextureId> {
        if self.fail_uploads {
            anyhow::bail!("texture upload rejected");
        }
        self.textures.push(TextureRecord {
            label: data.label.to_string(),
            width: data.width,
            height: data.height,
            bytes: data.rgba.len(),
            filter: data.filter,
        });
        Ok(TextureId(self.textures.len() as u32 - 1))
    }

    fn create_mesh(&mut self, desc: &MeshDescriptor<'_>) -> anyhow::Result<MeshId> {
        self.meshes.push(MeshRecord {
            label: desc.label.to_string(),
            material: desc.material,
            texture: desc.texture,
            instances: desc.instances.clone(),
            vertex_count: desc.geometry.vertex_count(),
            scale: desc.scale,
        });
        Ok(MeshId(self.meshes.len() as u32 - 1))
    }

    fn insert_mesh(&mut self, mesh: MeshId) {
        self.scene.push(mesh);
    }

    fn remove_mesh(&mut self, mesh: MeshId) {
        self.scene.retain(|m| *m != mesh);
    }

    fn set_uniform(&mut self, mesh: MeshId, uniform: Uniform, value: f32) {
        self.uniforms.insert((mesh, uniform), value);
        self.uniform_writes.push((mesh, uniform, value));
    }

    fn set_mesh_scale(&mut self, mesh: MeshId, scale: [f32; 2]) {
        self.scales.insert(mesh, scale);
    }
}

/// Serves solid-colour PNGs of fixed sizes; ids not in the map fail to fetch.
pub struct MemorySource {
    pub files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new(entries: &[(&str, u32, u32)]) -> Self {
        let files = entries
            .iter()
            .map(|&(id, w, h)| (id.to_string(), png_bytes(w, h, [200, 40, 40, 255])))
            .collect();
        Self { files }
    }

    pub fn with_raw(mut self, id: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(id.to_string(), bytes);
        self
    }
}

impl ImageSource for MemorySource {
    async fn fetch(&self, id: &str) -> anyhow::Result<Vec<u8>> {
        self.files
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 not found: {id}"))
    }
}

pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn solid(id: &str, width: u32, height: u32, rgba: [u8; 4]) -> DecodedImage {
    DecodedImage::new(id, image::RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
}

pub const FRAME: std::time::Duration = std::time::Duration::from_millis(16);
