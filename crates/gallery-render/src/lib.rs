//! wgpu implementation of the gallery [`RenderHost`].
//!
//! Every mesh owns its vertex/index buffers, three per-instance attribute
//! streams and a uniform block. Meshes are drawn in insertion order with alpha
//! blending and no depth buffer.

pub mod helpers;
pub mod uniforms;

use anyhow::{anyhow, bail};
use gallery_core::{
    Camera, MaterialKind, MeshDescriptor, MeshId, RenderHost, TextureData, TextureFilter,
    TextureId, Uniform, VisibleSize, GALLERY_WGSL, TEXT_WGSL,
};
use helpers::*;
use uniforms::MeshUniforms;
use wgpu::util::DeviceExt;

struct GpuTexture {
    // Kept alive for the view.
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    filter: TextureFilter,
}

struct GpuMesh {
    material: MaterialKind,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    offset_buffer: wgpu::Buffer,
    uv_rect_buffer: wgpu::Buffer,
    instance_index_buffer: wgpu::Buffer,
    instance_count: u32,
    uniforms: MeshUniforms,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    mesh_bgl: wgpu::BindGroupLayout,
    gallery_pipeline: wgpu::RenderPipeline,
    text_pipeline: wgpu::RenderPipeline,
    linear_sampler: wgpu::Sampler,
    nearest_sampler: wgpu::Sampler,
    // 1x1 white, bound to untextured meshes.
    placeholder: GpuTexture,

    textures: Vec<GpuTexture>,
    meshes: Vec<Option<GpuMesh>>,
    scene: Vec<MeshId>,

    camera: Camera,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'a>>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(target)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No suitable GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy.
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow!("request_device error: {e:?}"))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow!("surface reports no texture formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let mesh_bgl = mesh_bind_group_layout(&device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&mesh_bgl],
            push_constant_ranges: &[],
        });
        let gallery_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gallery_shader"),
            source: wgpu::ShaderSource::Wgsl(GALLERY_WGSL.into()),
        });
        let text_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("text_shader"),
            source: wgpu::ShaderSource::Wgsl(TEXT_WGSL.into()),
        });
        let gallery_pipeline = make_mesh_pipeline(
            &device,
            "gallery_pipeline",
            &pipeline_layout,
            &gallery_shader,
            format,
        );
        let text_pipeline =
            make_mesh_pipeline(&device, "text_pipeline", &pipeline_layout, &text_shader, format);

        let linear_sampler = create_sampler(&device, "linear_sampler", wgpu::FilterMode::Linear);
        let nearest_sampler = create_sampler(&device, "nearest_sampler", wgpu::FilterMode::Nearest);
        let (texture, view) =
            create_rgba_texture(&device, &queue, "placeholder", 1, 1, &[255, 255, 255, 255]);
        let placeholder = GpuTexture {
            _texture: texture,
            view,
            filter: TextureFilter::Linear,
        };

        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_bgl,
            gallery_pipeline,
            text_pipeline,
            linear_sampler,
            nearest_sampler,
            placeholder,
            textures: Vec::new(),
            meshes: Vec::new(),
            scene: Vec::new(),
            camera: Camera::gallery(Camera::aspect_for(width, height)),
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.025,
                a: 1.0,
            },
        })
    }

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// World-space area visible at the camera distance.
    #[inline]
    pub fn visible_size(&self) -> VisibleSize {
        self.camera.visible_size()
    }

    #[inline]
    pub fn scene_len(&self) -> usize {
        self.scene.len()
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.aspect = Camera::aspect_for(width, height);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Reconfigure the surface at its current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.camera.view_proj().to_cols_array_2d();
        for id in &self.scene {
            if let Some(Some(mesh)) = self.meshes.get_mut(id.0 as usize) {
                mesh.uniforms.view_proj = view_proj;
                self.queue.write_buffer(
                    &mesh.uniform_buffer,
                    0,
                    bytemuck::bytes_of(&mesh.uniforms),
                );
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for id in &self.scene {
                let Some(Some(mesh)) = self.meshes.get(id.0 as usize) else {
                    continue;
                };
                let pipeline = match mesh.material {
                    MaterialKind::Gallery => &self.gallery_pipeline,
                    MaterialKind::TextReveal => &self.text_pipeline,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &mesh.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_vertex_buffer(1, mesh.offset_buffer.slice(..));
                rpass.set_vertex_buffer(2, mesh.uv_rect_buffer.slice(..));
                rpass.set_vertex_buffer(3, mesh.instance_index_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..mesh.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn mesh_mut(&mut self, id: MeshId) -> Option<&mut GpuMesh> {
        self.meshes.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Current value of a mesh uniform, if the mesh exists.
    pub fn uniform(&self, id: MeshId, uniform: Uniform) -> Option<f32> {
        self.meshes
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map(|m| m.uniforms.get(uniform))
    }

    fn buffer_init(
        &self,
        label: &str,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            })
    }
}

impl RenderHost for GpuState<'_> {
    fn upload_texture(&mut self, data: &TextureData<'_>) -> anyhow::Result<TextureId> {
        let max = self.device.limits().max_texture_dimension_2d;
        if data.width == 0 || data.height == 0 {
            bail!("texture {} has zero size", data.label);
        }
        if data.width > max || data.height > max {
            bail!(
                "texture {} is {}x{}, device limit is {}",
                data.label,
                data.width,
                data.height,
                max
            );
        }
        let expected = data.width as usize * data.height as usize * 4;
        if data.rgba.len() != expected {
            bail!(
                "texture {}: expected {} bytes, got {}",
                data.label,
                expected,
                data.rgba.len()
            );
        }
        let (texture, view) = create_rgba_texture(
            &self.device,
            &self.queue,
            data.label,
            data.width,
            data.height,
            data.rgba,
        );
        self.textures.push(GpuTexture {
            _texture: texture,
            view,
            filter: data.filter,
        });
        log::info!(
            "[gpu] uploaded {} {}x{}",
            data.label,
            data.width,
            data.height
        );
        Ok(TextureId(self.textures.len() as u32 - 1))
    }

    fn create_mesh(&mut self, desc: &MeshDescriptor<'_>) -> anyhow::Result<MeshId> {
        if desc.instances.is_empty() {
            bail!("mesh {} has no instances", desc.label);
        }
        let texture = match desc.texture {
            Some(id) => self
                .textures
                .get(id.0 as usize)
                .ok_or_else(|| anyhow!("mesh {}: unknown texture {:?}", desc.label, id))?,
            None => &self.placeholder,
        };
        let sampler = match texture.filter {
            TextureFilter::Linear => &self.linear_sampler,
            TextureFilter::Nearest => &self.nearest_sampler,
        };

        let uniforms = MeshUniforms::new(
            desc.material,
            desc.scale,
            desc.axis.unit(),
            desc.instances.len(),
            desc.texture.is_some(),
        );
        let uniform_buffer = self.buffer_init(
            "mesh_uniforms",
            bytemuck::bytes_of(&uniforms),
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.label),
            layout: &self.mesh_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let vertices = desc.geometry.vertices();
        let indices = desc.geometry.indices();
        let vertex = wgpu::BufferUsages::VERTEX;
        let mesh = GpuMesh {
            material: desc.material,
            vertex_buffer: self.buffer_init(
                "plane_vertices",
                bytemuck::cast_slice(&vertices),
                vertex,
            ),
            index_buffer: self.buffer_init(
                "plane_indices",
                bytemuck::cast_slice(&indices),
                wgpu::BufferUsages::INDEX,
            ),
            index_count: indices.len() as u32,
            offset_buffer: self.buffer_init(
                "instance_offsets",
                bytemuck::cast_slice(&desc.instances.positions),
                vertex,
            ),
            uv_rect_buffer: self.buffer_init(
                "instance_uv_rects",
                bytemuck::cast_slice(&desc.instances.uv_rects),
                vertex,
            ),
            instance_index_buffer: self.buffer_init(
                "instance_indices",
                bytemuck::cast_slice(&desc.instances.indices),
                vertex,
            ),
            instance_count: desc.instances.len() as u32,
            uniforms,
            uniform_buffer,
            bind_group,
        };
        self.meshes.push(Some(mesh));
        let id = MeshId(self.meshes.len() as u32 - 1);
        log::info!(
            "[gpu] mesh {} ({:?}) with {} instances",
            desc.label,
            id,
            desc.instances.len()
        );
        Ok(id)
    }

    fn insert_mesh(&mut self, mesh: MeshId) {
        if !self.scene.contains(&mesh) {
            self.scene.push(mesh);
        }
    }

    fn remove_mesh(&mut self, mesh: MeshId) {
        self.scene.retain(|m| *m != mesh);
        // Drop the GPU buffers; the id is never reused.
        if let Some(slot) = self.meshes.get_mut(mesh.0 as usize) {
            *slot = None;
        }
    }

    fn set_uniform(&mut self, mesh: MeshId, uniform: Uniform, value: f32) {
        match self.mesh_mut(mesh) {
            Some(m) => m.uniforms.set(uniform, value),
            None => log::warn!("[gpu] {} on missing mesh {:?}", uniform.name(), mesh),
        }
    }

    fn set_mesh_scale(&mut self, mesh: MeshId, scale: [f32; 2]) {
        if let Some(m) = self.mesh_mut(mesh) {
            m.uniforms.scale = scale;
        }
    }
}
