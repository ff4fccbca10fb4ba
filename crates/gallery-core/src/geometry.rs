/// Vertex of a subdivided plane: local position plus texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// A plane in the XY plane centred on the origin, split into a grid of quads.
///
/// UV `v` is 1 on the top row and 0 on the bottom row.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            width,
            height,
            width_segments: width_segments.max(1),
            height_segments: height_segments.max(1),
        }
    }

    pub fn vertex_count(&self) -> usize {
        ((self.width_segments + 1) * (self.height_segments + 1)) as usize
    }

    pub fn index_count(&self) -> usize {
        (self.width_segments * self.height_segments * 6) as usize
    }

    pub fn vertices(&self) -> Vec<PlaneVertex> {
        let gx = self.width_segments;
        let gy = self.height_segments;
        let seg_w = self.width / gx as f32;
        let seg_h = self.height / gy as f32;
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;

        let mut out = Vec::with_capacity(self.vertex_count());
        for iy in 0..=gy {
            let y = half_h - iy as f32 * seg_h;
            for ix in 0..=gx {
                let x = ix as f32 * seg_w - half_w;
                out.push(PlaneVertex {
                    position: [x, y, 0.0],
                    uv: [ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32],
                });
            }
        }
        out
    }

    pub fn indices(&self) -> Vec<u32> {
        let gx = self.width_segments;
        let gy = self.height_segments;
        let row = gx + 1;
        let mut out = Vec::with_capacity(self.index_count());
        for iy in 0..gy {
            for ix in 0..gx {
                let a = ix + row * iy;
                let b = ix + row * (iy + 1);
                let c = ix + 1 + row * (iy + 1);
                let d = ix + 1 + row * iy;
                out.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        out
    }
}
