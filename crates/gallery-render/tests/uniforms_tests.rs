// Host-side checks for the GPU uniform block; no device needed.

use gallery_core::{MaterialKind, Uniform};
use gallery_render::uniforms::MeshUniforms;

#[test]
fn uniform_block_matches_wgsl_layout() {
    // mat4 (64) + 2 x vec2 (16) + 8 x f32 (32)
    assert_eq!(std::mem::size_of::<MeshUniforms>(), 112);
    assert_eq!(std::mem::size_of::<MeshUniforms>() % 16, 0);
}

#[test]
fn named_uniforms_route_to_their_slots() {
    let mut u = MeshUniforms::new(MaterialKind::Gallery, [1.0, 1.0], [1.0, 0.0], 100, true);
    for (i, name) in [
        Uniform::ScrollY,
        Uniform::MaxY,
        Uniform::Speed,
        Uniform::Progress,
        Uniform::GridSize,
        Uniform::ScreenAspectRatio,
    ]
    .into_iter()
    .enumerate()
    {
        u.set(name, i as f32 + 10.0);
        assert_eq!(u.get(name), i as f32 + 10.0);
    }
    assert_eq!(u.scroll, 10.0);
    assert_eq!(u.screen_aspect, 15.0);
}

#[test]
fn initial_progress_depends_on_material() {
    let gallery = MeshUniforms::new(MaterialKind::Gallery, [1.0, 1.0], [1.0, 0.0], 3, false);
    assert_eq!(gallery.progress, 0.0);
    assert_eq!(gallery.textured, 0.0);
    assert_eq!(gallery.instance_count, 3.0);

    let text = MeshUniforms::new(MaterialKind::TextReveal, [4.0, 2.0], [1.0, 0.0], 1, true);
    assert_eq!(text.progress, 0.5);
    assert_eq!(text.scale, [4.0, 2.0]);
    assert_eq!(text.textured, 1.0);
}

#[test]
fn bytes_are_castable() {
    let u = MeshUniforms::new(MaterialKind::Gallery, [1.0, 1.0], [0.0, 1.0], 1, false);
    let bytes: &[u8] = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 112);
}
