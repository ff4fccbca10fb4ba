// Text overlay raster sizing and uniform wiring.

mod common;

use common::RecordingHost;
use gallery_core::*;

fn sizes() -> VisibleSize {
    VisibleSize {
        width: 4.0,
        height: 2.0,
    }
}

#[test]
fn raster_scales_with_capped_pixel_ratio() {
    let r = LabelRaster::for_viewport("12", 1000.0, 500.0, 1.5);
    assert_eq!((r.width, r.height), (2000, 1000));
    assert_eq!(r.font_size_px, 600.0);
    assert_eq!(r.font(), "600px Arial");
    assert_eq!(r.center(), (1000.0, 500.0));

    let r = LabelRaster::for_viewport("12", 1000.0, 500.0, 3.0);
    assert_eq!(r.width, 2000);

    let r = LabelRaster::for_viewport("12", 1000.0, 500.0, 1.0);
    assert_eq!(r.width, 1000);
    assert_eq!(r.byte_len(), 1000 * 500 * 4);
}

#[test]
fn overlay_uploads_nearest_texture_and_sets_uniforms() {
    let raster = LabelRaster::for_viewport("12", 20.0, 10.0, 1.0);
    let rgba = vec![255u8; raster.byte_len()];
    let overlay = TextOverlay::new(RecordingHost::default(), &raster, &rgba, sizes(), 2.0).unwrap();

    let host = overlay.host();
    assert_eq!(host.textures[0].filter, TextureFilter::Nearest);
    assert_eq!((host.textures[0].width, host.textures[0].height), (20, 10));

    let mesh = overlay.mesh();
    assert_eq!(host.scene, vec![mesh]);
    let record = &host.meshes[mesh.0 as usize];
    assert_eq!(record.material, MaterialKind::TextReveal);
    assert_eq!(record.scale, [4.0, 2.0]);
    assert_eq!(record.instances.len(), 1);
    assert_eq!(record.vertex_count, 4);

    assert_eq!(host.uniform(mesh, Uniform::GridSize), Some(12.0));
    assert_eq!(host.uniform(mesh, Uniform::Progress), Some(0.5));
    assert_eq!(host.uniform(mesh, Uniform::ScreenAspectRatio), Some(2.0));
    assert_eq!(overlay.progress(), 0.5);
}

#[test]
fn progress_is_clamped() {
    let raster = LabelRaster::for_viewport("12", 4.0, 4.0, 1.0);
    let rgba = vec![0u8; raster.byte_len()];
    let mut overlay = TextOverlay::new(RecordingHost::default(), &raster, &rgba, sizes(), 1.0).unwrap();
    overlay.set_progress(2.0);
    assert_eq!(overlay.progress(), 1.0);
    overlay.set_progress(0.123);
    let mesh = overlay.mesh();
    assert_eq!(overlay.host().uniform(mesh, Uniform::Progress), Some(0.123));
}

#[test]
fn resize_rescales_mesh() {
    let raster = LabelRaster::for_viewport("12", 4.0, 4.0, 1.0);
    let rgba = vec![0u8; raster.byte_len()];
    let mut overlay = TextOverlay::new(RecordingHost::default(), &raster, &rgba, sizes(), 1.0).unwrap();
    overlay.on_resize(
        VisibleSize {
            width: 6.0,
            height: 3.0,
        },
        2.0,
    );
    let mesh = overlay.mesh();
    assert_eq!(overlay.host().scales.get(&mesh), Some(&[6.0, 3.0]));
    assert_eq!(
        overlay.host().uniform(mesh, Uniform::ScreenAspectRatio),
        Some(2.0)
    );
}

#[test]
fn wrong_pixel_length_is_rejected() {
    let raster = LabelRaster::for_viewport("12", 4.0, 4.0, 1.0);
    let result = TextOverlay::new(RecordingHost::default(), &raster, &[0u8; 3], sizes(), 1.0);
    assert!(matches!(result, Err(GalleryError::InvalidConfig(_))));
}

#[test]
fn uniform_names_match_shader_conventions() {
    assert_eq!(Uniform::ScrollY.name(), "uScrollY");
    assert_eq!(Uniform::MaxY.name(), "uMaxY");
    assert_eq!(Uniform::ScreenAspectRatio.name(), "uScreenAspectRatio");
}
