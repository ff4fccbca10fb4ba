// Atlas packing: stacked layout, UV rectangles and degenerate input.

mod common;

use common::solid;
use gallery_core::*;

const EPS: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn three_image_stack_matches_expected_uvs() {
    let layout = layout_stack(&[(100, 50), (300, 80), (200, 70)]).unwrap();
    assert_eq!(layout.width, 300);
    assert_eq!(layout.height, 200);
    assert_eq!(layout.offsets, vec![0, 50, 130]);

    let expected = [
        (0.0, 1.0 / 3.0, 1.0, 0.75),
        (0.0, 1.0, 0.75, 0.35),
        (0.0, 2.0 / 3.0, 0.35, 0.0),
    ];
    for (info, (xs, xe, ys, ye)) in layout.images.iter().zip(expected) {
        assert!(approx(info.uv.x_start, xs), "x_start {:?}", info.uv);
        assert!(approx(info.uv.x_end, xe), "x_end {:?}", info.uv);
        assert!(approx(info.uv.y_start, ys), "y_start {:?}", info.uv);
        assert!(approx(info.uv.y_end, ye), "y_end {:?}", info.uv);
    }
}

#[test]
fn stacked_rects_are_contiguous() {
    let sizes = [(64, 17), (12, 33), (80, 1), (40, 240), (7, 9)];
    let layout = layout_stack(&sizes).unwrap();
    for pair in layout.images.windows(2) {
        assert!(
            approx(pair[0].uv.y_end, pair[1].uv.y_start),
            "gap between {:?} and {:?}",
            pair[0].uv,
            pair[1].uv
        );
    }
    // Covers the whole vertical range, top to bottom.
    assert!(approx(layout.images[0].uv.y_start, 1.0));
    assert!(approx(layout.images.last().unwrap().uv.y_end, 0.0));
}

#[test]
fn y_start_stays_above_y_end() {
    let layout = layout_stack(&[(10, 10), (10, 30)]).unwrap();
    for info in &layout.images {
        assert!(info.uv.y_start > info.uv.y_end);
    }
}

#[test]
fn image_info_carries_size_and_aspect() {
    let layout = layout_stack(&[(300, 150)]).unwrap();
    let info = &layout.images[0];
    assert_eq!((info.width, info.height), (300, 150));
    assert!(approx(info.aspect_ratio, 2.0));
    assert_eq!(info.uv, UvRect::FULL);
}

#[test]
fn empty_list_is_rejected() {
    assert!(matches!(
        layout_stack(&[]),
        Err(GalleryError::EmptyImageList)
    ));
    assert!(matches!(pack(&[]), Err(GalleryError::EmptyImageList)));
}

#[test]
fn zero_sized_image_is_rejected_with_index() {
    let err = layout_stack(&[(10, 10), (0, 20), (5, 5)]).unwrap_err();
    match err {
        GalleryError::ZeroDimension {
            index,
            width,
            height,
        } => {
            assert_eq!(index, 1);
            assert_eq!((width, height), (0, 20));
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = layout_stack(&[(10, 0)]).unwrap_err();
    assert!(matches!(err, GalleryError::ZeroDimension { index: 0, .. }));
}

#[test]
fn pack_draws_each_image_at_its_offset() {
    let red = [255, 0, 0, 255];
    let green = [0, 255, 0, 255];
    let images = vec![solid("a", 4, 2, red), solid("b", 8, 3, green)];
    let atlas = pack(&images).unwrap();

    assert_eq!((atlas.width(), atlas.height()), (8, 5));
    assert_eq!(atlas.images.len(), 2);

    // First image occupies rows 0..2, columns 0..4.
    assert_eq!(atlas.surface.get_pixel(0, 0).0, red);
    assert_eq!(atlas.surface.get_pixel(3, 1).0, red);
    // Beyond the narrower first image stays transparent.
    assert_eq!(atlas.surface.get_pixel(5, 0).0, [0, 0, 0, 0]);
    // Second image starts at row 2 and spans the full width.
    assert_eq!(atlas.surface.get_pixel(0, 2).0, green);
    assert_eq!(atlas.surface.get_pixel(7, 4).0, green);
}

#[test]
fn packed_uvs_match_layout() {
    let images = vec![
        solid("a", 100, 50, [1, 1, 1, 255]),
        solid("b", 300, 80, [2, 2, 2, 255]),
        solid("c", 200, 70, [3, 3, 3, 255]),
    ];
    let atlas = pack(&images).unwrap();
    let layout = layout_stack(&[(100, 50), (300, 80), (200, 70)]).unwrap();
    assert_eq!(atlas.images, layout.images);
}

#[test]
fn no_uv_is_nan() {
    let layout = layout_stack(&[(1, 1), (4096, 1), (1, 4096)]).unwrap();
    for info in &layout.images {
        for v in info.uv.to_array() {
            assert!(v.is_finite());
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
