// Image loading: ordering, all-or-nothing failure and decoding.

mod common;

use common::{png_bytes, MemorySource};
use gallery_core::*;
use pollster::block_on;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn output_order_matches_input_order() {
    let source = MemorySource::new(&[("wide", 30, 10), ("tall", 5, 40), ("square", 8, 8)]);
    let images = block_on(load_images(&source, &ids(&["square", "wide", "tall"]))).unwrap();
    let got: Vec<_> = images
        .iter()
        .map(|i| (i.source_id.as_str(), i.width(), i.height()))
        .collect();
    assert_eq!(got, vec![("square", 8, 8), ("wide", 30, 10), ("tall", 5, 40)]);
}

#[test]
fn missing_resource_fails_whole_load() {
    let source = MemorySource::new(&[("a", 2, 2), ("c", 2, 2)]);
    let err = block_on(load_images(&source, &ids(&["a", "b", "c"]))).unwrap_err();
    match err {
        GalleryError::AtlasLoad { source_id, reason } => {
            assert_eq!(source_id, "b");
            assert!(reason.contains("404"), "reason: {reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn undecodable_bytes_name_the_resource() {
    let source = MemorySource::new(&[("ok", 2, 2)]).with_raw("junk", b"not an image".to_vec());
    let err = block_on(load_images(&source, &ids(&["ok", "junk"]))).unwrap_err();
    assert!(matches!(err, GalleryError::AtlasLoad { ref source_id, .. } if source_id == "junk"));
}

#[test]
fn decode_produces_rgba_pixels() {
    let bytes = png_bytes(3, 2, [10, 20, 30, 255]);
    let img = decode("x", &bytes).unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
    assert_eq!(img.pixels.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn empty_id_list_resolves_empty() {
    let source = MemorySource::new(&[]);
    let images = block_on(load_images(&source, &[])).unwrap();
    assert!(images.is_empty());
}
