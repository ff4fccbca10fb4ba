// CLI parsing and source expansion for the desktop app.

use clap::Parser;
use gallery_core::{LayoutStrategy, ScrollAxis};
use gallery_native::*;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gallery-native-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn plain_mode_needs_no_images() {
    let args = Args::parse_from(["gallery-native", "--plain"]);
    let config = args.gallery_config().unwrap();
    assert!(!config.with_atlas);
    assert_eq!(config.layout, LayoutStrategy::Centered);
    assert_eq!(config.mesh_count, 100);
}

#[test]
fn options_override_preset() {
    let args = Args::parse_from([
        "gallery-native",
        "a.png",
        "b.jpg",
        "--count",
        "12",
        "--gap",
        "0.75",
        "--layout",
        "centered",
        "--axis",
        "vertical",
        "--mirrored",
    ]);
    let config = args.gallery_config().unwrap();
    assert!(config.with_atlas);
    assert_eq!(config.image_sources, vec!["a.png", "b.jpg"]);
    assert_eq!(config.mesh_count, 12);
    assert_eq!(config.mesh_gap, 0.75);
    assert_eq!(config.layout, LayoutStrategy::Centered);
    assert_eq!(config.axis, ScrollAxis::Vertical);
    assert!(config.mirrored);
}

#[test]
fn atlas_mode_without_images_is_an_error() {
    let args = Args::parse_from(["gallery-native"]);
    assert!(args.gallery_config().is_err());
}

#[test]
fn zero_count_is_rejected() {
    let args = Args::parse_from(["gallery-native", "--plain", "--count", "0"]);
    assert!(args.gallery_config().is_err());
}

#[test]
fn directories_expand_to_sorted_images() {
    let dir = temp_dir("expand");
    for name in ["b.PNG", "a.jpg", "notes.txt", "c.jpeg"] {
        std::fs::write(dir.join(name), b"x").unwrap();
    }
    let sources = expand_sources(&[dir.clone(), PathBuf::from("explicit.png")]).unwrap();
    let names: Vec<_> = sources
        .iter()
        .map(|s| PathBuf::from(s).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.jpg", "b.PNG", "c.jpeg", "explicit.png"]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn file_source_reads_bytes_and_reports_missing() {
    let dir = temp_dir("source");
    let path = dir.join("one.png");
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
    img.save(&path).unwrap();

    let id = path.to_string_lossy().into_owned();
    let bytes = pollster::block_on(gallery_core::ImageSource::fetch(&FileSource, &id)).unwrap();
    let decoded = gallery_core::decode(&id, &bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 2));

    let missing = dir.join("nope.png").to_string_lossy().into_owned();
    let err = pollster::block_on(gallery_core::ImageSource::fetch(&FileSource, &missing));
    assert!(err.is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
