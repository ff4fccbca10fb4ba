// Sanity checks on page constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn image_paths_are_distinct_and_supported() {
    let mut seen = std::collections::HashSet::new();
    for path in IMAGE_PATHS {
        assert!(seen.insert(path), "duplicate {path}");
        let lower = path.to_ascii_lowercase();
        assert!(lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png"));
    }
}

#[test]
fn image_paths_form_a_valid_atlas_config() {
    let config = gallery_core::GalleryConfig::atlas(IMAGE_PATHS);
    assert!(config.validate().is_ok());
    assert_eq!(config.image_sources.len(), IMAGE_PATHS.len());
}

#[test]
fn dom_ids_are_unique() {
    let ids = [CANVAS_ID, DEBUG_PANEL_ID, INTRO_SLIDER_ID, TEXT_SLIDER_ID];
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn hidden_style_is_not_part_of_panel_style() {
    assert!(!PANEL_STYLE.contains(HIDDEN_STYLE));
    assert!(!LABEL_TEXT.is_empty());
}
