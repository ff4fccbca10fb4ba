use anyhow::Context;
use gallery_core::ImageSource;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Reads image ids as filesystem paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl ImageSource for FileSource {
    async fn fetch(&self, id: &str) -> anyhow::Result<Vec<u8>> {
        std::fs::read(id).with_context(|| format!("reading {id}"))
    }
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand directories into their image files (sorted by name); files pass
/// through unchanged so an explicit order is kept.
pub fn expand_sources(paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)
                .with_context(|| format!("listing {}", path.display()))?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_image_path(p))
                .collect();
            entries.sort();
            out.extend(entries.iter().map(|p| p.to_string_lossy().into_owned()));
        } else {
            out.push(path.to_string_lossy().into_owned());
        }
    }
    Ok(out)
}
