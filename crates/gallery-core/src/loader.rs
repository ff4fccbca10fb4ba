//! All-or-nothing image loading.

use crate::atlas::DecodedImage;
use crate::error::GalleryError;
use futures::future::try_join_all;

/// Fetches the raw bytes of one image resource (network, disk, memory).
#[allow(async_fn_in_trait)]
pub trait ImageSource {
    async fn fetch(&self, id: &str) -> anyhow::Result<Vec<u8>>;
}

/// Decode an encoded image (PNG/JPEG) into RGBA8.
pub fn decode(id: &str, bytes: &[u8]) -> Result<DecodedImage, GalleryError> {
    let img = image::load_from_memory(bytes).map_err(|e| GalleryError::AtlasLoad {
        source_id: id.to_string(),
        reason: e.to_string(),
    })?;
    Ok(DecodedImage::new(id, img.to_rgba8()))
}

/// Fetch and decode every id, joined concurrently.
///
/// The result keeps input order regardless of completion order. The first
/// failure aborts the whole load; no partial list is returned.
pub async fn load_images<S: ImageSource>(
    source: &S,
    ids: &[String],
) -> Result<Vec<DecodedImage>, GalleryError> {
    let jobs = ids.iter().map(|id| async move {
        let bytes = source
            .fetch(id)
            .await
            .map_err(|e| GalleryError::AtlasLoad {
                source_id: id.clone(),
                reason: format!("{e:#}"),
            })?;
        decode(id, &bytes)
    });
    let images = try_join_all(jobs).await?;
    log::info!("[loader] decoded {} images", images.len());
    Ok(images)
}
