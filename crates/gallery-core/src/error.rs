use crate::gallery::GalleryState;
use thiserror::Error;

/// Failures surfaced by the gallery core.
///
/// Degenerate input is always rejected before any UV math runs, so a packed
/// atlas never contains NaN coordinates.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("no images supplied for the atlas")]
    EmptyImageList,

    #[error("image {index} has degenerate size {width}x{height}")]
    ZeroDimension { index: usize, width: u32, height: u32 },

    #[error("failed to load image `{source_id}`: {reason}")]
    AtlasLoad { source_id: String, reason: String },

    #[error("invalid gallery config: {0}")]
    InvalidConfig(String),

    #[error("gallery is not ready (state: {0})")]
    NotReady(GalleryState),

    #[error("an atlas load is already in flight")]
    LoadInFlight,

    #[error("unexpected gallery state: expected {expected}, found {actual}")]
    UnexpectedState {
        expected: GalleryState,
        actual: GalleryState,
    },

    #[error("render host error: {0}")]
    Host(String),
}

impl GalleryError {
    pub(crate) fn host(err: anyhow::Error) -> Self {
        GalleryError::Host(format!("{err:#}"))
    }
}
