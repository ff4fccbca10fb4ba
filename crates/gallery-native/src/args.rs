use crate::source::expand_sources;
use anyhow::bail;
use clap::{Parser, ValueEnum};
use gallery_core::{
    GalleryConfig, LayoutStrategy, ScrollAxis, DEFAULT_MESH_COUNT, DEFAULT_MESH_GAP,
};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Sequential,
    Centered,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Parser, Debug)]
#[command(
    name = "gallery-native",
    about = "Scroll an instanced image gallery with the mouse wheel"
)]
pub struct Args {
    /// Image files or directories of PNG/JPEG images, in display order
    pub images: Vec<PathBuf>,

    /// Number of plane instances
    #[arg(short, long, default_value_t = DEFAULT_MESH_COUNT)]
    pub count: usize,

    /// World-space spacing between instances
    #[arg(short, long, default_value_t = DEFAULT_MESH_GAP)]
    pub gap: f32,

    /// Instance distribution (defaults to the mode's own layout)
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    #[arg(long, value_enum, default_value_t = AxisArg::Horizontal)]
    pub axis: AxisArg,

    /// Negate instance offsets
    #[arg(long)]
    pub mirrored: bool,

    /// Untextured planes, no atlas and no intro
    #[arg(long)]
    pub plain: bool,
}

impl Args {
    pub fn gallery_config(&self) -> anyhow::Result<GalleryConfig> {
        let mut config = if self.plain {
            GalleryConfig::plain()
        } else {
            let sources = expand_sources(&self.images)?;
            if sources.is_empty() {
                bail!("no PNG or JPEG images found; pass image paths or --plain");
            }
            GalleryConfig::atlas(sources)
        };
        config.mesh_count = self.count;
        config.mesh_gap = self.gap;
        config.mirrored = self.mirrored;
        config.axis = match self.axis {
            AxisArg::Horizontal => ScrollAxis::Horizontal,
            AxisArg::Vertical => ScrollAxis::Vertical,
        };
        if let Some(layout) = self.layout {
            config.layout = match layout {
                LayoutArg::Sequential => LayoutStrategy::Sequential,
                LayoutArg::Centered => LayoutStrategy::Centered,
            };
        }
        config.validate()?;
        Ok(config)
    }
}
