#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use gallery_core::{load_images, Gallery, GalleryConfig, LabelRaster, TextOverlay};
use gallery_render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug;
mod dom;
mod events;
mod frame;
mod input;
mod label;
mod loader;

pub(crate) type SharedGpu = Rc<RefCell<GpuState<'static>>>;
pub(crate) type SharedGallery = Rc<RefCell<Gallery<SharedGpu>>>;
pub(crate) type SharedOverlay = Rc<RefCell<TextOverlay<SharedGpu>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Kick off the atlas fetch; the gallery becomes Ready when it resolves.
fn spawn_atlas_load(gallery: SharedGallery) -> anyhow::Result<()> {
    let ids = {
        let mut g = gallery.borrow_mut();
        g.begin()?;
        match g.pending_sources() {
            Some(ids) => ids.to_vec(),
            None => return Ok(()),
        }
    };
    spawn_local(async move {
        let loaded = load_images(&loader::FetchSource, &ids).await;
        if let Err(e) = gallery.borrow_mut().complete_atlas(loaded) {
            log::error!("[gallery] {e}");
        }
    });
    Ok(())
}

fn build_overlay(
    document: &web::Document,
    window: &web::Window,
    gpu: &SharedGpu,
) -> anyhow::Result<SharedOverlay> {
    let (iw, ih) = dom::inner_size(window);
    let raster =
        LabelRaster::for_viewport(constants::LABEL_TEXT, iw, ih, window.device_pixel_ratio());
    let rgba = label::rasterize(document, &raster)?;
    let sizes = gpu.borrow().visible_size();
    let aspect = (iw / ih.max(1.0)) as f32;
    let overlay = TextOverlay::new(gpu.clone(), &raster, &rgba, sizes, aspect)?;
    Ok(Rc::new(RefCell::new(overlay)))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{} canvas", constants::CANVAS_ID))?;

    // Backing store at CSS size * min(2, devicePixelRatio)
    events::wire_canvas_resize(&canvas);

    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        canvas.width(),
        canvas.height(),
    )
    .await?;
    let gpu: SharedGpu = Rc::new(RefCell::new(gpu));

    let config = GalleryConfig::atlas(constants::IMAGE_PATHS);
    let gallery: SharedGallery = Rc::new(RefCell::new(Gallery::new(config, gpu.clone())?));

    let overlay = match build_overlay(&document, &window, &gpu) {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[overlay] label disabled: {e:#}");
            None
        }
    };

    spawn_atlas_load(gallery.clone())?;

    let panel = match debug::DebugPanel::mount(&document, overlay.is_some()) {
        Ok(panel) => {
            panel.wire(gallery.clone(), overlay.clone());
            let panel = Rc::new(panel);
            events::wire_keydown(gallery.clone(), panel.clone());
            Some(panel)
        }
        Err(e) => {
            log::warn!("[debug] panel unavailable: {e:#}");
            None
        }
    };
    events::wire_wheel(gallery.clone(), gpu.clone());
    events::wire_intro_click(&canvas, gallery.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gallery,
        overlay,
        gpu,
        canvas,
        panel,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
