use crate::debug::DebugPanel;
use crate::{dom, SharedGallery, SharedGpu, SharedOverlay};
use gallery_core::{Camera, GalleryState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gallery: SharedGallery,
    pub overlay: Option<SharedOverlay>,
    pub gpu: SharedGpu,
    pub canvas: web::HtmlCanvasElement,
    pub panel: Option<Rc<DebugPanel>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        self.apply_resize();

        // Gallery and overlay borrow the GPU internally; release it first.
        let (intro, state) = {
            let mut g = self.gallery.borrow_mut();
            g.update(dt);
            (g.intro_progress(), g.state())
        };
        if let Some(panel) = &self.panel {
            if state == GalleryState::IntroPlaying {
                let text = self.overlay.as_ref().map(|o| o.borrow().progress());
                panel.sync(intro, text);
            }
        }

        let mut gpu = self.gpu.borrow_mut();
        match gpu.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[frame] render skipped: {e:?}"),
        }
    }

    fn apply_resize(&mut self) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let changed = {
            let mut gpu = self.gpu.borrow_mut();
            let before = gpu.size();
            gpu.resize_if_needed(w, h);
            gpu.size() != before
        };
        if !changed {
            return;
        }
        let sizes = self.gpu.borrow().visible_size();
        let aspect = web::window()
            .map(|win| {
                let (iw, ih) = dom::inner_size(&win);
                (iw / ih.max(1.0)) as f32
            })
            .unwrap_or_else(|| Camera::aspect_for(w, h));
        if let Some(overlay) = &self.overlay {
            overlay.borrow_mut().on_resize(sizes, aspect);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
