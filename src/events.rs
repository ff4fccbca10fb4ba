use crate::debug::DebugPanel;
use crate::input;
use crate::{SharedGallery, SharedGpu};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel anywhere on the page scrolls the gallery.
pub fn wire_wheel(gallery: SharedGallery, gpu: SharedGpu) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let (_, inner_h) = crate::dom::inner_size(&win);
        let view_h = gpu.borrow().visible_size().height;
        let delta = input::wheel_scroll_delta(
            ev.delta_x(),
            ev.delta_y(),
            ev.delta_mode(),
            view_h,
            inner_h,
        );
        gallery.borrow_mut().scroll_by(delta);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Click on the canvas plays the intro once the gallery is ready.
pub fn wire_intro_click(canvas: &web::HtmlCanvasElement, gallery: SharedGallery) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        match gallery.borrow_mut().trigger_intro() {
            Ok(true) => log::info!("[events] intro started"),
            Ok(false) => {}
            Err(e) => log::debug!("[events] click ignored: {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// `h` toggles the debug panel, `r` resets the intro progress.
pub fn wire_keydown(gallery: SharedGallery, panel: Rc<DebugPanel>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if input::is_toggle_key(&key) {
            panel.toggle();
            ev.prevent_default();
        } else if input::is_reset_key(&key) {
            if let Err(e) = gallery.borrow_mut().reset_intro() {
                log::debug!("[events] reset ignored: {e}");
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store in sync with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    crate::dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        crate::dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
