use gallery_core::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to a concrete DOM type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// `window.innerWidth` / `window.innerHeight` in CSS pixels.
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

#[inline]
pub fn capped_pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

/// Match the canvas backing store to its CSS size at the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = capped_pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = crate::input::backing_size(rect.width(), rect.height(), dpr);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Wrap a JS-side error (usually a `JsValue`) for `anyhow` propagation.
#[inline]
pub fn js_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    anyhow::anyhow!("{e:?}")
}
