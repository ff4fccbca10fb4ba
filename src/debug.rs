//! Debug panel: live sliders for the gallery intro and the text reveal.

use crate::constants::*;
use crate::dom::js_err;
use crate::input::parse_slider;
use crate::{SharedGallery, SharedOverlay};
use gallery_core::DEBUG_PROGRESS_STEP;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DebugPanel {
    root: web::HtmlElement,
    intro: web::HtmlInputElement,
    text: Option<web::HtmlInputElement>,
}

fn slider(
    document: &web::Document,
    id: &str,
    label: &str,
) -> anyhow::Result<(web::Element, web::HtmlInputElement)> {
    let row = document
        .create_element("label")
        .map_err(js_err)?;
    row.set_attribute("style", "display:block;margin:4px 0")
        .map_err(js_err)?;
    row.set_text_content(Some(label));
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    input.set_id(id);
    input.set_type("range");
    input.set_min("0");
    input.set_max("1");
    input.set_step(&DEBUG_PROGRESS_STEP.to_string());
    row.append_child(&input)
        .map_err(js_err)?;
    Ok((row, input))
}

impl DebugPanel {
    /// Build the panel, hidden, and append it to `<body>`.
    pub fn mount(document: &web::Document, with_text: bool) -> anyhow::Result<Self> {
        let root: web::HtmlElement = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        root.set_id(DEBUG_PANEL_ID);
        root.set_attribute("style", &format!("{PANEL_STYLE};{HIDDEN_STYLE}"))
            .map_err(js_err)?;

        let (row, intro) = slider(document, INTRO_SLIDER_ID, "uProgress (gallery)")?;
        root.append_child(&row)
            .map_err(js_err)?;
        let text = if with_text {
            let (row, input) = slider(document, TEXT_SLIDER_ID, "uProgress (text)")?;
            root.append_child(&row)
                .map_err(js_err)?;
            Some(input)
        } else {
            None
        };

        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
        body.append_child(&root)
            .map_err(js_err)?;
        Ok(Self { root, intro, text })
    }

    pub fn is_hidden(&self) -> bool {
        self.root
            .get_attribute("style")
            .map(|s| s.contains(HIDDEN_STYLE))
            .unwrap_or(false)
    }

    pub fn toggle(&self) {
        let style = if self.is_hidden() {
            PANEL_STYLE.to_string()
        } else {
            format!("{PANEL_STYLE};{HIDDEN_STYLE}")
        };
        let _ = self.root.set_attribute("style", &style);
    }

    /// Route slider edits to the gallery and the overlay.
    pub fn wire(&self, gallery: SharedGallery, overlay: Option<SharedOverlay>) {
        let intro = self.intro.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let mut g = gallery.borrow_mut();
            let v = parse_slider(&intro.value(), g.intro_progress());
            if let Err(e) = g.set_intro_progress(v) {
                log::debug!("[debug] intro slider ignored: {e}");
            }
        }) as Box<dyn FnMut(_)>);
        let _ = self
            .intro
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();

        if let (Some(input), Some(overlay)) = (self.text.clone(), overlay) {
            let target = input.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                let mut o = overlay.borrow_mut();
                let v = parse_slider(&input.value(), o.progress());
                o.set_progress(v);
            }) as Box<dyn FnMut(_)>);
            let _ = target
                .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Mirror the current values while the intro tween runs.
    pub fn sync(&self, intro_progress: f32, text_progress: Option<f32>) {
        if self.is_hidden() {
            return;
        }
        self.intro.set_value(&format!("{intro_progress:.3}"));
        if let (Some(input), Some(v)) = (&self.text, text_progress) {
            input.set_value(&format!("{v:.3}"));
        }
    }
}
