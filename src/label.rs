use anyhow::anyhow;
use gallery_core::LabelRaster;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw the label on an offscreen 2D canvas and read back RGBA pixels.
pub fn rasterize(document: &web::Document, raster: &LabelRaster) -> anyhow::Result<Vec<u8>> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow!("canvas cast: {e:?}"))?;
    canvas.set_width(raster.width);
    canvas.set_height(raster.height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!("2d context cast: {e:?}"))?;

    let (w, h) = (raster.width as f64, raster.height as f64);
    ctx.set_fill_style_str(raster.background);
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_font(&raster.font());
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(raster.foreground);
    let (cx, cy) = raster.center();
    ctx.fill_text(&raster.text, cx, cy)
        .map_err(|e| anyhow!("fill_text: {e:?}"))?;

    let data = ctx
        .get_image_data(0.0, 0.0, w, h)
        .map_err(|e| anyhow!("get_image_data: {e:?}"))?;
    Ok(data.data().0)
}
