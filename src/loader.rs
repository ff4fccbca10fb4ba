use anyhow::anyhow;
use gallery_core::ImageSource;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetches image bytes over HTTP relative to the page.
pub struct FetchSource;

impl ImageSource for FetchSource {
    async fn fetch(&self, id: &str) -> anyhow::Result<Vec<u8>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let resp = JsFuture::from(window.fetch_with_str(id))
            .await
            .map_err(|e| anyhow!("fetch {id}: {e:?}"))?;
        let resp: web::Response = resp
            .dyn_into()
            .map_err(|e| anyhow!("fetch {id}: not a Response: {e:?}"))?;
        if !resp.ok() {
            return Err(anyhow!("fetch {id}: HTTP {}", resp.status()));
        }
        let promise = resp
            .array_buffer()
            .map_err(|e| anyhow!("read {id}: {e:?}"))?;
        let buf = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("read {id}: {e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buf).to_vec())
    }
}
