use crate::constants::{SKYBOX_BASE_PATH, SKYBOX_EXTENSION};
use js_sys::Uint8Array;
use skyrun_core::{skybox_urls, CubeFaces};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("request {}: {:?}", url, e))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode all six skybox faces. Completes only once every face
/// is available, so the caller can gate the first frame on it.
pub async fn load_skybox(window: &web::Window) -> anyhow::Result<CubeFaces> {
    let urls = skybox_urls(SKYBOX_BASE_PATH, SKYBOX_EXTENSION);
    let mut encoded = Vec::with_capacity(urls.len());
    for url in &urls {
        encoded.push(fetch_bytes(window, url).await?);
        log::info!("[assets] fetched {}", url);
    }
    Ok(CubeFaces::decode(&encoded)?)
}
