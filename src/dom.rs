use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create a fresh canvas inside `#container_id`, replacing any canvas left
/// there by a previous load.
pub fn mount_canvas(
    document: &web::Document,
    container_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
    let existing = container.get_elements_by_tag_name("canvas");
    if let Some(old) = existing.item(0) {
        container
            .remove_child(&old)
            .map_err(|e| anyhow::anyhow!("remove old canvas: {:?}", e))?;
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", "width:100%;height:100%;display:block;touch-action:none");
    _ = canvas.set_attribute("tabindex", "0");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Query string of the current page, including the leading `?` if any.
pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
