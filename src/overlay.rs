use crate::constants::{ERROR_OVERLAY_ID, LOADING_OVERLAY_ID};
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_loading(document: &web::Document) {
    show(document, LOADING_OVERLAY_ID);
}

pub fn hide_loading(document: &web::Document) {
    hide(document, LOADING_OVERLAY_ID);
}

/// Replace the loading overlay with a start-up failure message.
pub fn show_error(document: &web::Document, message: &str) {
    hide_loading(document);
    if let Some(el) = document.get_element_by_id(ERROR_OVERLAY_ID) {
        el.set_text_content(Some(message));
    }
    show(document, ERROR_OVERLAY_ID);
}
