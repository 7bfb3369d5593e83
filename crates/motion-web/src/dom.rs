use glam::Vec2;
use motion_core::Rect;
use web_sys as web;

use crate::events::ListenerHandle;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Inner viewport size in CSS pixels.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

/// Viewport-relative rect for the whole viewport.
pub fn viewport_rect() -> Rect {
    let size = viewport_size();
    Rect::new(0.0, 0.0, size.x, size.y)
}

/// Live viewport-relative geometry of an element.
pub fn client_rect(element: &web::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    use wasm_bindgen::JsCast;
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// CSS class applied to images whose source failed to load.
pub const IMAGE_FALLBACK_CLASS: &str = "asset-fallback";

/// Attach an `error` listener to every `img` in the document. A broken
/// asset swaps in the placeholder class and never reaches the animation
/// pipeline.
pub fn wire_image_fallbacks(document: &web::Document) -> Vec<ListenerHandle> {
    use wasm_bindgen::JsCast;
    let mut handles = Vec::new();
    let images = document.get_elements_by_tag_name("img");
    for i in 0..images.length() {
        let Some(el) = images.item(i) else { continue };
        let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        let img_for_handler = img.clone();
        let handle = ListenerHandle::add(img.into(), "error", move |_ev| {
            log::warn!("[assets] image failed to load: {}", img_for_handler.src());
            let _ = img_for_handler.class_list().add_1(IMAGE_FALLBACK_CLASS);
        });
        handles.push(handle);
    }
    log::info!("[assets] fallback wired for {} images", handles.len());
    handles
}
