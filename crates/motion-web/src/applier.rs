//! Writes computed visual outputs onto element inline styles.
//!
//! Only compositor-friendly properties are touched (`transform`, `opacity`,
//! `filter`), so per-frame updates never trigger re-layout.

use motion_core::VisualOutput;
use web_sys as web;

/// One-time hint before a layer starts animating.
pub fn prime(element: &web::HtmlElement) {
    let style = element.style();
    let _ = style.set_property("will-change", "transform, opacity, filter");
}

/// Write `out` onto the element's inline style.
pub fn apply(element: &web::HtmlElement, out: &VisualOutput) {
    let style = element.style();
    let _ = style.set_property("transform", &out.transform_css());
    let _ = style.set_property("opacity", &format_opacity(out.opacity));
    let _ = style.set_property("filter", &out.filter_css());
}

#[inline]
fn format_opacity(opacity: f32) -> String {
    if opacity >= 1.0 {
        "1".to_string()
    } else {
        format!("{opacity:.4}")
    }
}
