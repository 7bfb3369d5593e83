//! Demo scene assembly.
//!
//! Finds the page's animated elements by id, wires samplers and layers for
//! each, and owns everything for the page's lifetime. Every component is
//! optional; a page without one simply skips it.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use motion_core::{Channel, Curve, ScrollRange, Timeline, ViewportClass};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::events::{
    wire_pointer_sampler, wire_scroll_sampler, ListenerHandle, PointerReference, PointerSampler,
    ScrollSampler,
};
use crate::frame::{start_loop, Binding, FrameContext, FrameHandle, Layer};

pub struct Scene {
    ctx: Rc<RefCell<FrameContext>>,
    _pointer: PointerSampler,
    _scroll_samplers: Vec<ScrollSampler>,
    _image_fallbacks: Vec<ListenerHandle>,
    handle: Option<FrameHandle>,
}

impl Scene {
    pub fn start(&mut self) {
        if self.handle.is_none() {
            self.handle = Some(start_loop(Rc::clone(&self.ctx)));
        }
    }

    /// Tear the scene down: stops the frame loop and deregisters every
    /// listener by dropping their handles.
    pub fn dismantle(self) {}
}

pub fn build(document: &web::Document) -> anyhow::Result<Scene> {
    let viewport = dom::viewport_size();
    let class = ViewportClass::classify(viewport.x);
    log::info!(
        "[scene] viewport {:.0}x{:.0}, {:?} layout",
        viewport.x,
        viewport.y,
        class
    );

    let pointer = wire_pointer_sampler(PointerReference::Viewport);
    let mut layers = Vec::new();
    let mut scroll_samplers = Vec::new();

    wire_hero(document, &pointer, viewport, &mut layers, &mut scroll_samplers)?;
    if !class.is_compact() {
        // the card is a desktop-only flourish
        wire_tilt_card(document, &pointer, &mut layers)?;
    }
    wire_zoom_tunnel(document, class, &mut layers, &mut scroll_samplers)?;
    wire_cursor(document, &pointer, viewport, &mut layers)?;
    wire_marquee(document, viewport, &mut layers, &mut scroll_samplers)?;

    let image_fallbacks = dom::wire_image_fallbacks(document);

    if layers.is_empty() {
        log::warn!("[scene] no animated elements found");
    } else {
        log::info!("[scene] {} layers wired", layers.len());
    }

    Ok(Scene {
        ctx: Rc::new(RefCell::new(FrameContext::new(layers))),
        _pointer: pointer,
        _scroll_samplers: scroll_samplers,
        _image_fallbacks: image_fallbacks,
        handle: None,
    })
}

/// Hero section: scroll-away drift and fade plus a subtle pointer tilt.
fn wire_hero(
    document: &web::Document,
    pointer: &PointerSampler,
    viewport: Vec2,
    layers: &mut Vec<Layer>,
    scroll_samplers: &mut Vec<ScrollSampler>,
) -> anyhow::Result<()> {
    let Some(el) = dom::html_element_by_id(document, "hero") else {
        log::debug!("[scene] no #hero, skipping");
        return Ok(());
    };
    let sampler = wire_scroll_sampler(el.as_ref(), ScrollRange::exit_top());

    let drift = Timeline::new()
        .with(
            Channel::TranslateY,
            Curve::linear(0.0, 0.0, 1.0, viewport.y * HERO_DRIFT_VIEWPORT_FRACTION)?,
        )
        .with(Channel::Opacity, Curve::linear(0.0, 1.0, HERO_FADE_END, 0.0)?);
    let tilt_x = Timeline::new().with(
        Channel::RotateX,
        Curve::linear(-0.5, HERO_TILT_DEG, 0.5, -HERO_TILT_DEG)?,
    );
    let tilt_y = Timeline::new().with(
        Channel::RotateY,
        Curve::linear(-0.5, -HERO_TILT_DEG, 0.5, HERO_TILT_DEG)?,
    );

    layers.push(Layer::new(
        el,
        vec![
            Binding::direct(sampler.progress(), drift),
            Binding::springed(pointer.y(), HERO_POINTER_SPRING, tilt_x),
            Binding::springed(pointer.x(), HERO_POINTER_SPRING, tilt_y),
        ],
    ));
    scroll_samplers.push(sampler);
    Ok(())
}

/// Free-floating card tilting toward the pointer.
fn wire_tilt_card(
    document: &web::Document,
    pointer: &PointerSampler,
    layers: &mut Vec<Layer>,
) -> anyhow::Result<()> {
    let Some(el) = dom::html_element_by_id(document, "tilt-card") else {
        log::debug!("[scene] no #tilt-card, skipping");
        return Ok(());
    };
    let tilt_x = Timeline::new().with(
        Channel::RotateX,
        Curve::linear(-0.5, CARD_TILT_DEG, 0.5, -CARD_TILT_DEG)?,
    );
    let tilt_y = Timeline::new().with(
        Channel::RotateY,
        Curve::linear(-0.5, -CARD_TILT_DEG, 0.5, CARD_TILT_DEG)?,
    );
    layers.push(Layer::new(
        el,
        vec![
            Binding::springed(pointer.y(), CARD_SPRING, tilt_x),
            Binding::springed(pointer.x(), CARD_SPRING, tilt_y),
        ],
    ));
    Ok(())
}

/// Zoom tunnel: depth-staggered scale layers inside a tall sticky section,
/// with a title that zooms past the viewer and blurs out.
fn wire_zoom_tunnel(
    document: &web::Document,
    class: ViewportClass,
    layers: &mut Vec<Layer>,
    scroll_samplers: &mut Vec<ScrollSampler>,
) -> anyhow::Result<()> {
    let Some(section) = dom::html_element_by_id(document, "zoom") else {
        log::debug!("[scene] no #zoom, skipping");
        return Ok(());
    };
    let sampler = wire_scroll_sampler(section.as_ref(), ScrollRange::cover());

    if let Ok(nodes) = section.query_selector_all("[data-depth]") {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
                continue;
            };
            let depth = el
                .get_attribute("data-depth")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0)
                .min(ZOOM_DEPTH_SCALES.len() - 1);
            let timeline = Timeline::new()
                .with(
                    Channel::Scale,
                    Curve::linear(0.0, 1.0, 1.0, ZOOM_DEPTH_SCALES[depth])?,
                )
                .with(
                    Channel::Opacity,
                    Curve::new([(0.0, 1.0), (ZOOM_IMAGE_FADE_START, 1.0), (1.0, 0.0)])?,
                );
            layers.push(Layer::new(
                el,
                vec![Binding::direct(sampler.progress(), timeline)],
            ));
        }
    }

    if let Some(title) = dom::html_element_by_id(document, "zoom-title") {
        let (hold, fade_end) = match class {
            ViewportClass::Full => (ZOOM_TITLE_HOLD_FULL, ZOOM_TITLE_FADE_END_FULL),
            ViewportClass::Compact => (ZOOM_TITLE_HOLD_COMPACT, ZOOM_TITLE_FADE_END_COMPACT),
        };
        let timeline = Timeline::new()
            .with(
                Channel::Scale,
                Curve::linear(0.0, 1.0, fade_end, ZOOM_TITLE_SCALE_MAX)?,
            )
            .with(
                Channel::Opacity,
                Curve::new([(0.0, 1.0), (hold, 1.0), (fade_end, 0.0)])?,
            )
            .with(
                Channel::Blur,
                Curve::new([(0.0, 0.0), (hold, 0.0), (fade_end, ZOOM_TITLE_BLUR_PX)])?,
            );
        layers.push(Layer::new(
            title,
            vec![Binding::direct(sampler.progress(), timeline)],
        ));
    }

    scroll_samplers.push(sampler);
    Ok(())
}

/// Fixed cursor follower trailing the pointer on a light spring.
fn wire_cursor(
    document: &web::Document,
    pointer: &PointerSampler,
    viewport: Vec2,
    layers: &mut Vec<Layer>,
) -> anyhow::Result<()> {
    let Some(el) = dom::html_element_by_id(document, "cursor") else {
        log::debug!("[scene] no #cursor, skipping");
        return Ok(());
    };
    // normalized offsets map back to client-space pixels for a
    // top-left-anchored fixed element
    let follow_x = Timeline::new().with(
        Channel::TranslateX,
        Curve::linear(-0.5, 0.0, 0.5, viewport.x)?,
    );
    let follow_y = Timeline::new().with(
        Channel::TranslateY,
        Curve::linear(-0.5, 0.0, 0.5, viewport.y)?,
    );
    layers.push(Layer::new(
        el,
        vec![
            Binding::springed(pointer.x(), CURSOR_SPRING, follow_x),
            Binding::springed(pointer.y(), CURSOR_SPRING, follow_y),
        ],
    ));
    Ok(())
}

/// Horizontal strip pulled across the viewport by its section's traversal.
fn wire_marquee(
    document: &web::Document,
    viewport: Vec2,
    layers: &mut Vec<Layer>,
    scroll_samplers: &mut Vec<ScrollSampler>,
) -> anyhow::Result<()> {
    let Some(el) = dom::html_element_by_id(document, "marquee") else {
        log::debug!("[scene] no #marquee, skipping");
        return Ok(());
    };
    let sampler = wire_scroll_sampler(el.as_ref(), ScrollRange::traverse());
    let travel = (el.scroll_width() as f32 - viewport.x).max(0.0);
    let timeline = Timeline::new().with(
        Channel::TranslateX,
        Curve::linear(0.0, MARQUEE_LEAD_PX, 1.0, MARQUEE_LEAD_PX - travel)?,
    );
    layers.push(Layer::new(
        el,
        vec![Binding::springed(sampler.progress(), MARQUEE_SPRING, timeline)],
    ));
    scroll_samplers.push(sampler);
    Ok(())
}
