//! The per-frame update loop.
//!
//! Event listeners write signals; once per animation frame every layer pulls
//! the latest signal values, advances its springs and pushes the mapped
//! style values onto its element. Animation ticks are decoupled from any
//! UI re-render.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use motion_core::{SharedSignal, Spring, SpringConfig, Timeline, VisualOutput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::applier;

/// One signal feeding one timeline, optionally smoothed through a spring.
pub struct Binding {
    signal: SharedSignal<f32>,
    spring: Option<Spring>,
    timeline: Timeline,
}

impl Binding {
    /// Pass-through binding: the raw signal drives the timeline directly.
    pub fn direct(signal: SharedSignal<f32>, timeline: Timeline) -> Self {
        Self {
            signal,
            spring: None,
            timeline,
        }
    }

    /// Spring-smoothed binding, snapped to the signal's current value so the
    /// first frame does not animate in from zero.
    pub fn springed(signal: SharedSignal<f32>, config: SpringConfig, timeline: Timeline) -> Self {
        let mut spring = Spring::new(config, 0.0);
        spring.snap_to(signal.get());
        Self {
            signal,
            spring: Some(spring),
            timeline,
        }
    }

    fn tick(&mut self, dt: Duration, out: &mut VisualOutput) {
        let target = self.signal.get();
        let x = match &mut self.spring {
            Some(spring) => {
                spring.set_target(target);
                spring.step(dt)
            }
            None => target,
        };
        self.timeline.evaluate_into(x, out);
    }
}

/// One animated element and the bindings that drive it. All bindings merge
/// into a single sanitized output per frame.
pub struct Layer {
    element: web::HtmlElement,
    bindings: Vec<Binding>,
}

impl Layer {
    pub fn new(element: web::HtmlElement, bindings: Vec<Binding>) -> Self {
        applier::prime(&element);
        Self { element, bindings }
    }

    fn tick(&mut self, dt: Duration) {
        let mut out = VisualOutput::IDENTITY;
        for binding in &mut self.bindings {
            binding.tick(dt, &mut out);
        }
        applier::apply(&self.element, &out.sanitized());
    }
}

pub struct FrameContext {
    pub layers: Vec<Layer>,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            layers,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        for layer in &mut self.layers {
            layer.tick(dt);
        }
    }
}

/// Keeps the `requestAnimationFrame` loop alive; `stop()` (or drop) halts
/// rescheduling on the next tick.
pub struct FrameHandle {
    alive: Rc<Cell<bool>>,
}

impl FrameHandle {
    pub fn stop(&self) {
        self.alive.set(false);
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// Drive `frame_ctx.frame()` from `requestAnimationFrame` until the returned
/// handle is stopped or dropped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameHandle {
    let alive = Rc::new(Cell::new(true));
    let alive_tick = Rc::clone(&alive);

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            // stop rescheduling; no further frames run
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    FrameHandle { alive }
}
