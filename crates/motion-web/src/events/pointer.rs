//! Pointer-offset sampling relative to the viewport or a tracked element.

use std::rc::Rc;

use glam::Vec2;
use motion_core::{normalized_offset, SharedSignal, SignalWriter};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::events::ListenerHandle;

/// Reference box the pointer offset is measured against.
#[derive(Clone)]
pub enum PointerReference {
    Viewport,
    Element(web::Element),
}

impl PointerReference {
    fn rect(&self) -> motion_core::Rect {
        match self {
            PointerReference::Viewport => dom::viewport_rect(),
            PointerReference::Element(el) => dom::client_rect(el),
        }
    }

    /// Where the listeners live: the element itself for element tracking,
    /// the window for viewport tracking.
    fn listen_target(&self) -> Option<web::EventTarget> {
        match self {
            PointerReference::Viewport => web::window().map(Into::into),
            PointerReference::Element(el) => Some(el.clone().into()),
        }
    }
}

/// A wired pointer sampler exposing one normalized signal per axis, each in
/// [-0.5, 0.5] with 0 at the reference centre. Both reset to neutral when
/// the pointer leaves the tracked region. Dropping the sampler deregisters
/// the listeners.
pub struct PointerSampler {
    x: SharedSignal<f32>,
    y: SharedSignal<f32>,
    _listeners: Vec<ListenerHandle>,
}

impl PointerSampler {
    pub fn x(&self) -> SharedSignal<f32> {
        self.x.clone()
    }

    pub fn y(&self) -> SharedSignal<f32> {
        self.y.clone()
    }
}

struct AxisWriters {
    x: SignalWriter<f32>,
    y: SignalWriter<f32>,
}

impl AxisWriters {
    fn set(&self, offset: Vec2) {
        self.x.set(offset.x);
        self.y.set(offset.y);
    }
}

/// Sample normalized pointer offsets against `reference`, listening on the
/// window for viewport tracking or on the element itself.
pub fn wire_pointer_sampler(reference: PointerReference) -> PointerSampler {
    let (x_writer, x) = SharedSignal::new(0.0_f32);
    let (y_writer, y) = SharedSignal::new(0.0_f32);
    let writers = Rc::new(AxisWriters {
        x: x_writer,
        y: y_writer,
    });

    let mut listeners = Vec::with_capacity(2);
    let Some(target) = reference.listen_target() else {
        log::error!("[pointer] no listen target for sampler");
        return PointerSampler {
            x,
            y,
            _listeners: listeners,
        };
    };

    {
        let writers = Rc::clone(&writers);
        let reference = reference.clone();
        listeners.push(ListenerHandle::add(target.clone(), "pointermove", move |ev| {
            let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
                return;
            };
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            writers.set(normalized_offset(client, &reference.rect()));
        }));
    }

    // Leaving the tracked region resets to neutral within one event tick;
    // springs downstream carry the visual state back smoothly.
    {
        let writers = Rc::clone(&writers);
        listeners.push(ListenerHandle::add(target, "pointerleave", move |_ev| {
            writers.set(Vec2::ZERO);
        }));
    }

    PointerSampler {
        x,
        y,
        _listeners: listeners,
    }
}
