//! Scroll-progress sampling for a tracked element.

use std::rc::Rc;

use motion_core::{ScrollRange, SharedSignal, SignalWriter};
use web_sys as web;

use crate::dom;
use crate::events::ListenerHandle;

/// A wired scroll sampler. Holds the signal writer and the listener
/// registrations; dropping it stops all sampling.
pub struct ScrollSampler {
    progress: SharedSignal<f32>,
    _listeners: Vec<ListenerHandle>,
}

impl ScrollSampler {
    /// Read-only handle to the progress signal, one clone per consumer.
    pub fn progress(&self) -> SharedSignal<f32> {
        self.progress.clone()
    }
}

/// Track `element` through `range`, updating the shared progress signal on
/// every scroll and resize. An initial sample is taken immediately so
/// consumers never observe a stale zero before the first event.
pub fn wire_scroll_sampler(element: &web::Element, range: ScrollRange) -> ScrollSampler {
    let (writer, progress) = SharedSignal::new(0.0_f32);
    let writer = Rc::new(writer);

    sample_into(&writer, element, range);

    let mut listeners = Vec::with_capacity(2);
    for event in ["scroll", "resize"] {
        let writer = Rc::clone(&writer);
        let element = element.clone();
        if let Some(handle) = ListenerHandle::on_window(event, move |_ev| {
            sample_into(&writer, &element, range);
        }) {
            listeners.push(handle);
        }
    }

    ScrollSampler {
        progress,
        _listeners: listeners,
    }
}

fn sample_into(writer: &SignalWriter<f32>, element: &web::Element, range: ScrollRange) {
    let rect = dom::client_rect(element);
    let viewport = dom::viewport_size();
    writer.set(range.progress(rect.top, rect.height, viewport.y));
}
