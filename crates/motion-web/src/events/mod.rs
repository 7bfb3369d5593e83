pub mod pointer;
pub mod scroll;

pub use pointer::{wire_pointer_sampler, PointerReference, PointerSampler};
pub use scroll::{wire_scroll_sampler, ScrollSampler};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener registration that deregisters itself on drop, so a torn
/// down component leaves no orphaned per-frame work behind.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    pub fn add(
        target: web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev))
            as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("[events] failed to add {event} listener: {e:?}");
        }
        Self {
            target,
            event,
            closure,
        }
    }

    /// Convenience for window-level listeners.
    pub fn on_window(event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<Self> {
        let window = web::window()?;
        Some(Self::add(window.into(), event, handler))
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
