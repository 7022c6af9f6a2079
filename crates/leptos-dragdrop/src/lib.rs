//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos.
//! The dragged thing travels as a `text/plain` payload on the event's
//! `DataTransfer`; drop targets only react to drags that carry one.

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::DragEvent;

/// MIME type of the transferred payload
pub const PAYLOAD_MIME: &str = "text/plain";

/// Drop target hover state
#[derive(Clone, Copy)]
pub struct DropSignals {
    /// A payload-carrying drag is over the target
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
}

pub fn create_drop_signals() -> DropSignals {
    let (hovering_read, hovering_write) = signal(false);
    DropSignals {
        hovering_read,
        hovering_write,
    }
}

/// Write the payload and allow only moves
pub fn set_payload(ev: &DragEvent, payload: &str) {
    if let Some(dt) = ev.data_transfer() {
        if let Err(e) = dt.set_data(PAYLOAD_MIME, payload) {
            log::warn!("[DND] set_data failed: {}", describe(&e));
        }
        dt.set_effect_allowed("move");
    }
}

/// True if the first transferred type is our payload type
pub fn carries_payload(ev: &DragEvent) -> bool {
    ev.data_transfer()
        .and_then(|dt| dt.types().get(0).as_string())
        .is_some_and(|ty| ty == PAYLOAD_MIME)
}

/// Read the payload on drop
///
/// An empty payload yields `None`, and handlers built by [`make_on_drop`]
/// then skip their callback entirely; such drops cause no store update.
pub fn take_payload(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()
        .and_then(|dt| dt.get_data(PAYLOAD_MIME).ok())
        .filter(|payload| !payload.is_empty())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Create dragstart handler for a draggable element
pub fn make_on_dragstart(payload: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        set_payload(&ev, &payload);
        log::debug!("[DND] Drag start: {}", payload);
    }
}

/// Create dragend handler (fires on the source whether or not it was dropped)
pub fn make_on_dragend(payload: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        let effect = ev.data_transfer().map(|dt| dt.drop_effect()).unwrap_or_default();
        log::debug!("[DND] Drag end: {} (effect={})", payload, effect);
    }
}

/// Create dragover handler for a drop target
/// Accepting the drop requires preventing the default action
pub fn make_on_dragover(drop: DropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if carries_payload(&ev) {
            ev.prevent_default();
            if !drop.hovering_read.get_untracked() {
                drop.hovering_write.set(true);
            }
        }
    }
}

/// Create dragleave handler for a drop target
pub fn make_on_dragleave(drop: DropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        drop.hovering_write.set(false);
    }
}

/// Create drop handler; `on_drop` receives the payload
pub fn make_on_drop<F>(drop: DropSignals, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(String) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        drop.hovering_write.set(false);
        match take_payload(&ev) {
            Some(payload) => on_drop(payload),
            None => log::debug!("[DND] Drop without payload"),
        }
    }
}
