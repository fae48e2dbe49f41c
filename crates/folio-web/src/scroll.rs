//! Scroll and resize wiring.
//!
//! Listeners only set a dirty flag; the frame loop recomputes spans and
//! derived values at most once per animation frame so scroll bursts never
//! cause layout thrashing.

use crate::dom;
use folio_core::scroll::ScrollSpan;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll_dirty(dirty: Rc<Cell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["scroll", "resize"] {
        let dirty = dirty.clone();
        let closure = Closure::wrap(Box::new(move || {
            dirty.set(true);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Span of `el` pinned at the top of the page and scrolling away; geometry
/// is re-derived from the live bounding rect so resizes are free.
pub fn leaving_view_span(window: &web::Window, el: &web::Element) -> ScrollSpan {
    let rect = el.get_bounding_client_rect();
    let top_abs = rect.top() as f32 + dom::page_offset(window);
    ScrollSpan::leaving_view(top_abs, rect.height() as f32)
}

/// Span of the whole document for the top progress bar.
pub fn page_span(window: &web::Window, document: &web::Document) -> ScrollSpan {
    let doc_height = document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    // The scrollable distance collapses to zero when the page fits.
    ScrollSpan::new(0.0, doc_height - dom::viewport_height(window))
}
