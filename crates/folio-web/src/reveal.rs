//! Intersection-observer wiring for the one-shot section reveals.
//!
//! The observer delivers an initial callback for sections already in view
//! at mount, so the latch fires without waiting for a scroll. After a
//! section reveals it is unobserved; once every section has revealed the
//! observer disconnects entirely.

use folio_core::constants::{REVEAL_ROOT_MARGIN_PX, REVEAL_THRESHOLD, SECTION_IDS};
use folio_core::reveal::RevealSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const REVEALED_CLASS: &str = "revealed";

pub fn wire_reveals(document: &web::Document, reveals: Rc<RefCell<RevealSet>>) {
    let observer: Rc<RefCell<Option<web::IntersectionObserver>>> = Rc::new(RefCell::new(None));

    let callback = {
        let reveals = reveals.clone();
        let observer = observer.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let id = target.id();
                let newly = reveals
                    .borrow_mut()
                    .observe(&id, entry.intersection_ratio() as f32);
                if newly {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    if let Some(obs) = observer.borrow().as_ref() {
                        obs.unobserve(&target);
                    }
                    log::info!("[reveal] section {id}");
                }
            }
            // All latched: nothing left to watch.
            if reveals.borrow().all_revealed() {
                if let Some(obs) = observer.borrow_mut().take() {
                    obs.disconnect();
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD as f64));
    options.set_root_margin(&format!("{REVEAL_ROOT_MARGIN_PX}px"));

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(obs) => {
            for id in SECTION_IDS {
                if let Some(el) = document.get_element_by_id(id) {
                    obs.observe(&el);
                }
            }
            *observer.borrow_mut() = Some(obs);
            callback.forget();
        }
        Err(e) => {
            // No intersection API: reveal everything up front rather than
            // leaving sections invisible.
            log::warn!("IntersectionObserver unavailable ({e:?}); revealing all sections");
            for id in SECTION_IDS {
                reveals.borrow_mut().observe(id, 1.0);
                if let Some(el) = document.get_element_by_id(id) {
                    let _ = el.class_list().add_1(REVEALED_CLASS);
                }
            }
        }
    }
}
