//! Pointer-event wiring for the custom cursor.
//!
//! Raw coordinates land in the shared [`PointerTracker`]; the frame loop
//! steps the springs and moves the ring/trail elements. On touch-primary
//! devices or narrow viewports the cursor renders nothing and no pointer
//! listeners are registered; a resize listener re-evaluates that gate and
//! attaches or removes the whole listener set when it flips.

use crate::dom;
use folio_core::cursor::{tracker_enabled, HoverTarget, PointerTracker};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CursorWiring {
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub enabled: Rc<Cell<bool>>,
    pub cursor_el: Option<web::HtmlElement>,
    pub trail_el: Option<web::HtmlElement>,
    pub label_el: Option<web::HtmlElement>,
}

/// Whether the tracker should run in the current environment.
pub fn detect_enabled(window: &web::Window) -> bool {
    let has_touch = window.navigator().max_touch_points() > 0;
    tracker_enabled(dom::viewport_width(window), has_touch)
}

pub fn wire_cursor(w: CursorWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let enabled = detect_enabled(&window);
    w.enabled.set(enabled);
    apply_visibility(&w, enabled);

    // Listeners exist only while the gate is open; the slot owns their
    // closures so removal can hand back the same function references.
    let listeners: Rc<RefCell<Option<PointerListeners>>> = Rc::new(RefCell::new(None));
    if enabled {
        *listeners.borrow_mut() = PointerListeners::attach(&w);
    }

    // Re-evaluate on resize; a rotation or window resize can flip the gate.
    {
        let w = w.clone();
        let listeners = listeners.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(window) = web::window() else {
                return;
            };
            let now_enabled = detect_enabled(&window);
            let mut slot = listeners.borrow_mut();
            if now_enabled && slot.is_none() {
                *slot = PointerListeners::attach(&w);
            } else if !now_enabled {
                if let Some(active) = slot.take() {
                    active.detach();
                    w.tracker.borrow_mut().pointer_left();
                }
            }
            w.enabled.set(now_enabled);
            apply_visibility(&w, now_enabled);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn apply_visibility(w: &CursorWiring, enabled: bool) {
    let display = if enabled { "" } else { "none" };
    for el in [&w.cursor_el, &w.trail_el] {
        if let Some(el) = el {
            let _ = el.style().set_property("display", display);
        }
    }
}

/// The live pointer listener set. Holding the closures keeps them callable;
/// `detach` unregisters everything and dropping the struct frees them.
struct PointerListeners {
    window: web::Window,
    document: web::Document,
    pointermove: Closure<dyn FnMut(web::PointerEvent)>,
    mouseover: Closure<dyn FnMut(web::MouseEvent)>,
    mouseleave: Closure<dyn FnMut(web::MouseEvent)>,
    pointerdown: Closure<dyn FnMut(web::PointerEvent)>,
    pointerup: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListeners {
    fn attach(w: &CursorWiring) -> Option<Self> {
        let window = web::window()?;
        let document = window.document()?;

        // pointermove: raw coordinates only; smoothing happens per frame.
        let pointermove = {
            let tracker = w.tracker.clone();
            Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                tracker
                    .borrow_mut()
                    .pointer_moved(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            }) as Box<dyn FnMut(web::PointerEvent)>)
        };

        // mouseover bubbles from every newly hovered node; classify it.
        let mouseover = {
            let tracker = w.tracker.clone();
            let label_el = w.label_el.clone();
            Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                // Text nodes and the document itself are not elements; skip
                // them rather than failing classification.
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
                else {
                    return;
                };
                let described = describe_element(&target);
                let mut tr = tracker.borrow_mut();
                tr.pointer_entered(&described);
                if let Some(label_el) = &label_el {
                    label_el.set_text_content(tr.label());
                }
            }) as Box<dyn FnMut(web::MouseEvent)>)
        };

        // Leaving the document resets to the default variant.
        let mouseleave = {
            let tracker = w.tracker.clone();
            let label_el = w.label_el.clone();
            Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                tracker.borrow_mut().pointer_left();
                if let Some(label_el) = &label_el {
                    label_el.set_text_content(None);
                }
            }) as Box<dyn FnMut(web::MouseEvent)>)
        };

        // Press state shrinks the ring slightly.
        let pointerdown = {
            let tracker = w.tracker.clone();
            Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                tracker.borrow_mut().set_pressed(true);
            }) as Box<dyn FnMut(web::PointerEvent)>)
        };
        let pointerup = {
            let tracker = w.tracker.clone();
            Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                tracker.borrow_mut().set_pressed(false);
            }) as Box<dyn FnMut(web::PointerEvent)>)
        };

        let this = Self {
            window,
            document,
            pointermove,
            mouseover,
            mouseleave,
            pointerdown,
            pointerup,
        };
        for (target, event, cb) in this.bindings() {
            let _ = target.add_event_listener_with_callback(event, cb);
        }
        Some(this)
    }

    fn detach(&self) {
        for (target, event, cb) in self.bindings() {
            let _ = target.remove_event_listener_with_callback(event, cb);
        }
    }

    fn bindings(&self) -> [(&web::EventTarget, &'static str, &js_sys::Function); 5] {
        [
            (
                self.window.as_ref(),
                "pointermove",
                self.pointermove.as_ref().unchecked_ref(),
            ),
            (
                self.document.as_ref(),
                "mouseover",
                self.mouseover.as_ref().unchecked_ref(),
            ),
            (
                self.document.as_ref(),
                "mouseleave",
                self.mouseleave.as_ref().unchecked_ref(),
            ),
            (
                self.document.as_ref(),
                "pointerdown",
                self.pointerdown.as_ref().unchecked_ref(),
            ),
            (
                self.document.as_ref(),
                "pointerup",
                self.pointerup.as_ref().unchecked_ref(),
            ),
        ]
    }
}

/// Bridge a DOM element into the platform-neutral classification input.
pub fn describe_element(el: &web::Element) -> HoverTarget {
    let mut target = HoverTarget::with_tag(&el.tag_name());
    if let Some(href) = el.get_attribute("href") {
        target.href = Some(href);
    }
    if let Some(ty) = el.get_attribute("type") {
        target.input_type = Some(ty.to_ascii_lowercase());
    }
    if let Some(role) = el.get_attribute("role") {
        target.role = Some(role.to_ascii_lowercase());
    }
    let classes = el.class_list();
    for i in 0..classes.length() {
        if let Some(class) = classes.item(i) {
            target.classes.push(class);
        }
    }
    target
}
