//! The requestAnimationFrame loop.
//!
//! Per tick: step the cursor springs and move the ring/trail elements,
//! recompute scroll-derived values if any scroll/resize event arrived since
//! the last frame (at most one recompute per frame), and expire a finished
//! contact status.

use crate::{contact, dom, scroll};
use folio_core::contact::SubmitFlow;
use folio_core::cursor::PointerTracker;
use folio_core::i18n::Translator;
use folio_core::prefs::Preferences;
use folio_core::scroll::{back_to_top_visible, SectionTimeline};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub cursor_enabled: Rc<Cell<bool>>,
    pub cursor_el: Option<web::HtmlElement>,
    pub trail_el: Option<web::HtmlElement>,

    pub hero_el: Option<web::HtmlElement>,
    pub hero_bg_el: Option<web::HtmlElement>,
    pub hero_timeline: SectionTimeline,
    pub progress_bar_el: Option<web::HtmlElement>,
    pub back_to_top_el: Option<web::HtmlElement>,
    pub scroll_dirty: Rc<Cell<bool>>,

    pub flow: Rc<RefCell<SubmitFlow>>,
    pub prefs: Rc<RefCell<Preferences>>,
    pub translator: Rc<Translator>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if self.cursor_enabled.get() {
            self.step_cursor(dt);
        }

        if self.scroll_dirty.replace(false) {
            self.apply_scroll();
        }

        if self.flow.borrow_mut().tick(dom::now_sec()) {
            if let Some(document) = dom::window_document() {
                contact::render_status(
                    &document,
                    &self.flow.borrow(),
                    &self.translator,
                    &self.prefs.borrow(),
                );
            }
        }
    }

    fn step_cursor(&mut self, dt: f32) {
        let mut tracker = self.tracker.borrow_mut();
        tracker.step(dt);

        if let Some(el) = &self.cursor_el {
            let pos = tracker.smoothed();
            let variant = tracker.variant();
            let mut scale = variant.scale();
            if tracker.pressed() {
                scale *= 0.8;
            }
            let style = el.style();
            let _ = style.set_property(
                "transform",
                &format!(
                    "translate3d({}px, {}px, 0) translate(-50%, -50%) scale({scale})",
                    pos.x, pos.y
                ),
            );
            let d = variant.diameter_px();
            let _ = style.set_property("width", &format!("{d}px"));
            let _ = style.set_property("height", &format!("{d}px"));
        }
        if let Some(el) = &self.trail_el {
            let pos = tracker.trail();
            let _ = el.style().set_property(
                "transform",
                &format!("translate3d({}px, {}px, 0) translate(-50%, -50%)", pos.x, pos.y),
            );
        }
    }

    fn apply_scroll(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let offset = dom::page_offset(&window);

        if let Some(hero) = &self.hero_el {
            let span = scroll::leaving_view_span(&window, hero);
            let p = span.progress(offset);
            let style = hero.style();
            let _ = style.set_property("opacity", &self.hero_timeline.value("opacity", p).to_string());
            let _ = style.set_property(
                "transform",
                &format!(
                    "translateY({}px) scale({})",
                    self.hero_timeline.value("translate_fg", p),
                    self.hero_timeline.value("scale", p)
                ),
            );
            if let Some(bg) = &self.hero_bg_el {
                let _ = bg.style().set_property(
                    "transform",
                    &format!("translateY({}px)", self.hero_timeline.value("translate_bg", p)),
                );
            }
        }

        if let Some(bar) = &self.progress_bar_el {
            let p = scroll::page_span(&window, &document).progress(offset);
            let _ = bar
                .style()
                .set_property("transform", &format!("scaleX({p})"));
        }

        if let Some(btn) = &self.back_to_top_el {
            let classes = btn.class_list();
            let _ = if back_to_top_visible(offset) {
                classes.add_1("visible")
            } else {
                classes.remove_1("visible")
            };
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
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
}
