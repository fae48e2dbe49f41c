//! Contact form wiring with the simulated transport.
//!
//! Submission reads the four fields, runs them through the core
//! [`SubmitFlow`] and, when accepted, resolves after an artificial delay
//! with no network traffic. Status text is re-rendered from the flow state
//! in the active language.

use crate::dom;
use folio_core::constants::SUBMIT_DELAY_SEC;
use folio_core::contact::{ContactMessage, SubmitFlow, SubmitOutcome};
use folio_core::i18n::Translator;
use folio_core::prefs::Preferences;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIELD_IDS: [&str; 4] = [
    "contact-name",
    "contact-email",
    "contact-subject",
    "contact-message",
];

#[derive(Clone)]
pub struct ContactWiring {
    pub flow: Rc<RefCell<SubmitFlow>>,
    pub prefs: Rc<RefCell<Preferences>>,
    pub translator: Rc<Translator>,
}

pub fn wire_contact_form(document: &web::Document, w: ContactWiring) {
    let doc = document.clone();
    dom::add_click_listener(document, "contact-submit", move || {
        let message = read_message(&doc);
        let now = dom::now_sec();
        match w.flow.borrow_mut().begin(&message, now) {
            Ok(()) => {
                log::info!("[contact] submission started");
                schedule_completion(&w, &doc);
            }
            Err(e) => {
                // The flow holds the failure status; the field-level cause
                // only goes to the console.
                log::warn!("[contact] rejected: {e}");
            }
        }
        // Sending, failure and re-entry all render from the flow state, so
        // every status line expires through the frame loop's tick.
        render_status(&doc, &w.flow.borrow(), &w.translator, &w.prefs.borrow());
    });
}

fn read_message(document: &web::Document) -> ContactMessage {
    let value = |id: &str| -> String {
        let Some(el) = document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    };
    ContactMessage {
        name: value("contact-name"),
        email: value("contact-email"),
        subject: value("contact-subject"),
        message: value("contact-message"),
    }
}

fn clear_fields(document: &web::Document) {
    for id in FIELD_IDS {
        let Some(el) = document.get_element_by_id(id) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

fn schedule_completion(w: &ContactWiring, document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let doc = document.clone();
    let done = Closure::once_into_js(move || {
        w.flow
            .borrow_mut()
            .finish(SubmitOutcome::Success, dom::now_sec());
        clear_fields(&doc);
        render_status(&doc, &w.flow.borrow(), &w.translator, &w.prefs.borrow());
        log::info!("[contact] simulated submission resolved");
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        done.unchecked_ref(),
        (SUBMIT_DELAY_SEC * 1000.0) as i32,
    );
}

/// Sync the status line with the flow state.
pub fn render_status(
    document: &web::Document,
    flow: &SubmitFlow,
    translator: &Translator,
    prefs: &Preferences,
) {
    let Some(el) = document.get_element_by_id("contact-status") else {
        return;
    };
    match flow.status_key() {
        Some(key) => el.set_text_content(Some(translator.translate(prefs.language, key))),
        None => el.set_text_content(None),
    }
}
