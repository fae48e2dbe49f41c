#![cfg(target_arch = "wasm32")]
//! WASM entry point: restores preferences, wires the pointer/scroll/reveal
//! engines to the DOM and starts the frame loop.

pub mod contact;
pub mod cursor;
pub mod dom;
pub mod fallback;
pub mod frame;
pub mod hero;
pub mod reveal;
pub mod scroll;
pub mod storage;

use folio_core::contact::SubmitFlow;
use folio_core::cursor::PointerTracker;
use folio_core::i18n::{Language, Translator};
use folio_core::prefs::{MemoryStore, PreferenceStore, Preferences};
use folio_core::reveal::RevealSet;
use folio_core::scroll::SectionTimeline;
use folio_core::SECTION_IDS;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
        fallback::show_error_notice(&Translator::new(), Language::default());
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let translator = Rc::new(Translator::new());

    // Preferences: localStorage when available, in-memory otherwise.
    let store: Rc<RefCell<Box<dyn PreferenceStore>>> =
        Rc::new(RefCell::new(match storage::LocalStore::open(&window) {
            Some(s) => Box::new(s),
            None => Box::<MemoryStore>::default(),
        }));
    let prefs = Rc::new(RefCell::new(Preferences::load(
        store.borrow().as_ref(),
        storage::browser_locale(&window).as_deref(),
        storage::prefers_dark(&window),
    )));
    storage::apply_preferences(&document, &translator, &prefs.borrow());
    log::info!(
        "[prefs] language={} theme={}",
        prefs.borrow().language,
        prefs.borrow().theme
    );

    wire_language_buttons(&document, &translator, &prefs, &store);
    wire_theme_toggle(&document, &prefs, &store);

    // Cursor
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let cursor_enabled = Rc::new(Cell::new(false));
    cursor::wire_cursor(cursor::CursorWiring {
        tracker: tracker.clone(),
        enabled: cursor_enabled.clone(),
        cursor_el: dom::html_element_by_id(&document, "cursor-main"),
        trail_el: dom::html_element_by_id(&document, "cursor-trail"),
        label_el: dom::html_element_by_id(&document, "cursor-label"),
    });

    // Scroll + reveals
    let scroll_dirty = Rc::new(Cell::new(true));
    scroll::wire_scroll_dirty(scroll_dirty.clone());
    let reveals = Rc::new(RefCell::new(RevealSet::for_sections(&SECTION_IDS)));
    reveal::wire_reveals(&document, reveals);

    // Contact form
    let flow = Rc::new(RefCell::new(SubmitFlow::new()));
    contact::wire_contact_form(
        &document,
        contact::ContactWiring {
            flow: flow.clone(),
            prefs: prefs.clone(),
            translator: translator.clone(),
        },
    );

    hero::wire_hero_particles(&document);
    wire_back_to_top(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        tracker,
        cursor_enabled,
        cursor_el: dom::html_element_by_id(&document, "cursor-main"),
        trail_el: dom::html_element_by_id(&document, "cursor-trail"),
        hero_el: dom::html_element_by_id(&document, "hero"),
        hero_bg_el: dom::html_element_by_id(&document, "hero-bg"),
        hero_timeline: SectionTimeline::hero(),
        progress_bar_el: dom::html_element_by_id(&document, "scroll-progress"),
        back_to_top_el: dom::html_element_by_id(&document, "back-to-top"),
        scroll_dirty,
        flow,
        prefs: prefs.clone(),
        translator: translator.clone(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

fn wire_language_buttons(
    document: &web::Document,
    translator: &Rc<Translator>,
    prefs: &Rc<RefCell<Preferences>>,
    store: &Rc<RefCell<Box<dyn PreferenceStore>>>,
) {
    for (id, language) in [
        ("lang-fr", Language::Fr),
        ("lang-en", Language::En),
        ("lang-ar", Language::Ar),
    ] {
        let doc = document.clone();
        let translator = translator.clone();
        let prefs = prefs.clone();
        let store = store.clone();
        dom::add_click_listener(document, id, move || {
            prefs
                .borrow_mut()
                .set_language(store.borrow_mut().as_mut(), language);
            storage::apply_preferences(&doc, &translator, &prefs.borrow());
            log::info!("[prefs] language -> {language}");
        });
    }
}

fn wire_theme_toggle(
    document: &web::Document,
    prefs: &Rc<RefCell<Preferences>>,
    store: &Rc<RefCell<Box<dyn PreferenceStore>>>,
) {
    let doc = document.clone();
    let prefs = prefs.clone();
    let store = store.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        let next = prefs.borrow_mut().toggle_theme(store.borrow_mut().as_mut());
        storage::apply_theme(&doc, next);
        log::info!("[prefs] theme -> {next}");
    });
}

fn wire_back_to_top(document: &web::Document) {
    dom::add_click_listener(document, "back-to-top", move || {
        if let Some(window) = web::window() {
            let options = web::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });
}
