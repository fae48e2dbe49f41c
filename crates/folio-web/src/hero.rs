//! Decorative hero particles and their pointer-driven drift.

use crate::dom;
use folio_core::constants::{MOBILE_BREAKPOINT_PX, PARTICLES_DESKTOP, PARTICLES_MOBILE};
use folio_core::particles::{pointer_drift, ParticleField};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const PARTICLE_SEED: u64 = 42;

/// Populate `#hero-particles` with a seeded particle field and wire the
/// pointer drift onto CSS variables consumed by the particle animation.
pub fn wire_hero_particles(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(container) = document.get_element_by_id("hero-particles") else {
        return;
    };

    let count = if dom::viewport_width(&window) < MOBILE_BREAKPOINT_PX {
        PARTICLES_MOBILE
    } else {
        PARTICLES_DESKTOP
    };
    let field = ParticleField::generate(count, PARTICLE_SEED);
    for p in &field.particles {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        let _ = el.class_list().add_1("hero-particle");
        let _ = el.set_attribute(
            "style",
            &format!(
                "width:{}px;height:{}px;left:{}%;top:{}%;animation-delay:{}s",
                p.size, p.size, p.x, p.y, p.delay
            ),
        );
        let _ = container.append_child(&el);
    }

    // Pointer position within the hero rect drifts the whole field.
    if let Some(hero) = document.get_element_by_id("hero") {
        let container = container.clone();
        let hero_for_rect = hero.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = hero_for_rect.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let norm = Vec2::new(
                (ev.client_x() as f32 - rect.left() as f32) / rect.width() as f32,
                (ev.client_y() as f32 - rect.top() as f32) / rect.height() as f32,
            );
            let drift = pointer_drift(norm);
            if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
                let _ = el.style().set_property("--drift-x", &format!("{}px", drift.x));
                let _ = el.style().set_property("--drift-y", &format!("{}px", drift.y));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = hero.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
