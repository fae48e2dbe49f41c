// Host-side tests for hovered-target classification and the pointer tracker.

use folio_core::constants::{MOBILE_BREAKPOINT_PX, TRAIL_HISTORY_LEN};
use folio_core::cursor::*;
use glam::Vec2;

#[test]
fn plain_elements_classify_as_default() {
    let (variant, label) = classify(&HoverTarget::with_tag("div"));
    assert_eq!(variant, CursorVariant::Default);
    assert_eq!(label, None);
    let (variant, _) = classify(&HoverTarget::with_tag("p"));
    assert_eq!(variant, CursorVariant::Default);
}

#[test]
fn anchors_pick_a_glyph_from_their_href() {
    let cases = [
        ("mailto:hi@example.com", GLYPH_MAIL),
        ("tel:+33600000000", GLYPH_PHONE),
        ("https://github.com/ael-houfi", GLYPH_CODE),
        ("https://www.linkedin.com/in/ael-houfi", GLYPH_WORK),
        ("/projects", GLYPH_ARROW),
    ];
    for (href, expected) in cases {
        let (variant, label) = classify(&HoverTarget::with_tag("a").href(href));
        assert_eq!(variant, CursorVariant::Hoverable, "href {href}");
        assert_eq!(label, Some(expected), "href {href}");
    }
}

#[test]
fn submit_controls_get_the_launch_glyph() {
    let (variant, label) = classify(&HoverTarget::with_tag("input").input_type("submit"));
    assert_eq!(variant, CursorVariant::Hoverable);
    assert_eq!(label, Some(GLYPH_LAUNCH));

    let (_, label) = classify(&HoverTarget::with_tag("button").class("btn-primary"));
    assert_eq!(label, Some(GLYPH_LAUNCH));
}

#[test]
fn project_cards_get_the_eye_glyph() {
    let (variant, label) = classify(&HoverTarget::with_tag("div").class("project-card"));
    assert_eq!(variant, CursorVariant::Hoverable);
    assert_eq!(label, Some(GLYPH_EYE));
}

#[test]
fn role_button_counts_as_interactive() {
    let (variant, label) = classify(&HoverTarget::with_tag("div").role("button"));
    assert_eq!(variant, CursorVariant::Hoverable);
    assert_eq!(label, Some(GLYPH_ARROW));
}

#[test]
fn headings_images_and_skills_have_their_own_variants() {
    let (variant, label) = classify(&HoverTarget::with_tag("h2"));
    assert_eq!(variant, CursorVariant::Text);
    assert_eq!(label, None);

    let (variant, label) = classify(&HoverTarget::with_tag("img"));
    assert_eq!(variant, CursorVariant::Image);
    assert_eq!(label, Some(GLYPH_IMAGE));

    let (variant, label) = classify(&HoverTarget::with_tag("span").class("skill-item"));
    assert_eq!(variant, CursorVariant::SkillBadge);
    assert_eq!(label, Some(GLYPH_SPARK));
}

#[test]
fn interactive_rules_win_over_later_rules() {
    // An anchor wrapping an image is still a link.
    let target = HoverTarget::with_tag("a").href("/x").class("image");
    let (variant, _) = classify(&target);
    assert_eq!(variant, CursorVariant::Hoverable);
}

#[test]
fn classification_is_deterministic() {
    let target = HoverTarget::with_tag("a").href("https://github.com/x");
    let first = classify(&target);
    for _ in 0..10 {
        assert_eq!(classify(&target), first);
    }
}

#[test]
fn tag_matching_is_case_insensitive() {
    // DOM tagName comes back uppercase.
    let (variant, _) = classify(&HoverTarget::with_tag("A").href("/x"));
    assert_eq!(variant, CursorVariant::Hoverable);
    let (variant, _) = classify(&HoverTarget::with_tag("H1"));
    assert_eq!(variant, CursorVariant::Text);
}

#[test]
fn tracker_disabled_on_touch_or_narrow_viewports() {
    assert!(tracker_enabled(1280.0, false));
    assert!(!tracker_enabled(1280.0, true));
    assert!(!tracker_enabled(MOBILE_BREAKPOINT_PX - 1.0, false));
    assert!(tracker_enabled(MOBILE_BREAKPOINT_PX, false));
}

#[test]
fn tracker_history_is_newest_first_and_bounded() {
    let mut t = PointerTracker::new();
    for i in 0..(TRAIL_HISTORY_LEN + 5) {
        t.pointer_moved(Vec2::new(i as f32, 0.0));
    }
    let history = t.history();
    assert_eq!(history.len(), TRAIL_HISTORY_LEN);
    assert_eq!(history[0].x, (TRAIL_HISTORY_LEN + 4) as f32);
    for w in history.windows(2) {
        assert!(w[0].x > w[1].x, "history out of order");
    }
}

#[test]
fn history_opacity_fades_with_index() {
    let mut prev = f32::MAX;
    for i in 0..TRAIL_HISTORY_LEN {
        let o = PointerTracker::history_opacity(i);
        assert!(o > 0.0 && o <= 0.5, "opacity {o} at {i}");
        assert!(o < prev);
        prev = o;
    }
}

#[test]
fn pointer_leave_resets_variant_and_press() {
    let mut t = PointerTracker::new();
    t.pointer_entered(&HoverTarget::with_tag("a").href("/x"));
    t.set_pressed(true);
    assert_eq!(t.variant(), CursorVariant::Hoverable);
    t.pointer_left();
    assert_eq!(t.variant(), CursorVariant::Default);
    assert_eq!(t.label(), None);
    assert!(!t.pressed());
}

#[test]
fn followers_converge_on_the_raw_position() {
    let mut t = PointerTracker::new();
    t.pointer_moved(Vec2::new(10.0, 10.0));
    t.pointer_moved(Vec2::new(400.0, 300.0));
    for _ in 0..120 {
        t.step(1.0 / 60.0);
    }
    assert!((t.smoothed() - t.raw()).length() < 1.0);
    assert!((t.trail() - t.raw()).length() < 1.0);
}
