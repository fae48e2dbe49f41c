// Host-side tests for scroll spans, keyframe channels and the hero timeline.

use folio_core::constants::{
    BACK_TO_TOP_THRESHOLD_PX, HERO_BG_SHIFT_PX, HERO_FADE_END, HERO_FG_SHIFT_PX, HERO_MIN_SCALE,
};
use folio_core::scroll::*;

#[test]
fn progress_is_clamped_to_unit_range() {
    let span = ScrollSpan::new(100.0, 300.0);
    assert_eq!(span.progress(-50.0), 0.0);
    assert_eq!(span.progress(100.0), 0.0);
    assert_eq!(span.progress(200.0), 0.5);
    assert_eq!(span.progress(300.0), 1.0);
    assert_eq!(span.progress(1000.0), 1.0);
}

#[test]
fn progress_never_decreases_as_offset_grows() {
    let span = ScrollSpan::new(0.0, 720.0);
    let mut prev = 0.0;
    for offset in (0..2000).step_by(7) {
        let p = span.progress(offset as f32);
        assert!(p >= prev, "progress dropped at offset {offset}");
        assert!(p.is_finite());
        prev = p;
    }
}

#[test]
fn collapsed_and_inverted_spans_yield_zero_not_nan() {
    let zero = ScrollSpan::new(100.0, 100.0);
    assert!(zero.is_empty());
    assert_eq!(zero.progress(100.0), 0.0);
    assert_eq!(zero.progress(500.0), 0.0);

    let inverted = ScrollSpan::new(300.0, 100.0);
    assert_eq!(inverted.progress(200.0), 0.0);
}

#[test]
fn leaving_view_span_covers_the_container_height() {
    let span = ScrollSpan::leaving_view(0.0, 720.0);
    assert_eq!(span.progress(0.0), 0.0);
    assert_eq!(span.progress(360.0), 0.5);
    assert_eq!(span.progress(720.0), 1.0);
}

#[test]
fn through_view_span_starts_a_viewport_early() {
    let span = ScrollSpan::through_view(2000.0, 400.0, 800.0);
    // Top of the container reaches the bottom edge.
    assert_eq!(span.progress(1200.0), 0.0);
    // Bottom of the container exits the top edge.
    assert_eq!(span.progress(2400.0), 1.0);
}

#[test]
fn range_channel_interpolates_and_holds_at_boundaries() {
    let c = Channel::range((0.2, 0.8), (1.0, 0.0));
    assert_eq!(c.value(0.0), 1.0);
    assert_eq!(c.value(0.2), 1.0);
    assert!((c.value(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(c.value(0.8), 0.0);
    assert_eq!(c.value(1.0), 0.0);
}

#[test]
fn keyframes_reject_short_or_unordered_input() {
    assert!(Channel::keyframes(&[(0.0, 1.0)]).is_none());
    assert!(Channel::keyframes(&[(0.5, 0.0), (0.2, 1.0)]).is_none());
    assert!(Channel::keyframes(&[(0.0, 0.0), (0.0, 1.0)]).is_none());
    assert!(Channel::keyframes(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).is_some());
}

#[test]
fn multi_segment_channel_picks_the_right_segment() {
    let c = Channel::keyframes(&[(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)]).unwrap();
    assert!((c.value(0.25) - 5.0).abs() < 1e-5);
    assert_eq!(c.value(0.5), 10.0);
    assert!((c.value(0.75) - 5.0).abs() < 1e-5);
}

#[test]
fn out_cubic_eases_fast_then_slow() {
    let c = Channel::range((0.0, 1.0), (0.0, 1.0)).with_ease(Ease::OutCubic);
    let halfway = c.value(0.5);
    assert!(halfway > 0.5, "out-cubic should lead linear, got {halfway}");
    assert_eq!(c.value(0.0), 0.0);
    assert_eq!(c.value(1.0), 1.0);
}

#[test]
fn hero_timeline_matches_its_endpoints() {
    let hero = SectionTimeline::hero();
    assert_eq!(hero.value("opacity", 0.0), 1.0);
    assert_eq!(hero.value("opacity", HERO_FADE_END), 0.0);
    assert_eq!(hero.value("opacity", 1.0), 0.0);
    assert_eq!(hero.value("translate_fg", 1.0), HERO_FG_SHIFT_PX);
    assert_eq!(hero.value("translate_bg", 1.0), HERO_BG_SHIFT_PX);
    assert_eq!(hero.value("scale", 0.0), 1.0);
    assert_eq!(hero.value("scale", 1.0), HERO_MIN_SCALE);
}

#[test]
fn hero_background_moves_twice_as_far_as_foreground() {
    let hero = SectionTimeline::hero();
    for p in [0.25, 0.5, 0.75, 1.0] {
        let fg = hero.value("translate_fg", p);
        let bg = hero.value("translate_bg", p);
        assert!((bg - fg * 2.0).abs() < 1e-4, "at progress {p}");
    }
}

#[test]
fn unknown_channel_names_sample_as_zero() {
    let hero = SectionTimeline::hero();
    assert_eq!(hero.value("opcaity", 0.5), 0.0);
    assert!(hero.channel("opcaity").is_none());
}

#[test]
fn back_to_top_appears_past_the_threshold() {
    assert!(!back_to_top_visible(0.0));
    assert!(!back_to_top_visible(BACK_TO_TOP_THRESHOLD_PX));
    assert!(back_to_top_visible(BACK_TO_TOP_THRESHOLD_PX + 1.0));
}
