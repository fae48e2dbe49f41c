//! Custom cursor state: hovered-target classification plus spring-smoothed
//! follower positions.
//!
//! Classification is an ordered first-match rule set over a platform-neutral
//! description of the hovered element, so it can be tested without a DOM.
//! The web frontend builds a [`HoverTarget`] from the real event target on
//! every pointer-enter.

use crate::constants::{
    CURSOR_OMEGA, MOBILE_BREAKPOINT_PX, TRAIL_HISTORY_LEN, TRAIL_OMEGA,
};
use crate::spring::Spring2;
use glam::Vec2;
use smallvec::SmallVec;

/// Discrete visual mode of the pointer indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Hoverable,
    Text,
    Image,
    SkillBadge,
}

impl CursorVariant {
    /// Ring diameter in CSS pixels for this variant.
    pub fn diameter_px(self) -> f32 {
        match self {
            CursorVariant::Default => 20.0,
            CursorVariant::Hoverable => 40.0,
            CursorVariant::Text => 30.0,
            CursorVariant::Image => 50.0,
            CursorVariant::SkillBadge => 35.0,
        }
    }

    /// Scale multiplier applied to the ring.
    pub fn scale(self) -> f32 {
        match self {
            CursorVariant::Default => 1.0,
            CursorVariant::Hoverable => 1.5,
            CursorVariant::Text => 1.2,
            CursorVariant::Image => 1.8,
            CursorVariant::SkillBadge => 1.3,
        }
    }
}

// Glyphs shown inside the cursor ring per sub-classification.
pub const GLYPH_MAIL: &str = "\u{2709}\u{fe0f}"; // ✉️
pub const GLYPH_PHONE: &str = "\u{1f4de}"; // 📞
pub const GLYPH_CODE: &str = "\u{1f4bb}"; // 💻
pub const GLYPH_WORK: &str = "\u{1f4bc}"; // 💼
pub const GLYPH_LAUNCH: &str = "\u{1f680}"; // 🚀
pub const GLYPH_EYE: &str = "\u{1f441}\u{fe0f}"; // 👁️
pub const GLYPH_ARROW: &str = "\u{2192}"; // →
pub const GLYPH_IMAGE: &str = "\u{1f5bc}\u{fe0f}"; // 🖼️
pub const GLYPH_SPARK: &str = "\u{26a1}"; // ⚡

/// Platform-neutral description of a hovered element.
#[derive(Clone, Debug, Default)]
pub struct HoverTarget {
    /// Lowercase element tag name ("a", "button", "h2", ...).
    pub tag: String,
    pub href: Option<String>,
    /// `type` attribute for form controls.
    pub input_type: Option<String>,
    pub role: Option<String>,
    pub classes: Vec<String>,
}

impl HoverTarget {
    pub fn with_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: &str) -> Self {
        self.href = Some(href.to_owned());
        self
    }

    pub fn input_type(mut self, ty: &str) -> Self {
        self.input_type = Some(ty.to_ascii_lowercase());
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = Some(role.to_ascii_lowercase());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    fn is_interactive(&self) -> bool {
        matches!(self.tag.as_str(), "a" | "button" | "input" | "textarea" | "select")
            || self.role.as_deref() == Some("button")
            || self.has_class("project-card")
            || self.has_class("card")
    }

    fn is_heading(&self) -> bool {
        matches!(self.tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }

    fn is_image(&self) -> bool {
        self.tag == "img" || self.has_class("image")
    }

    fn is_skill(&self) -> bool {
        self.has_class("skill-item") || self.has_class("tech-item")
    }
}

/// Classify a hovered target. First match wins, evaluated top to bottom.
pub fn classify(target: &HoverTarget) -> (CursorVariant, Option<&'static str>) {
    if target.is_interactive() {
        let href = target.href.as_deref().unwrap_or("");
        let label = if href.starts_with("mailto:") {
            GLYPH_MAIL
        } else if href.starts_with("tel:") {
            GLYPH_PHONE
        } else if href.contains("github") {
            GLYPH_CODE
        } else if href.contains("linkedin") {
            GLYPH_WORK
        } else if target.input_type.as_deref() == Some("submit")
            || target.has_class("btn-primary")
        {
            GLYPH_LAUNCH
        } else if target.has_class("project-card") || target.has_class("card") {
            GLYPH_EYE
        } else {
            GLYPH_ARROW
        };
        return (CursorVariant::Hoverable, Some(label));
    }
    if target.is_heading() {
        return (CursorVariant::Text, None);
    }
    if target.is_image() {
        return (CursorVariant::Image, Some(GLYPH_IMAGE));
    }
    if target.is_skill() {
        return (CursorVariant::SkillBadge, Some(GLYPH_SPARK));
    }
    (CursorVariant::Default, None)
}

/// Whether the custom cursor should run at all. Touch-primary devices and
/// narrow viewports get the native cursor; re-evaluated on resize.
pub fn tracker_enabled(viewport_width: f32, has_touch: bool) -> bool {
    !has_touch && viewport_width >= MOBILE_BREAKPOINT_PX
}

/// Continuous pointer state: raw position, two smoothed followers and a
/// short raw-sample history for the particle strip.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: Vec2,
    main: Spring2,
    trail: Spring2,
    variant: CursorVariant,
    label: Option<&'static str>,
    pressed: bool,
    history: SmallVec<[Vec2; TRAIL_HISTORY_LEN]>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            raw: Vec2::ZERO,
            main: Spring2::new(CURSOR_OMEGA),
            trail: Spring2::new(TRAIL_OMEGA),
            variant: CursorVariant::Default,
            label: None,
            pressed: false,
            history: SmallVec::new(),
        }
    }

    /// Record a raw pointer sample. Newest history entry first.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.raw = position;
        self.main.set_target(position);
        self.trail.set_target(position);
        self.history.insert(0, position);
        self.history.truncate(TRAIL_HISTORY_LEN);
    }

    /// Reclassify against a freshly entered target. Last write wins.
    pub fn pointer_entered(&mut self, target: &HoverTarget) {
        let (variant, label) = classify(target);
        self.variant = variant;
        self.label = label;
    }

    /// Pointer left the tracked root: back to the default variant.
    pub fn pointer_left(&mut self) {
        self.variant = CursorVariant::Default;
        self.label = None;
        self.pressed = false;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Advance both springs by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.main.step(dt);
        self.trail.step(dt);
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.main.value()
    }

    pub fn trail(&self) -> Vec2 {
        self.trail.value()
    }

    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Recent raw samples, newest first. Fades and shrinks with index.
    pub fn history(&self) -> &[Vec2] {
        &self.history
    }

    /// Opacity for the history particle at `index`, matching the fade the
    /// trail strip renders.
    pub fn history_opacity(index: usize) -> f32 {
        let len = TRAIL_HISTORY_LEN as f32;
        ((len - index as f32) / len * 0.5).max(0.0)
    }
}
