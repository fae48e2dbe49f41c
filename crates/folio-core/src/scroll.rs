//! Scroll-progress mapping: a container's scroll span normalized to \[0, 1\]
//! plus piecewise-linear keyframe channels deriving visual values from it.
//!
//! All functions are pure; the web frontend samples the raw scroll offset at
//! most once per animation frame and feeds it through here.

use crate::constants::{
    BACK_TO_TOP_THRESHOLD_PX, HERO_BG_SHIFT_PX, HERO_FADE_END, HERO_FG_SHIFT_PX, HERO_MIN_SCALE,
};

/// The offset range over which a container scrolls through view.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSpan {
    start: f32,
    end: f32,
}

impl ScrollSpan {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Span of a section pinned at the viewport top that scrolls away:
    /// progress runs from its top reaching the viewport top until its
    /// bottom does. This is the hero configuration.
    pub fn leaving_view(container_top: f32, container_height: f32) -> Self {
        Self {
            start: container_top,
            end: container_top + container_height,
        }
    }

    /// Span of a container passing fully through the viewport: from its top
    /// entering at the bottom edge to its bottom exiting at the top edge.
    pub fn through_view(container_top: f32, container_height: f32, viewport_height: f32) -> Self {
        Self {
            start: container_top - viewport_height,
            end: container_top + container_height,
        }
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    /// Normalized progress of `offset` through the span, clamped to
    /// \[0, 1\]. A collapsed span yields 0, never NaN.
    pub fn progress(&self, offset: f32) -> f32 {
        let len = self.len();
        if len <= 0.0 {
            return 0.0;
        }
        ((offset - self.start) / len).clamp(0.0, 1.0)
    }
}

/// Interpolation shape applied within each keyframe segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    /// 1 - (1-t)^3: fast start, slow finish.
    OutCubic,
}

impl Ease {
    fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A derived visual channel: an ascending list of progress breakpoints
/// mapped onto output keyframes. Values outside the input range hold at the
/// nearest boundary output.
#[derive(Clone, Debug)]
pub struct Channel {
    input: Vec<f32>,
    output: Vec<f32>,
    ease: Ease,
}

impl Channel {
    /// Two-point channel: `input` subrange of progress onto `output`.
    pub fn range(input: (f32, f32), output: (f32, f32)) -> Self {
        Self {
            input: vec![input.0, input.1],
            output: vec![output.0, output.1],
            ease: Ease::Linear,
        }
    }

    /// Multi-keyframe channel. Returns `None` unless there are at least two
    /// keyframes and the input breakpoints ascend.
    pub fn keyframes(frames: &[(f32, f32)]) -> Option<Self> {
        if frames.len() < 2 {
            return None;
        }
        if frames.windows(2).any(|w| w[1].0 <= w[0].0) {
            return None;
        }
        Some(Self {
            input: frames.iter().map(|f| f.0).collect(),
            output: frames.iter().map(|f| f.1).collect(),
            ease: Ease::Linear,
        })
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Sample the channel at `progress`.
    pub fn value(&self, progress: f32) -> f32 {
        let first = self.input[0];
        let last = self.input[self.input.len() - 1];
        if progress <= first {
            return self.output[0];
        }
        if progress >= last {
            return self.output[self.output.len() - 1];
        }
        // Find the segment containing `progress`.
        let mut seg = 0;
        while seg + 2 < self.input.len() && progress >= self.input[seg + 1] {
            seg += 1;
        }
        let (i0, i1) = (self.input[seg], self.input[seg + 1]);
        let (o0, o1) = (self.output[seg], self.output[seg + 1]);
        let width = i1 - i0;
        if width <= 0.0 {
            return o1;
        }
        let t = self.ease.apply((progress - i0) / width);
        o0 + (o1 - o0) * t
    }
}

/// Named channels for one tracked section.
#[derive(Clone, Debug, Default)]
pub struct SectionTimeline {
    channels: Vec<(&'static str, Channel)>,
}

impl SectionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, name: &'static str, channel: Channel) -> Self {
        self.channels.push((name, channel));
        self
    }

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| c)
    }

    /// Sample one channel; unknown names hold at the identity-ish 0.0 so a
    /// typo degrades visually rather than panicking.
    pub fn value(&self, name: &str, progress: f32) -> f32 {
        self.channel(name).map_or(0.0, |c| c.value(progress))
    }

    /// The hero parallax stack: fade out over the first 80% of the span,
    /// two translation layers at different depths, and a slight shrink.
    pub fn hero() -> Self {
        Self::new()
            .with_channel("opacity", Channel::range((0.0, HERO_FADE_END), (1.0, 0.0)))
            .with_channel(
                "translate_fg",
                Channel::range((0.0, 1.0), (0.0, HERO_FG_SHIFT_PX)),
            )
            .with_channel(
                "translate_bg",
                Channel::range((0.0, 1.0), (0.0, HERO_BG_SHIFT_PX)),
            )
            .with_channel("scale", Channel::range((0.0, 1.0), (1.0, HERO_MIN_SCALE)))
    }
}

/// Back-to-top button visibility for the current page offset.
pub fn back_to_top_visible(page_offset: f32) -> bool {
    page_offset > BACK_TO_TOP_THRESHOLD_PX
}
