//! One-shot section reveal latches.
//!
//! A latch flips to revealed the first time its section's visible-area
//! ratio crosses the configured threshold and never flips back. The web
//! frontend feeds it intersection-observer entries and unobserves after
//! the first qualifying one; redundant samples are no-ops either way.

use crate::constants::REVEAL_THRESHOLD;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug)]
pub struct RevealLatch {
    threshold: f32,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feed a visibility sample. Returns `true` only on the transition so
    /// the caller can start the entrance animation exactly once.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if self.revealed {
            return false;
        }
        // A zero threshold reveals on any positive visibility.
        let qualifies = if self.threshold == 0.0 {
            visible_ratio > 0.0
        } else {
            visible_ratio >= self.threshold
        };
        if qualifies {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Latches for every tracked section, keyed by anchor id.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    latches: FnvHashMap<String, RevealLatch>,
}

impl RevealSet {
    /// Build a set with one default latch per section id.
    pub fn for_sections(ids: &[&str]) -> Self {
        let mut latches = FnvHashMap::default();
        for id in ids {
            latches.insert((*id).to_owned(), RevealLatch::default());
        }
        Self { latches }
    }

    /// Feed a sample for `id`. Unknown ids are ignored: a stale observer
    /// callback for a removed section must not grow the set.
    pub fn observe(&mut self, id: &str, visible_ratio: f32) -> bool {
        self.latches
            .get_mut(id)
            .map(|l| l.observe(visible_ratio))
            .unwrap_or(false)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.latches.get(id).is_some_and(|l| l.is_revealed())
    }

    /// True once every section has been revealed; observers can shut down.
    pub fn all_revealed(&self) -> bool {
        self.latches.values().all(|l| l.is_revealed())
    }
}
