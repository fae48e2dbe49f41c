//! Decorative hero-background particles.
//!
//! Generation is seeded so a field is reproducible across renders and in
//! tests; the only runtime input is the pointer-induced drift.

use crate::constants::PARTICLE_DRIFT_PX;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Diameter in CSS pixels.
    pub size: f32,
    /// Position as a percentage of the hero section, 0..100.
    pub x: f32,
    pub y: f32,
    /// Animation start offset in seconds.
    pub delay: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` particles from `seed`.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                size: 2.0 + rng.gen::<f32>() * 4.0,
                x: rng.gen::<f32>() * 100.0,
                y: rng.gen::<f32>() * 100.0,
                delay: rng.gen::<f32>() * 2.0,
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Drift applied to every particle from the pointer's normalized position
/// within the hero rect (0..1 on both axes). A centered pointer means no
/// drift; each edge pushes half of `PARTICLE_DRIFT_PX`, so crossing the
/// rect sweeps the full constant.
pub fn pointer_drift(normalized_in_rect: Vec2) -> Vec2 {
    (normalized_in_rect - Vec2::splat(0.5)) * PARTICLE_DRIFT_PX
}
