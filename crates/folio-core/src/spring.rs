//! Critically-damped spring smoothing for pointer-driven values.
//!
//! The update is the closed-form solution of the critically damped
//! second-order system for a constant target over one step, so the result
//! is exact for any `dt` and never oscillates. Renderers call `step` once
//! per animation frame with the elapsed time.

use glam::Vec2;

/// Scalar spring following a moving target without overshoot.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    omega: f32,
    value: f32,
    velocity: f32,
    target: f32,
    initialized: bool,
}

impl Spring {
    pub fn new(omega: f32) -> Self {
        Self {
            omega: omega.max(f32::EPSILON),
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            initialized: false,
        }
    }

    /// Move the target. The first target snaps the value directly so the
    /// spring does not sweep in from the origin on mount.
    pub fn set_target(&mut self, target: f32) {
        if !self.initialized {
            self.value = target;
            self.velocity = 0.0;
            self.initialized = true;
        }
        self.target = target;
    }

    /// Force the value (and target) without animating.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.initialized = true;
    }

    /// Advance by `dt` seconds.
    ///
    /// x(t) = target + (A + B t) e^(-w t) with A = x0 - target and
    /// B = v0 + w A; velocity is the analytic derivative at `dt`.
    pub fn step(&mut self, dt: f32) -> f32 {
        if !self.initialized || dt <= 0.0 {
            return self.value;
        }
        let w = self.omega;
        let a = self.value - self.target;
        let b = self.velocity + w * a;
        let e = (-w * dt).exp();
        self.value = self.target + (a + b * dt) * e;
        self.velocity = (b - w * (a + b * dt)) * e;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once the value is within `epsilon` of the target and nearly at
    /// rest.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() <= epsilon && self.velocity.abs() <= epsilon * self.omega
    }
}

/// Two springs sharing one configuration, for 2D pointer coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(omega: f32) -> Self {
        Self {
            x: Spring::new(omega),
            y: Spring::new(omega),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, value: Vec2) {
        self.x.snap_to(value.x);
        self.y.snap_to(value.y);
    }

    pub fn step(&mut self, dt: f32) -> Vec2 {
        Vec2::new(self.x.step(dt), self.y.step(dt))
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.x.is_settled(epsilon) && self.y.is_settled(epsilon)
    }
}
