//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned cuboid region (a spawn zone).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frame number (increments by 1 each tick).
    pub frame: u64,
    /// Elapsed wall-clock seconds, unscaled.
    pub elapsed_secs: f64,
    /// Elapsed simulated seconds, after time dilation.
    pub scaled_secs: f64,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether every `min` component is at most the matching `max` component.
    pub fn is_ordered(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self, dt: f32, scaled_dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
        self.scaled_secs += scaled_dt as f64;
    }
}

/// Clamp a frame delta to a usable value: negative, NaN and infinite deltas become 0.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Linear interpolation between two RGB colors.
pub fn lerp_color(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}
