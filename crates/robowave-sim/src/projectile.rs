//! Laser bolts fired by the player and bullets fired by robots.

use glam::Vec3;

use robowave_core::constants::*;
use robowave_core::types::sanitize_dt;

use crate::enemy::BulletRequest;
use crate::gun::Shot;
use crate::spatial::{RayHit, SpatialQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserProjectile {
    pub position: Vec3,
    pub direction: Vec3,
    pub travelled: f32,
    pub spent: bool,
}

impl LaserProjectile {
    pub fn new(shot: Shot) -> Self {
        Self {
            position: shot.origin,
            direction: shot.direction.normalize_or_zero(),
            travelled: 0.0,
            spent: false,
        }
    }

    /// Sweep this frame's segment against `spatial`. A hit spends the bolt.
    pub fn advance(&mut self, dt: f32, spatial: &impl SpatialQuery) -> Option<RayHit> {
        if self.spent {
            return None;
        }
        if self.direction == Vec3::ZERO {
            self.spent = true;
            return None;
        }

        let step = (LASER_SPEED * sanitize_dt(dt)).min(LASER_MAX_RANGE - self.travelled);
        if step <= 0.0 {
            self.spent = self.travelled >= LASER_MAX_RANGE;
            return None;
        }

        match spatial.ray_cast(self.position, self.direction, step) {
            Some(hit) => {
                self.position = hit.point;
                self.travelled += hit.distance;
                self.spent = true;
                Some(hit)
            }
            None => {
                self.position += self.direction * step;
                self.travelled += step;
                self.spent = self.travelled >= LASER_MAX_RANGE;
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyBullet {
    pub position: Vec3,
    pub velocity: Vec3,
    pub damage: f32,
    pub age: f32,
    pub spent: bool,
}

impl EnemyBullet {
    pub fn from_request(request: &BulletRequest) -> Self {
        Self {
            position: request.origin,
            velocity: (request.target - request.origin).normalize_or_zero() * request.speed,
            damage: request.damage,
            age: 0.0,
            spent: false,
        }
    }

    /// Move one step and return the closest the step came to `point`.
    pub fn advance(&mut self, dt: f32, point: Vec3) -> f32 {
        let dt = sanitize_dt(dt);
        let start = self.position;
        self.position += self.velocity * dt;
        self.age += dt;
        if self.age >= BULLET_LIFETIME_SECS {
            self.spent = true;
        }
        segment_distance(start, self.position, point)
    }
}

/// Distance from `point` to the segment `a..b`.
pub fn segment_distance(a: Vec3, b: Vec3, point: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    point.distance(a + ab * t)
}
