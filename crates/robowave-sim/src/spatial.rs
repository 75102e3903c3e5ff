//! Ray queries against robot hit spheres.

use glam::Vec3;
use hecs::{Entity, World};

use robowave_core::components::Transform;
use robowave_core::constants::ENEMY_HITBOX_RADIUS;

use crate::enemy::Enemy;

/// Closest intersection of a ray, with the entity owning the touched volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub owner: Entity,
    pub distance: f32,
    pub point: Vec3,
}

/// Anything lasers can be cast against.
pub trait SpatialQuery {
    /// First hit along `direction` within `max_range`.
    fn ray_cast(&self, origin: Vec3, direction: Vec3, max_range: f32) -> Option<RayHit>;
}

#[derive(Debug, Clone, Copy)]
struct HitSphere {
    owner: Entity,
    center: Vec3,
    radius: f32,
}

/// Flat list of hit spheres, rebuilt once per frame from the living robots.
#[derive(Debug, Clone, Default)]
pub struct HitBoxIndex {
    spheres: Vec<HitSphere>,
}

impl HitBoxIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, world: &World) {
        self.spheres.clear();
        for (entity, (transform, enemy)) in world.query::<(&Transform, &Enemy)>().iter() {
            if !enemy.is_dead() {
                self.insert(entity, transform.position, ENEMY_HITBOX_RADIUS);
            }
        }
    }

    pub fn insert(&mut self, owner: Entity, center: Vec3, radius: f32) {
        self.spheres.push(HitSphere {
            owner,
            center,
            radius,
        });
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl SpatialQuery for HitBoxIndex {
    fn ray_cast(&self, origin: Vec3, direction: Vec3, max_range: f32) -> Option<RayHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || !(max_range > 0.0) {
            return None;
        }

        let mut best: Option<RayHit> = None;
        for sphere in &self.spheres {
            let oc = origin - sphere.center;
            let b = oc.dot(direction);
            let c = oc.length_squared() - sphere.radius * sphere.radius;
            let discriminant = b * b - c;
            if discriminant < 0.0 {
                continue;
            }
            let root = discriminant.sqrt();
            let distance = if -b - root >= 0.0 {
                -b - root
            } else if -b + root >= 0.0 {
                // Origin inside the sphere.
                0.0
            } else {
                continue;
            };
            if distance > max_range {
                continue;
            }
            if best.map_or(true, |hit| distance < hit.distance) {
                best = Some(RayHit {
                    owner: sphere.owner,
                    distance,
                    point: origin + direction * distance,
                });
            }
        }
        best
    }
}
