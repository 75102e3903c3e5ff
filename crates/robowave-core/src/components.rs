//! ECS components for hecs entities.
//!
//! Components here are plain data. Behavior-carrying components (the enemy
//! robot itself) live in the simulation crate next to the systems using them.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World pose of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Marks an entity as a robot spawned by a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Index of the owning zone inside its wave.
    pub zone: usize,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
