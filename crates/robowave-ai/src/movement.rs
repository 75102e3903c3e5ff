//! Pluggable robot locomotion.
//!
//! Every strategy moves a position one step toward (or around) a destination
//! and reports the distance still left to the destination. The numeric
//! constants are tuned for game feel and are applied literally.

use glam::Vec3;

use robowave_core::config::MovementConfig;
use robowave_core::constants::*;

/// One locomotion step.
pub trait MovementStrategy {
    /// Move `position` and return the remaining distance to `destination`.
    fn moove(
        &mut self,
        position: &mut Vec3,
        neighbors: &[Vec3],
        destination: Vec3,
        speed: f32,
        dt: f32,
    ) -> f32;
}

/// Attraction toward the destination through a leaky integrator, plus
/// repulsion from neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GravityMovement {
    /// Accumulated, damped attraction (the robot's speed vector).
    pub velocity: Vec3,
}

/// Fixed-radius circular sweep around the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitMovement {
    pub radius: f32,
    pub height: f32,
    /// Current angle in radians.
    pub angle: f32,
}

/// Lerp toward the destination with a small vertical wobble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalMovement {
    pub frequency: f32,
}

/// Strategy selected per robot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    Gravity(GravityMovement),
    Orbit(OrbitMovement),
    Sinusoidal(SinusoidalMovement),
}

impl Movement {
    /// Build the strategy for a robot spawned at `start`.
    /// Orbits pick up the angle of the spawn position so robots do not jump.
    pub fn from_config(config: MovementConfig, start: Vec3) -> Self {
        match config {
            MovementConfig::Gravity => Movement::Gravity(GravityMovement::default()),
            MovementConfig::Orbit { radius, height } => Movement::Orbit(OrbitMovement {
                radius,
                height,
                angle: start.z.atan2(start.x),
            }),
            MovementConfig::Sinusoidal { frequency } => {
                Movement::Sinusoidal(SinusoidalMovement { frequency })
            }
        }
    }

    /// Current speed vector, for strategies that keep one.
    pub fn velocity(&self) -> Vec3 {
        match self {
            Movement::Gravity(g) => g.velocity,
            Movement::Orbit(_) | Movement::Sinusoidal(_) => Vec3::ZERO,
        }
    }
}

impl MovementStrategy for Movement {
    fn moove(
        &mut self,
        position: &mut Vec3,
        neighbors: &[Vec3],
        destination: Vec3,
        speed: f32,
        dt: f32,
    ) -> f32 {
        match self {
            Movement::Gravity(m) => m.moove(position, neighbors, destination, speed, dt),
            Movement::Orbit(m) => m.moove(position, neighbors, destination, speed, dt),
            Movement::Sinusoidal(m) => m.moove(position, neighbors, destination, speed, dt),
        }
    }
}

impl MovementStrategy for GravityMovement {
    fn moove(
        &mut self,
        position: &mut Vec3,
        neighbors: &[Vec3],
        destination: Vec3,
        _speed: f32,
        dt: f32,
    ) -> f32 {
        let force = (destination - *position).normalize_or_zero() * GRAVITY_ATTRACTION_GAIN;
        self.velocity = (self.velocity + force) * GRAVITY_DAMPING;
        let repulsion = check_collision(*position, neighbors);

        let displacement = force + self.velocity + repulsion;
        *position += displacement * dt;

        position.distance(destination)
    }
}

impl MovementStrategy for OrbitMovement {
    fn moove(
        &mut self,
        position: &mut Vec3,
        _neighbors: &[Vec3],
        destination: Vec3,
        speed: f32,
        dt: f32,
    ) -> f32 {
        self.angle = (self.angle + speed * dt).rem_euclid(std::f32::consts::TAU);
        *position = Vec3::new(
            self.radius * self.angle.cos(),
            self.height,
            self.radius * self.angle.sin(),
        );
        position.distance(destination)
    }
}

impl MovementStrategy for SinusoidalMovement {
    fn moove(
        &mut self,
        position: &mut Vec3,
        _neighbors: &[Vec3],
        destination: Vec3,
        speed: f32,
        dt: f32,
    ) -> f32 {
        // `speed` is an interpolation fraction here, not a velocity.
        *position = position.lerp(destination, speed);
        position.y += SINUSOIDAL_AMPLITUDE * (self.frequency * dt).sin();
        position.distance(destination)
    }
}

/// Inverse-distance repulsion from every other position.
///
/// Positions identical to `position` (including the robot's own entry in a
/// shared list) contribute nothing.
pub fn check_collision(position: Vec3, others: &[Vec3]) -> Vec3 {
    let mut offset = Vec3::ZERO;
    for other in others {
        let distance = position.distance(*other);
        if distance > 0.0 {
            offset += (position - *other).normalize() * (REPULSION_STRENGTH / distance);
        }
    }
    offset
}
