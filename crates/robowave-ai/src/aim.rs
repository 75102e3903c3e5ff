//! Head aiming: robots keep their face turned toward the player.

use glam::{EulerRot, Quat, Vec3};

use robowave_core::constants::ENEMY_TURN_RATE;

/// Rotation whose local +Z axis points from `from` to `target`, with no roll.
/// `None` when both points coincide.
pub fn look_rotation(from: Vec3, target: Vec3) -> Option<Quat> {
    let forward = (target - from).normalize_or_zero();
    if forward == Vec3::ZERO {
        return None;
    }
    let yaw = forward.x.atan2(forward.z);
    let pitch = (-forward.y).clamp(-1.0, 1.0).asin();
    Some(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0))
}

/// Turn `current` toward the look rotation at a fixed rate.
pub fn aim_towards(current: Quat, from: Vec3, target: Vec3, dt: f32) -> Quat {
    match look_rotation(from, target) {
        Some(goal) => {
            let t = (ENEMY_TURN_RATE * dt).clamp(0.0, 1.0);
            if t <= 0.0 {
                return current;
            }
            current.slerp(goal, t).normalize()
        }
        None => current,
    }
}
