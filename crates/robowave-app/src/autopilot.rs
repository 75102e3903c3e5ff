//! Scripted player for headless runs: aims at the closest robot with a
//! little lead, holds the trigger until the gun overheats, and squeezes time
//! when bullets get close.

use std::collections::HashMap;

use glam::Vec3;

use robowave_core::commands::PlayerInput;
use robowave_core::constants::LASER_SPEED;
use robowave_core::enums::{EnemyPhase, GamePhase, TutorialStep};
use robowave_core::state::GameStateSnapshot;

/// Gun held slightly right of and below the head.
const GUN_OFFSET: Vec3 = Vec3::new(0.25, -0.3, 0.3);
/// Bullets closer than this make the autopilot squeeze.
const SQUEEZE_DISTANCE: f32 = 6.0;
const SQUEEZE_FORCE: f32 = 0.8;

#[derive(Debug, Default)]
pub struct Autopilot {
    holding: bool,
    squeezing: bool,
    last_positions: HashMap<u64, Vec3>,
    last_scaled_secs: f64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs for the next frame, given the last snapshot.
    pub fn react(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerInput> {
        let mut inputs = Vec::new();
        if snapshot.phase != GamePhase::Playing {
            self.holding = false;
            self.squeezing = false;
            return inputs;
        }

        let head = snapshot.player.head;
        let origin = head + GUN_OFFSET;
        let step = snapshot.progress.tutorial_step;

        let target = self.lead_target(snapshot, origin);
        if let Some(target) = target {
            inputs.push(PlayerInput::AimGun {
                origin,
                direction: target - origin,
            });
        }

        let want_fire = !snapshot.gun.overheated
            && (target.is_some() || step == Some(TutorialStep::Overheat));
        if want_fire != self.holding {
            self.holding = want_fire;
            inputs.push(if want_fire {
                PlayerInput::TriggerPressed { force: 1.0 }
            } else {
                PlayerInput::TriggerReleased
            });
        }

        let danger = snapshot
            .bullets
            .iter()
            .any(|b| b.distance(head) < SQUEEZE_DISTANCE);
        let want_squeeze = danger || step == Some(TutorialStep::SlowTime);
        if want_squeeze != self.squeezing {
            self.squeezing = want_squeeze;
            inputs.push(if want_squeeze {
                PlayerInput::SqueezeChanged {
                    force: SQUEEZE_FORCE,
                }
            } else {
                PlayerInput::SqueezeReleased
            });
        }

        inputs
    }

    /// Closest living robot, moved ahead by its observed velocity for the
    /// laser's flight time.
    fn lead_target(&mut self, snapshot: &GameStateSnapshot, origin: Vec3) -> Option<Vec3> {
        let dt = (snapshot.time.scaled_secs - self.last_scaled_secs) as f32;
        self.last_scaled_secs = snapshot.time.scaled_secs;

        let mut best: Option<(f32, Vec3)> = None;
        let mut positions = HashMap::with_capacity(snapshot.enemies.len());
        for enemy in &snapshot.enemies {
            positions.insert(enemy.id, enemy.position);
            if enemy.phase != EnemyPhase::Alive {
                continue;
            }
            let distance = enemy.position.distance(origin);
            let velocity = match self.last_positions.get(&enemy.id) {
                Some(previous) if dt > 0.0 => (enemy.position - *previous) / dt,
                _ => Vec3::ZERO,
            };
            let aim = enemy.position + velocity * (distance / LASER_SPEED);
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, aim));
            }
        }
        self.last_positions = positions;
        best.map(|(_, aim)| aim)
    }
}
