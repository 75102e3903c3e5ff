//! Enemy bullet system: flight, near-miss slowdown and player hits.

use glam::Vec3;

use robowave_core::constants::*;
use robowave_core::enums::Hand;
use robowave_core::events::GameEvent;

use crate::projectile::EnemyBullet;
use crate::shield::{Player, Shield};
use crate::time_control::TimeControl;

/// Slowdown factor asked by a bullet `distance` away from the head.
pub fn slow_factor(distance: f32) -> f32 {
    (distance / BULLET_DANGER_RADIUS).clamp(BULLET_MIN_SLOW_FACTOR, 1.0)
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    bullets: &mut Vec<EnemyBullet>,
    dt: f32,
    head: Vec3,
    time: &mut TimeControl,
    shield: &mut Shield,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
) {
    for bullet in bullets.iter_mut() {
        // Swept so fast bullets cannot step over the head.
        let closest = bullet.advance(dt, head);
        if bullet.spent {
            continue;
        }

        let distance = bullet.position.distance(head);
        if closest <= BULLET_HIT_RADIUS {
            let absorbed = shield.absorb(bullet.damage);
            player.take_damage(bullet.damage - absorbed);
            events.push(GameEvent::PlayerHit {
                damage: bullet.damage,
                absorbed,
            });
            events.push(GameEvent::Haptic {
                hand: Hand::Left,
                intensity: HAPTIC_PLAYER_HIT.0,
                duration_ms: HAPTIC_PLAYER_HIT.1,
            });
            bullet.spent = true;
        } else if distance <= BULLET_DANGER_RADIUS {
            time.ask_slow_time(slow_factor(distance));
        }
    }

    bullets.retain(|b| !b.spent);
}
