//! Laser system: moves the player's bolts and touches whatever they hit.

use hecs::World;
use log::debug;

use robowave_core::events::GameEvent;

use crate::context::entity_id;
use crate::enemy::{Enemy, TouchOutcome};
use crate::projectile::LaserProjectile;
use crate::score::ScoreLedger;
use crate::spatial::SpatialQuery;

pub fn run(
    world: &World,
    projectiles: &mut Vec<LaserProjectile>,
    spatial: &impl SpatialQuery,
    dt: f32,
    score: &mut ScoreLedger,
    events: &mut Vec<GameEvent>,
) {
    for projectile in projectiles.iter_mut() {
        let Some(hit) = projectile.advance(dt, spatial) else {
            continue;
        };
        // The hit box may belong to a robot swept earlier this frame.
        let Ok(mut enemy) = world.get::<&mut Enemy>(hit.owner) else {
            continue;
        };
        let id = entity_id(hit.owner);
        match enemy.touch() {
            TouchOutcome::Ignored => {}
            TouchOutcome::Hit { health } => {
                score.record_hit();
                events.push(GameEvent::EnemyHit { id, health });
            }
            TouchOutcome::Killed { score: points } => {
                score.record_hit();
                score.record_kill(points);
                events.push(GameEvent::EnemyKilled { id, score: points });
                debug!("robot {id} destroyed (+{points})");
            }
        }
    }

    projectiles.retain(|p| !p.spent);
}
