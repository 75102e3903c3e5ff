//! The combat shared by levels and the tutorial: active zones, laser bolts
//! and enemy bullets.

use log::info;

use robowave_core::events::GameEvent;

use crate::context::GameContext;
use crate::enemy::BulletRequest;
use crate::projectile::{EnemyBullet, LaserProjectile};
use crate::spatial::HitBoxIndex;
use crate::systems;
use crate::zone::Zone;

#[derive(Debug, Default)]
pub struct Arena {
    zones: Vec<Zone>,
    projectiles: Vec<LaserProjectile>,
    bullets: Vec<EnemyBullet>,
    hitboxes: HitBoxIndex,
    shots: Vec<BulletRequest>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// One frame of combat with already scaled `dt`.
    pub fn animate(&mut self, ctx: &mut GameContext, dt: f32) {
        for zone in &mut self.zones {
            zone.animate(
                &mut ctx.world,
                &mut ctx.rng,
                dt,
                ctx.head,
                &mut self.shots,
                &mut ctx.events,
            );
        }
        self.zones.retain(|zone| {
            let finished = zone.is_finished();
            if finished {
                info!("zone {} cleared", zone.index());
            }
            !finished
        });

        self.hitboxes.rebuild(&ctx.world);
        systems::lasers::run(
            &ctx.world,
            &mut self.projectiles,
            &self.hitboxes,
            dt,
            &mut ctx.score,
            &mut ctx.events,
        );

        for request in self.shots.drain(..) {
            let bullet = EnemyBullet::from_request(&request);
            ctx.events.push(GameEvent::BulletFired {
                origin: bullet.position,
                velocity: bullet.velocity,
            });
            self.bullets.push(bullet);
        }
        systems::bullets::run(
            &mut self.bullets,
            dt,
            ctx.head,
            &mut ctx.time,
            &mut ctx.shield,
            &mut ctx.player,
            &mut ctx.events,
        );

        ctx.shield.animate(dt);
        ctx.gun.animate(dt, &ctx.time, &mut ctx.events);
    }

    /// Pull the trigger with `force`.
    pub fn fire(&mut self, ctx: &mut GameContext, force: f32) {
        if let Some(shot) = ctx.gun.fire(force, &ctx.time, &mut ctx.events) {
            ctx.score.record_shot();
            self.projectiles.push(LaserProjectile::new(shot));
        }
    }

    /// Despawn every robot and drop everything in flight.
    pub fn dispose(&mut self, ctx: &mut GameContext) {
        for zone in &mut self.zones {
            zone.dispose(&mut ctx.world);
        }
        self.zones.clear();
        self.projectiles.clear();
        self.bullets.clear();
        self.shots.clear();
    }

    /// No zone left: every robot budgeted was spawned, killed and disposed.
    pub fn is_clear(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn projectiles(&self) -> &[LaserProjectile] {
        &self.projectiles
    }

    pub fn bullets(&self) -> &[EnemyBullet] {
        &self.bullets
    }

    /// Robots alive or not yet spawned.
    pub fn robots_remaining(&self) -> u32 {
        self.zones
            .iter()
            .map(|z| z.remaining_budget() + z.get_nb_enemies() as u32)
            .sum()
    }
}
