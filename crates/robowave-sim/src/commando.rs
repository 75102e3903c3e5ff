//! Commando: a squad of robots sharing one destination inside its zone.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use robowave_core::components::{Robot, Transform};
use robowave_core::config::RobotCharacteristics;
use robowave_core::constants::{COMMANDO_RETARGET_DISTANCE, COMMANDO_SPAWN_JITTER};
use robowave_core::events::GameEvent;
use robowave_core::types::Bounds;

use crate::context::entity_id;
use crate::enemy::{BulletRequest, Enemy};
use crate::zone::random_point;

#[derive(Debug, Clone)]
pub struct Commando {
    members: Vec<Entity>,
    destination: Vec3,
    bounds: Bounds,
}

impl Commando {
    /// Spawn `size` robots around `spawn_point`, all heading to one random
    /// point of `bounds`.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        world: &mut World,
        rng: &mut ChaCha8Rng,
        zone: usize,
        spawn_point: Vec3,
        size: u32,
        bounds: Bounds,
        characteristics: &RobotCharacteristics,
        events: &mut Vec<GameEvent>,
    ) -> Self {
        let destination = random_point(rng, &bounds);
        let mut members = Vec::with_capacity(size as usize);

        for _ in 0..size {
            let jitter = Vec3::new(
                rng.gen_range(-COMMANDO_SPAWN_JITTER..=COMMANDO_SPAWN_JITTER),
                rng.gen_range(-COMMANDO_SPAWN_JITTER..=COMMANDO_SPAWN_JITTER),
                rng.gen_range(-COMMANDO_SPAWN_JITTER..=COMMANDO_SPAWN_JITTER),
            );
            let position = spawn_point + jitter;
            let entity = world.spawn((
                Transform::at(position),
                Enemy::new(characteristics, position, destination),
                Robot { zone },
            ));
            events.push(GameEvent::EnemySpawned {
                id: entity_id(entity),
                position,
            });
            members.push(entity);
        }

        debug!("zone {zone}: commando of {size} spawned at {spawn_point:?}");
        Self {
            members,
            destination,
            bounds,
        }
    }

    /// Animate every member, then pick a new shared destination if any of
    /// them got close to the current one.
    #[allow(clippy::too_many_arguments)]
    pub fn animate(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        dt: f32,
        neighbors: &[Vec3],
        look_target: Vec3,
        shots: &mut Vec<BulletRequest>,
        events: &mut Vec<GameEvent>,
    ) {
        let mut arrived = false;
        for &entity in &self.members {
            let Ok((transform, enemy)) = world.query_one_mut::<(&mut Transform, &mut Enemy)>(entity)
            else {
                continue;
            };
            let remaining = enemy.animate(
                entity_id(entity),
                transform,
                dt,
                neighbors,
                look_target,
                shots,
                events,
            );
            if remaining.is_some_and(|d| d < COMMANDO_RETARGET_DISTANCE) {
                arrived = true;
            }
        }

        if arrived {
            let destination = random_point(rng, &self.bounds);
            self.set_destination(world, destination);
        }
    }

    /// Push a new destination to every member.
    pub fn set_destination(&mut self, world: &mut World, destination: Vec3) {
        self.destination = destination;
        for &entity in &self.members {
            if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
                enemy.set_destination(destination);
            }
        }
    }

    /// Forget a member. Returns false if it was not part of the squad.
    pub fn remove_enemy(&mut self, entity: Entity) -> bool {
        match self.members.iter().position(|&e| e == entity) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }
}
