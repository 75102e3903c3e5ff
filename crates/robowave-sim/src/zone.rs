//! Spawn zone: a cuboid region that releases commandos until its robot
//! budget is spent, and sweeps dead robots out of the world.
//!
//! Per frame, in order: dispose finished robots, refresh the alive positions
//! used for repulsion, animate the commandos, then maybe spawn a new one.

use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use robowave_core::components::Transform;
use robowave_core::config::{RobotCharacteristics, ZoneDefinition};
use robowave_core::enums::ZonePhase;
use robowave_core::error::ConfigError;
use robowave_core::events::GameEvent;
use robowave_core::types::{sanitize_dt, Bounds};

use crate::commando::Commando;
use crate::context::entity_id;
use crate::enemy::{BulletRequest, Enemy};

/// Uniform random point inside `bounds`, one draw per axis.
pub fn random_point(rng: &mut ChaCha8Rng, bounds: &Bounds) -> Vec3 {
    Vec3::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
        rng.gen_range(bounds.min.z..=bounds.max.z),
    )
}

#[derive(Debug, Clone)]
pub struct Zone {
    index: usize,
    bounds: Bounds,
    spawn_points: Vec<Vec3>,
    characteristics: RobotCharacteristics,
    /// Robots still to be spawned.
    remaining_budget: u32,
    /// Soft cap on simultaneous robots.
    enemy_threshold: u32,
    cooldown: f32,
    cooldown_elapsed: f32,
    spawned_total: u32,
    commandos: Vec<Commando>,
    alive_positions: Vec<Vec3>,
    despawn_buffer: Vec<Entity>,
}

impl Zone {
    /// Build zone `index` of a wave from its definition and resolved spawn points.
    pub fn new(
        index: usize,
        definition: &ZoneDefinition,
        spawn_points: Vec<Vec3>,
    ) -> Result<Self, ConfigError> {
        definition.validate(index)?;
        if spawn_points.is_empty() {
            return Err(ConfigError::NoSpawnPoints { zone: index });
        }

        Ok(Self {
            index,
            bounds: definition.bounds(),
            spawn_points,
            characteristics: definition.robot_characteristics.clone(),
            remaining_budget: definition.nb_robots,
            enemy_threshold: definition.treshold_enemy,
            cooldown: definition.cooldown,
            // The first commando does not wait for a cooldown.
            cooldown_elapsed: definition.cooldown,
            spawned_total: 0,
            commandos: Vec::new(),
            alive_positions: Vec::new(),
            despawn_buffer: Vec::new(),
        })
    }

    pub fn animate(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        dt: f32,
        look_target: Vec3,
        shots: &mut Vec<BulletRequest>,
        events: &mut Vec<GameEvent>,
    ) {
        let dt = sanitize_dt(dt);

        self.remove_dead_enemies(world, events);
        self.update_alive_positions(world);

        for commando in &mut self.commandos {
            commando.animate(
                world,
                rng,
                dt,
                &self.alive_positions,
                look_target,
                shots,
                events,
            );
        }

        self.update_spawning(world, rng, dt, events);
    }

    /// Mark-then-sweep: collect disposable robots, then despawn them and
    /// drop them from their commando.
    fn remove_dead_enemies(&mut self, world: &mut World, events: &mut Vec<GameEvent>) {
        self.despawn_buffer.clear();

        for commando in &self.commandos {
            for &entity in commando.members() {
                match world.get::<&mut Enemy>(entity) {
                    Ok(mut enemy) => {
                        if enemy.is_dead() && enemy.can_be_disposed() {
                            enemy.dispose();
                            self.despawn_buffer.push(entity);
                        }
                    }
                    // Gone from the world already; only the reference is left.
                    Err(_) => self.despawn_buffer.push(entity),
                }
            }
        }

        for entity in self.despawn_buffer.drain(..) {
            for commando in &mut self.commandos {
                commando.remove_enemy(entity);
            }
            if world.despawn(entity).is_ok() {
                events.push(GameEvent::EnemyDisposed {
                    id: entity_id(entity),
                });
            }
        }

        self.commandos.retain(|c| !c.is_empty());
    }

    fn update_alive_positions(&mut self, world: &mut World) {
        self.alive_positions.clear();
        for commando in &self.commandos {
            for &entity in commando.members() {
                if let Ok((transform, enemy)) =
                    world.query_one_mut::<(&Transform, &Enemy)>(entity)
                {
                    if !enemy.is_dead() {
                        self.alive_positions.push(transform.position);
                    }
                }
            }
        }
    }

    fn update_spawning(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.remaining_budget == 0 {
            return;
        }
        self.cooldown_elapsed += dt;

        let population = self.get_nb_enemies() as u32;
        if population >= self.enemy_threshold || self.cooldown_elapsed < self.cooldown {
            return;
        }

        let size = self
            .remaining_budget
            .min(self.enemy_threshold - population);
        let spawn_point = self.spawn_points[rng.gen_range(0..self.spawn_points.len())];
        let commando = Commando::spawn(
            world,
            rng,
            self.index,
            spawn_point,
            size,
            self.bounds,
            &self.characteristics,
            events,
        );
        self.commandos.push(commando);

        self.remaining_budget -= size;
        self.spawned_total += size;
        self.cooldown_elapsed = 0.0;

        if self.remaining_budget == 0 {
            info!(
                "zone {}: all {} robots released",
                self.index, self.spawned_total
            );
        } else {
            debug!(
                "zone {}: {} robots left to spawn",
                self.index, self.remaining_budget
            );
        }
    }

    pub fn get_random_point(&self, rng: &mut ChaCha8Rng) -> Vec3 {
        random_point(rng, &self.bounds)
    }

    /// Robots currently held by the zone's commandos, dying ones included.
    pub fn get_nb_enemies(&self) -> usize {
        self.commandos.iter().map(Commando::len).sum()
    }

    pub fn state(&self) -> ZonePhase {
        if self.remaining_budget > 0 {
            ZonePhase::Spawning
        } else if self.get_nb_enemies() > 0 {
            ZonePhase::Draining
        } else {
            ZonePhase::Finished
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == ZonePhase::Finished
    }

    /// Despawn every robot the zone still holds.
    pub fn dispose(&mut self, world: &mut World) {
        for commando in self.commandos.drain(..) {
            for &entity in commando.members() {
                let _ = world.despawn(entity);
            }
        }
        self.alive_positions.clear();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn remaining_budget(&self) -> u32 {
        self.remaining_budget
    }

    pub fn spawned_total(&self) -> u32 {
        self.spawned_total
    }

    pub fn commandos(&self) -> &[Commando] {
        &self.commandos
    }

    pub fn alive_positions(&self) -> &[Vec3] {
        &self.alive_positions
    }
}
