//! Enemy robot: health, locomotion, head aim and volley fire.
//!
//! `Enemy` is a hecs component stored next to a `Transform` and a `Robot`
//! marker. Its lifecycle is Alive -> Dying -> Disposed; the owning zone
//! sweeps robots out of the world once they can be disposed.

use glam::Vec3;
use log::trace;

use robowave_ai::aim::aim_towards;
use robowave_ai::movement::{Movement, MovementStrategy};
use robowave_core::components::Transform;
use robowave_core::config::RobotCharacteristics;
use robowave_core::constants::ENEMY_DISPOSE_DELAY_SECS;
use robowave_core::enums::EnemyPhase;
use robowave_core::events::GameEvent;

/// Result of a laser touching a robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Already dead; nothing happened.
    Ignored,
    /// Lost one health point and survived.
    Hit { health: i32 },
    /// Lost its last health point. Returned once per robot.
    Killed { score: u32 },
}

/// A bullet a robot wants fired this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletRequest {
    pub origin: Vec3,
    pub target: Vec3,
    pub speed: f32,
    pub damage: f32,
}

/// Volley scheduling: every `shot_freq` seconds a volley of `nb_bullets`
/// bullets starts, one every `bullet_freq` seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Weapon {
    since_volley: f32,
    since_bullet: f32,
    bullets_left: u32,
}

/// Robot component.
#[derive(Debug, Clone)]
pub struct Enemy {
    characteristics: RobotCharacteristics,
    destination: Vec3,
    health_points: i32,
    movement: Movement,
    phase: EnemyPhase,
    dying_elapsed: f32,
    weapon: Weapon,
}

impl Enemy {
    pub fn new(characteristics: &RobotCharacteristics, position: Vec3, destination: Vec3) -> Self {
        Self {
            characteristics: characteristics.clone(),
            destination,
            health_points: characteristics.life as i32,
            movement: Movement::from_config(characteristics.movement, position),
            phase: EnemyPhase::Alive,
            dying_elapsed: 0.0,
            weapon: Weapon::default(),
        }
    }

    /// Laser impact: one health point per touch.
    pub fn touch(&mut self) -> TouchOutcome {
        if self.phase != EnemyPhase::Alive || self.health_points <= 0 {
            return TouchOutcome::Ignored;
        }
        self.health_points -= 1;
        if self.health_points <= 0 {
            TouchOutcome::Killed {
                score: self.characteristics.score,
            }
        } else {
            TouchOutcome::Hit {
                health: self.health_points,
            }
        }
    }

    pub fn set_destination(&mut self, destination: Vec3) {
        self.destination = destination;
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    pub fn health(&self) -> i32 {
        self.health_points
    }

    pub fn phase(&self) -> EnemyPhase {
        self.phase
    }

    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    pub fn is_dead(&self) -> bool {
        self.health_points <= 0 || self.phase != EnemyPhase::Alive
    }

    /// Whether the death effect has finished.
    pub fn can_be_disposed(&self) -> bool {
        match self.phase {
            EnemyPhase::Alive => false,
            EnemyPhase::Dying => self.dying_elapsed >= ENEMY_DISPOSE_DELAY_SECS,
            EnemyPhase::Disposed => true,
        }
    }

    /// Mark the robot disposed. Returns false if it already was.
    pub fn dispose(&mut self) -> bool {
        if self.phase == EnemyPhase::Disposed {
            return false;
        }
        self.phase = EnemyPhase::Disposed;
        true
    }

    /// One frame of behavior.
    ///
    /// Returns the remaining distance to the destination, or `None` when the
    /// robot did not move (dying or disposed).
    #[allow(clippy::too_many_arguments)]
    pub fn animate(
        &mut self,
        id: u64,
        transform: &mut Transform,
        dt: f32,
        neighbors: &[Vec3],
        look_target: Vec3,
        shots: &mut Vec<BulletRequest>,
        events: &mut Vec<GameEvent>,
    ) -> Option<f32> {
        match self.phase {
            EnemyPhase::Disposed => None,
            EnemyPhase::Dying => {
                self.dying_elapsed += dt;
                None
            }
            EnemyPhase::Alive => {
                transform.rotation =
                    aim_towards(transform.rotation, transform.position, look_target, dt);

                if self.health_points <= 0 {
                    self.phase = EnemyPhase::Dying;
                    events.push(GameEvent::EnemyDeathEffect {
                        id,
                        position: transform.position,
                    });
                    trace!("robot {id} dying at {:?}", transform.position);
                    return None;
                }

                let remaining = self.movement.moove(
                    &mut transform.position,
                    neighbors,
                    self.destination,
                    self.characteristics.speed,
                    dt,
                );

                self.weapon
                    .tick(dt, &self.characteristics, transform.position, look_target, shots);

                Some(remaining)
            }
        }
    }
}

impl Weapon {
    fn tick(
        &mut self,
        dt: f32,
        characteristics: &RobotCharacteristics,
        origin: Vec3,
        target: Vec3,
        shots: &mut Vec<BulletRequest>,
    ) {
        if characteristics.nb_bullets == 0 {
            return;
        }

        if self.bullets_left == 0 {
            self.since_volley += dt;
            if self.since_volley < characteristics.shot_freq {
                return;
            }
            self.since_volley = 0.0;
            self.bullets_left = characteristics.nb_bullets;
            // First bullet of a volley leaves immediately.
            self.since_bullet = characteristics.bullet_freq;
        } else {
            self.since_bullet += dt;
        }

        while self.bullets_left > 0 && self.since_bullet >= characteristics.bullet_freq {
            shots.push(BulletRequest {
                origin,
                target,
                speed: characteristics.bullet_speed,
                damage: characteristics.bullet_dmg,
            });
            self.since_bullet -= characteristics.bullet_freq;
            self.bullets_left -= 1;
        }
    }
}
