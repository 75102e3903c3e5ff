//! Level, wave and zone configuration records.
//!
//! Level files are JSON. Field names follow the level-authoring format
//! (`nbRobots`, `tresholdEnemy`, ...) through serde aliases so existing
//! content loads verbatim. Everything is validated once, when a zone is
//! built, so malformed content is rejected before the simulation runs.

use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::Bounds;

/// Per-robot stat template shared by every robot a zone spawns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotCharacteristics {
    /// Seconds between two volleys.
    #[serde(alias = "shotFreq")]
    pub shot_freq: f32,
    /// Seconds between two bullets of the same volley.
    #[serde(alias = "bulletFreq")]
    pub bullet_freq: f32,
    /// Bullets per volley. 0 makes a harmless robot.
    #[serde(alias = "nbBullets")]
    pub nb_bullets: u32,
    /// Movement speed (meaning depends on the movement strategy).
    pub speed: f32,
    /// Health points.
    pub life: u32,
    /// Points awarded on kill.
    pub score: u32,
    #[serde(alias = "bulletSpeed")]
    pub bullet_speed: f32,
    #[serde(alias = "bulletDmg")]
    pub bullet_dmg: f32,
    /// Locomotion. Defaults to gravity steering.
    #[serde(default)]
    pub movement: MovementConfig,
}

/// Which movement strategy robots use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MovementConfig {
    /// Attraction toward the destination with neighbor repulsion.
    #[default]
    Gravity,
    /// Circular sweep around the platform; ignores the destination.
    Orbit { radius: f32, height: f32 },
    /// Lerp toward the destination with a vertical wobble.
    Sinusoidal { frequency: f32 },
}

/// One spawn zone of a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    pub min: Vec3,
    pub max: Vec3,
    /// Names resolved against the level's spawn point table.
    #[serde(alias = "spawnPointNames")]
    pub spawn_point_names: Vec<String>,
    /// Robots this zone spawns over its lifetime.
    #[serde(alias = "nbRobots")]
    pub nb_robots: u32,
    #[serde(alias = "robotCharacteristics")]
    pub robot_characteristics: RobotCharacteristics,
    /// Seconds between two commando spawns.
    pub cooldown: f32,
    /// Soft cap on simultaneous robots.
    #[serde(alias = "tresholdEnemy")]
    pub treshold_enemy: u32,
    /// Minimum separation between random points. Accepted, never used.
    #[serde(default, alias = "minDistance")]
    pub min_distance: f32,
}

/// A wave: zones running at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    pub zones: Vec<ZoneDefinition>,
}

/// A playable level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: u32,
    pub name: String,
    /// Named spawn points (meshes placed in the level scene).
    #[serde(alias = "spawnPoints")]
    pub spawn_points: BTreeMap<String, Vec3>,
    pub waves: Vec<WaveDefinition>,
}

/// Laser gun tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GunConfig {
    pub max_heat: f32,
    pub heat_per_shot: f32,
    /// Heat removed per second.
    pub cooling_rate: f32,
    /// Effective seconds required between shots.
    pub shot_cooldown: f32,
    /// Seconds the gun stays locked after overheating.
    pub overheat_lockout: f32,
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            max_heat: GUN_MAX_HEAT,
            heat_per_shot: GUN_HEAT_PER_SHOT,
            cooling_rate: GUN_COOLING_RATE,
            shot_cooldown: GUN_SHOT_COOLDOWN,
            overheat_lockout: GUN_OVERHEAT_LOCKOUT_SECS,
        }
    }
}

impl RobotCharacteristics {
    /// Check every field is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::InvalidCharacteristics { field, reason });

        if self.life == 0 {
            return invalid("life", "must be at least 1");
        }
        if self.life > i32::MAX as u32 {
            return invalid("life", "too large");
        }
        for (field, value) in [
            ("speed", self.speed),
            ("shot_freq", self.shot_freq),
            ("bullet_freq", self.bullet_freq),
            ("bullet_speed", self.bullet_speed),
            ("bullet_dmg", self.bullet_dmg),
        ] {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
            if value < 0.0 {
                return invalid(field, "must not be negative");
            }
        }
        if self.nb_bullets > 0 {
            if self.shot_freq <= 0.0 {
                return invalid("shot_freq", "must be positive for a shooting robot");
            }
            if self.bullet_speed <= 0.0 {
                return invalid("bullet_speed", "must be positive for a shooting robot");
            }
        }
        match self.movement {
            MovementConfig::Gravity => {}
            MovementConfig::Orbit { radius, height } => {
                if !(radius.is_finite() && height.is_finite()) || radius <= 0.0 {
                    return invalid("movement.radius", "must be a positive finite number");
                }
            }
            MovementConfig::Sinusoidal { frequency } => {
                if !frequency.is_finite() {
                    return invalid("movement.frequency", "must be finite");
                }
            }
        }
        Ok(())
    }
}

impl ZoneDefinition {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min, self.max)
    }

    /// Validate the zone at position `zone` of its wave.
    pub fn validate(&self, zone: usize) -> Result<(), ConfigError> {
        let bounds = self.bounds();
        if !(self.min.is_finite() && self.max.is_finite()) || !bounds.is_ordered() {
            return Err(ConfigError::InvalidBounds {
                zone,
                min: self.min.to_array(),
                max: self.max.to_array(),
            });
        }
        if self.spawn_point_names.is_empty() {
            return Err(ConfigError::NoSpawnPoints { zone });
        }
        if self.treshold_enemy == 0 {
            return Err(ConfigError::InvalidZone {
                zone,
                field: "treshold_enemy",
                reason: "must be at least 1",
            });
        }
        if !self.cooldown.is_finite() || self.cooldown < 0.0 {
            return Err(ConfigError::InvalidZone {
                zone,
                field: "cooldown",
                reason: "must be a non-negative finite number",
            });
        }
        self.robot_characteristics.validate()
    }
}

impl LevelDefinition {
    /// Parse a level file.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let level: LevelDefinition = serde_json::from_str(json)?;
        if level.waves.is_empty() {
            return Err(ConfigError::EmptyLevel(level.id));
        }
        Ok(level)
    }

    /// Resolve a zone's spawn point names to positions.
    pub fn resolve_spawn_points(
        &self,
        zone: usize,
        definition: &ZoneDefinition,
    ) -> Result<Vec<Vec3>, ConfigError> {
        definition
            .spawn_point_names
            .iter()
            .map(|name| {
                self.spawn_points
                    .get(name)
                    .copied()
                    .ok_or_else(|| ConfigError::UnknownSpawnPoint {
                        zone,
                        name: name.clone(),
                    })
            })
            .collect()
    }

    /// Total robots across all waves.
    pub fn total_robots(&self) -> u32 {
        self.waves
            .iter()
            .flat_map(|w| w.zones.iter())
            .map(|z| z.nb_robots)
            .sum()
    }
}
