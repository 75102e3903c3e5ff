//! Built-in level catalog and tutorial content.
//!
//! Robots come from the front (+Z) of the platform. Later levels add zones
//! on the flanks, tougher robots and denser volleys.

use std::collections::BTreeMap;

use glam::Vec3;

use robowave_core::config::*;
use robowave_core::error::ConfigError;

/// Number of built-in levels; ids run from 1.
pub const BUILTIN_LEVEL_COUNT: u32 = 3;

fn spawn_points() -> BTreeMap<String, Vec3> {
    [
        ("north", Vec3::new(0.0, 8.0, 45.0)),
        ("north-east", Vec3::new(25.0, 6.0, 38.0)),
        ("north-west", Vec3::new(-25.0, 6.0, 38.0)),
        ("east", Vec3::new(40.0, 4.0, 5.0)),
        ("west", Vec3::new(-40.0, 4.0, 5.0)),
        ("sky", Vec3::new(0.0, 25.0, 20.0)),
    ]
    .into_iter()
    .map(|(name, position)| (name.to_string(), position))
    .collect()
}

fn drone(life: u32, score: u32, shot_freq: f32, nb_bullets: u32) -> RobotCharacteristics {
    RobotCharacteristics {
        shot_freq,
        bullet_freq: 0.25,
        nb_bullets,
        speed: 1.0,
        life,
        score,
        bullet_speed: 6.0,
        bullet_dmg: 10.0,
        movement: MovementConfig::Gravity,
    }
}

fn front_zone(nb_robots: u32, threshold: u32, robot: RobotCharacteristics) -> ZoneDefinition {
    ZoneDefinition {
        min: Vec3::new(-15.0, 2.0, 18.0),
        max: Vec3::new(15.0, 10.0, 40.0),
        spawn_point_names: vec!["north".into(), "north-east".into(), "north-west".into()],
        nb_robots,
        robot_characteristics: robot,
        cooldown: 3.0,
        treshold_enemy: threshold,
        min_distance: 0.0,
    }
}

fn flank_zone(east: bool, nb_robots: u32, robot: RobotCharacteristics) -> ZoneDefinition {
    let sign: f32 = if east { 1.0 } else { -1.0 };
    let x0 = 14.0 * sign;
    let x1 = 32.0 * sign;
    ZoneDefinition {
        min: Vec3::new(x0.min(x1), 1.5, -5.0),
        max: Vec3::new(x0.max(x1), 8.0, 20.0),
        spawn_point_names: vec![if east { "east" } else { "west" }.into()],
        nb_robots,
        robot_characteristics: robot,
        cooldown: 5.0,
        treshold_enemy: 4,
        min_distance: 0.0,
    }
}

/// Look up a built-in level.
pub fn builtin_level(id: u32) -> Result<LevelDefinition, ConfigError> {
    let waves = match id {
        1 => vec![
            WaveDefinition {
                zones: vec![front_zone(6, 3, drone(1, 100, 4.0, 1))],
            },
            WaveDefinition {
                zones: vec![front_zone(10, 5, drone(2, 150, 3.5, 2))],
            },
        ],
        2 => vec![
            WaveDefinition {
                zones: vec![front_zone(10, 5, drone(2, 150, 3.0, 2))],
            },
            WaveDefinition {
                zones: vec![
                    front_zone(8, 4, drone(2, 150, 3.0, 2)),
                    flank_zone(true, 6, drone(3, 250, 3.0, 3)),
                ],
            },
        ],
        3 => vec![
            WaveDefinition {
                zones: vec![
                    front_zone(12, 6, drone(2, 150, 2.5, 3)),
                    flank_zone(false, 6, drone(3, 250, 3.0, 3)),
                ],
            },
            WaveDefinition {
                zones: vec![
                    flank_zone(true, 8, drone(3, 250, 2.5, 3)),
                    flank_zone(false, 8, drone(3, 250, 2.5, 3)),
                    ZoneDefinition {
                        min: Vec3::new(-10.0, 12.0, 5.0),
                        max: Vec3::new(10.0, 20.0, 25.0),
                        spawn_point_names: vec!["sky".into()],
                        cooldown: 6.0,
                        ..front_zone(4, 2, drone(5, 500, 2.0, 5))
                    },
                ],
            },
        ],
        _ => return Err(ConfigError::UnknownLevel(id)),
    };

    Ok(LevelDefinition {
        id,
        name: format!("level-{id}"),
        spawn_points: spawn_points(),
        waves,
    })
}

/// Tutorial step one: a few harmless robots circling the platform.
pub fn tutorial_targets() -> (ZoneDefinition, Vec<Vec3>) {
    let target = RobotCharacteristics {
        speed: 0.3,
        movement: MovementConfig::Orbit {
            radius: 12.0,
            height: 3.0,
        },
        ..drone(1, 10, 0.0, 0)
    };
    let definition = ZoneDefinition {
        min: Vec3::new(-12.0, 3.0, -12.0),
        max: Vec3::new(12.0, 3.0, 12.0),
        spawn_point_names: vec!["ring".into()],
        nb_robots: 3,
        robot_characteristics: target,
        cooldown: 0.0,
        treshold_enemy: 3,
        min_distance: 0.0,
    };
    (definition, vec![Vec3::new(0.0, 3.0, 12.0)])
}

/// Tutorial last step: one small squad that shoots back.
pub fn tutorial_skirmish() -> (ZoneDefinition, Vec<Vec3>) {
    let definition = ZoneDefinition {
        spawn_point_names: vec!["north".into()],
        ..front_zone(3, 3, drone(1, 50, 5.0, 1))
    };
    (definition, vec![Vec3::new(0.0, 8.0, 45.0)])
}
