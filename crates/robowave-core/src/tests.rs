#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use crate::commands::PlayerInput;
    use crate::config::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{lerp_color, sanitize_dt, Bounds};

    const LEVEL_JSON: &str = r#"{
        "id": 7,
        "name": "Rooftop",
        "spawnPoints": { "north": [0.0, 10.0, 40.0], "east": [40.0, 10.0, 0.0] },
        "waves": [
            {
                "zones": [
                    {
                        "min": [-20.0, 5.0, 20.0],
                        "max": [20.0, 15.0, 50.0],
                        "spawnPointNames": ["north", "east"],
                        "nbRobots": 12,
                        "robotCharacteristics": {
                            "shotFreq": 3.0,
                            "bulletFreq": 0.2,
                            "nbBullets": 2,
                            "speed": 1.0,
                            "life": 2,
                            "score": 100,
                            "bulletSpeed": 6.0,
                            "bulletDmg": 10.0
                        },
                        "cooldown": 4.0,
                        "tresholdEnemy": 5,
                        "minDistance": 2.0
                    }
                ]
            }
        ]
    }"#;

    fn characteristics() -> RobotCharacteristics {
        RobotCharacteristics {
            shot_freq: 2.0,
            bullet_freq: 0.25,
            nb_bullets: 1,
            speed: 1.0,
            life: 1,
            score: 50,
            bullet_speed: 5.0,
            bullet_dmg: 5.0,
            movement: MovementConfig::Gravity,
        }
    }

    #[test]
    fn test_level_file_uses_authoring_field_names() {
        let level = LevelDefinition::from_json(LEVEL_JSON).unwrap();
        assert_eq!(level.id, 7);
        assert_eq!(level.waves.len(), 1);

        let zone = &level.waves[0].zones[0];
        assert_eq!(zone.nb_robots, 12);
        assert_eq!(zone.treshold_enemy, 5);
        assert_eq!(zone.spawn_point_names, vec!["north", "east"]);
        assert_eq!(zone.robot_characteristics.nb_bullets, 2);
        // No movement given: gravity steering.
        assert_eq!(zone.robot_characteristics.movement, MovementConfig::Gravity);
        assert!(zone.validate(0).is_ok());
        assert_eq!(level.total_robots(), 12);
    }

    #[test]
    fn test_missing_characteristic_field_is_rejected() {
        let broken = LEVEL_JSON.replace(r#""life": 2,"#, "");
        let err = LevelDefinition::from_json(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_level_without_waves_is_rejected() {
        let json = r#"{ "id": 3, "name": "Empty", "spawnPoints": {}, "waves": [] }"#;
        let err = LevelDefinition::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyLevel(3)));
    }

    #[test]
    fn test_spawn_points_resolve_by_name() {
        let level = LevelDefinition::from_json(LEVEL_JSON).unwrap();
        let zone = &level.waves[0].zones[0];
        let points = level.resolve_spawn_points(0, zone).unwrap();
        assert_eq!(points, vec![Vec3::new(0.0, 10.0, 40.0), Vec3::new(40.0, 10.0, 0.0)]);
    }

    #[test]
    fn test_unknown_spawn_point_names_the_offender() {
        let level = LevelDefinition::from_json(LEVEL_JSON).unwrap();
        let mut zone = level.waves[0].zones[0].clone();
        zone.spawn_point_names.push("basement".into());
        let err = level.resolve_spawn_points(4, &zone).unwrap_err();
        match err {
            ConfigError::UnknownSpawnPoint { zone, name } => {
                assert_eq!(zone, 4);
                assert_eq!(name, "basement");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_characteristics_validation() {
        assert!(characteristics().validate().is_ok());

        let mut dead_on_arrival = characteristics();
        dead_on_arrival.life = 0;
        assert!(matches!(
            dead_on_arrival.validate(),
            Err(ConfigError::InvalidCharacteristics { field: "life", .. })
        ));

        let mut immortal = characteristics();
        immortal.life = u32::MAX;
        assert!(matches!(
            immortal.validate(),
            Err(ConfigError::InvalidCharacteristics { field: "life", .. })
        ));

        let mut nan_speed = characteristics();
        nan_speed.speed = f32::NAN;
        assert!(matches!(
            nan_speed.validate(),
            Err(ConfigError::InvalidCharacteristics { field: "speed", .. })
        ));

        let mut never_shoots = characteristics();
        never_shoots.shot_freq = 0.0;
        assert!(never_shoots.validate().is_err());
        // A harmless robot does not need a volley period.
        never_shoots.nb_bullets = 0;
        assert!(never_shoots.validate().is_ok());

        let mut bad_orbit = characteristics();
        bad_orbit.movement = MovementConfig::Orbit {
            radius: -3.0,
            height: 2.0,
        };
        assert!(bad_orbit.validate().is_err());
    }

    #[test]
    fn test_zone_validation() {
        let level = LevelDefinition::from_json(LEVEL_JSON).unwrap();
        let zone = level.waves[0].zones[0].clone();

        let mut inverted = zone.clone();
        inverted.min = Vec3::new(30.0, 0.0, 0.0);
        assert!(matches!(
            inverted.validate(2),
            Err(ConfigError::InvalidBounds { zone: 2, .. })
        ));

        let mut uncapped = zone.clone();
        uncapped.treshold_enemy = 0;
        assert!(uncapped.validate(0).is_err());

        let mut no_points = zone;
        no_points.spawn_point_names.clear();
        assert!(matches!(
            no_points.validate(1),
            Err(ConfigError::NoSpawnPoints { zone: 1 })
        ));
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(0.0), 0.0);
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_bounds() {
        let bounds = Bounds::new(Vec3::new(-1.0, 0.0, 2.0), Vec3::new(1.0, 4.0, 6.0));
        assert!(bounds.is_ordered());
        assert!(bounds.contains(Vec3::new(0.0, 2.0, 4.0)));
        assert!(bounds.contains(bounds.min));
        assert!(!bounds.contains(Vec3::new(0.0, 5.0, 4.0)));
        assert_eq!(bounds.center(), Vec3::new(0.0, 2.0, 4.0));
    }

    #[test]
    fn test_lerp_color_clamps() {
        let c = lerp_color([0.0, 0.0, 0.0], [1.0, 0.5, 0.0], 0.5);
        assert_relative_eq!(c[0], 0.5);
        assert_relative_eq!(c[1], 0.25);
        assert_eq!(lerp_color([0.0; 3], [1.0; 3], 3.0), [1.0; 3]);
    }

    #[test]
    fn test_input_serde_tagged() {
        let input = PlayerInput::TriggerPressed { force: 0.75 };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""type":"TriggerPressed""#));
        let back: PlayerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_snapshot_serializes_events() {
        let snapshot = GameStateSnapshot {
            events: vec![GameEvent::GunOverheated, GameEvent::EnemyDisposed { id: 9 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
        assert_eq!(back.time_scale.scale, 1.0);
    }
}
