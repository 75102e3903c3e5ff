#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Quat, Vec3};

    use robowave_core::config::MovementConfig;
    use robowave_core::constants::*;

    use crate::aim::{aim_towards, look_rotation};
    use crate::movement::*;

    // ---- Repulsion ----

    #[test]
    fn test_collision_ignores_identical_position() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let offset = check_collision(p, &[p]);
        assert_eq!(offset, Vec3::ZERO);
        assert!(offset.is_finite());
    }

    #[test]
    fn test_collision_is_inverse_distance() {
        let p = Vec3::ZERO;
        let near = check_collision(p, &[Vec3::new(2.0, 0.0, 0.0)]);
        // Pushed away along -X with magnitude 50 / 2.
        assert_relative_eq!(near.x, -REPULSION_STRENGTH / 2.0);
        assert_relative_eq!(near.y, 0.0);

        let far = check_collision(p, &[Vec3::new(0.0, 0.0, 10.0)]);
        assert_relative_eq!(far.z, -REPULSION_STRENGTH / 10.0);
    }

    #[test]
    fn test_collision_sums_neighbors_and_skips_self() {
        let p = Vec3::ZERO;
        let neighbors = [p, Vec3::new(5.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0)];
        // Symmetric neighbors cancel out; self is skipped.
        let offset = check_collision(p, &neighbors);
        assert_relative_eq!(offset.length(), 0.0);
    }

    // ---- Gravity ----

    #[test]
    fn test_gravity_first_step() {
        let mut movement = GravityMovement::default();
        let mut position = Vec3::ZERO;
        let destination = Vec3::new(0.0, 0.0, 100.0);

        let remaining = movement.moove(&mut position, &[], destination, 1.0, 0.5);

        // force = 0.1 toward +Z, velocity = (0 + 0.1) * 0.99
        let force = GRAVITY_ATTRACTION_GAIN;
        let velocity = force * GRAVITY_DAMPING;
        assert_relative_eq!(movement.velocity.z, velocity);
        assert_relative_eq!(position.z, (force + velocity) * 0.5);
        assert_relative_eq!(remaining, 100.0 - position.z, epsilon = 1e-4);
    }

    #[test]
    fn test_gravity_velocity_is_damped_leaky_integrator() {
        let mut movement = GravityMovement::default();
        let mut position = Vec3::ZERO;
        let destination = Vec3::new(1000.0, 0.0, 0.0);
        for _ in 0..2000 {
            movement.moove(&mut position, &[], destination, 1.0, 0.0);
        }
        // Fixed point of v = (v + 0.1) * 0.99.
        let terminal = GRAVITY_ATTRACTION_GAIN * GRAVITY_DAMPING / (1.0 - GRAVITY_DAMPING);
        assert_relative_eq!(movement.velocity.x, terminal, epsilon = 1e-2);
        // dt = 0 never moves the robot.
        assert_eq!(position, Vec3::ZERO);
    }

    #[test]
    fn test_gravity_repulsion_pushes_apart() {
        let mut movement = GravityMovement::default();
        let mut position = Vec3::ZERO;
        let neighbor = Vec3::new(1.0, 0.0, 0.0);
        let others = [position, neighbor];
        movement.moove(&mut position, &others, Vec3::ZERO, 1.0, 0.01);
        assert!(position.x < 0.0, "robot should move away from neighbor");
    }

    // ---- Orbit ----

    #[test]
    fn test_orbit_sweeps_fixed_radius() {
        let mut movement = OrbitMovement {
            radius: 8.0,
            height: 3.0,
            angle: 0.0,
        };
        let mut position = Vec3::new(8.0, 3.0, 0.0);
        let destination = Vec3::new(100.0, 100.0, 100.0);
        for _ in 0..50 {
            movement.moove(&mut position, &[], destination, 0.5, 0.1);
            assert_relative_eq!(Vec3::new(position.x, 0.0, position.z).length(), 8.0, epsilon = 1e-4);
            assert_relative_eq!(position.y, 3.0);
        }
        assert_relative_eq!(movement.angle, 2.5, epsilon = 1e-4);
        assert_relative_eq!(position.x, 8.0 * 2.5f32.cos(), epsilon = 1e-4);
    }

    #[test]
    fn test_orbit_from_config_keeps_spawn_angle() {
        let start = Vec3::new(0.0, 2.0, 6.0);
        let movement = Movement::from_config(
            MovementConfig::Orbit {
                radius: 6.0,
                height: 2.0,
            },
            start,
        );
        match movement {
            Movement::Orbit(orbit) => {
                assert_relative_eq!(orbit.angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-6)
            }
            other => panic!("expected orbit, got {other:?}"),
        }
    }

    // ---- Sinusoidal ----

    #[test]
    fn test_sinusoidal_speed_is_lerp_fraction() {
        let mut movement = SinusoidalMovement { frequency: 2.0 };
        let mut position = Vec3::ZERO;
        let destination = Vec3::new(10.0, 0.0, 0.0);
        let dt = 0.25;

        movement.moove(&mut position, &[], destination, 0.1, dt);

        assert_relative_eq!(position.x, 1.0);
        assert_relative_eq!(position.y, SINUSOIDAL_AMPLITUDE * (2.0f32 * dt).sin());
    }

    #[test]
    fn test_sinusoidal_full_fraction_reaches_destination() {
        let mut movement = SinusoidalMovement { frequency: 0.0 };
        let mut position = Vec3::new(3.0, 1.0, -2.0);
        let remaining = movement.moove(&mut position, &[], Vec3::ONE, 1.0, 0.016);
        assert_relative_eq!(remaining, 0.0);
    }

    // ---- Aim ----

    #[test]
    fn test_look_rotation_points_forward_axis() {
        let from = Vec3::new(1.0, 1.0, 1.0);
        for target in [
            Vec3::new(5.0, 1.0, 1.0),
            Vec3::new(1.0, 4.0, 1.0),
            Vec3::new(-3.0, -2.0, 7.0),
        ] {
            let rotation = look_rotation(from, target).unwrap();
            let forward = rotation * Vec3::Z;
            let expected = (target - from).normalize();
            assert_relative_eq!(forward.x, expected.x, epsilon = 1e-4);
            assert_relative_eq!(forward.y, expected.y, epsilon = 1e-4);
            assert_relative_eq!(forward.z, expected.z, epsilon = 1e-4);
        }
        assert!(look_rotation(from, from).is_none());
    }

    #[test]
    fn test_aim_turns_gradually() {
        let from = Vec3::ZERO;
        let target = Vec3::new(10.0, 0.0, 0.0);
        let goal = look_rotation(from, target).unwrap();

        let step = aim_towards(Quat::IDENTITY, from, target, 0.05);
        let before = Quat::IDENTITY.angle_between(goal);
        let after = step.angle_between(goal);
        assert!(after < before, "aim should get closer to the goal");
        assert!(after > 0.0, "aim should not snap in one short frame");

        let mut rotation = Quat::IDENTITY;
        for _ in 0..200 {
            rotation = aim_towards(rotation, from, target, 0.05);
        }
        assert!(rotation.angle_between(goal) < 1e-2);
    }

    #[test]
    fn test_aim_ignores_zero_dt() {
        let rotation = aim_towards(Quat::IDENTITY, Vec3::ZERO, Vec3::X, 0.0);
        assert_eq!(rotation, Quat::IDENTITY);
    }
}
