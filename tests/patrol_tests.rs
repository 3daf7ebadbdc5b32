use glam::Vec3;
use procedural_motion::math::{smoothstep, ConstantNoise, Perlin2D};
use procedural_motion::traits::{RandomSource, SeededRandom};
use procedural_motion::{PatrolConfig, Transform, WaypointPatrolController, WaypointSet};

/// Replays a fixed list of draws, cycling when exhausted
struct ScriptedRandom {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    fn new(draws: Vec<usize>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, _low: usize, _high: usize) -> usize {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

fn calm(speed: f32) -> PatrolConfig {
    PatrolConfig {
        speed,
        turbulence_strength: 0.0,
        ..Default::default()
    }
}

fn line_waypoints() -> WaypointSet {
    WaypointSet::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]).unwrap()
}

#[cfg(test)]
mod patrol_tests {
    use super::*;

    #[test]
    fn test_activation_snaps_to_first_waypoint() {
        let start = Vec3::new(3.0, -2.0, 7.5);
        let waypoints = WaypointSet::new(vec![start, Vec3::ZERO, Vec3::ONE]).unwrap();
        let mut patrol = WaypointPatrolController::new(
            PatrolConfig::default(),
            Perlin2D::with_seed(1),
            SeededRandom::new(1),
        )
        .unwrap();
        let mut entity = Transform::from_position(Vec3::splat(-50.0));

        patrol.activate(waypoints, 12.0, &mut entity);

        assert_eq!(
            entity.position, start,
            "Activation must place the entity exactly on waypoint 0"
        );
        assert_eq!(patrol.state().unwrap().current_start, start);
        assert_eq!(patrol.state().unwrap().leg_start_time, 12.0);
    }

    #[test]
    fn test_scenario_arrives_at_five_seconds() {
        let mut patrol = WaypointPatrolController::new(
            calm(2.0),
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        assert!(!patrol.tick(2.5, &mut entity));
        assert_eq!(
            entity.position, Vec3::new(5.0, 0.0, 0.0),
            "Smoothstep midpoint is the leg midpoint"
        );

        assert!(patrol.tick(5.0, &mut entity), "Arrival must re-pick in the same tick");
        assert_eq!(entity.position.x, 10.0);
        assert_eq!(patrol.target_index(), Some(0));

        let state = patrol.state().unwrap();
        assert_eq!(state.current_start, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(state.current_end, Vec3::ZERO);
        assert_eq!(state.leg_start_time, 5.0);
    }

    #[test]
    fn test_no_arrival_just_before_leg_end() {
        let mut patrol = WaypointPatrolController::new(
            calm(2.0),
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        assert!(!patrol.tick(4.99, &mut entity));
        assert!(entity.position.x < 10.0);
        assert_eq!(patrol.target_index(), Some(1));
    }

    #[test]
    fn test_late_tick_does_not_overshoot() {
        let mut patrol = WaypointPatrolController::new(
            calm(2.0),
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        // A long frame hitch lands well past the leg end
        assert!(patrol.tick(9.0, &mut entity));
        assert_eq!(entity.position, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_arrival_for_arbitrary_leg() {
        let a = Vec3::new(-3.0, 1.0, 2.0);
        let b = Vec3::new(4.0, 5.0, -6.0);
        let waypoints = WaypointSet::new(vec![a, b]).unwrap();
        let mut patrol = WaypointPatrolController::new(
            calm(3.0),
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(waypoints, 1.0, &mut entity);

        let duration = a.distance(b) / 3.0;
        assert!(patrol.tick(1.0 + duration + 1e-3, &mut entity));
        assert!((entity.position - b).length() < 1e-4);
    }

    #[test]
    fn test_eased_progress_is_monotonic() {
        let mut patrol = WaypointPatrolController::new(
            calm(2.0),
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        let mut previous = 0.0;
        for i in 1..100 {
            patrol.tick(i as f32 * 0.05, &mut entity);
            assert!(entity.position.x >= previous, "Moved backwards at step {}", i);
            previous = entity.position.x;
        }
    }

    #[test]
    fn test_no_immediate_repeat() {
        for count in 2..=10 {
            let points = (0..count).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect();
            let waypoints = WaypointSet::new(points).unwrap();
            let mut patrol = WaypointPatrolController::new(
                PatrolConfig::default(),
                ConstantNoise::default(),
                SeededRandom::new(count as u64),
            )
            .unwrap();
            let mut entity = Transform::default();
            patrol.activate(waypoints, 0.0, &mut entity);

            let mut previous = patrol.target_index().unwrap();
            for trial in 0..10_000 {
                patrol.pick_new_destination(trial as f32, &entity);
                let current = patrol.target_index().unwrap();
                assert_ne!(
                    current, previous,
                    "Repeated waypoint {} with {} waypoints",
                    current,
                    count
                );
                assert!(current < count);
                previous = current;
            }
        }
    }

    #[test]
    fn test_two_waypoints_alternate() {
        let mut patrol = WaypointPatrolController::new(
            PatrolConfig::default(),
            ConstantNoise::default(),
            SeededRandom::new(99),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        let first = patrol.target_index().unwrap();
        for trial in 0..100 {
            patrol.pick_new_destination(trial as f32, &entity);
            let expected = if trial % 2 == 0 { 1 - first } else { first };
            assert_eq!(patrol.target_index(), Some(expected));
        }
    }

    #[test]
    fn test_new_leg_starts_from_turbulent_position() {
        let config = PatrolConfig {
            speed: 2.0,
            turbulence_strength: 1.5,
            turbulence_frequency: 0.5,
            ..Default::default()
        };
        let mut patrol = WaypointPatrolController::new(
            config,
            ConstantNoise(0.8),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        assert!(patrol.tick(5.0, &mut entity));

        let offset = patrol.turbulence_offset(5.0);
        assert!(offset.length() > 0.0);
        let state = patrol.state().unwrap();
        assert_eq!(state.current_start, entity.position);
        assert_eq!(state.current_start, Vec3::new(10.0, 0.0, 0.0) + offset);
        assert_eq!(state.journey_length, entity.position.distance(Vec3::ZERO));
    }

    #[test]
    fn test_turbulence_stays_within_strength() {
        let strength = 2.0;
        let config = PatrolConfig {
            speed: 2.0,
            turbulence_strength: strength,
            turbulence_frequency: 0.5,
            ..Default::default()
        };
        let patrol = WaypointPatrolController::new(
            config,
            Perlin2D::with_seed(21),
            ScriptedRandom::new(vec![1]),
        )
        .unwrap();

        for i in 0..2000 {
            let offset = patrol.turbulence_offset(i as f32 * 0.1);
            assert!(
                offset.abs().max_element() <= strength + 1e-5,
                "Offset {:?} at step {}",
                offset,
                i
            );
        }
    }

    #[test]
    fn test_turbulence_is_continuous_between_frames() {
        let config = PatrolConfig {
            turbulence_strength: 2.0,
            turbulence_frequency: 0.5,
            ..Default::default()
        };
        let patrol = WaypointPatrolController::new(
            config,
            Perlin2D::with_seed(4),
            ScriptedRandom::new(vec![1]),
        )
        .unwrap();

        let dt = 1.0 / 60.0;
        for i in 0..600 {
            let t = i as f32 * dt;
            let jump = (patrol.turbulence_offset(t + dt) - patrol.turbulence_offset(t)).length();
            assert!(jump < 0.1, "Turbulence jumped {} at t={}", jump, t);
        }
    }

    #[test]
    fn test_reach_threshold_does_not_end_leg() {
        let config = PatrolConfig {
            speed: 2.0,
            reach_threshold: 100.0,
            turbulence_strength: 0.0,
            ..Default::default()
        };
        let mut patrol = WaypointPatrolController::new(
            config,
            ConstantNoise::default(),
            ScriptedRandom::new(vec![1, 0]),
        )
        .unwrap();
        let mut entity = Transform::default();
        patrol.activate(line_waypoints(), 0.0, &mut entity);

        assert!(!patrol.tick(4.0, &mut entity), "Arrival is fraction based only");
        assert_eq!(patrol.target_index(), Some(1));
    }

    #[test]
    fn test_smoothstep_saturation_matches_controller() {
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.5), 1.0);
    }
}
