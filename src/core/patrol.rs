use glam::Vec3;

use crate::config::PatrolConfig;
use crate::error::MotionError;
use crate::math::{remap_unit_to_signed, smoothstep};
use crate::traits::{NoiseSource, RandomSource, TransformSink};

/// Noise channel per axis, far enough apart to decorrelate x, y and z
const TURBULENCE_CHANNELS: [f32; 3] = [0.0, 10.0, 20.0];

/// Non-empty, read-only list of patrol destinations
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointSet {
    points: Vec<Vec3>,
}

impl WaypointSet {
    pub fn new(points: Vec<Vec3>) -> Result<Self, MotionError> {
        if points.is_empty() {
            return Err(MotionError::EmptyWaypointSet);
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Vec3 {
        self.points[0]
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }
}

/// The active leg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolState {
    pub current_start: Vec3,
    pub current_end: Vec3,
    pub journey_length: f32,
    pub leg_start_time: f32,
    /// None until the first destination has been picked
    pub current_target_index: Option<usize>,
}

impl PatrolState {
    /// Leg progress at `now`, 1.0 or more once the leg is complete
    pub fn fraction(&self, now: f32, speed: f32) -> f32 {
        if self.journey_length == 0.0 {
            return 1.0;
        }
        let dist_covered = (now - self.leg_start_time) * speed;
        dist_covered / self.journey_length
    }
}

/// Wanders between random waypoints with eased legs and 3D turbulence
#[derive(Debug)]
pub struct WaypointPatrolController<N, R> {
    config: PatrolConfig,
    noise: N,
    random: R,
    waypoints: Option<WaypointSet>,
    state: Option<PatrolState>,
}

impl<N: NoiseSource, R: RandomSource> WaypointPatrolController<N, R> {
    pub fn new(config: PatrolConfig, noise: N, random: R) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            config,
            noise,
            random,
            waypoints: None,
            state: None,
        })
    }

    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    pub fn state(&self) -> Option<&PatrolState> {
        self.state.as_ref()
    }

    pub fn target_index(&self) -> Option<usize> {
        self.state.and_then(|s| s.current_target_index)
    }

    pub fn waypoints(&self) -> Option<&WaypointSet> {
        self.waypoints.as_ref()
    }

    /// True when ticks move the entity
    pub fn is_moving(&self) -> bool {
        self.waypoints.as_ref().is_some_and(|w| w.len() >= 2)
    }

    /// Snap the entity to the first waypoint and start the first leg
    pub fn activate(&mut self, waypoints: WaypointSet, now: f32, entity: &mut impl TransformSink) {
        let origin = waypoints.first();
        entity.set_position(origin);

        if waypoints.len() < 2 {
            log::warn!("Patrol has a single waypoint, entity will stay at {:?}", origin);
        } else {
            log::info!("Patrol activated with {} waypoints", waypoints.len());
        }

        self.state = Some(PatrolState {
            current_start: origin,
            current_end: origin,
            journey_length: 0.0,
            leg_start_time: now,
            current_target_index: None,
        });
        self.waypoints = Some(waypoints);
        self.pick_new_destination(now, &*entity);
    }

    /// Advance one frame. Returns true when the leg completed and a new
    /// destination was picked during this tick.
    pub fn tick(&mut self, now: f32, entity: &mut impl TransformSink) -> bool {
        if !self.is_moving() {
            return false;
        }
        let Some(state) = self.state else {
            return false;
        };

        let fraction = state.fraction(now, self.config.speed);
        let smooth_fraction = smoothstep(0.0, 1.0, fraction);
        let base_position = state.current_start.lerp(state.current_end, smooth_fraction);

        entity.set_position(base_position + self.turbulence_offset(now));

        if fraction >= 1.0 {
            self.pick_new_destination(now, &*entity);
            return true;
        }
        false
    }

    /// Per-axis noise offset at `now`, each axis within +/- turbulence strength
    pub fn turbulence_offset(&self, now: f32) -> Vec3 {
        let x = now * self.config.turbulence_frequency;
        let [cx, cy, cz] = TURBULENCE_CHANNELS.map(|channel| {
            remap_unit_to_signed(self.noise.noise2(x, channel))
        });
        Vec3::new(cx, cy, cz) * self.config.turbulence_strength
    }

    /// Start a new leg from the entity's actual position toward a random
    /// waypoint other than the current target. No-op before activation.
    pub fn pick_new_destination(&mut self, now: f32, entity: &impl TransformSink) {
        let (Some(waypoints), Some(state)) = (self.waypoints.as_ref(), self.state.as_mut()) else {
            return;
        };

        let count = waypoints.len();
        let mut index = self.random.uniform_int(0, count);
        if count >= 2 {
            while Some(index) == state.current_target_index {
                index = self.random.uniform_int(0, count);
            }
        }

        let start = entity.position();
        let end = waypoints.as_slice()[index];
        *state = PatrolState {
            current_start: start,
            current_end: end,
            journey_length: start.distance(end),
            leg_start_time: now,
            current_target_index: Some(index),
        };

        log::debug!(
            "Patrol leg {} -> waypoint {} ({:.2}m) at t={:.2}",
            start,
            index,
            state.journey_length,
            now
        );
    }
}
