use glam::{Quat, Vec3};
use serde::Serialize;

use crate::config::MotionConfig;
use crate::core::clock::FrameInfo;
use crate::core::input::ZoomInput;
use crate::core::orbit::OrbitCameraController;
use crate::core::patrol::{WaypointPatrolController, WaypointSet};
use crate::core::transform::Transform;
use crate::error::MotionError;
use crate::math::Perlin2D;
use crate::traits::{FrameClock, SeededRandom};

/// Snapshot of both controlled objects after one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSample {
    pub frame: u64,
    pub time: f32,
    pub patrol_position: Vec3,
    pub patrol_target: Option<usize>,
    /// Leg completed this tick
    pub retargeted: bool,
    pub camera_position: Vec3,
    pub camera_rotation: Quat,
    pub zoom_radius: Option<f32>,
}

/// One patrolling entity and one orbiting camera, ticked together
pub struct MotionScene {
    patrol: WaypointPatrolController<Perlin2D, SeededRandom>,
    orbit: OrbitCameraController<Perlin2D>,
    entity: Transform,
    camera: Transform,
}

impl MotionScene {
    /// Build and activate both controllers at time zero
    pub fn new(config: &MotionConfig, seed: u64) -> Result<Self, MotionError> {
        config.validate()?;
        let noise = Perlin2D::with_seed(config.scene.noise_seed);
        let waypoints = WaypointSet::new(config.scene.waypoints.clone())?;

        let mut patrol = WaypointPatrolController::new(
            config.patrol.clone(),
            noise.clone(),
            SeededRandom::new(seed),
        )?;
        let mut orbit = OrbitCameraController::new(config.orbit.clone(), noise)?;

        let mut entity = Transform::default();
        let camera = Transform::from_position(config.scene.camera_position);

        patrol.activate(waypoints, 0.0, &mut entity);
        orbit.activate(config.scene.orbit_target, &camera);

        Ok(Self {
            patrol,
            orbit,
            entity,
            camera,
        })
    }

    pub fn entity(&self) -> &Transform {
        &self.entity
    }

    pub fn camera(&self) -> &Transform {
        &self.camera
    }

    pub fn set_orbit_target(&mut self, target: Option<Vec3>) {
        self.orbit.set_target(target);
    }

    /// Tick both controllers once
    pub fn step(&mut self, frame: FrameInfo, input: ZoomInput) -> FrameSample {
        let retargeted = self.patrol.tick(frame.time, &mut self.entity);
        self.orbit
            .tick(frame.time, frame.delta, input, &mut self.camera);

        FrameSample {
            frame: frame.number,
            time: frame.time,
            patrol_position: self.entity.position,
            patrol_target: self.patrol.target_index(),
            retargeted,
            camera_position: self.camera.position,
            camera_rotation: self.camera.rotation,
            zoom_radius: self.orbit.state().map(|s| s.zoom.current_radius),
        }
    }

    /// Drive `frames` ticks from `clock`, asking `input_for` for each frame's zoom input
    pub fn run<C, F>(&mut self, clock: &mut C, frames: usize, mut input_for: F) -> Vec<FrameSample>
    where
        C: FrameClock,
        F: FnMut(&FrameInfo) -> ZoomInput,
    {
        (0..frames)
            .map(|_| {
                let frame = clock.tick();
                let input = input_for(&frame);
                self.step(frame, input)
            })
            .collect()
    }
}
