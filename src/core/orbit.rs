use glam::{Quat, Vec3};

use crate::config::OrbitConfig;
use crate::core::input::ZoomInput;
use crate::core::zoom::ZoomState;
use crate::error::MotionError;
use crate::math::remap_unit_to_signed;
use crate::traits::{NoiseSource, TransformSink};

/// Noise channel used for the vertical jitter
const HEIGHT_NOISE_CHANNEL: f32 = 0.0;

/// Orbit geometry captured at activation plus the evolving zoom and sway
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Horizontal part of the initial target-to-camera vector
    pub flat_offset: Vec3,
    /// Vertical part of the initial target-to-camera vector
    pub base_height: f32,
    pub zoom: ZoomState,
    pub sway_phase: f32,
}

impl OrbitState {
    /// Capture the orbit from the target and the camera's starting position.
    ///
    /// The two points must differ: a zero base radius makes every later zoom
    /// scale non-finite and is left to the caller to avoid.
    pub fn capture(target: Vec3, camera_position: Vec3, config: &OrbitConfig) -> Self {
        let full_offset = camera_position - target;
        Self {
            flat_offset: Vec3::new(full_offset.x, 0.0, full_offset.z),
            base_height: full_offset.y,
            zoom: ZoomState::new(full_offset.length(), config.min_distance, config.max_distance),
            sway_phase: 0.0,
        }
    }

    /// Target-to-camera offset before vertical noise, for a sway angle in degrees
    pub fn offset(&self, angle_degrees: f32) -> Vec3 {
        let scale = self.zoom.scale();
        let rotation = Quat::from_axis_angle(Vec3::Y, angle_degrees.to_radians());
        let horizontal = rotation * (self.flat_offset * scale);
        Vec3::new(horizontal.x, self.base_height * scale, horizontal.z)
    }
}

/// Swaying, zoomable camera orbit around a target point
#[derive(Debug)]
pub struct OrbitCameraController<N> {
    config: OrbitConfig,
    noise: N,
    target: Option<Vec3>,
    state: Option<OrbitState>,
}

impl<N: NoiseSource> OrbitCameraController<N> {
    pub fn new(config: OrbitConfig, noise: N) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            config,
            noise,
            target: None,
            state: None,
        })
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn state(&self) -> Option<&OrbitState> {
        self.state.as_ref()
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Track a moving target, or clear it to make ticks inert
    pub fn set_target(&mut self, target: Option<Vec3>) {
        self.target = target;
    }

    /// True when ticks move the camera
    pub fn is_active(&self) -> bool {
        self.target.is_some() && self.state.is_some()
    }

    /// Capture the orbit from the camera's current position.
    /// Without a target the controller stays inert.
    pub fn activate(&mut self, target: Option<Vec3>, camera: &impl TransformSink) {
        self.target = target;
        let Some(target) = target else {
            log::warn!("Orbit camera activated without a target, ticks will be ignored");
            self.state = None;
            return;
        };

        let state = OrbitState::capture(target, camera.position(), &self.config);
        log::info!(
            "Orbit camera activated: radius {:.2}, height {:.2}",
            state.zoom.base_radius,
            state.base_height
        );
        self.state = Some(state);
    }

    /// Advance one frame. Returns false when inert.
    pub fn tick(
        &mut self,
        now: f32,
        dt: f32,
        input: ZoomInput,
        camera: &mut impl TransformSink,
    ) -> bool {
        let (Some(target), Some(state)) = (self.target, self.state.as_mut()) else {
            return false;
        };
        let config = &self.config;

        state
            .zoom
            .apply_input(input, config.zoom_speed_mouse, config.zoom_speed_touch);
        state.zoom.smooth(dt, config.zoom_smoothness);

        state.sway_phase += dt * config.sway_speed;
        let angle = state.sway_phase.sin() * config.sway_angle;

        let jitter = remap_unit_to_signed(
            self.noise
                .noise2(now * config.noise_frequency, HEIGHT_NOISE_CHANNEL),
        ) * config.noise_amplitude;

        let position = target + state.offset(angle) + Vec3::Y * jitter;
        camera.set_position(position);
        camera.look_at(target);
        true
    }
}
