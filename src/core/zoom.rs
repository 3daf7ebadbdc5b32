use crate::core::input::ZoomInput;
use crate::math::lerp;

/// Smoothed orbit radius driven by scroll and pinch deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Radius at activation, the 100% reference
    pub base_radius: f32,
    /// Radius requested by input, within [min, max] once input was applied
    pub target_radius: f32,
    /// Radius actually applied
    pub current_radius: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl ZoomState {
    /// Both radii start at `base_radius`. An out-of-range start is clamped by
    /// the first `apply_input` and eased in by `smooth`.
    pub fn new(base_radius: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            base_radius,
            target_radius: base_radius,
            current_radius: base_radius,
            min_distance,
            max_distance,
        }
    }

    /// Fold this tick's deltas into the target radius.
    /// Scrolling up zooms in, pinching in zooms out.
    pub fn apply_input(&mut self, input: ZoomInput, speed_mouse: f32, speed_touch: f32) {
        self.target_radius -= input.scroll * speed_mouse;
        if let Some(pinch) = input.pinch {
            self.target_radius += pinch * speed_touch;
        }
        self.target_radius = self.target_radius.clamp(self.min_distance, self.max_distance);
    }

    /// Move the current radius toward the target by `dt * smoothness`.
    /// Factors above 1 overshoot, callers keep the product below 1.
    pub fn smooth(&mut self, dt: f32, smoothness: f32) {
        self.current_radius = lerp(self.current_radius, self.target_radius, dt * smoothness);
    }

    /// Current over base radius. Infinite or NaN when the base radius is zero.
    pub fn scale(&self) -> f32 {
        self.current_radius / self.base_radius
    }
}
