/// Continuous, deterministic 2D noise
pub trait NoiseSource {
    /// Sample at (x, y), result in [0, 1].
    /// Equal inputs must return equal outputs.
    fn noise2(&self, x: f32, y: f32) -> f32;
}
