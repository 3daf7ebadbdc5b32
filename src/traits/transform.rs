use glam::Vec3;

/// Write side of a scene-graph transform
pub trait TransformSink {
    /// Current world position
    fn position(&self) -> Vec3;

    /// Move to a world position
    fn set_position(&mut self, position: Vec3);

    /// Orient to face a world point
    fn look_at(&mut self, _target: Vec3) {}
}
