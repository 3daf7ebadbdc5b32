use glam::Vec3;

/// Instantiates a prefab into the host scene
pub trait Spawner {
    fn spawn(&mut self, position: Vec3, scale: Vec3);
}
