use glam::{Mat3, Quat, Vec3};

use crate::traits::TransformSink;

/// Position and orientation of a scene object.
/// Local +Z is forward, +Y is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::ZERO)
    }
}

impl TransformSink for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        // Straight up or down: fall back to X as the right axis
        let right = Vec3::Y.cross(forward).try_normalize().unwrap_or(Vec3::X);
        let up = forward.cross(right);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_default_faces_z() {
        let transform = Transform::default();
        assert_close(transform.forward(), Vec3::Z);
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut transform = Transform::from_position(Vec3::new(0.0, 6.0, -12.0));
        transform.look_at(Vec3::ZERO);

        let expected = (Vec3::ZERO - transform.position).normalize();
        assert_close(transform.forward(), expected);
    }

    #[test]
    fn test_look_at_keeps_world_up() {
        let mut transform = Transform::from_position(Vec3::new(5.0, 2.0, 3.0));
        transform.look_at(Vec3::new(-1.0, 0.0, 4.0));

        let up = transform.rotation * Vec3::Y;
        assert!(up.y > 0.0);
        let right = transform.rotation * Vec3::X;
        assert!(right.y.abs() < 1e-5);
    }

    #[test]
    fn test_look_at_straight_down() {
        let mut transform = Transform::from_position(Vec3::new(0.0, 10.0, 0.0));
        transform.look_at(Vec3::ZERO);

        assert_close(transform.forward(), Vec3::NEG_Y);
        assert!(transform.rotation.is_normalized());
    }

    #[test]
    fn test_look_at_own_position_is_ignored() {
        let mut transform = Transform::from_position(Vec3::ONE);
        transform.look_at(Vec3::ONE);
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
