//! Local poses with rotations kept as XYZ Euler angles.
//!
//! Rigs are authored in Euler angles and animation hooks overwrite single
//! axes (e.g. only the forearm's Z rotation), so poses stay in Euler form
//! until they are written to a `Transform`.

use std::fmt;

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointPose {
    pub translation: Vec3,
    /// Intrinsic XYZ Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl JointPose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_translation(Vec3::new(x, y, z))
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    pub fn to_transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            rotation: self.quat(),
            scale: self.scale,
        }
    }
}

impl Default for JointPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The statically configured pose of a node the animation driver writes to.
/// Every frame starts again from this pose, so nothing accumulates.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RestPose(pub JointPose);

/// A per-frame animation function: a pure function of elapsed time that
/// adjusts the pose of the one node it is bound to.
#[derive(Clone, Copy)]
pub struct PoseHook(pub fn(f32, &mut JointPose));

impl PoseHook {
    pub fn apply(&self, t: f32, pose: &mut JointPose) {
        (self.0)(t, pose)
    }
}

impl fmt::Debug for PoseHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PoseHook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose_is_identity_transform() {
        assert_eq!(JointPose::IDENTITY.to_transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_euler_order_matches_xyz_composition() {
        let pose = JointPose::IDENTITY.with_rotation(Vec3::new(0.3, -0.2, 0.1));
        let expected =
            Quat::from_rotation_x(0.3) * Quat::from_rotation_y(-0.2) * Quat::from_rotation_z(0.1);
        assert!(pose.quat().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_hook_applies_to_pose() {
        fn lift(t: f32, pose: &mut JointPose) {
            pose.translation.y = t * 2.0;
        }
        let mut pose = JointPose::IDENTITY;
        PoseHook(lift).apply(0.25, &mut pose);
        assert_eq!(pose.translation.y, 0.5);
    }
}
