//! The robotic arm model.

use glam::{Mat4, Vec3};
use holoexpo_core::{Shape, Transform3D};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::{ArticulatedPose, Part, PartStyle, SegmentId};

/// Animated joint angles of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Whole-arm rotation about y.
    BaseYaw,
    /// Lower arm lean about z.
    LowerRoll,
    /// Lower arm lean about x.
    LowerPitch,
    /// Upper arm elevation about x.
    UpperPitch,
}

impl Joint {
    /// All joints in a stable order.
    pub const ALL: [Joint; 4] = [
        Joint::BaseYaw,
        Joint::LowerRoll,
        Joint::LowerPitch,
        Joint::UpperPitch,
    ];
}

/// Arm root position in world space.
const ROOT_POSITION: Vec3 = Vec3::new(2.0, -1.0, 0.0);
/// Height of the floor grid.
const FLOOR_Y: f32 = -2.5;

/// Base, lower arm, upper arm, head and ring, plus the floor grid.
#[derive(Debug, Clone)]
pub struct RoboticArm {
    pose: ArticulatedPose,
    root: SegmentId,
    lower: SegmentId,
    upper: SegmentId,
    head: SegmentId,
    ring: SegmentId,
    floor: Part,
}

impl Default for RoboticArm {
    fn default() -> Self {
        Self::new()
    }
}

impl RoboticArm {
    /// Build the arm in its rest pose.
    pub fn new() -> Self {
        let mut pose = ArticulatedPose::new();

        let root = pose.add_segment(
            "base",
            None,
            Transform3D::new(ROOT_POSITION).with_rotation(Vec3::new(0.0, -FRAC_PI_4, 0.0)),
        );
        pose.add_part(
            root,
            Part::new(
                "base_plate",
                Shape::Cylinder {
                    radius_top: 1.0,
                    radius_bottom: 1.2,
                    height: 0.5,
                    segments: 32,
                },
                PartStyle::DarkMetal,
            )
            .at(Transform3D::new(Vec3::new(0.0, -2.0, 0.0))),
        );

        let lower = pose.add_segment(
            "lower_arm",
            Some(root),
            Transform3D::new(Vec3::new(0.0, -1.75, 0.0)),
        );
        pose.add_part(
            lower,
            Part::new(
                "lower_joint",
                Shape::Sphere {
                    radius: 0.6,
                    segments: 32,
                },
                PartStyle::Joint,
            ),
        );
        pose.add_part(
            lower,
            Part::new(
                "lower_beam",
                Shape::Box {
                    width: 0.5,
                    height: 2.5,
                    depth: 0.5,
                },
                PartStyle::DarkMetal,
            )
            .at(Transform3D::new(Vec3::new(0.0, 1.25, 0.0))),
        );
        pose.add_part(
            lower,
            Part::new(
                "neon_strip",
                Shape::Box {
                    width: 0.52,
                    height: 2.0,
                    depth: 0.1,
                },
                PartStyle::Neon,
            )
            .at(Transform3D::new(Vec3::new(0.0, 1.25, 0.0))),
        );

        let upper = pose.add_segment(
            "upper_arm",
            Some(lower),
            Transform3D::new(Vec3::new(0.0, 2.5, 0.0)),
        );
        pose.add_part(
            upper,
            Part::new(
                "upper_joint",
                Shape::Sphere {
                    radius: 0.5,
                    segments: 32,
                },
                PartStyle::Joint,
            ),
        );
        pose.add_part(
            upper,
            Part::new(
                "upper_beam",
                Shape::Cylinder {
                    radius_top: 0.2,
                    radius_bottom: 0.3,
                    height: 2.0,
                    segments: 16,
                },
                PartStyle::DarkMetal,
            )
            .at(Transform3D::new(Vec3::new(0.0, 0.0, 1.0)).with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))),
        );

        let head = pose.add_segment("head", Some(upper), Transform3D::new(Vec3::new(0.0, 0.0, 2.0)));
        pose.add_part(
            head,
            Part::new(
                "head_core",
                Shape::Icosahedron {
                    radius: 0.3,
                    detail: 0,
                },
                PartStyle::Neon,
            ),
        );

        let ring = pose.add_segment("head_ring", Some(head), Transform3D::default());
        pose.add_part(
            ring,
            Part::new(
                "ring",
                Shape::Torus {
                    radius: 0.6,
                    tube: 0.05,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
                PartStyle::Joint,
            ),
        );

        let floor = Part::new(
            "floor_grid",
            Shape::Grid {
                size: 20.0,
                divisions: 20,
            },
            PartStyle::Grid,
        )
        .at(Transform3D::new(Vec3::new(0.0, FLOOR_Y, 0.0)));

        Self {
            pose,
            root,
            lower,
            upper,
            head,
            ring,
            floor,
        }
    }

    /// Current angle of a joint in radians.
    pub fn joint(&self, joint: Joint) -> f32 {
        match joint {
            Joint::BaseYaw => self.pose.local(self.root).rotation.y,
            Joint::LowerRoll => self.pose.local(self.lower).rotation.z,
            Joint::LowerPitch => self.pose.local(self.lower).rotation.x,
            Joint::UpperPitch => self.pose.local(self.upper).rotation.x,
        }
    }

    /// Set a joint angle in radians.
    pub fn set_joint(&mut self, joint: Joint, angle: f32) {
        match joint {
            Joint::BaseYaw => self.pose.local_mut(self.root).rotation.y = angle,
            Joint::LowerRoll => self.pose.local_mut(self.lower).rotation.z = angle,
            Joint::LowerPitch => self.pose.local_mut(self.lower).rotation.x = angle,
            Joint::UpperPitch => self.pose.local_mut(self.upper).rotation.x = angle,
        }
    }

    /// Rotate the head ring by `delta` (x, y, z radians).
    pub fn spin_ring(&mut self, delta: Vec3) {
        self.pose.local_mut(self.ring).rotation += delta;
    }

    /// Current head ring rotation.
    pub fn ring_rotation(&self) -> Vec3 {
        self.pose.local(self.ring).rotation
    }

    /// World-space position of the head.
    pub fn head_position(&self) -> Vec3 {
        self.pose.world_matrix(self.head).transform_point3(Vec3::ZERO)
    }

    /// Underlying segment tree.
    pub fn pose(&self) -> &ArticulatedPose {
        &self.pose
    }

    /// Every part (arm and floor) with its world matrix.
    pub fn world_parts(&self) -> Vec<(Mat4, Part)> {
        let mut parts = self.pose.world_parts();
        parts.push((self.floor.offset.matrix(), self.floor));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::SQRT_2;

    #[test]
    fn rest_pose_angles() {
        let arm = RoboticArm::new();
        assert!((arm.joint(Joint::BaseYaw) + FRAC_PI_4).abs() < 1e-6);
        assert_eq!(arm.joint(Joint::LowerRoll), 0.0);
        assert_eq!(arm.joint(Joint::LowerPitch), 0.0);
        assert_eq!(arm.joint(Joint::UpperPitch), 0.0);
    }

    #[test]
    fn head_position_composes_full_chain() {
        let arm = RoboticArm::new();
        // Head sits 2 units forward of the upper joint, rotated by the base yaw.
        let expected = Vec3::new(2.0 - SQRT_2, -0.25, SQRT_2);
        assert!((arm.head_position() - expected).length() < 1e-4);
    }

    #[test]
    fn joint_changes_move_children() {
        let mut arm = RoboticArm::new();
        let before = arm.head_position();
        arm.set_joint(Joint::UpperPitch, FRAC_PI_2);
        let after = arm.head_position();
        assert!((before - after).length() > 1.0);
        assert_eq!(arm.joint(Joint::UpperPitch), FRAC_PI_2);
    }

    #[test]
    fn ring_spins_without_moving_the_head() {
        let mut arm = RoboticArm::new();
        let head = arm.head_position();
        arm.spin_ring(Vec3::new(0.0, 0.01, 0.02));
        assert_eq!(arm.ring_rotation(), Vec3::new(0.0, 0.01, 0.02));
        assert_eq!(arm.head_position(), head);
    }

    #[test]
    fn parts_include_floor_grid() {
        let arm = RoboticArm::new();
        let parts = arm.world_parts();
        assert_eq!(parts.len(), 9);
        let (floor_matrix, floor) = parts.last().copied().unwrap();
        assert_eq!(floor.style, PartStyle::Grid);
        assert!((floor_matrix.transform_point3(Vec3::ZERO).y - FLOOR_Y).abs() < 1e-6);
    }
}
