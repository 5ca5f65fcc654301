//! Pointer-driven joint easing.

use glam::{Vec2, Vec3};
use holoexpo_tween::{Animator, Easing};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::{Joint, RoboticArm};

/// Head ring angular velocity (x, y, z) in radians per second.
pub const RING_SPIN: Vec3 = Vec3::new(0.0, 0.6, 1.2);

/// Where one joint is heading and how long it takes to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTarget {
    /// Joint being driven.
    pub joint: Joint,
    /// Target angle in radians.
    pub angle: f32,
    /// Transition duration in seconds.
    pub duration: f32,
}

/// Joint targets for a normalized pointer position (both axes in [-1, 1], y up).
pub fn joint_targets(pointer: Vec2) -> [JointTarget; 4] {
    [
        JointTarget {
            joint: Joint::BaseYaw,
            angle: -FRAC_PI_4 + pointer.x * 0.5,
            duration: 1.0,
        },
        JointTarget {
            joint: Joint::LowerRoll,
            angle: pointer.x * 0.2,
            duration: 1.0,
        },
        JointTarget {
            joint: Joint::LowerPitch,
            angle: -pointer.y * 0.3,
            duration: 1.0,
        },
        JointTarget {
            joint: Joint::UpperPitch,
            angle: FRAC_PI_2 + pointer.y * 0.5,
            duration: 0.8,
        },
    ]
}

/// Eases the arm joints towards the pointer.
///
/// Every [`PoseAnimator::update`] restarts each joint's tween from its
/// current in-flight angle, so the arm keeps chasing a moving pointer
/// without tweens piling up.
#[derive(Debug, Clone)]
pub struct PoseAnimator {
    tweens: Animator<Joint>,
    pointer: Vec2,
    easing: Easing,
}

impl PoseAnimator {
    /// Start from the arm's current joint angles.
    pub fn new(arm: &RoboticArm) -> Self {
        let mut tweens = Animator::new();
        for joint in Joint::ALL {
            tweens.set(joint, arm.joint(joint));
        }
        Self {
            tweens,
            pointer: Vec2::ZERO,
            easing: Easing::Power1Out,
        }
    }

    /// Use a different easing curve for joint transitions.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Record the latest normalized pointer position (clamped to [-1, 1]).
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Last recorded normalized pointer position.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Retarget every joint, write the sampled angles into `arm` and spin
    /// the head ring by `dt` seconds.
    pub fn update(&mut self, arm: &mut RoboticArm, now: f32, dt: f32) {
        for target in joint_targets(self.pointer) {
            self.tweens
                .animate_to(target.joint, target.angle, target.duration, self.easing, now);
            let angle = self.tweens.value_or(target.joint, now, target.angle);
            arm.set_joint(target.joint, angle);
        }
        self.tweens.advance(now);
        arm.spin_ring(RING_SPIN * dt.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animator: &mut PoseAnimator, arm: &mut RoboticArm, frames: usize) {
        let dt = 1.0 / 60.0;
        for frame in 0..frames {
            animator.update(arm, frame as f32 * dt, dt);
        }
    }

    #[test]
    fn targets_follow_pointer_linearly() {
        let targets = joint_targets(Vec2::new(1.0, -1.0));
        assert!((targets[0].angle - (-FRAC_PI_4 + 0.5)).abs() < 1e-6);
        assert!((targets[1].angle - 0.2).abs() < 1e-6);
        assert!((targets[2].angle - 0.3).abs() < 1e-6);
        assert!((targets[3].angle - (FRAC_PI_2 - 0.5)).abs() < 1e-6);
        assert_eq!(targets[3].duration, 0.8);
    }

    #[test]
    fn centered_pointer_keeps_base_at_rest() {
        let mut arm = RoboticArm::new();
        let mut animator = PoseAnimator::new(&arm);
        run(&mut animator, &mut arm, 120);
        assert!((arm.joint(Joint::BaseYaw) + FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn joints_converge_on_pointer_targets() {
        let mut arm = RoboticArm::new();
        let mut animator = PoseAnimator::new(&arm);
        animator.set_pointer(Vec2::new(0.5, 0.5));
        run(&mut animator, &mut arm, 900);

        for target in joint_targets(Vec2::new(0.5, 0.5)) {
            let angle = arm.joint(target.joint);
            assert!(
                (angle - target.angle).abs() < 1e-3,
                "{:?}: {angle} vs {}",
                target.joint,
                target.angle
            );
        }
    }

    #[test]
    fn joints_move_gradually() {
        let mut arm = RoboticArm::new();
        let mut animator = PoseAnimator::new(&arm);
        run(&mut animator, &mut arm, 2);
        let pitch = arm.joint(Joint::UpperPitch);
        assert!(pitch > 0.0 && pitch < FRAC_PI_2 * 0.5);
    }

    #[test]
    fn easing_choice_changes_the_approach() {
        let step = |easing| {
            let mut arm = RoboticArm::new();
            let mut animator = PoseAnimator::new(&arm).with_easing(easing);
            animator.update(&mut arm, 0.0, 0.0);
            animator.update(&mut arm, 0.1, 0.1);
            arm.joint(Joint::UpperPitch)
        };
        let linear = step(Easing::Linear);
        let eased = step(Easing::Power1Out);
        assert!(linear > 0.0);
        assert!(eased > linear);
    }

    #[test]
    fn pointer_is_clamped() {
        let mut animator = PoseAnimator::new(&RoboticArm::new());
        animator.set_pointer(Vec2::new(3.0, -7.0));
        assert_eq!(animator.pointer(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn ring_spins_with_time() {
        let mut arm = RoboticArm::new();
        let mut animator = PoseAnimator::new(&arm);
        animator.update(&mut arm, 0.0, 0.5);
        let rotation = arm.ring_rotation();
        assert!((rotation.z - 0.6).abs() < 1e-6);
        assert!((rotation.y - 0.3).abs() < 1e-6);
    }
}
