#![warn(missing_docs)]
//! Cursor-tracking robotic arm for the hero section.
//!
//! [`ArticulatedPose`] is a small segment tree whose transforms are always
//! parent-local; [`RoboticArm`] builds the arm on top of it and
//! [`PoseAnimator`] eases its joints towards targets derived from the
//! normalized pointer position.

mod animator;
mod arm;
mod pose;

pub use animator::{joint_targets, JointTarget, PoseAnimator, RING_SPIN};
pub use arm::{Joint, RoboticArm};
pub use pose::{ArticulatedPose, Part, PartStyle, Segment, SegmentId};

pub use holoexpo_tween::Easing;
