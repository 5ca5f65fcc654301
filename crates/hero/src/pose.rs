//! Segment tree with parent-local transforms.

use glam::Mat4;
use holoexpo_core::{Rgba, Shape, Transform3D};

/// Handle to a segment inside one [`ArticulatedPose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(usize);

/// Visual style of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartStyle {
    /// Glowing accent (green-cyan).
    Neon,
    /// Structural body.
    DarkMetal,
    /// Glowing joint (blue).
    Joint,
    /// Floor grid.
    Grid,
}

impl PartStyle {
    /// Base color of the style.
    pub fn color(self) -> Rgba {
        match self {
            PartStyle::Neon => Rgba::hex(0x00ffaa),
            PartStyle::DarkMetal => Rgba::hex(0x3a4450),
            PartStyle::Joint => Rgba::hex(0x00aaff),
            PartStyle::Grid => Rgba::hex(0x00ffaa).with_alpha(0.2),
        }
    }

    /// Emissive intensity of the style.
    pub fn emissive(self) -> f32 {
        match self {
            PartStyle::Neon => 0.2,
            PartStyle::Joint => 0.5,
            PartStyle::DarkMetal | PartStyle::Grid => 0.0,
        }
    }
}

/// A rigid shape attached to a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    /// Debug name.
    pub name: &'static str,
    /// Geometry.
    pub shape: Shape,
    /// Placement relative to the owning segment.
    pub offset: Transform3D,
    /// Visual style.
    pub style: PartStyle,
}

impl Part {
    /// A part at the segment origin.
    pub fn new(name: &'static str, shape: Shape, style: PartStyle) -> Self {
        Self {
            name,
            shape,
            offset: Transform3D::default(),
            style,
        }
    }

    /// Set the placement relative to the owning segment.
    pub fn at(mut self, offset: Transform3D) -> Self {
        self.offset = offset;
        self
    }
}

/// One node of the tree.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Debug name.
    pub name: &'static str,
    /// Parent segment, `None` for roots.
    pub parent: Option<SegmentId>,
    /// Transform relative to the parent.
    pub local: Transform3D,
    /// Shapes carried by this segment.
    pub parts: Vec<Part>,
}

/// Tree of rigid segments.
///
/// Segments are stored parents-first, which lets world matrices be
/// composed in a single forward pass.
#[derive(Debug, Clone, Default)]
pub struct ArticulatedPose {
    segments: Vec<Segment>,
}

impl ArticulatedPose {
    /// Create an empty pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment under `parent` (or as a root).
    pub fn add_segment(
        &mut self,
        name: &'static str,
        parent: Option<SegmentId>,
        local: Transform3D,
    ) -> SegmentId {
        let id = SegmentId(self.segments.len());
        self.segments.push(Segment {
            name,
            parent,
            local,
            parts: Vec::new(),
        });
        id
    }

    /// Attach a part to a segment.
    pub fn add_part(&mut self, id: SegmentId, part: Part) {
        self.segments[id.0].parts.push(part);
    }

    /// Segment by id.
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0]
    }

    /// Parent-local transform of a segment.
    pub fn local(&self, id: SegmentId) -> &Transform3D {
        &self.segments[id.0].local
    }

    /// Mutable parent-local transform of a segment.
    pub fn local_mut(&mut self, id: SegmentId) -> &mut Transform3D {
        &mut self.segments[id.0].local
    }

    /// Find a segment by name.
    pub fn find(&self, name: &str) -> Option<SegmentId> {
        self.segments
            .iter()
            .position(|segment| segment.name == name)
            .map(SegmentId)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the pose has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// World matrix of every segment, indexed like the segments.
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut world: Vec<Mat4> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let local = segment.local.matrix();
            let matrix = match segment.parent {
                Some(parent) => world[parent.0] * local,
                None => local,
            };
            world.push(matrix);
        }
        world
    }

    /// World matrix of one segment.
    pub fn world_matrix(&self, id: SegmentId) -> Mat4 {
        let mut matrix = self.segments[id.0].local.matrix();
        let mut parent = self.segments[id.0].parent;
        while let Some(current) = parent {
            let segment = &self.segments[current.0];
            matrix = segment.local.matrix() * matrix;
            parent = segment.parent;
        }
        matrix
    }

    /// Every part with its world matrix.
    pub fn world_parts(&self) -> Vec<(Mat4, Part)> {
        let world = self.world_matrices();
        self.segments
            .iter()
            .zip(world)
            .flat_map(|(segment, matrix)| {
                segment
                    .parts
                    .iter()
                    .map(move |part| (matrix * part.offset.matrix(), *part))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    fn chain() -> (ArticulatedPose, SegmentId, SegmentId) {
        let mut pose = ArticulatedPose::new();
        let root = pose.add_segment(
            "root",
            None,
            Transform3D::new(Vec3::new(1.0, 0.0, 0.0)).with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2)),
        );
        let child = pose.add_segment("child", Some(root), Transform3D::new(Vec3::new(1.0, 0.0, 0.0)));
        (pose, root, child)
    }

    #[test]
    fn child_composes_through_parent() {
        let (pose, _, child) = chain();
        let origin = pose.world_matrix(child).transform_point3(Vec3::ZERO);
        // Parent rotates +x onto +y.
        assert!((origin - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn batch_and_single_matrices_agree() {
        let (mut pose, root, child) = chain();
        pose.local_mut(root).rotation.y = 0.3;
        let all = pose.world_matrices();
        assert!(all[1].abs_diff_eq(pose.world_matrix(child), 1e-6));
    }

    #[test]
    fn parts_follow_their_segment() {
        let (mut pose, _, child) = chain();
        pose.add_part(
            child,
            Part::new(
                "tip",
                Shape::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                PartStyle::Neon,
            )
            .at(Transform3D::new(Vec3::new(0.0, 0.0, 2.0))),
        );
        let parts = pose.world_parts();
        assert_eq!(parts.len(), 1);
        let tip = parts[0].0.transform_point3(Vec3::ZERO);
        assert!((tip - Vec3::new(1.0, 1.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn find_by_name() {
        let (pose, root, child) = chain();
        assert_eq!(pose.find("root"), Some(root));
        assert_eq!(pose.find("child"), Some(child));
        assert_eq!(pose.find("missing"), None);
        assert_eq!(pose.segment(child).parent, Some(root));
    }
}
