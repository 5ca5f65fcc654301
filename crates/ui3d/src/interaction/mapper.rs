//! Screen rectangle to world position mapping.

use glam::Vec3;
use holoexpo_camera::PerspectiveCamera;
use holoexpo_core::{ScreenRect, Viewport};

/// Places 3D objects on a fixed depth plane so they line up with on-screen
/// rectangles.
///
/// Assumes the camera faces the plane head-on (no roll, pitch or yaw); the
/// camera's x/y offset is ignored as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapper {
    /// World z of the placement plane.
    pub depth: f32,
}

impl Default for ScreenMapper {
    fn default() -> Self {
        Self { depth: 0.0 }
    }
}

impl ScreenMapper {
    /// Mapper for the plane `z = depth`.
    pub fn new(depth: f32) -> Self {
        Self { depth }
    }

    /// World position whose projection sits on the center of `rect`.
    ///
    /// Uses the camera's aspect ratio, which the caller keeps in sync with
    /// `viewport`. An empty viewport maps to the plane origin.
    pub fn rect_to_world(&self, rect: ScreenRect, viewport: Viewport, camera: &PerspectiveCamera) -> Vec3 {
        if viewport.is_empty() {
            return Vec3::new(0.0, 0.0, self.depth);
        }
        let ndc = viewport.to_ndc(rect.center());
        let extent = camera.visible_extent(camera.position.z - self.depth);
        Vec3::new(ndc.x * extent.x * 0.5, ndc.y * extent.y * 0.5, self.depth)
    }
}
