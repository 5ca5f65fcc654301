#![warn(missing_docs)]
//! Perspective camera for the landing scene.
//!
//! The camera looks down -Z with +Y up and never rotates; everything that
//! maps between screen and world space relies on that.

use glam::{Mat4, Vec2, Vec3};
use holoexpo_core::Viewport;

/// Forward-facing perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl PerspectiveCamera {
    /// Create a camera at `position` with a vertical field of view in degrees.
    pub fn new(position: Vec3, fov_degrees: f32) -> Self {
        Self {
            position,
            fov: fov_degrees.to_radians(),
            ..Default::default()
        }
    }

    /// Vertical field of view in degrees.
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Update the aspect ratio (call when the viewport resizes).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Width and height of the visible region on a plane `distance` units
    /// in front of the camera.
    pub fn visible_extent(&self, distance: f32) -> Vec2 {
        let height = 2.0 * (self.fov * 0.5).tan() * distance;
        Vec2::new(height * self.aspect, height)
    }

    /// Project a world-space point to screen pixels.
    ///
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, point: Vec3, viewport: Viewport) -> Option<Vec2> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
        Some(viewport.from_ndc(ndc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_default_initialization() {
        let camera = PerspectiveCamera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 8.0));
        assert!((camera.fov_degrees() - 75.0).abs() < 1e-4);
    }

    #[test]
    fn visible_extent_scales_with_distance() {
        let camera = PerspectiveCamera::new(Vec3::new(0.0, 0.0, 8.0), 90.0);
        let near = camera.visible_extent(1.0);
        let far = camera.visible_extent(8.0);
        assert!((near.y - 2.0).abs() < 1e-5);
        assert!((far.y - 16.0).abs() < 1e-4);
        assert!((far.x - 16.0 * camera.aspect).abs() < 1e-3);
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let camera = PerspectiveCamera::default();
        let viewport = Viewport::new(1280.0, 720.0);
        let screen = camera.world_to_screen(Vec3::ZERO, viewport).unwrap();
        assert!((screen - viewport.center()).length() < 1e-3);
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let camera = PerspectiveCamera::default();
        let viewport = Viewport::new(800.0, 600.0);
        assert!(camera
            .world_to_screen(Vec3::new(0.0, 0.0, 20.0), viewport)
            .is_none());
    }

    #[test]
    fn camera_matrices_are_valid() {
        let camera = PerspectiveCamera::default();
        let view_proj = camera.view_projection_matrix();
        assert!(!view_proj.to_cols_array().iter().all(|&x| x == 0.0));
        assert!(view_proj.to_cols_array().iter().all(|x| x.is_finite()));
    }
}
