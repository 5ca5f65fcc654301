//! Hover icons: a solid shape with a slightly larger wireframe shell.

use glam::{Mat4, Vec3};
use holoexpo_core::{Rgba, Shape, Transform3D};

use super::UIComponent;

/// Wireframe shell scale relative to the solid.
pub const WIRE_SCALE: f32 = 1.1;

/// Emissive intensity of an icon at rest.
pub const REST_EMISSIVE: f32 = 0.2;

/// Icon geometry selected by an anchor's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconShape {
    /// Unit cube.
    Cube,
    /// Torus ring.
    Torus,
    /// Cone.
    Cone,
    /// Geodesic sphere.
    Sphere,
}

impl IconShape {
    /// Parse an anchor marker (`cube`, `torus`, `cone`, `sphere`).
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim() {
            "cube" => Some(IconShape::Cube),
            "torus" => Some(IconShape::Torus),
            "cone" => Some(IconShape::Cone),
            "sphere" => Some(IconShape::Sphere),
            _ => None,
        }
    }

    /// Geometry of the solid.
    pub fn geometry(self) -> Shape {
        match self {
            IconShape::Cube => Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            IconShape::Torus => Shape::Torus {
                radius: 0.6,
                tube: 0.2,
                radial_segments: 16,
                tubular_segments: 32,
            },
            IconShape::Cone => Shape::Cone {
                radius: 0.7,
                height: 1.5,
                segments: 32,
            },
            IconShape::Sphere => Shape::Icosahedron {
                radius: 0.7,
                detail: 1,
            },
        }
    }
}

/// A 3D icon bound to an on-page anchor.
#[derive(Debug, Clone)]
pub struct HoverIcon {
    /// Anchor this icon follows.
    pub anchor: String,
    /// Geometry.
    pub shape: IconShape,
    /// Group transform (solid and wire share it).
    pub transform: Transform3D,
    /// Vertical offset added to the mapped anchor position.
    pub base_offset_y: f32,
    /// Emissive intensity of the solid.
    pub emissive: f32,
    visible: bool,
}

impl HoverIcon {
    /// Icon at rest for `anchor`.
    pub fn new(anchor: impl Into<String>, shape: IconShape) -> Self {
        Self {
            anchor: anchor.into(),
            shape,
            transform: Transform3D::default(),
            base_offset_y: 0.0,
            emissive: REST_EMISSIVE,
            visible: true,
        }
    }

    /// Uniform group scale.
    pub fn scale(&self) -> f32 {
        self.transform.scale.x
    }

    /// World matrix of the solid.
    pub fn solid_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// World matrix of the wireframe shell.
    pub fn wire_matrix(&self) -> Mat4 {
        self.transform.matrix() * Mat4::from_scale(Vec3::splat(WIRE_SCALE))
    }

    /// Solid color brightened by the emissive intensity.
    pub fn solid_color(&self) -> Rgba {
        Rgba::hex(0x00aaff).scaled(0.6 + 0.4 * self.emissive.clamp(0.0, 1.0))
    }

    /// Wireframe color.
    pub fn wire_color(&self) -> Rgba {
        Rgba::hex(0x00ffaa)
    }
}

impl UIComponent for HoverIcon {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_markers_parse() {
        assert_eq!(IconShape::from_marker("cube"), Some(IconShape::Cube));
        assert_eq!(IconShape::from_marker("torus"), Some(IconShape::Torus));
        assert_eq!(IconShape::from_marker(" cone "), Some(IconShape::Cone));
        assert_eq!(IconShape::from_marker("sphere"), Some(IconShape::Sphere));
        assert_eq!(IconShape::from_marker("pyramid"), None);
        assert_eq!(IconShape::from_marker(""), None);
    }

    #[test]
    fn sphere_marker_uses_icosahedron() {
        assert_eq!(
            IconShape::Sphere.geometry(),
            Shape::Icosahedron {
                radius: 0.7,
                detail: 1
            }
        );
    }

    #[test]
    fn wire_shell_is_larger() {
        let icon = HoverIcon::new("feature-0", IconShape::Cube);
        let corner = Vec3::splat(0.5);
        let solid = icon.solid_matrix().transform_point3(corner);
        let wire = icon.wire_matrix().transform_point3(corner);
        assert!((wire.length() / solid.length() - WIRE_SCALE).abs() < 1e-5);
    }

    #[test]
    fn new_icon_rests() {
        let icon = HoverIcon::new("a", IconShape::Torus);
        assert_eq!(icon.scale(), 1.0);
        assert_eq!(icon.emissive, REST_EMISSIVE);
        assert!(icon.is_visible());
    }
}
