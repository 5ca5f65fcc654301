//! Wireframe projection onto a [`DrawSurface`].

use glam::{Mat4, Vec2, Vec3};
use holoexpo_camera::PerspectiveCamera;
use holoexpo_core::{DrawSurface, Rgba, Shape, Viewport};

use crate::components::{HoverIcon, UIComponent};

/// Stroke settings for a wireframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireStyle {
    /// Line color.
    pub color: Rgba,
    /// Line width in logical pixels.
    pub width: f32,
}

impl WireStyle {
    /// Style with the given color and width.
    pub fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

fn project(clip_from_model: &Mat4, point: Vec3, viewport: Viewport) -> Option<Vec2> {
    let clip = *clip_from_model * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    Some(viewport.from_ndc(ndc))
}

/// Project `shape` placed by `model` through `camera` and stroke its edges.
///
/// Edges with an endpoint behind the camera are skipped. Returns the
/// number of lines drawn.
pub fn draw_wireframe<S: DrawSurface + ?Sized>(
    surface: &mut S,
    shape: &Shape,
    model: Mat4,
    camera: &PerspectiveCamera,
    viewport: Viewport,
    style: WireStyle,
) -> usize {
    if viewport.is_empty() {
        return 0;
    }
    let clip_from_model = camera.view_projection_matrix() * model;
    let mut drawn = 0;
    for [a, b] in shape.edges() {
        let (Some(from), Some(to)) = (
            project(&clip_from_model, a, viewport),
            project(&clip_from_model, b, viewport),
        ) else {
            continue;
        };
        surface.stroke_line(from, to, style.width, style.color);
        drawn += 1;
    }
    drawn
}

/// Draw every visible icon: the solid's edges faintly, the shell brightly.
pub fn draw_icons<S: DrawSurface + ?Sized>(
    surface: &mut S,
    icons: &[HoverIcon],
    camera: &PerspectiveCamera,
    viewport: Viewport,
) -> usize {
    let mut drawn = 0;
    for icon in icons.iter().filter(|icon| icon.is_visible()) {
        let geometry = icon.shape.geometry();
        drawn += draw_wireframe(
            surface,
            &geometry,
            icon.solid_matrix(),
            camera,
            viewport,
            WireStyle::new(icon.solid_color().with_alpha(0.35 + 0.5 * icon.emissive), 1.5),
        );
        drawn += draw_wireframe(
            surface,
            &geometry,
            icon.wire_matrix(),
            camera,
            viewport,
            WireStyle::new(icon.wire_color().with_alpha(0.8), 0.75),
        );
    }
    drawn
}
