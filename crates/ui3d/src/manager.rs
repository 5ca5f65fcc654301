//! Hover icon controller - binds 3D icons to page anchors

use glam::Vec3;
use holoexpo_camera::PerspectiveCamera;
use holoexpo_core::Viewport;
use holoexpo_tween::{Animator, Easing};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::components::{HoverIcon, IconShape, UIComponent, REST_EMISSIVE};
use crate::interaction::{HoverEvent, ScreenMapper};
use crate::layout::AnchorLayout;

/// Group scale while hovered.
pub const HOVER_SCALE: f32 = 1.5;
/// Emissive intensity while hovered.
pub const HOVER_EMISSIVE: f32 = 1.0;
/// Duration of hover transitions in seconds.
pub const HOVER_DURATION: f32 = 0.5;
/// Continuous icon rotation (x, y) in radians per second.
pub const ICON_SPIN: Vec3 = Vec3::new(0.3, 0.6, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum IconProperty {
    Scale,
    Emissive,
}

/// Owns the hover icons and their hover transitions.
#[derive(Debug, Default)]
pub struct HoverIconController {
    icons: Vec<HoverIcon>,
    by_anchor: HashMap<String, usize>,
    tweens: Animator<(usize, IconProperty)>,
    mapper: ScreenMapper,
}

impl HoverIconController {
    /// Create a controller placing icons on the plane `z = depth`.
    pub fn new(depth: f32) -> Self {
        Self {
            mapper: ScreenMapper::new(depth),
            ..Default::default()
        }
    }

    /// Create one icon per anchor whose marker names a known shape.
    ///
    /// Anchors without a marker, with an unknown marker, or already bound
    /// are skipped. Returns the number of icons created.
    pub fn setup<'a, I>(&mut self, anchors: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut created = 0;
        for (id, marker) in anchors {
            let Some(shape) = marker.and_then(IconShape::from_marker) else {
                debug!(anchor = id, marker = ?marker, "skipping anchor without a known icon");
                continue;
            };
            if self.by_anchor.contains_key(id) {
                debug!(anchor = id, "anchor already has an icon");
                continue;
            }
            let index = self.icons.len();
            self.icons.push(HoverIcon::new(id, shape));
            self.by_anchor.insert(id.to_string(), index);
            self.tweens.set((index, IconProperty::Scale), 1.0);
            self.tweens.set((index, IconProperty::Emissive), REST_EMISSIVE);
            created += 1;
        }
        info!(icons = created, "hover icons created");
        created
    }

    /// Grow and brighten the icon bound to `anchor`.
    ///
    /// Returns `false` if no icon is bound to it.
    pub fn pointer_enter(&mut self, anchor: &str, now: f32) -> bool {
        let Some(&index) = self.by_anchor.get(anchor) else {
            return false;
        };
        self.tweens.animate_to(
            (index, IconProperty::Scale),
            HOVER_SCALE,
            HOVER_DURATION,
            Easing::BackOut,
            now,
        );
        self.tweens.animate_to(
            (index, IconProperty::Emissive),
            HOVER_EMISSIVE,
            HOVER_DURATION,
            Easing::Power1Out,
            now,
        );
        true
    }

    /// Return the icon bound to `anchor` to rest.
    pub fn pointer_leave(&mut self, anchor: &str, now: f32) -> bool {
        let Some(&index) = self.by_anchor.get(anchor) else {
            return false;
        };
        self.tweens.animate_to(
            (index, IconProperty::Scale),
            1.0,
            HOVER_DURATION,
            Easing::Power1Out,
            now,
        );
        self.tweens.animate_to(
            (index, IconProperty::Emissive),
            REST_EMISSIVE,
            HOVER_DURATION,
            Easing::Power1Out,
            now,
        );
        true
    }

    /// Apply hover transitions reported by a [`crate::HoverTracker`].
    pub fn handle_events(&mut self, events: &[HoverEvent], now: f32) {
        for event in events {
            match event {
                HoverEvent::Enter(anchor) => self.pointer_enter(anchor, now),
                HoverEvent::Leave(anchor) => self.pointer_leave(anchor, now),
            };
        }
    }

    /// Per-frame update: follow anchors, spin, and apply transitions.
    ///
    /// Icons whose anchor has no rectangle this frame are hidden and keep
    /// their last position.
    pub fn update<L: AnchorLayout + ?Sized>(
        &mut self,
        now: f32,
        dt: f32,
        layout: &L,
        viewport: Viewport,
        camera: &PerspectiveCamera,
    ) {
        let spin = ICON_SPIN * dt.max(0.0);
        for (index, icon) in self.icons.iter_mut().enumerate() {
            match layout.anchor_rect(&icon.anchor) {
                Some(rect) => {
                    let mapped = self.mapper.rect_to_world(rect, viewport, camera);
                    icon.set_position(mapped + Vec3::new(0.0, icon.base_offset_y, 0.0));
                    icon.set_visible(true);
                }
                None => icon.set_visible(false),
            }
            icon.transform.rotation += spin;
            let scale = self.tweens.value_or((index, IconProperty::Scale), now, 1.0);
            icon.transform.scale = Vec3::splat(scale);
            icon.emissive = self
                .tweens
                .value_or((index, IconProperty::Emissive), now, REST_EMISSIVE);
        }
        self.tweens.advance(now);
    }

    /// All icons in setup order.
    pub fn icons(&self) -> &[HoverIcon] {
        &self.icons
    }

    /// Icon bound to `anchor`.
    pub fn icon(&self, anchor: &str) -> Option<&HoverIcon> {
        self.by_anchor.get(anchor).map(|&index| &self.icons[index])
    }

    /// Set the cached vertical offset of the icon bound to `anchor`.
    pub fn set_base_offset(&mut self, anchor: &str, offset_y: f32) -> bool {
        match self.by_anchor.get(anchor) {
            Some(&index) => {
                self.icons[index].base_offset_y = offset_y;
                true
            }
            None => false,
        }
    }

    /// Anchor ids in setup order.
    pub fn anchor_ids(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.anchor.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use holoexpo_core::ScreenRect;

    fn controller() -> HoverIconController {
        let mut controller = HoverIconController::new(0.0);
        let created = controller.setup([
            ("f0", Some("cube")),
            ("f1", Some("torus")),
            ("f2", Some("hexagon")),
            ("f3", None),
            ("f4", Some("sphere")),
        ]);
        assert_eq!(created, 3);
        controller
    }

    fn layout() -> StaticLayout {
        let mut layout = StaticLayout::new();
        layout.insert("f0", ScreenRect::new(375.0, 275.0, 50.0, 50.0));
        layout.insert("f1", ScreenRect::new(600.0, 100.0, 50.0, 50.0));
        layout
    }

    fn run(controller: &mut HoverIconController, from: f32, to: f32) {
        let viewport = Viewport::new(800.0, 600.0);
        let mut camera = PerspectiveCamera::default();
        camera.set_viewport(viewport);
        let layout = layout();
        let mut now = from;
        while now <= to {
            controller.update(now, 1.0 / 60.0, &layout, viewport, &camera);
            now += 1.0 / 60.0;
        }
        controller.update(to, 0.0, &layout, viewport, &camera);
    }

    #[test]
    fn setup_skips_unknown_markers() {
        let controller = controller();
        let anchors: Vec<&str> = controller.anchor_ids().collect();
        assert_eq!(anchors, vec!["f0", "f1", "f4"]);
        assert!(controller.icon("f2").is_none());
    }

    #[test]
    fn setup_ignores_duplicate_anchor() {
        let mut controller = controller();
        assert_eq!(controller.setup([("f0", Some("cone"))]), 0);
        assert_eq!(controller.icon("f0").map(|i| i.shape), Some(IconShape::Cube));
    }

    #[test]
    fn hover_scales_up_then_back() {
        let mut controller = controller();
        assert!(controller.pointer_enter("f0", 0.0));
        run(&mut controller, 0.0, 0.6);
        let icon = controller.icon("f0").unwrap();
        assert!((icon.scale() - HOVER_SCALE).abs() < 1e-5);
        assert!((icon.emissive - HOVER_EMISSIVE).abs() < 1e-5);

        assert!(controller.pointer_leave("f0", 0.6));
        run(&mut controller, 0.6, 1.2);
        let icon = controller.icon("f0").unwrap();
        assert!((icon.scale() - 1.0).abs() < 1e-5);
        assert!((icon.emissive - REST_EMISSIVE).abs() < 1e-5);
    }

    #[test]
    fn enter_then_quick_leave_converges_to_rest() {
        let mut controller = controller();
        controller.pointer_enter("f1", 0.0);
        run(&mut controller, 0.0, 0.1);
        assert!(controller.icon("f1").unwrap().scale() > 1.0);

        controller.pointer_leave("f1", 0.1);
        run(&mut controller, 0.1, 0.7);
        assert_eq!(controller.icon("f1").unwrap().transform.scale, Vec3::ONE);
    }

    #[test]
    fn unknown_anchor_hover_is_ignored() {
        let mut controller = controller();
        assert!(!controller.pointer_enter("nope", 0.0));
        assert!(!controller.pointer_leave("f2", 0.0));
    }

    #[test]
    fn icons_follow_their_anchor() {
        let mut controller = controller();
        controller.set_base_offset("f1", 0.5);
        run(&mut controller, 0.0, 0.0);

        // f0 sits dead center.
        let center = controller.icon("f0").unwrap().position();
        assert!(center.x.abs() < 1e-5 && center.y.abs() < 1e-5);

        let f1 = controller.icon("f1").unwrap().position();
        assert!(f1.x > 0.0 && f1.y > 0.5);

        // No rectangle for f4 this frame.
        assert!(!controller.icon("f4").unwrap().is_visible());
    }

    #[test]
    fn icons_spin_over_time() {
        let mut controller = controller();
        let layout = layout();
        let camera = PerspectiveCamera::default();
        controller.update(0.0, 0.5, &layout, Viewport::new(800.0, 600.0), &camera);
        let rotation = controller.icon("f0").unwrap().transform.rotation;
        assert!((rotation.y - 0.3).abs() < 1e-6);
        assert!((rotation.x - 0.15).abs() < 1e-6);
    }

    #[test]
    fn handle_events_routes_enter_and_leave() {
        let mut controller = controller();
        controller.handle_events(&[HoverEvent::Enter("f0".into())], 0.0);
        run(&mut controller, 0.0, 0.25);
        assert!(controller.icon("f0").unwrap().scale() > 1.0);
        controller.handle_events(&[HoverEvent::Leave("f0".into())], 0.25);
        run(&mut controller, 0.25, 1.0);
        assert!((controller.icon("f0").unwrap().scale() - 1.0).abs() < 1e-6);
    }
}
