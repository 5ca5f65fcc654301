//! Landing page scene shared by the windowed page and the headless runner.

use glam::{Vec2, Vec3};
use holoexpo_camera::PerspectiveCamera;
use holoexpo_core::{DrawSurface, FrameClock, FrameRequestId, FrameScheduler, FrameTime, Viewport};
use holoexpo_hero::{Joint, PartStyle, PoseAnimator, RoboticArm};
use holoexpo_input::PointerState;
use holoexpo_particles::{FieldLoop, FieldStats, ParticleField};
use holoexpo_testkit::FrameRecord;
use holoexpo_ui::{BookingModal, Countdown, CountdownState, IntroReveal, MobileCta, Preloader};
use holoexpo_ui3d::{draw_icons, draw_wireframe, AnchorLayout, HoverIconController, HoverTracker, WireStyle};
use tracing::{debug, info, warn};
use winit::event::WindowEvent;

use crate::config::LandingConfig;
use crate::content;

/// Number of glass panels revealed on load (hero, countdown, features).
pub const REVEAL_PANELS: usize = 3;

fn part_style(style: PartStyle) -> WireStyle {
    match style {
        PartStyle::Grid => WireStyle::new(style.color(), 1.0),
        _ => WireStyle::new(style.color().with_alpha(0.5 + 0.5 * style.emissive()), 1.25),
    }
}

/// Everything that moves on the page.
pub struct LandingScene {
    camera: PerspectiveCamera,
    pointer: PointerState,
    field: ParticleField,
    field_loop: FieldLoop,
    last_field: FieldStats,
    arm: RoboticArm,
    pose: PoseAnimator,
    icons: HoverIconController,
    hover: HoverTracker,
    countdown: Option<Countdown>,
    modal: BookingModal,
    preloader: Preloader,
    reveal: IntroReveal,
    cta: MobileCta,
    clock: FrameClock,
    time: FrameTime,
    frame: u64,
}

impl LandingScene {
    /// Build the scene for `viewport` at page time `now`.
    pub fn new(config: LandingConfig, viewport: Viewport, now: f32) -> Self {
        let mut camera = PerspectiveCamera::new(
            Vec3::new(0.0, 0.0, config.camera.position_z),
            config.camera.fov_degrees,
        );
        camera.near = config.camera.near;
        camera.far = config.camera.far;
        camera.set_viewport(viewport);

        let mut field = ParticleField::new(config.particles.clone());
        field.init(viewport);

        let arm = RoboticArm::new();
        let pose = PoseAnimator::new(&arm).with_easing(config.arm.easing);

        let mut icons = HoverIconController::new(config.icons.depth);
        icons.setup(content::anchors());

        let countdown = match config.countdown() {
            Ok(countdown) => Some(countdown),
            Err(err) => {
                warn!(%err, "countdown disabled");
                None
            }
        };

        info!(
            width = viewport.width,
            height = viewport.height,
            particles = field.len(),
            icons = icons.icons().len(),
            "landing scene ready"
        );

        Self {
            modal: BookingModal::new(config.booking_widget_url.clone()),
            camera,
            pointer: PointerState::new(viewport),
            field,
            field_loop: FieldLoop::new(),
            last_field: FieldStats::default(),
            arm,
            pose,
            icons,
            hover: HoverTracker::new(),
            countdown,
            preloader: Preloader::new(),
            reveal: IntroReveal::new(REVEAL_PANELS, now),
            cta: MobileCta::new(),
            clock: FrameClock::new(),
            time: FrameTime { now, dt: 0.0 },
            frame: 0,
        }
    }

    /// Start the particle loop.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        self.field_loop.start(scheduler);
    }

    /// Stop the particle loop and cancel its pending frame.
    pub fn stop<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) {
        self.field_loop.stop(scheduler);
    }

    /// Mark the page as loaded; the preloader starts fading.
    pub fn loaded(&mut self, now: f32) {
        self.preloader.loaded(now);
    }

    /// Apply a viewport change: camera aspect, pointer bounds, particle reset.
    pub fn resize(&mut self, viewport: Viewport) {
        self.pointer.resize(viewport);
        if viewport != self.field.viewport() {
            self.camera.set_viewport(viewport);
            self.field.resize(viewport);
        }
    }

    /// Window scale factor used to convert physical event coordinates.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.pointer.set_scale_factor(scale_factor);
    }

    /// Feed a window event into the pointer state and follow resizes.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        self.pointer.handle_event(event);
        self.resize(self.pointer.viewport());
    }

    /// Record a pointer move in logical pixels.
    pub fn move_pointer(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    /// Handle a fired frame request for the particle loop.
    pub fn on_particle_frame<F, S>(
        &mut self,
        id: FrameRequestId,
        surface: &mut S,
        scheduler: &mut F,
    ) -> Option<FieldStats>
    where
        F: FrameScheduler + ?Sized,
        S: DrawSurface + ?Sized,
    {
        let stats =
            self.field_loop
                .on_frame(id, &mut self.field, self.pointer.position(), surface, scheduler)?;
        if stats.respawned > 0 {
            debug!(respawned = stats.respawned, "particles recycled");
        }
        self.last_field = stats;
        Some(stats)
    }

    /// Per-frame update of the arm, hover state and icons.
    pub fn update<L: AnchorLayout + ?Sized>(&mut self, now: f32, layout: &L) -> FrameTime {
        let time = self.clock.tick(now);
        self.time = time;
        self.frame += 1;

        self.pose.set_pointer(self.pointer.normalized());
        self.pose.update(&mut self.arm, time.now, time.dt);

        let events = self
            .hover
            .update_from_layout(self.pointer.position(), layout, self.icons.anchor_ids());
        for event in &events {
            debug!(?event, "hover changed");
        }
        self.icons.handle_events(&events, time.now);
        self.icons
            .update(time.now, time.dt, layout, self.pointer.viewport(), &self.camera);

        self.pointer.begin_frame();
        time
    }

    /// Recompute the floating CTA from the in-page book buttons.
    pub fn update_cta<'a, I>(&mut self, buttons: I) -> bool
    where
        I: IntoIterator<Item = &'a holoexpo_core::ScreenRect>,
    {
        self.cta.update(buttons, self.pointer.viewport())
    }

    /// Draw the arm and the hover icons as projected wireframes.
    pub fn draw_models<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> usize {
        let viewport = self.pointer.viewport();
        let mut drawn = 0;
        for (matrix, part) in self.arm.world_parts() {
            drawn += draw_wireframe(
                surface,
                &part.shape,
                matrix,
                &self.camera,
                viewport,
                part_style(part.style),
            );
        }
        drawn + draw_icons(surface, self.icons.icons(), &self.camera, viewport)
    }

    /// Summary of the frame just updated.
    pub fn frame_record(&self) -> FrameRecord {
        FrameRecord {
            frame: self.frame,
            time: self.time.now,
            particles: self.field.len(),
            connections: self.last_field.connections,
            icons: self
                .icons
                .icons()
                .iter()
                .map(|icon| icon.transform.position.to_array())
                .collect(),
            icon_scales: self.icons.icons().iter().map(|icon| icon.scale()).collect(),
            arm_yaw: self.arm.joint(Joint::BaseYaw),
        }
    }

    /// Countdown state now, if the event start parsed.
    pub fn countdown_state(&self) -> Option<CountdownState> {
        self.countdown.map(|countdown| countdown.state())
    }

    /// Anchor currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hover.current()
    }

    /// Particle field, for redrawing between ticks.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Stats from the most recent particle tick.
    pub fn last_field(&self) -> FieldStats {
        self.last_field
    }

    /// Robotic arm in its current pose.
    pub fn arm(&self) -> &RoboticArm {
        &self.arm
    }

    /// Hover icons bound to the feature cards.
    pub fn icons(&self) -> &HoverIconController {
        &self.icons
    }

    /// Booking modal, mutable so page triggers can open and close it.
    pub fn modal_mut(&mut self) -> &mut BookingModal {
        &mut self.modal
    }

    /// Preloader, for its fade opacity.
    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }

    /// Intro reveal for the glass panels.
    pub fn reveal(&self) -> &IntroReveal {
        &self.reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::feature_layout as layout;
    use holoexpo_testkit::{CountingSurface, ManualScheduler};
    use holoexpo_ui3d::StaticLayout;

    fn run_frames(scene: &mut LandingScene, scheduler: &mut ManualScheduler, layout: &StaticLayout, frames: u32) {
        let mut surface = CountingSurface::new();
        for i in 0..frames {
            for id in scheduler.fire() {
                scene.on_particle_frame(id, &mut surface, scheduler);
            }
            scene.update(i as f32 / 60.0, layout);
        }
    }

    #[test]
    fn builds_icons_for_every_feature() {
        let scene = LandingScene::new(LandingConfig::default(), Viewport::new(1500.0, 800.0), 0.0);
        assert_eq!(scene.icons().icons().len(), content::FEATURES.len());
        assert_eq!(scene.field().len(), 80);
        assert!(scene.countdown_state().is_some());
    }

    #[test]
    fn hovering_a_feature_grows_its_icon() {
        let viewport = Viewport::new(1200.0, 800.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        let mut scheduler = ManualScheduler::new();
        scene.start(&mut scheduler);

        let target = layout.anchor_rect("feature-labs").map(|rect| rect.center()).unwrap();
        scene.move_pointer(target);
        run_frames(&mut scene, &mut scheduler, &layout, 60);

        assert_eq!(scene.hovered(), Some("feature-labs"));
        let record = scene.frame_record();
        assert!((record.icon_scales[1] - 1.5).abs() < 1e-4);
        assert_eq!(record.icon_scales[0], 1.0);
    }

    #[test]
    fn hovering_a_card_label_counts_as_hover() {
        let viewport = Viewport::new(1200.0, 800.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        let mut scheduler = ManualScheduler::new();

        let icon = layout.anchor_rect("feature-arena").unwrap();
        let below_icon = Vec2::new(icon.center().x, icon.bottom() + 40.0);
        assert!(!icon.contains(below_icon));
        scene.move_pointer(below_icon);
        run_frames(&mut scene, &mut scheduler, &layout, 1);

        assert_eq!(scene.hovered(), Some("feature-arena"));
    }

    #[test]
    fn pointer_leaving_the_window_releases_hover() {
        let viewport = Viewport::new(1200.0, 800.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        let mut scheduler = ManualScheduler::new();
        scene.start(&mut scheduler);

        let target = layout.anchor_rect("feature-labs").map(|rect| rect.center()).unwrap();
        scene.move_pointer(target);
        run_frames(&mut scene, &mut scheduler, &layout, 60);
        assert_eq!(scene.hovered(), Some("feature-labs"));

        // SAFETY: the id is only compared, never handed back to the platform.
        let device_id = unsafe { winit::event::DeviceId::dummy() };
        scene.handle_window_event(&WindowEvent::CursorLeft { device_id });
        let mut surface = CountingSurface::new();
        for i in 60..180 {
            for id in scheduler.fire() {
                scene.on_particle_frame(id, &mut surface, &mut scheduler);
            }
            scene.update(i as f32 / 60.0, &layout);
        }

        assert_eq!(scene.hovered(), None);
        let record = scene.frame_record();
        assert!((record.icon_scales[1] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn pointer_right_turns_the_arm() {
        let viewport = Viewport::new(1200.0, 800.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        let rest = scene.arm().joint(Joint::BaseYaw);
        scene.move_pointer(Vec2::new(1200.0, 400.0));
        let mut scheduler = ManualScheduler::new();
        run_frames(&mut scene, &mut scheduler, &layout, 120);
        assert!(scene.arm().joint(Joint::BaseYaw) > rest + 0.4);
    }

    #[test]
    fn stopping_freezes_particles() {
        let viewport = Viewport::new(800.0, 600.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        let mut scheduler = ManualScheduler::new();
        scene.start(&mut scheduler);
        run_frames(&mut scene, &mut scheduler, &layout, 5);
        scene.stop(&mut scheduler);
        assert!(!scene.field_loop.is_running());

        let before: Vec<Vec2> = scene.field().particles().iter().map(|p| p.position).collect();
        run_frames(&mut scene, &mut scheduler, &layout, 5);
        let after: Vec<Vec2> = scene.field().particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn resize_recreates_particles() {
        let mut scene = LandingScene::new(LandingConfig::default(), Viewport::new(1500.0, 800.0), 0.0);
        scene.resize(Viewport::new(300.0, 200.0));
        assert_eq!(scene.field().len(), 4);
        assert_eq!(scene.camera.aspect, 1.5);
    }

    #[test]
    fn models_draw_lines() {
        let viewport = Viewport::new(1200.0, 800.0);
        let layout = layout(viewport);
        let mut scene = LandingScene::new(LandingConfig::default(), viewport, 0.0);
        scene.update(0.0, &layout);
        let mut surface = CountingSurface::new();
        let drawn = scene.draw_models(&mut surface);
        assert!(drawn > 0);
        assert_eq!(drawn, surface.lines);
    }

    #[test]
    fn bad_event_start_hides_countdown() {
        let config = LandingConfig {
            event_start: "whenever".into(),
            ..Default::default()
        };
        let scene = LandingScene::new(config, Viewport::new(800.0, 600.0), 0.0);
        assert!(scene.countdown_state().is_none());
    }
}
