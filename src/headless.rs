//! Fixed-step headless runner.
//!
//! Drives the scene without a window: a manual scheduler fires particle
//! frames, a counting surface stands in for the painter, and anchors come
//! from a static grid laid out like the feature cards.

use anyhow::{Context, Result};
use glam::Vec2;
use holoexpo_core::{ScreenRect, Viewport};
use holoexpo_particles::{target_count, ParticleConfig};
use holoexpo_testkit::{
    CountingSurface, FrameRecord, JsonlSink, ManualScheduler, ReportSink, RunReport,
    RunReportBuilder,
};
use holoexpo_ui3d::StaticLayout;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::LandingConfig;
use crate::content;
use crate::scene::LandingScene;

const STEP: f32 = 1.0 / 60.0;

/// Scripted pointer motion for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPath {
    /// Orbit the viewport center once every four seconds.
    Circle,
    /// Never move the pointer.
    None,
}

impl PointerPath {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "circle" => Some(PointerPath::Circle),
            "none" => Some(PointerPath::None),
            _ => None,
        }
    }

    fn position(self, viewport: Viewport, now: f32) -> Option<Vec2> {
        match self {
            PointerPath::None => None,
            PointerPath::Circle => {
                let angle = now * std::f32::consts::TAU / 4.0;
                let radius = viewport.width.min(viewport.height) * 0.35;
                Some(viewport.center() + Vec2::new(angle.cos(), angle.sin()) * radius)
            }
        }
    }
}

pub struct HeadlessConfig {
    pub landing: LandingConfig,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub pointer_path: PointerPath,
    /// Switch to a new viewport before the given frame.
    pub resize: Option<(u64, Viewport)>,
    pub metrics_out: Option<PathBuf>,
    pub record_out: Option<PathBuf>,
}

/// Feature cards in one row across the lower part of the viewport.
///
/// Each icon placeholder sits at the top of its card; the card, with room
/// for the title and blurb below the icon, is the hover region.
pub fn feature_layout(viewport: Viewport) -> StaticLayout {
    let mut layout = StaticLayout::new();
    let count = content::FEATURES.len() as f32;
    let column = viewport.width / count;
    let size = Vec2::splat((column * 0.4).min(96.0));
    for (index, feature) in content::FEATURES.iter().enumerate() {
        let x = column * (index as f32 + 0.5);
        let icon = ScreenRect::from_center(Vec2::new(x, viewport.height * 0.75), size);
        layout.insert(feature.id, icon);
        layout.insert_hover(
            feature.id,
            ScreenRect::new(x - column * 0.45, icon.top - 12.0, column * 0.9, size.y + 96.0),
        );
    }
    layout
}

/// The hero "book" button, near the top of the page.
fn book_buttons(viewport: Viewport) -> [ScreenRect; 1] {
    [ScreenRect::from_center(
        Vec2::new(viewport.width * 0.5, viewport.height * 0.4),
        Vec2::new(180.0, 48.0),
    )]
}

/// Check one frame against the counts the viewport implies.
///
/// Returns one line per failed check.
fn check_frame(record: &FrameRecord, viewport: Viewport, particles: &ParticleConfig) -> Vec<String> {
    let mut failures = Vec::new();
    let expected = target_count(viewport, particles);
    if record.particles != expected {
        failures.push(format!(
            "frame {}: {} particles, expected {expected} for {}x{}",
            record.frame, record.particles, viewport.width, viewport.height
        ));
    }
    if record.icons.len() != content::FEATURES.len() {
        failures.push(format!(
            "frame {}: {} icons, expected {}",
            record.frame,
            record.icons.len(),
            content::FEATURES.len()
        ));
    }
    for (index, position) in record.icons.iter().enumerate() {
        if position.iter().any(|v| !v.is_finite()) {
            failures.push(format!("frame {}: icon {index} position is not finite", record.frame));
        }
    }
    if !record.arm_yaw.is_finite() {
        failures.push(format!("frame {}: arm yaw is not finite", record.frame));
    }
    failures
}

pub fn run(cfg: HeadlessConfig) -> Result<RunReport> {
    let started = Instant::now();
    let mut viewport = Viewport::new(cfg.width as f32, cfg.height as f32);
    let mut layout = feature_layout(viewport);
    let particle_config = cfg.landing.particles.clone();
    let mut scene = LandingScene::new(cfg.landing, viewport, 0.0);
    let mut scheduler = ManualScheduler::new();
    let mut surface = CountingSurface::new();

    let mut sink = match &cfg.record_out {
        Some(path) => Some(
            JsonlSink::create(path)
                .with_context(|| format!("failed to create frame log {}", path.display()))?,
        ),
        None => None,
    };

    scene.loaded(0.0);
    scene.start(&mut scheduler);

    let mut records: Vec<FrameRecord> = Vec::with_capacity(cfg.frames as usize);
    let mut failures: Vec<String> = Vec::new();
    for frame in 0..cfg.frames {
        let now = frame as f32 * STEP;
        if let Some((at, next)) = cfg.resize {
            if frame == at {
                viewport = next;
                layout = feature_layout(viewport);
                scene.resize(viewport);
            }
        }
        if let Some(position) = cfg.pointer_path.position(viewport, now) {
            scene.move_pointer(position);
        }

        for id in scheduler.fire() {
            scene.on_particle_frame(id, &mut surface, &mut scheduler);
        }
        scene.update(now, &layout);
        scene.update_cta(&book_buttons(viewport));
        scene.draw_models(&mut surface);

        let record = scene.frame_record();
        failures.extend(check_frame(&record, viewport, &particle_config));
        if let Some(sink) = sink.as_mut() {
            sink.write(&record)?;
        }
        records.push(record);
    }
    scene.stop(&mut scheduler);

    if let Some(sink) = sink.as_mut() {
        sink.flush()?;
    }

    for failure in failures.iter().take(5) {
        warn!("{failure}");
    }
    let report = RunReportBuilder::new("headless")
        .failures(failures)
        .viewport(viewport.width, viewport.height)
        .frames(&records)
        .duration_seconds(started.elapsed().as_secs_f64())
        .build();

    info!(
        frames = report.frames,
        fills = surface.fills,
        lines = surface.lines,
        "headless run finished"
    );

    if let Some(path) = &cfg.metrics_out {
        ReportSink::create(path)
            .and_then(|sink| sink.write(&report))
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    Ok(report)
}
