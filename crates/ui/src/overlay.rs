//! Debug overlay (F3) with frame timing and scene counters.

use egui::{Context, Pos2};

const HISTORY: usize = 120;

/// Per-frame counters shown in the overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneStats {
    /// Live particles.
    pub particles: usize,
    /// Connection lines drawn last frame.
    pub connections: usize,
    /// Visible hover icons.
    pub icons: usize,
    /// Anchor under the pointer.
    pub hovered: Option<String>,
    /// Arm base yaw in radians.
    pub arm_yaw: f32,
}

/// Debug overlay state.
pub struct DebugOverlay {
    /// Whether the overlay is shown.
    pub visible: bool,
    fps_history: Vec<f32>,
    frame_time_history: Vec<f32>,
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugOverlay {
    /// Create a hidden overlay.
    pub fn new() -> Self {
        Self {
            visible: false,
            fps_history: Vec::with_capacity(HISTORY),
            frame_time_history: Vec::with_capacity(HISTORY),
        }
    }

    /// Toggle visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Record one frame of `dt` seconds. Zero-length frames are ignored.
    pub fn record_frame(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        push_bounded(&mut self.fps_history, 1.0 / dt);
        push_bounded(&mut self.frame_time_history, dt * 1000.0);
    }

    /// Mean FPS over the kept history.
    pub fn average_fps(&self) -> Option<f32> {
        mean(&self.fps_history)
    }

    /// Mean frame time in milliseconds.
    pub fn average_frame_time(&self) -> Option<f32> {
        mean(&self.frame_time_history)
    }

    /// Number of frames kept.
    pub fn samples(&self) -> usize {
        self.fps_history.len()
    }

    /// Draw the overlay when visible.
    pub fn render(&self, ctx: &Context, stats: &SceneStats) {
        if !self.visible {
            return;
        }
        egui::Window::new("Debug Info")
            .fixed_pos(Pos2::new(10.0, 10.0))
            .resizable(false)
            .collapsible(false)
            .title_bar(false)
            .show(ctx, |ui| {
                ui.heading("holoexpo (F3)");
                ui.separator();

                if let (Some(&current), Some(avg)) = (self.fps_history.last(), self.average_fps()) {
                    let min = self.fps_history.iter().copied().fold(f32::INFINITY, f32::min);
                    let max = self.fps_history.iter().copied().fold(0.0, f32::max);
                    ui.label(format!(
                        "FPS: {current:.0} (avg: {avg:.0}, min: {min:.0}, max: {max:.0})"
                    ));
                }
                if let (Some(&frame), Some(avg)) =
                    (self.frame_time_history.last(), self.average_frame_time())
                {
                    ui.label(format!("Frame time: {frame:.2}ms (avg: {avg:.2}ms)"));
                }

                ui.separator();
                ui.label(format!("Particles: {}", stats.particles));
                ui.label(format!("Connections: {}", stats.connections));
                ui.label(format!("Icons: {}", stats.icons));
                ui.label(format!(
                    "Hovered: {}",
                    stats.hovered.as_deref().unwrap_or("-")
                ));
                ui.label(format!("Arm yaw: {:.1}°", stats.arm_yaw.to_degrees()));
            });
    }
}

fn push_bounded(history: &mut Vec<f32>, value: f32) {
    history.push(value);
    if history.len() > HISTORY {
        history.remove(0);
    }
}

fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f32>() / values.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded() {
        let mut overlay = DebugOverlay::new();
        for _ in 0..500 {
            overlay.record_frame(1.0 / 60.0);
        }
        assert_eq!(overlay.samples(), HISTORY);
        let fps = overlay.average_fps().unwrap();
        assert!((fps - 60.0).abs() < 1e-2);
    }

    #[test]
    fn zero_dt_is_skipped() {
        let mut overlay = DebugOverlay::new();
        overlay.record_frame(0.0);
        assert_eq!(overlay.average_fps(), None);
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut overlay = DebugOverlay::default();
        overlay.toggle();
        assert!(overlay.visible);
        overlay.toggle();
        assert!(!overlay.visible);
    }
}
