//! egui rendering for the page glue.

use egui::{Align2, Color32, Context, Id, Order, RichText, Sense};

use crate::countdown::{CountdownState, STARTED_LABEL};
use crate::modal::{BookingModal, ModalClick};

/// Neon accent used for headings and digits.
pub const ACCENT: Color32 = Color32::from_rgb(0, 243, 255);

/// Draw the countdown blocks, or the started label.
pub fn countdown_ui(ui: &mut egui::Ui, state: &CountdownState) {
    match state {
        CountdownState::Started => {
            ui.label(RichText::new(STARTED_LABEL).size(32.0).strong().color(ACCENT));
        }
        CountdownState::Running(parts) => {
            let [days, hours, minutes, seconds] = parts.padded();
            ui.horizontal(|ui| {
                for (value, unit) in [(days, "Days"), (hours, "Hours"), (minutes, "Minutes"), (seconds, "Seconds")] {
                    egui::Frame::none()
                        .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 12))
                        .inner_margin(egui::Margin::same(12.0))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(value).size(36.0).strong().color(ACCENT));
                                ui.label(RichText::new(unit).size(12.0).color(Color32::LIGHT_GRAY));
                            });
                        });
                }
            });
        }
    }
}

/// Full-screen preloader at the given opacity.
pub fn preloader_ui(ctx: &Context, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Area::new(Id::new("preloader"))
        .order(Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .interactable(opacity >= 1.0)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen, 0.0, Color32::from_rgba_unmultiplied(5, 5, 16, alpha));
            ui.painter().text(
                screen.center(),
                Align2::CENTER_CENTER,
                "LOADING",
                egui::FontId::proportional(24.0),
                Color32::from_rgba_unmultiplied(0, 243, 255, alpha),
            );
        });
}

/// Draw the booking modal when open and route its clicks.
pub fn booking_modal_ui(ctx: &Context, modal: &mut BookingModal) {
    if !modal.is_open() {
        return;
    }
    let mut clicked = None;

    egui::Area::new(Id::new("booking_backdrop"))
        .order(Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            let response = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, 0.0, Color32::from_black_alpha(200));
            if response.clicked() {
                clicked = Some(ModalClick::Backdrop);
            }
        });

    egui::Area::new(Id::new("booking_content"))
        .order(Order::Tooltip)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.set_min_width(420.0);
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Book your pass").color(ACCENT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            clicked = Some(ModalClick::CloseButton);
                        }
                    });
                });
                ui.separator();
                if let Some(url) = modal.embedded_url() {
                    ui.label("Tickets are handled by our booking partner.");
                    ui.hyperlink_to("Open booking widget", url);
                }
            });
        });

    if let Some(target) = clicked {
        modal.click(target);
    }
}
