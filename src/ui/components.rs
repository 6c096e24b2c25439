//! Shared UI components for CursorWeave

use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

use crate::app::CursorWeaveApp;
use crate::state::Tab;
use crate::ui::theme::Palette;

/// Render a tab button
pub fn render_tab(app: &mut CursorWeaveApp, ui: &mut egui::Ui, tab: Tab, label: &str) {
    let palette = &app.ui.palette;
    let is_active = app.ui.active_tab == tab;

    let (bg, text_color) = if is_active {
        (palette.bg_medium, palette.accent)
    } else {
        (Color32::TRANSPARENT, palette.text_secondary)
    };

    let button = egui::Button::new(RichText::new(label).color(text_color))
        .fill(bg)
        .corner_radius(CornerRadius {
            nw: 6,
            ne: 6,
            sw: 0,
            se: 0,
        })
        .min_size(Vec2::new(88.0, 30.0));

    if ui.add(button).clicked() {
        app.ui.active_tab = tab;
    }
}

/// Framed section container used by the tabs
pub fn section_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.bg_medium)
        .corner_radius(8.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(1.0, palette.border))
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut CursorWeaveApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let palette = app.ui.palette.clone();

    egui::Window::new("About CursorWeave")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    RichText::new("CursorWeave")
                        .size(22.0)
                        .strong()
                        .color(palette.accent),
                );

                ui.add_space(4.0);
                ui.label(
                    RichText::new("Cursor theme manager")
                        .size(13.0)
                        .color(palette.text_secondary),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(palette.text_muted),
                );

                ui.add_space(12.0);
                if ui.link("GitHub").clicked() {
                    let _ = open::that("https://github.com/cursorweave/cursorweave");
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(palette.text_muted),
                );

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }

                ui.add_space(8.0);
            });
        });
}
