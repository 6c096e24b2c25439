//! Themes tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::CursorWeaveApp;
use crate::state::StateEvent;
use crate::ui::components::section_frame;

/// Render the themes tab
pub fn render_themes_panel(app: &mut CursorWeaveApp, ui: &mut egui::Ui) -> Vec<StateEvent> {
    let palette = app.ui.palette.clone();
    let mut events = Vec::new();

    ui.label(
        RichText::new("Themes")
            .color(palette.text_primary)
            .size(20.0)
            .strong(),
    );
    ui.add_space(12.0);

    let loading = app.themes.is_busy();
    ui.horizontal(|ui| {
        let label = if loading { "Loading..." } else { "Refresh themes" };
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            events.push(app.themes.refresh());
        }
        if loading {
            ui.spinner();
        }
    });

    // Banner only for discovery failures; apply failures go through the
    // status bar instead
    if let Some(err) = app.themes.error.clone() {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("Error: {}", err)).color(palette.error));
    }

    ui.add_space(12.0);

    section_frame(&palette).show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("themes_list")
            .max_height(380.0)
            .show(ui, |ui| {
                if app.themes.list.is_empty() {
                    ui.label(
                        RichText::new("No themes found")
                            .color(palette.text_muted)
                            .italics(),
                    );
                    return;
                }

                let mut apply_request: Option<String> = None;
                for name in &app.themes.list {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(name).color(palette.text_primary));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Apply").clicked() {
                                    apply_request = Some(name.clone());
                                }
                            },
                        );
                    });
                }

                if let Some(name) = apply_request {
                    events.push(app.themes.apply(&name));
                }
            });
    });

    if let Some(outcome) = app.themes.last_applied.clone() {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("Last apply: {}", outcome)).color(palette.success));
    }

    events
}
