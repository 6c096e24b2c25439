//! Settings tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::CursorWeaveApp;
use crate::ui::components::section_frame;
use crate::ui::theme::PalettePreset;

const SEPARATOR_CHOICES: [(Option<&str>, &str); 3] = [
    (None, "Platform default"),
    (Some("\\"), "Backslash (\\)"),
    (Some("/"), "Slash (/)"),
];

/// Render the settings tab
pub fn render_settings_tab(app: &mut CursorWeaveApp, ui: &mut egui::Ui) {
    let palette = app.ui.palette.clone();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            ui.label(
                RichText::new("Settings")
                    .color(palette.text_primary)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(12.0);

            // Appearance section
            section_frame(&palette).show(ui, |ui| {
                ui.label(
                    RichText::new("Appearance")
                        .color(palette.accent)
                        .size(13.0)
                        .strong(),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Palette:").color(palette.text_muted));

                    let current_name = app.config.launcher.palette.name();
                    egui::ComboBox::from_id_salt("palette_select")
                        .selected_text(current_name)
                        .show_ui(ui, |ui| {
                            for preset in PalettePreset::all() {
                                if ui
                                    .selectable_label(
                                        app.config.launcher.palette == *preset,
                                        preset.name(),
                                    )
                                    .clicked()
                                {
                                    app.config.launcher.palette = *preset;
                                    app.ui.palette = preset.palette();
                                    app.ui.palette_dirty = true;
                                    app.save_config();
                                }
                            }
                        });
                });
            });

            ui.add_space(12.0);

            // Theme discovery section
            section_frame(&palette).show(ui, |ui| {
                ui.label(
                    RichText::new("Theme discovery")
                        .color(palette.accent)
                        .size(13.0)
                        .strong(),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Themes directory:").color(palette.text_muted));
                    let dir_text = app
                        .config
                        .themes
                        .directory
                        .as_deref()
                        .unwrap_or("Default location");
                    ui.label(RichText::new(dir_text).color(palette.text_secondary));
                });

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Browse...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_title("Select Themes Directory")
                            .pick_folder()
                        {
                            app.config.themes.directory =
                                Some(path.to_string_lossy().to_string());
                            app.save_config();
                            app.reload_backend();
                        }
                    }

                    let has_override = app.config.themes.directory.is_some();
                    if ui
                        .add_enabled(has_override, egui::Button::new("Use default"))
                        .clicked()
                    {
                        app.config.themes.directory = None;
                        app.save_config();
                        app.reload_backend();
                    }
                });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Address separator:").color(palette.text_muted));

                    let current = separator_label(app.config.themes.separator.as_deref());
                    let overridden = app.config.themes.separator.is_some();
                    egui::ComboBox::from_id_salt("separator_select")
                        .selected_text(current)
                        .show_ui(ui, |ui| {
                            for (value, label) in SEPARATOR_CHOICES {
                                let selected =
                                    app.config.themes.separator.as_deref() == value;
                                if ui.selectable_label(selected, label).clicked() {
                                    app.config.themes.separator =
                                        value.map(|s| s.to_string());
                                    app.save_config();
                                    app.reload_backend();
                                }
                            }
                        });

                    if overridden {
                        ui.label(
                            RichText::new("Overrides the platform path convention")
                                .size(11.0)
                                .color(palette.warning),
                        );
                    }
                });
            });
        });
}

fn separator_label(separator: Option<&str>) -> &'static str {
    SEPARATOR_CHOICES
        .iter()
        .find(|(value, _)| *value == separator)
        .map(|(_, label)| *label)
        .unwrap_or("Custom")
}
