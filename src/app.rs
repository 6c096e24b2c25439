use std::sync::Arc;

use eframe::egui;

use crate::backend::{LocalThemeBackend, ThemeBackend};
use crate::config::Config;
use crate::state::{StateEvent, Tab, ThemesState, UiState};
use crate::ui;

/// Main application state
pub struct CursorWeaveApp {
    /// Application configuration
    pub config: Config,
    /// Themes workflow state
    pub themes: ThemesState,
    /// UI state
    pub ui: UiState,
    /// Status message for the status bar
    status_message: String,
}

impl CursorWeaveApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();

        let backend: Arc<dyn ThemeBackend> =
            Arc::new(LocalThemeBackend::new(config.themes.root_override()));
        let mut themes = ThemesState::new(backend, config.themes.effective_separator());

        let ui = UiState::new(config.launcher.palette.palette());

        // Discover once on startup; afterwards only an explicit refresh
        // re-runs discovery
        let startup_event = themes.refresh();

        let mut app = Self {
            config,
            themes,
            ui,
            status_message: "Ready".to_string(),
        };
        app.handle_events(vec![startup_event]);
        app
    }

    /// Save configuration to disk
    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Rebuild the local backend from the current config and re-discover
    pub fn reload_backend(&mut self) {
        let backend: Arc<dyn ThemeBackend> =
            Arc::new(LocalThemeBackend::new(self.config.themes.root_override()));
        self.themes
            .reconfigure(backend, self.config.themes.effective_separator());

        let event = self.themes.refresh();
        self.handle_events(vec![event]);
    }

    /// Route state events into the status bar and the log
    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                // The workflow absorbs apply failures; this consumer opts
                // into showing them in the status bar
                StateEvent::ApplyFailed(msg) => {
                    self.status_message = format!("Apply failed: {}", msg);
                }
            }
        }
    }
}

impl eframe::App for CursorWeaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.palette_dirty {
            self.ui.palette.apply(ctx);
            self.ui.palette_dirty = false;
        }

        // Poll async tasks
        let events = self.themes.poll(ctx);
        self.handle_events(events);

        // Top tab bar
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui::render_tab(self, ui, Tab::Themes, "Themes");
                ui::render_tab(self, ui, Tab::Settings, "Settings");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.ui.active_tab {
            Tab::Themes => {
                let events = ui::render_themes_panel(self, ui);
                self.handle_events(events);
            }
            Tab::Settings => ui::render_settings_tab(self, ui),
        });

        ui::render_about_dialog(self, ctx);
    }
}
