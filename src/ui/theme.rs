use eframe::egui::{self, Color32, CornerRadius, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available palette presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PalettePreset {
    #[default]
    Slate,
    Amber,
    Mocha,
}

impl PalettePreset {
    /// Get all available presets
    pub fn all() -> &'static [PalettePreset] {
        &[PalettePreset::Slate, PalettePreset::Amber, PalettePreset::Mocha]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Slate => "Slate",
            PalettePreset::Amber => "Amber",
            PalettePreset::Mocha => "Catppuccin Mocha",
        }
    }

    /// Get the palette colors for this preset
    pub fn palette(&self) -> Palette {
        match self {
            PalettePreset::Slate => Palette::slate(),
            PalettePreset::Amber => Palette::amber(),
            PalettePreset::Mocha => Palette::mocha(),
        }
    }
}

/// Palette color definitions
#[derive(Debug, Clone)]
pub struct Palette {
    // Base colors
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,

    // Semantic colors
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Palette {
    /// Slate palette - cool neutral default
    pub fn slate() -> Self {
        Self {
            bg_dark: Color32::from_rgb(18, 21, 27),
            bg_medium: Color32::from_rgb(26, 30, 38),
            bg_light: Color32::from_rgb(38, 44, 56),

            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(196, 204, 216),
            text_muted: Color32::from_rgb(128, 140, 158),

            accent: Color32::from_rgb(96, 165, 250),
            accent_hover: Color32::from_rgb(147, 197, 253),

            success: Color32::from_rgb(74, 222, 128),
            warning: Color32::from_rgb(250, 204, 21),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(51, 60, 75),
            selection: Color32::from_rgb(96, 165, 250).gamma_multiply(0.3),
        }
    }

    /// Amber palette - warm, high contrast
    pub fn amber() -> Self {
        Self {
            bg_dark: Color32::from_rgb(24, 22, 18),
            bg_medium: Color32::from_rgb(33, 30, 25),
            bg_light: Color32::from_rgb(48, 44, 36),

            text_primary: Color32::from_rgb(250, 250, 249),
            text_secondary: Color32::from_rgb(214, 211, 200),
            text_muted: Color32::from_rgb(150, 145, 130),

            accent: Color32::from_rgb(245, 158, 11),
            accent_hover: Color32::from_rgb(251, 191, 36),

            success: Color32::from_rgb(34, 197, 94),
            warning: Color32::from_rgb(234, 179, 8),
            error: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(68, 62, 50),
            selection: Color32::from_rgb(245, 158, 11).gamma_multiply(0.3),
        }
    }

    /// Catppuccin Mocha palette - popular community scheme
    pub fn mocha() -> Self {
        Self {
            bg_dark: Color32::from_rgb(24, 24, 37),
            bg_medium: Color32::from_rgb(30, 30, 46),
            bg_light: Color32::from_rgb(49, 50, 68),

            text_primary: Color32::from_rgb(205, 214, 244),
            text_secondary: Color32::from_rgb(186, 194, 222),
            text_muted: Color32::from_rgb(147, 153, 178),

            accent: Color32::from_rgb(137, 180, 250),
            accent_hover: Color32::from_rgb(180, 190, 254),

            success: Color32::from_rgb(166, 227, 161),
            warning: Color32::from_rgb(249, 226, 175),
            error: Color32::from_rgb(243, 139, 168),

            border: Color32::from_rgb(69, 71, 90),
            selection: Color32::from_rgb(137, 180, 250).gamma_multiply(0.3),
        }
    }

    /// Apply this palette to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();
        let radius = CornerRadius::same(6);

        visuals.window_fill = self.bg_medium;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;

        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_light;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = radius;

        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.hovered.corner_radius = radius;

        visuals.widgets.active.bg_fill = self.bg_light;
        visuals.widgets.active.weak_bg_fill = self.bg_light;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.active.corner_radius = radius;

        visuals.widgets.open.bg_fill = self.bg_light;
        visuals.widgets.open.weak_bg_fill = self.bg_light;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.open.corner_radius = radius;

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.hyperlink_color = self.accent;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);
    }
}
