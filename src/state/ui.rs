//! UI-related application state

use crate::ui::theme::Palette;

/// Application tabs representing the main navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Themes tab: discovered theme list, refresh and apply controls
    #[default]
    Themes,
    /// Settings tab: themes directory, address separator, palette
    Settings,
}

/// UI-related state
pub struct UiState {
    /// Active color palette
    pub palette: Palette,
    /// Currently selected tab
    pub active_tab: Tab,
    /// Whether the palette needs to be applied to the egui context
    pub palette_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState with the given palette
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            active_tab: Tab::default(),
            palette_dirty: true, // Apply palette on first frame
            show_about_dialog: false,
        }
    }
}
