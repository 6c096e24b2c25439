//! UI modules for CursorWeave
//!
//! Rendering code, organized by tab, plus shared components and the palette.

mod components;
mod settings_tab;
pub mod theme;
mod themes_panel;

pub use components::{render_about_dialog, render_tab};
pub use settings_tab::render_settings_tab;
pub use themes_panel::render_themes_panel;
