//! Backend capability surface for the themes workflow.
//!
//! The workflow state only talks to the [`ThemeBackend`] trait, so tests can
//! substitute a fake and the filesystem implementation stays swappable.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::themes::{self, ThemeError};

/// The three capabilities the themes workflow invokes.
#[async_trait]
pub trait ThemeBackend: Send + Sync {
    /// Resolve the base location under which theme names are addressed.
    async fn themes_root(&self) -> Result<String, ThemeError>;

    /// List installed theme names, possibly empty.
    async fn list_themes(&self) -> Result<Vec<String>, ThemeError>;

    /// Apply the theme at the given fully-qualified address and describe
    /// the outcome.
    async fn apply_theme(&self, theme_dir: &str) -> Result<String, ThemeError>;
}

/// Filesystem-backed implementation used by the application.
pub struct LocalThemeBackend {
    /// Themes root override from configuration
    root_override: Option<PathBuf>,
}

impl LocalThemeBackend {
    pub fn new(root_override: Option<PathBuf>) -> Self {
        Self { root_override }
    }

    fn resolve_root(&self) -> Result<PathBuf, ThemeError> {
        match &self.root_override {
            Some(root) => Ok(root.clone()),
            None => themes::default_themes_root(),
        }
    }
}

#[async_trait]
impl ThemeBackend for LocalThemeBackend {
    async fn themes_root(&self) -> Result<String, ThemeError> {
        Ok(self.resolve_root()?.to_string_lossy().into_owned())
    }

    async fn list_themes(&self) -> Result<Vec<String>, ThemeError> {
        themes::list_theme_dirs(self.resolve_root()?).await
    }

    async fn apply_theme(&self, theme_dir: &str) -> Result<String, ThemeError> {
        themes::activate_theme(PathBuf::from(theme_dir)).await
    }
}
