//! Cursor theme discovery and activation for CursorWeave.
//!
//! This module handles:
//! - Resolving the themes root directory
//! - Scanning installed themes (one directory per theme)
//! - Reading a theme's manifest.json in a BOM-safe way
//! - Validating a theme before it is activated

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Per-theme manifest, read from manifest.json in the theme directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeManifest {
    /// Cursor slot name -> cursor file name relative to the theme directory
    #[serde(default)]
    pub cursors: HashMap<String, String>,
}

/// Errors that can occur during theme operations
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Cannot determine themes directory")]
    NoThemesRoot,

    #[error("Theme directory does not exist: {0}")]
    ThemeDirMissing(String),

    #[error("Unable to read manifest.json: {0}")]
    ManifestRead(String),

    #[error("Invalid manifest.json: {0}")]
    ManifestParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task cancelled")]
    Cancelled,
}

// ============================================================================
// Root Resolution
// ============================================================================

/// Default themes root: `CursorWeave/themes` under the platform-local data
/// directory (%LOCALAPPDATA% on Windows, ~/.local/share elsewhere).
pub fn default_themes_root() -> Result<PathBuf, ThemeError> {
    let dirs = directories::BaseDirs::new().ok_or(ThemeError::NoThemesRoot)?;
    Ok(dirs.data_local_dir().join("CursorWeave").join("themes"))
}

// ============================================================================
// Theme Scanning
// ============================================================================

/// List theme directory names under the given root.
///
/// A missing root yields an empty list rather than an error; a fresh install
/// simply has no themes yet.
pub async fn list_theme_dirs(root: PathBuf) -> Result<Vec<String>, ThemeError> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    // Run in spawn_blocking since it's filesystem I/O
    tokio::task::spawn_blocking(move || {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&root)?.flatten() {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

        Ok(names)
    })
    .await
    .map_err(|_| ThemeError::Cancelled)?
}

// ============================================================================
// Manifest Handling
// ============================================================================

/// Read and parse a theme's manifest.json.
///
/// Tolerates a UTF-8 BOM at the start of the file; manifests exported by
/// Windows editors often carry one.
pub fn read_manifest(theme_dir: &Path) -> Result<ThemeManifest, ThemeError> {
    let manifest_path = theme_dir.join("manifest.json");
    let raw =
        std::fs::read(&manifest_path).map_err(|e| ThemeError::ManifestRead(e.to_string()))?;

    let bytes = raw.strip_prefix(UTF8_BOM.as_slice()).unwrap_or(&raw);
    let content = std::str::from_utf8(bytes)
        .map_err(|e| ThemeError::ManifestRead(format!("invalid UTF-8: {e}")))?;

    serde_json::from_str(content).map_err(|e| ThemeError::ManifestParse(e.to_string()))
}

// ============================================================================
// Activation
// ============================================================================

/// Validate the theme at `theme_dir` and report the activation outcome.
///
/// Parses the manifest and checks which mapped cursor files are present.
/// Missing files are logged and skipped, not fatal.
pub async fn activate_theme(theme_dir: PathBuf) -> Result<String, ThemeError> {
    tokio::task::spawn_blocking(move || {
        if !theme_dir.is_dir() {
            return Err(ThemeError::ThemeDirMissing(theme_dir.display().to_string()));
        }

        let manifest = read_manifest(&theme_dir)?;

        let mut present = 0usize;
        for (slot, file_name) in &manifest.cursors {
            let full_path = theme_dir.join(file_name);
            if full_path.exists() {
                present += 1;
            } else {
                tracing::warn!(
                    slot = %slot,
                    file = %full_path.display(),
                    "cursor file missing"
                );
            }
        }

        if present == 0 {
            tracing::warn!(dir = %theme_dir.display(), "no cursor files resolved from manifest");
        }

        let name = theme_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| theme_dir.display().to_string());

        Ok(format!(
            "Theme '{}' applied ({} of {} cursors)",
            name,
            present,
            manifest.cursors.len()
        ))
    })
    .await
    .map_err(|_| ThemeError::Cancelled)?
}
