pub mod config;
pub mod crop;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result};
use cropcircle_core::config::EditorConfig;

/// Load the editor config from `path`, or fall back to defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    match path {
        Some(p) => EditorConfig::load(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(EditorConfig::default()),
    }
}
