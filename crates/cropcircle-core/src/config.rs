use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ALLOWED_TYPES, DEFAULT_FILL, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_DIMENSION,
    DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_SIZE, DEFAULT_VIEWPORT_SIZE, MAX_OUTPUT_SIZE,
};
use crate::error::{AvatarError, Result};

/// Full editor configuration, usually loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub output: OutputSpec,
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EditorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.intake.validate()?;
        self.output.validate()
    }
}

/// Limits applied to user-supplied files before and during decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Accepted MIME types.
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
    /// Maximum decoded width or height in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}
fn default_allowed_types() -> Vec<String> {
    DEFAULT_ALLOWED_TYPES.iter().map(|s| s.to_string()).collect()
}
fn default_max_dimension() -> u32 {
    DEFAULT_MAX_DIMENSION
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: default_allowed_types(),
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl IntakeConfig {
    /// Whether `mime` is in the allow-list (case-insensitive).
    pub fn allows(&self, mime: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(mime.trim()))
    }

    fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(AvatarError::InvalidConfig(
                "intake.max_file_size must be > 0".into(),
            ));
        }
        if self.allowed_types.is_empty() {
            return Err(AvatarError::InvalidConfig(
                "intake.allowed_types must not be empty".into(),
            ));
        }
        if self.max_dimension == 0 {
            return Err(AvatarError::InvalidConfig(
                "intake.max_dimension must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Viewport and export geometry.
///
/// `viewport_size` is the on-screen preview side; `output_size` is the side of
/// the exported bitmap. The two may differ.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    #[serde(default = "default_viewport_size")]
    pub viewport_size: u32,
    #[serde(default = "default_output_size")]
    pub output_size: u32,
    /// JPEG quality, 1..=100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// RGB colour outside the circle and outside the source image.
    #[serde(default = "default_fill")]
    pub fill: [u8; 3],
}

fn default_viewport_size() -> u32 {
    DEFAULT_VIEWPORT_SIZE
}
fn default_output_size() -> u32 {
    DEFAULT_OUTPUT_SIZE
}
fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}
fn default_fill() -> [u8; 3] {
    DEFAULT_FILL
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            viewport_size: DEFAULT_VIEWPORT_SIZE,
            output_size: DEFAULT_OUTPUT_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            fill: DEFAULT_FILL,
        }
    }
}

impl OutputSpec {
    fn validate(&self) -> Result<()> {
        if self.viewport_size == 0 {
            return Err(AvatarError::InvalidConfig(
                "output.viewport_size must be > 0".into(),
            ));
        }
        if self.output_size == 0 || self.output_size > MAX_OUTPUT_SIZE {
            return Err(AvatarError::InvalidConfig(format!(
                "output.output_size must be in 1..={MAX_OUTPUT_SIZE}, got {}",
                self.output_size
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AvatarError::InvalidConfig(format!(
                "output.jpeg_quality must be in 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
