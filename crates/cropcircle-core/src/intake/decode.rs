use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, ImageReader, Limits, RgbaImage};

use crate::config::IntakeConfig;
use crate::error::{AvatarError, Result};
use crate::task::Pending;

use super::{validate, ImageFile};

/// A decoded source image. Pixels are shared, so clones are cheap.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
    format: ImageFormat,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage, format: ImageFormat) -> Self {
        Self {
            pixels: Arc::new(pixels),
            format,
        }
    }

    /// Natural width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Natural height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Validate and decode `file` on the calling thread.
pub fn decode(file: &ImageFile, config: &IntakeConfig) -> Result<SourceImage> {
    validate(file, config)?;
    decode_validated(file, config)
}

/// Validate `file` synchronously, then decode it on a worker thread.
///
/// Type and size errors are returned immediately; decode errors arrive
/// through the returned [`Pending`].
pub fn spawn_decode(
    file: ImageFile,
    config: &IntakeConfig,
    generation: u64,
) -> Result<Pending<SourceImage>> {
    validate(&file, config)?;
    let config = config.clone();
    Pending::spawn("cropcircle-decode", generation, move || {
        decode_validated(&file, &config)
    })
}

fn decode_validated(file: &ImageFile, config: &IntakeConfig) -> Result<SourceImage> {
    let format = format_for_mime(&file.mime).ok_or_else(|| AvatarError::UnsupportedType {
        mime: file.mime.clone(),
    })?;

    let mut limits = Limits::default();
    limits.max_image_width = Some(config.max_dimension);
    limits.max_image_height = Some(config.max_dimension);

    let mut reader = ImageReader::with_format(Cursor::new(file.bytes.as_slice()), format);
    reader.limits(limits);
    let decoded = reader
        .decode()
        .map_err(|e| AvatarError::Decode(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(AvatarError::InvalidDimensions {
            width: decoded.width(),
            height: decoded.height(),
        });
    }

    let image = SourceImage::new(decoded.to_rgba8(), format);
    tracing::info!(
        name = file.name.as_deref().unwrap_or("<unnamed>"),
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );
    Ok(image)
}

fn format_for_mime(mime: &str) -> Option<ImageFormat> {
    match mime.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormat::Jpeg),
        "image/png" => Some(ImageFormat::Png),
        _ => None,
    }
}
