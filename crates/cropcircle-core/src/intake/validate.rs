use crate::config::IntakeConfig;
use crate::error::{AvatarError, Result};

use super::ImageFile;

/// Check the declared type and size of `file` before any decoding.
///
/// The type is checked first, so an oversized file of the wrong type is
/// reported as unsupported.
pub fn validate(file: &ImageFile, config: &IntakeConfig) -> Result<()> {
    if !config.allows(&file.mime) {
        return Err(AvatarError::UnsupportedType {
            mime: file.mime.clone(),
        });
    }

    let size = file.size();
    if size > config.max_file_size {
        return Err(AvatarError::TooLarge {
            size,
            limit: config.max_file_size,
        });
    }

    Ok(())
}
