use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image type: {mime}")]
    UnsupportedType { mime: String },

    #[error("Image is too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Failed to encode output: {0}")]
    Encode(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Background worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, AvatarError>;
