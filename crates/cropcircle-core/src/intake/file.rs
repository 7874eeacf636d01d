use std::path::Path;

use crate::error::Result;

/// A user-supplied file: declared MIME type plus raw bytes.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub name: Option<String>,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: Option<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name,
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a file from disk. The MIME type comes from the content signature,
    /// falling back to the file extension when the signature is unknown.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let mime = sniff_mime(&bytes)
            .or_else(|| mime_from_extension(path))
            .unwrap_or("application/octet-stream");
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        tracing::debug!(path = %path.display(), mime, size = bytes.len(), "Read image file");
        Ok(Self::new(name, mime, bytes))
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes).map(|kind| kind.mime_type())
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
