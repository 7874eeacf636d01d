use image::RgbImage;

use crate::error::Result;
use crate::geometry::SourceRect;
use crate::intake::SourceImage;
use crate::task::Pending;

use super::{composite, encode_jpeg};

/// A frozen snapshot of everything needed to produce one avatar.
///
/// Built from a session; later edits to that session do not affect it.
#[derive(Clone, Debug)]
pub struct ExportRequest {
    pub image: SourceImage,
    pub rect: SourceRect,
    pub output_size: u32,
    pub jpeg_quality: u8,
    pub fill: [u8; 3],
}

impl ExportRequest {
    /// Composite the clipped square without encoding it.
    pub fn render(&self) -> Result<RgbImage> {
        composite(self.image.pixels(), &self.rect, self.output_size, self.fill)
    }

    /// Composite and JPEG-encode.
    pub fn run(&self) -> Result<Vec<u8>> {
        let rendered = self.render()?;
        let bytes = encode_jpeg(&rendered, self.jpeg_quality)?;
        tracing::info!(
            output_size = self.output_size,
            bytes = bytes.len(),
            "Exported avatar"
        );
        Ok(bytes)
    }

    /// Run on a worker thread.
    pub fn spawn(self, generation: u64) -> Result<Pending<Vec<u8>>> {
        Pending::spawn("cropcircle-export", generation, move || self.run())
    }
}
