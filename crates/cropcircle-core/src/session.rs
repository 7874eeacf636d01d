use image::RgbImage;

use crate::config::OutputSpec;
use crate::error::Result;
use crate::geometry::{centering_offset, compute_bounds, source_rect, SourceRect, Vec2, ZoomBounds};
use crate::intake::SourceImage;
use crate::render::{composite, ExportRequest};
use crate::viewport::{PanResponse, PointerEvent, ViewportState};

/// One image being positioned inside the circular viewport.
#[derive(Debug)]
pub struct EditSession {
    source: SourceImage,
    bounds: ZoomBounds,
    viewport: ViewportState,
    spec: OutputSpec,
}

impl EditSession {
    /// Start a session with the viewport at its defaults (slider 50, no pan).
    pub fn new(source: SourceImage, spec: OutputSpec) -> Result<Self> {
        let bounds = compute_bounds(source.width(), source.height(), spec.viewport_size)?;
        Ok(Self {
            source,
            bounds,
            viewport: ViewportState::default(),
            spec,
        })
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn bounds(&self) -> &ZoomBounds {
        &self.bounds
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn spec(&self) -> &OutputSpec {
        &self.spec
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom(&self.bounds)
    }

    pub fn slider(&self) -> u8 {
        self.viewport.slider()
    }

    pub fn set_slider(&mut self, value: u8) {
        self.viewport.set_slider(value);
    }

    pub fn offset(&self) -> Vec2 {
        self.viewport.offset()
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.viewport.set_offset(offset);
    }

    /// Pan so the image centre sits under the viewport centre at the current zoom.
    pub fn center_image(&mut self) {
        let offset = centering_offset(
            self.source.width(),
            self.source.height(),
            self.zoom(),
            self.spec.viewport_size,
        );
        self.viewport.set_offset(offset);
    }

    /// Feed a pointer event to the pan controller.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PanResponse {
        self.viewport.handle_pointer(event, self.spec.viewport_size)
    }

    pub fn is_capturing(&self) -> bool {
        self.viewport.is_capturing()
    }

    /// End any active drag; used on teardown.
    pub fn release_capture(&mut self) -> PanResponse {
        self.viewport.release_capture()
    }

    /// Visible region in source pixel coordinates.
    pub fn source_rect(&self) -> SourceRect {
        source_rect(
            self.source.width(),
            self.source.height(),
            self.zoom(),
            self.viewport.offset(),
            self.spec.viewport_size,
        )
    }

    /// What the viewport shows, at viewport resolution.
    pub fn render_preview(&self) -> Result<RgbImage> {
        composite(
            self.source.pixels(),
            &self.source_rect(),
            self.spec.viewport_size,
            self.spec.fill,
        )
    }

    /// Snapshot the current state for export.
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            image: self.source.clone(),
            rect: self.source_rect(),
            output_size: self.spec.output_size,
            jpeg_quality: self.spec.jpeg_quality,
            fill: self.spec.fill,
        }
    }

    /// Render and JPEG-encode the avatar on the calling thread.
    pub fn export(&self) -> Result<Vec<u8>> {
        self.export_request().run()
    }
}
