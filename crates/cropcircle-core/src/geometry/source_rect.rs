use super::Vec2;

/// The square region of the source image, in source pixel coordinates, that
/// is visible through the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRect {
    /// Centre of the region.
    pub center_x: f64,
    pub center_y: f64,
    /// Side length of the region.
    pub size: f64,
}

impl SourceRect {
    /// Left edge.
    pub fn x(&self) -> f64 {
        self.center_x - self.size / 2.0
    }

    /// Top edge.
    pub fn y(&self) -> f64 {
        self.center_y - self.size / 2.0
    }

    /// Whether the region lies entirely inside a `width x height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x() >= 0.0
            && self.y() >= 0.0
            && self.x() + self.size <= width as f64
            && self.y() + self.size <= height as f64
    }
}

/// Back-project the viewport into source pixel space.
///
/// `offset` is the pan in viewport pixels and `zoom` the current display
/// scale. The offset is not clamped, so the result may extend past the image.
pub fn source_rect(
    natural_w: u32,
    natural_h: u32,
    zoom: f64,
    offset: Vec2,
    viewport_size: u32,
) -> SourceRect {
    let natural_w = natural_w as f64;
    let natural_h = natural_h as f64;
    let viewport = viewport_size as f64;
    let center = viewport / 2.0;

    let scaled_w = natural_w * zoom;
    let scaled_h = natural_h * zoom;

    SourceRect {
        center_x: (center - offset.x - scaled_w / 2.0) / zoom + natural_w / 2.0,
        center_y: (center - offset.y - scaled_h / 2.0) / zoom + natural_h / 2.0,
        size: viewport / zoom,
    }
}

/// Offset that places the image centre under the viewport centre.
pub fn centering_offset(natural_w: u32, natural_h: u32, zoom: f64, viewport_size: u32) -> Vec2 {
    let center = viewport_size as f64 / 2.0;
    Vec2::new(
        center - natural_w as f64 * zoom / 2.0,
        center - natural_h as f64 * zoom / 2.0,
    )
}
