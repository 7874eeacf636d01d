use crate::error::{AvatarError, Result};

/// Zoom limits derived from an image's natural size and the viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    /// Zoom at which the longer side spans the viewport (whole image visible).
    pub min_zoom: f64,
    /// Zoom at which the shorter side spans the viewport (viewport fully covered).
    pub fit_zoom: f64,
}

impl ZoomBounds {
    /// Largest zoom the slider can reach.
    pub fn max_zoom(&self) -> f64 {
        2.0 * self.fit_zoom
    }
}

/// Derive `{min_zoom, fit_zoom}` for a square viewport of side `viewport_size`.
///
/// `min_zoom <= fit_zoom` always holds; they are equal only for square images.
pub fn compute_bounds(natural_w: u32, natural_h: u32, viewport_size: u32) -> Result<ZoomBounds> {
    if natural_w == 0 || natural_h == 0 {
        return Err(AvatarError::InvalidDimensions {
            width: natural_w,
            height: natural_h,
        });
    }
    if viewport_size == 0 {
        return Err(AvatarError::InvalidDimensions {
            width: viewport_size,
            height: viewport_size,
        });
    }

    let viewport = viewport_size as f64;
    let shorter = natural_w.min(natural_h) as f64;
    let longer = natural_w.max(natural_h) as f64;

    let bounds = ZoomBounds {
        min_zoom: viewport / longer,
        fit_zoom: viewport / shorter,
    };
    tracing::debug!(
        natural_w,
        natural_h,
        viewport_size,
        min_zoom = bounds.min_zoom,
        fit_zoom = bounds.fit_zoom,
        "Computed zoom bounds"
    );
    Ok(bounds)
}
