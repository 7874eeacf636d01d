use crate::consts::{SLIDER_MAX, SLIDER_MID};

use super::ZoomBounds;

/// Map a slider position in `[0, 100]` to a zoom factor.
///
/// Two linear segments meet at the midpoint: `0..=50` spans
/// `min_zoom..=fit_zoom` and `50..=100` spans `fit_zoom..=2 * fit_zoom`.
/// The midpoint is evaluated on the upper segment so it lands exactly on
/// `fit_zoom`. Values above 100 are treated as 100.
pub fn slider_to_zoom(slider: u8, bounds: &ZoomBounds) -> f64 {
    let slider = slider.min(SLIDER_MAX);
    let mid = SLIDER_MID as f64;

    // 50 goes to the upper branch: `fit + fit * 0` is exactly `fit_zoom`,
    // while the lower branch may round away from it.
    if slider < SLIDER_MID {
        let t = slider as f64 / mid;
        bounds.min_zoom + (bounds.fit_zoom - bounds.min_zoom) * t
    } else {
        let t = (slider - SLIDER_MID) as f64 / mid;
        bounds.fit_zoom + bounds.fit_zoom * t
    }
}
