use crate::consts::{DEFAULT_SLIDER, SLIDER_MAX};
use crate::geometry::{slider_to_zoom, Vec2, ZoomBounds};

use super::DragState;

/// Mutable view parameters for one edit session.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Slider position, 0..=100.
    pub(crate) slider: u8,
    /// Pan offset in viewport pixels.
    pub(crate) offset: Vec2,
    pub(crate) drag: DragState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            slider: DEFAULT_SLIDER,
            offset: Vec2::ZERO,
            drag: DragState::Idle,
        }
    }
}

impl ViewportState {
    /// Return to the state used for a freshly loaded image.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn slider(&self) -> u8 {
        self.slider
    }

    /// Set the slider position, clamping to 100.
    pub fn set_slider(&mut self, value: u8) {
        self.slider = value.min(SLIDER_MAX);
        tracing::debug!(slider = self.slider, "Slider moved");
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Any value is accepted; regions off the image render as the fill colour.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// True while a drag holds pointer capture.
    pub fn is_capturing(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Zoom implied by the current slider position.
    pub fn zoom(&self, bounds: &ZoomBounds) -> f64 {
        slider_to_zoom(self.slider, bounds)
    }
}
