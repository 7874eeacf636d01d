use crate::geometry::Vec2;

use super::ViewportState;

/// Drag state of the pan controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `anchor` is the pointer position minus the offset at drag start.
    Dragging { anchor: Vec2 },
}

/// Pointer or touch input, in viewport coordinates.
///
/// `Down` corresponds to mouse-down/touch-start on the viewport; `Move`, `Up`
/// and `Cancel` come from document-level handlers, so their positions may lie
/// outside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    Cancel,
}

/// Outcome of feeding one pointer event to the controller.
///
/// The host attaches its document-level move/up handlers on
/// `CaptureStarted` and detaches them on `CaptureReleased`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanResponse {
    Ignored,
    CaptureStarted,
    Panned,
    CaptureReleased,
}

impl ViewportState {
    /// Advance the idle/dragging state machine by one event.
    pub fn handle_pointer(&mut self, event: PointerEvent, viewport_size: u32) -> PanResponse {
        match (self.drag, event) {
            (DragState::Idle, PointerEvent::Down(pos)) if inside(pos, viewport_size) => {
                let anchor = pos - self.offset;
                self.drag = DragState::Dragging { anchor };
                tracing::debug!(x = pos.x, y = pos.y, "Drag started");
                PanResponse::CaptureStarted
            }
            (DragState::Dragging { anchor }, PointerEvent::Move(pos)) => {
                self.offset = pos - anchor;
                PanResponse::Panned
            }
            (DragState::Dragging { .. }, PointerEvent::Up(_) | PointerEvent::Cancel) => {
                self.release_capture()
            }
            _ => PanResponse::Ignored,
        }
    }

    /// End any active drag, keeping the current offset.
    pub fn release_capture(&mut self) -> PanResponse {
        if self.is_capturing() {
            self.drag = DragState::Idle;
            tracing::debug!(
                offset_x = self.offset.x,
                offset_y = self.offset.y,
                "Drag released"
            );
            PanResponse::CaptureReleased
        } else {
            PanResponse::Ignored
        }
    }
}

fn inside(pos: Vec2, viewport_size: u32) -> bool {
    let size = viewport_size as f64;
    (0.0..size).contains(&pos.x) && (0.0..size).contains(&pos.y)
}
