pub mod pan;
pub mod state;

pub use pan::{DragState, PanResponse, PointerEvent};
pub use state::ViewportState;
