pub mod compositor;
pub mod encode;
pub mod export;

pub use compositor::composite;
pub use encode::{encode_jpeg, encode_png};
pub use export::ExportRequest;
