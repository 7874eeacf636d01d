pub mod config;
pub mod consts;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod intake;
pub mod render;
pub mod session;
pub mod task;
pub mod viewport;
