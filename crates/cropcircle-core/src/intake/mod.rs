mod decode;
mod file;
mod validate;

pub use decode::{decode, spawn_decode, SourceImage};
pub use file::ImageFile;
pub use validate::validate;
