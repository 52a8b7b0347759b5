pub mod buffer;
pub mod screen;
pub mod write;
