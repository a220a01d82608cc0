pub mod gemini;
pub mod image;
pub mod text;

pub use gemini::*;
pub use image::*;
pub use text::*;
