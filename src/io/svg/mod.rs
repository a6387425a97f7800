//! SVG format writing operations for map export.

mod color;
mod writer;

pub use color::*;
pub use writer::*;
