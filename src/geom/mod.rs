mod path;
mod proj;

pub use path::*;
pub use proj::*;
