pub mod color;
pub mod domain;

pub use color::Color;
pub use domain::*;
