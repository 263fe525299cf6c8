use serde::{Deserialize, Serialize};

/// RGB display color.
///
/// The engine never interprets channel values; it only threads colors from
/// the host (tag registry, highlight background) back out through computed
/// results, so a plain triple is enough for any frontend to map onto its
/// own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
