//! Folds a pixel's alpha channel into its color before palette matching.

use crate::pixel::Pixel;

/// Alpha above this is treated as fully opaque.
pub const OPAQUE_THRESHOLD: u8 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    Transparent,
    Color([u8; 3]),
}

/// Scale RGB by opacity, which approximates drawing over black.
pub fn composite(pixel: Pixel) -> Composite {
    match pixel.a {
        a if a > OPAQUE_THRESHOLD => Composite::Color(pixel.channels()),
        0 => Composite::Transparent,
        a => {
            let opacity = f32::from(a) / f32::from(u8::MAX);
            Composite::Color(pixel.channels().map(|c| (f32::from(c) * opacity).round() as u8))
        }
    }
}
