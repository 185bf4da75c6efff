//! Nearest palette color search with an early-exit threshold.

use crate::palette::Palette;

/// Default early-exit distance for [`ColorMatcher`].
pub const DEFAULT_MIN_DIST: f64 = 5.0;

/// Euclidean distance between two RGB triples.
#[inline]
pub fn distance(a: [u8; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Maps RGB values onto palette codes.
///
/// The palette is scanned in code order. The first entry within `min_dist`
/// wins outright, so a larger threshold trades fidelity for speed. When no
/// entry is that close the true nearest entry is returned, ties going to the
/// lower code.
#[derive(Clone, Copy)]
pub struct ColorMatcher {
    palette: &'static Palette,
    min_dist: f64,
}

impl ColorMatcher {
    pub fn new(min_dist: f64) -> Self {
        Self { palette: Palette::global(), min_dist }
    }

    pub fn min_dist(&self) -> f64 {
        self.min_dist
    }

    pub fn find_best_match(&self, rgb: [u8; 3]) -> u8 {
        let mut best_code = 0;
        let mut best_dist = f64::INFINITY;

        for (code, candidate) in self.palette.iter() {
            let dist = distance(rgb, candidate);
            if dist <= self.min_dist {
                return code;
            }
            if dist < best_dist {
                best_dist = dist;
                best_code = code;
            }
        }

        best_code
    }
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DIST)
    }
}
