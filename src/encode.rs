//! ANSI 256-color encoding of a sampled grid.

use crate::alpha::{composite, Composite};
use crate::matcher::ColorMatcher;
use crate::pixel::{Pixel, SampledGrid};

/// SGR reset.
pub const RESET: &str = "\x1b[0m";

/// Background and foreground set to the same palette code.
pub fn color_sequence(code: u8) -> String {
    format!("\x1b[48;5;{code}m\x1b[38;5;{code}m")
}

/// What the terminal is currently painting within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Transparent,
    Color(u8),
}

/// Per-row run state; starts empty at every row boundary.
#[derive(Default)]
struct RowState {
    previous: Option<Cell>,
    previous_raw: Option<u32>,
}

/// Turns sampled pixels into terminal rows of colored spaces.
///
/// Escapes are only written when the cell color changes from its left
/// neighbour: a reset, then the new color unless the cell is transparent.
/// Runs of one color cost a single byte per cell.
pub struct AnsiEncoder {
    matcher: ColorMatcher,
}

impl AnsiEncoder {
    pub fn new(matcher: ColorMatcher) -> Self {
        Self { matcher }
    }

    pub fn encode(&self, grid: &SampledGrid) -> String {
        let mut out = String::with_capacity(grid.width() * grid.height() + grid.height() * 8);
        for row in grid.rows() {
            self.encode_row(row, &mut out);
        }
        out
    }

    fn encode_row(&self, row: &[Pixel], out: &mut String) {
        let mut state = RowState::default();

        for &pixel in row {
            let raw = pixel.signature();
            let cell = match state.previous {
                Some(previous) if state.previous_raw == Some(raw) => previous,
                _ => self.classify(pixel),
            };

            if state.previous != Some(cell) {
                out.push_str(RESET);
                if let Cell::Color(code) = cell {
                    out.push_str(&color_sequence(code));
                }
            }
            out.push(' ');

            state.previous = Some(cell);
            state.previous_raw = Some(raw);
        }

        out.push_str(RESET);
        out.push('\n');
    }

    fn classify(&self, pixel: Pixel) -> Cell {
        match composite(pixel) {
            Composite::Transparent => Cell::Transparent,
            Composite::Color(rgb) => Cell::Color(self.matcher.find_best_match(rgb)),
        }
    }
}

impl Default for AnsiEncoder {
    fn default() -> Self {
        Self::new(ColorMatcher::default())
    }
}
