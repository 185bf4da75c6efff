//! Image to ANSI 256-color terminal art converter.

pub mod alpha;
pub mod bench;
pub mod config;
pub mod encode;
pub mod matcher;
pub mod palette;
pub mod pixel;
pub mod sample;
pub mod source;

pub use encode::AnsiEncoder;
pub use matcher::{ColorMatcher, DEFAULT_MIN_DIST};
pub use palette::Palette;
pub use pixel::{DecodedImage, Pixel, SampledGrid};
pub use source::ImageSource;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnsiArtError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("A buffer source needs a format hint (MIME type such as image/png)")]
    MissingFormatHint,
    #[error("Unsupported MIME type: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),
    #[error("Config error in {}: {source}", path.display())]
    Config { path: PathBuf, source: toml::de::Error },
}

pub type Result<T> = std::result::Result<T, AnsiArtError>;

/// Columns assumed when the terminal size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Share of the terminal width used when no width is given.
pub const DEFAULT_WIDTH_RATIO: f64 = 0.75;

/// Width of the attached terminal in columns.
pub fn terminal_columns() -> u16 {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols,
        Ok(_) => FALLBACK_COLUMNS,
        Err(e) => {
            log::warn!("could not query terminal size ({e}), assuming {FALLBACK_COLUMNS} columns");
            FALLBACK_COLUMNS
        }
    }
}

/// Conversion settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Target width in characters; 75% of the terminal width when unset.
    pub max_char_width: Option<u32>,
    /// Early-exit threshold for palette matching.
    pub min_dist: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_char_width: None, min_dist: DEFAULT_MIN_DIST }
    }
}

/// Main converter: sampling followed by palette encoding.
pub struct Converter {
    max_char_width: f64,
    encoder: AnsiEncoder,
}

impl Converter {
    /// Converter sized for the current terminal.
    pub fn new() -> Self {
        Self::for_columns(terminal_columns())
    }

    /// Converter filling 75% of `columns`.
    pub fn for_columns(columns: u16) -> Self {
        Self {
            max_char_width: f64::from(columns) * DEFAULT_WIDTH_RATIO,
            encoder: AnsiEncoder::default(),
        }
    }

    pub fn with_options(options: &Options) -> Self {
        let max_char_width = options.max_char_width.map_or_else(
            || f64::from(terminal_columns()) * DEFAULT_WIDTH_RATIO,
            f64::from,
        );
        Self {
            max_char_width,
            encoder: AnsiEncoder::new(ColorMatcher::new(options.min_dist)),
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.max_char_width = f64::from(width);
        self
    }

    pub fn with_min_dist(mut self, min_dist: f64) -> Self {
        self.encoder = AnsiEncoder::new(ColorMatcher::new(min_dist));
        self
    }

    pub fn max_char_width(&self) -> f64 {
        self.max_char_width
    }

    pub fn convert(&self, image: &DecodedImage) -> String {
        let grid = sample::sample(image, self.max_char_width);
        self.encoder.encode(&grid)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode `source` and render it as ANSI art.
pub fn to_ansi_art(source: &ImageSource, options: &Options) -> Result<String> {
    let image = source::decode(source)?;
    Ok(Converter::with_options(options).convert(&image))
}
