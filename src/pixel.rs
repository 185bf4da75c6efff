//! Decoded pixel buffers and the grids sampled from them.

use crate::{AnsiArtError, Result};

/// One RGBA pixel. Three-channel sources are stored fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 3 or 4 interleaved channel values.
    ///
    /// # Panics
    /// If `channels` is not 3 or 4 bytes long.
    pub fn from_channels(channels: &[u8]) -> Self {
        match *channels {
            [r, g, b, a] => Self::rgba(r, g, b, a),
            [r, g, b] => Self::rgb(r, g, b),
            _ => unreachable!("pixel needs 3 or 4 channels, got {}", channels.len()),
        }
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Packed channel values, equal exactly when the pixels are equal.
    #[inline]
    pub fn signature(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

/// Row-major interleaved pixel data as handed over by the image decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        if !matches!(channels, 3 | 4) {
            return Err(AnsiArtError::InvalidBuffer(format!(
                "expected 3 or 4 channels, got {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(AnsiArtError::InvalidBuffer(format!(
                "{width}x{height}x{channels} needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { width, height, channels, data })
    }

    /// Four-channel image from a row-major pixel slice.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> Result<Self> {
        let data = pixels.iter().flat_map(|p| [p.r, p.g, p.b, p.a]).collect();
        Self::new(width, height, 4, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        let stride = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * stride;
        Pixel::from_channels(&self.data[offset..offset + stride])
    }
}

/// Point-sampled subset of a [`DecodedImage`], stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampledGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl SampledGrid {
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(width * height, pixels.len());
        Self { width, height, pixels }
    }

    /// Grid from explicit rows; short rows are not allowed.
    pub fn from_rows(rows: &[Vec<Pixel>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(AnsiArtError::InvalidBuffer("rows differ in length".into()));
        }
        Ok(Self::new(width, rows.len(), rows.concat()))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_alpha_is_opaque() {
        assert_eq!(Pixel::from_channels(&[1, 2, 3]), Pixel::rgba(1, 2, 3, 255));
        assert_eq!(Pixel::from_channels(&[1, 2, 3, 4]), Pixel::rgba(1, 2, 3, 4));
    }

    #[test]
    #[should_panic(expected = "3 or 4 channels")]
    fn malformed_channel_slice_panics() {
        Pixel::from_channels(&[1, 2]);
    }

    #[test]
    fn signature_distinguishes_alpha() {
        assert_ne!(Pixel::rgba(9, 9, 9, 0).signature(), Pixel::rgb(9, 9, 9).signature());
        assert_eq!(Pixel::rgb(9, 9, 9).signature(), Pixel::rgba(9, 9, 9, 255).signature());
    }

    #[test]
    fn buffer_shape_is_validated() {
        assert!(DecodedImage::new(2, 1, 3, vec![0; 6]).is_ok());
        assert!(matches!(
            DecodedImage::new(2, 1, 3, vec![0; 5]),
            Err(AnsiArtError::InvalidBuffer(_))
        ));
        assert!(matches!(
            DecodedImage::new(1, 1, 2, vec![0; 2]),
            Err(AnsiArtError::InvalidBuffer(_))
        ));
        assert!(DecodedImage::new(0, 0, 4, Vec::new()).is_ok());
    }

    #[test]
    fn pixel_reads_interleaved_rows() {
        let image = DecodedImage::new(2, 2, 3, vec![
            1, 1, 1, 2, 2, 2, //
            3, 3, 3, 4, 4, 4,
        ])
        .unwrap();
        assert_eq!(image.pixel(1, 0), Pixel::rgb(2, 2, 2));
        assert_eq!(image.pixel(0, 1), Pixel::rgb(3, 3, 3));
    }

    #[test]
    fn grid_rows() {
        let grid = SampledGrid::from_rows(&[
            vec![Pixel::rgb(0, 0, 0), Pixel::rgb(1, 1, 1)],
            vec![Pixel::rgb(2, 2, 2), Pixel::rgb(3, 3, 3)],
        ])
        .unwrap();
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Pixel::rgb(2, 2, 2));

        assert!(SampledGrid::from_rows(&[vec![Pixel::rgb(0, 0, 0)], vec![]]).is_err());
        assert_eq!(SampledGrid::default().rows().count(), 0);
    }
}
