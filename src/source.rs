//! Image decoding: turns a file or an in-memory buffer into a [`DecodedImage`].

use crate::pixel::DecodedImage;
use crate::{AnsiArtError, Result};
use image::{DynamicImage, ImageFormat};
use std::path::PathBuf;

/// Where image bytes come from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// File on disk; the format is guessed from its contents.
    Path(PathBuf),
    /// Raw encoded bytes, which need a MIME type hint such as `image/png`.
    Bytes { data: Vec<u8>, mime_type: Option<String> },
}

impl ImageSource {
    pub fn bytes(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self::Bytes { data, mime_type: Some(mime_type.into()) }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

pub fn decode(source: &ImageSource) -> Result<DecodedImage> {
    let image = match source {
        ImageSource::Path(path) => {
            log::debug!("decoding {}", path.display());
            image::ImageReader::open(path)?.with_guessed_format()?.decode()?
        }
        ImageSource::Bytes { data, mime_type } => {
            let mime_type = mime_type.as_deref().ok_or(AnsiArtError::MissingFormatHint)?;
            let format = ImageFormat::from_mime_type(mime_type)
                .ok_or_else(|| AnsiArtError::UnsupportedFormat(mime_type.to_string()))?;
            log::debug!("decoding {} byte buffer as {format:?}", data.len());
            image::load_from_memory_with_format(data, format)?
        }
    };
    into_decoded(image)
}

fn into_decoded(image: DynamicImage) -> Result<DecodedImage> {
    let (width, height) = (image.width(), image.height());
    if image.color().has_alpha() {
        DecodedImage::new(width, height, 4, image.into_rgba8().into_raw())
    } else {
        DecodedImage::new(width, height, 3, image.into_rgb8().into_raw())
    }
}
