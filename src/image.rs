use crate::error::TextboxError;
use image::DynamicImage;
use std::path::Path;

/// A decoded raster image ready to be fitted into an image box. The layout
/// side only ever reads the pixel dimensions; the decoded pixels are carried
/// along untouched for the draw target to encode or rasterize as it sees
/// fit.
pub struct ImageSource {
    pub image: DynamicImage,
    /// Native width in pixels
    pub width: f32,
    /// Native height in pixels
    pub height: f32,
}

impl ImageSource {
    /// Decode an image from a file on disk, guessing the format from its
    /// contents
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ImageSource, TextboxError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Decode an image from raw encoded bytes
    pub fn from_bytes(data: &[u8]) -> Result<ImageSource, TextboxError> {
        let format = image::guess_format(data)?;
        let image = image::load_from_memory_with_format(data, format)?;
        Ok(Self::from_image(image))
    }

    /// Wrap an already-decoded image
    pub fn from_image(image: DynamicImage) -> ImageSource {
        let width = image.width() as f32;
        let height = image.height() as f32;
        ImageSource {
            image,
            width,
            height,
        }
    }
}
