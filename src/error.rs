use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum TextboxError {
    /// An image box was placed without a resolvable image source
    #[error("image source is missing or could not be resolved")]
    ImageSourceMissing,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),
}
