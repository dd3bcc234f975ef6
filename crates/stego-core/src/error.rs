use thiserror::Error;

use crate::media::image::PixelFormat;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a pixel layout the bit channel accessor cannot address, for example grayscale or float images
    #[error("Pixel format {0:?} is not supported")]
    FormatUnsupported(PixelFormat),

    /// Represents a frame that needs more bits than the traversal can offer for the image
    #[error("Capacity Error: {required} bits are required but the image only offers {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a frame header with wrong markers or an impossible payload length
    #[error("Unknown header, the image does not carry a valid frame")]
    MalformedHeader,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
