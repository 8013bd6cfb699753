use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShotlensError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid base64 screenshot: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No screenshot loaded")]
    NotReady,

    #[error("Color bound has {got} channel(s), {mode} expects {expected}")]
    BoundLengthMismatch {
        mode: String,
        expected: usize,
        got: usize,
    },

    #[error("Pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShotlensError>;
