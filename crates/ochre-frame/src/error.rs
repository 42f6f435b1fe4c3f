use std::fmt;

#[derive(Debug, PartialEq)]
pub enum FrameError {
    UnsupportedFormat(String),
    BufferTooSmall { expected: usize, got: usize },
    StrideTooSmall { stride: usize, width: u32 },
    Decode(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::UnsupportedFormat(tag) => {
                write!(f, "unsupported pixel format: {tag}")
            }
            FrameError::BufferTooSmall { expected, got } => {
                write!(f, "frame buffer too small: expected {expected} bytes, got {got}")
            }
            FrameError::StrideTooSmall { stride, width } => {
                write!(f, "row stride {stride} too small for width {width}")
            }
            FrameError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<image::ImageError> for FrameError {
    fn from(err: image::ImageError) -> Self {
        FrameError::Decode(err.to_string())
    }
}
