use crate::FrameError;

/// Channel layout of a 3-byte-per-pixel interleaved frame.
///
/// The closed set of supported layouts. Transports carry the layout as a
/// string tag (`"rgb8"`, `"bgr8"`); anything else is rejected at the frame
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Bgr8,
}

impl PixelFormat {
    /// Parse an encoding tag into a pixel format.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::UnsupportedFormat` for any tag outside the
    /// supported set.
    pub fn from_tag(tag: &str) -> Result<Self, FrameError> {
        match tag {
            "rgb8" => Ok(PixelFormat::Rgb8),
            "bgr8" => Ok(PixelFormat::Bgr8),
            other => Err(FrameError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PixelFormat::Rgb8 => "rgb8",
            PixelFormat::Bgr8 => "bgr8",
        }
    }

    /// Byte offsets of the (r, g, b) channels within one pixel.
    pub fn channel_offsets(&self) -> (usize, usize, usize) {
        match self {
            PixelFormat::Rgb8 => (0, 1, 2),
            PixelFormat::Bgr8 => (2, 1, 0),
        }
    }

    /// Bytes per pixel. All supported layouts are 3-channel interleaved.
    pub fn bytes_per_pixel(&self) -> usize {
        3
    }
}
