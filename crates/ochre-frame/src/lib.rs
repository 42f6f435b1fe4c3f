//! Frame data model for the ochre ecosystem.
//!
//! A [`Frame`] is a row-major byte buffer of 3 interleaved color channels
//! per pixel, together with its dimensions, row stride, and a
//! [`PixelFormat`] naming the channel order. Frames are validated at
//! construction: an unknown encoding tag or an undersized buffer never
//! becomes a `Frame`, so downstream pixel access needs no per-pixel checks.
//!
//! [`decode_frame`] turns encoded still images (PNG, JPEG) into packed
//! `Rgb8` frames for tests and offline tools.

pub mod error;
pub mod format;
pub mod frame;

pub use error::FrameError;
pub use format::PixelFormat;
pub use frame::{Frame, RawFrame};

use image::DynamicImage;

/// Decodes an encoded still image (PNG, JPEG) into a packed `Rgb8` frame.
///
/// The image format is auto-detected by the `image` crate. Whatever the
/// source pixel type, the result is converted to 8-bit RGB with
/// `stride == 3 * width`.
///
/// # Errors
///
/// Returns `FrameError::Decode` if the data is invalid or the container
/// format is unsupported.
pub fn decode_frame(data: &[u8]) -> Result<Frame, FrameError> {
    let img = image::load_from_memory(data)?;

    let rgb = match img {
        DynamicImage::ImageRgb8(buf) => buf,
        other => other.to_rgb8(),
    };

    let (width, height) = rgb.dimensions();
    Frame::packed(width, height, PixelFormat::Rgb8, rgb.into_raw())
}
