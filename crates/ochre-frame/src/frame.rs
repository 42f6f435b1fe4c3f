use crate::{FrameError, PixelFormat};

/// A single color image: dimensions, channel layout, row stride, and a
/// row-major interleaved byte buffer.
///
/// Invariants, enforced by [`Frame::new`]:
/// - `stride >= 3 * width`
/// - `data.len() >= stride * height`
///
/// Pixel access goes through the format's channel offsets, so the same
/// code path reads `rgb8` and `bgr8` buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    format: PixelFormat,
    stride: usize,
    data: Vec<u8>,
}

/// An unvalidated frame as delivered by a transport: the encoding is still
/// a string tag and the buffer has not been checked against the dimensions.
///
/// Convert with `Frame::try_from`; an unsupported tag or undersized buffer
/// fails the conversion and the frame should be dropped by the caller.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub encoding: String,
    pub stride: usize,
    pub data: Vec<u8>,
}

impl TryFrom<RawFrame> for Frame {
    type Error = FrameError;

    fn try_from(raw: RawFrame) -> Result<Self, FrameError> {
        let format = PixelFormat::from_tag(&raw.encoding)?;
        Frame::new(raw.width, raw.height, format, raw.stride, raw.data)
    }
}

impl Frame {
    /// Create a frame, validating the buffer against the dimensions.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::StrideTooSmall` if a row cannot hold `width`
    /// pixels, or `FrameError::BufferTooSmall` if the buffer cannot hold
    /// `height` rows.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        if stride < format.bytes_per_pixel() * width as usize {
            return Err(FrameError::StrideTooSmall { stride, width });
        }

        let expected = stride * height as usize;
        if data.len() < expected {
            return Err(FrameError::BufferTooSmall {
                expected,
                got: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            stride,
            data,
        })
    }

    /// Create a tightly packed frame (`stride == 3 * width`).
    pub fn packed(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let stride = format.bytes_per_pixel() * width as usize;
        Self::new(width, height, format, stride, data)
    }

    /// A zeroed frame with the same dimensions, format, and stride.
    pub fn blank_like(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            format: self.format,
            stride: self.stride,
            data: vec![0; self.stride * self.height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read the (r, g, b) channels of the pixel at (x, y).
    ///
    /// Callers must stay within the frame dimensions; the construction
    /// invariants then keep every channel access inside the buffer.
    pub fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let base = self.pixel_base(x, y);
        let (r_off, g_off, b_off) = self.format.channel_offsets();
        (
            self.data[base + r_off],
            self.data[base + g_off],
            self.data[base + b_off],
        )
    }

    /// Write the (r, g, b) channels of the pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert!(x < self.width && y < self.height);
        let base = self.pixel_base(x, y);
        let (r_off, g_off, b_off) = self.format.channel_offsets();
        self.data[base + r_off] = r;
        self.data[base + g_off] = g;
        self.data[base + b_off] = b;
    }

    fn pixel_base(&self, x: u32, y: u32) -> usize {
        self.format.bytes_per_pixel() * x as usize + y as usize * self.stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_stride() {
        let err = Frame::new(4, 2, PixelFormat::Rgb8, 10, vec![0; 20]).unwrap_err();
        assert_eq!(err, FrameError::StrideTooSmall { stride: 10, width: 4 });
    }

    #[test]
    fn test_new_validates_buffer_length() {
        let err = Frame::new(4, 2, PixelFormat::Rgb8, 12, vec![0; 23]).unwrap_err();
        assert_eq!(err, FrameError::BufferTooSmall { expected: 24, got: 23 });
    }

    #[test]
    fn test_new_accepts_padded_stride() {
        // Rows may carry padding bytes beyond 3 * width
        let frame = Frame::new(2, 2, PixelFormat::Rgb8, 8, vec![0; 16]).unwrap();
        assert_eq!(frame.stride(), 8);
    }

    #[test]
    fn test_rgb_round_trip_rgb8() {
        let mut frame = Frame::packed(3, 2, PixelFormat::Rgb8, vec![0; 18]).unwrap();
        frame.set_rgb(2, 1, 10, 20, 30);
        assert_eq!(frame.rgb_at(2, 1), (10, 20, 30));
        // rgb8 stores channels in r, g, b order
        let base = 3 * 2 + frame.stride();
        assert_eq!(&frame.data()[base..base + 3], &[10, 20, 30]);
    }

    #[test]
    fn test_rgb_round_trip_bgr8() {
        let mut frame = Frame::packed(3, 2, PixelFormat::Bgr8, vec![0; 18]).unwrap();
        frame.set_rgb(0, 0, 10, 20, 30);
        assert_eq!(frame.rgb_at(0, 0), (10, 20, 30));
        // bgr8 stores channels in b, g, r order
        assert_eq!(&frame.data()[0..3], &[30, 20, 10]);
    }

    #[test]
    fn test_try_from_raw_frame() {
        let raw = RawFrame {
            width: 2,
            height: 2,
            encoding: "bgr8".to_string(),
            stride: 6,
            data: vec![0; 12],
        };
        let frame = Frame::try_from(raw).unwrap();
        assert_eq!(frame.format(), PixelFormat::Bgr8);
    }

    #[test]
    fn test_try_from_rejects_unknown_encoding() {
        let raw = RawFrame {
            width: 2,
            height: 2,
            encoding: "mono8".to_string(),
            stride: 6,
            data: vec![0; 12],
        };
        let err = Frame::try_from(raw).unwrap_err();
        assert_eq!(err, FrameError::UnsupportedFormat("mono8".to_string()));
    }

    #[test]
    fn test_blank_like_preserves_geometry() {
        let frame = Frame::new(2, 3, PixelFormat::Bgr8, 8, vec![7; 24]).unwrap();
        let blank = frame.blank_like();
        assert_eq!(blank.width(), 2);
        assert_eq!(blank.height(), 3);
        assert_eq!(blank.format(), PixelFormat::Bgr8);
        assert_eq!(blank.stride(), 8);
        assert!(blank.data().iter().all(|&b| b == 0));
    }
}
