//! Pixel formats carried over the DSI link
//!
//! The HX8379 receives pixel data in video mode from the DSI host. The format is
//! fixed at attach time and cannot be changed afterwards.

/// Pixel format negotiated with the DSI host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24-bit RGB
    #[default]
    Rgb888,
    /// 18-bit RGB, loosely packed in 24 bits
    Rgb666,
    /// 18-bit RGB, tightly packed
    Rgb666Packed,
    /// 16-bit RGB
    Rgb565,
}

impl PixelFormat {
    /// Bits per pixel on the link
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb888 | Self::Rgb666 => 24,
            Self::Rgb666Packed => 18,
            Self::Rgb565 => 16,
        }
    }
}

impl core::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Rgb888 => "RGB888",
            Self::Rgb666 => "RGB666",
            Self::Rgb666Packed => "RGB666 (packed)",
            Self::Rgb565 => "RGB565",
        };
        f.write_str(name)
    }
}
