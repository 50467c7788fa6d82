//! Panel configuration types and builder

use crate::color::PixelFormat;
pub use crate::error::BuilderError;
use crate::interface::{DsiDevice, ModeFlags, VideoTimings};

/// Horizontal sync pulse width, in pixel clocks
pub const HSYNC: u32 = 2;
/// Horizontal front porch, in pixel clocks
pub const HFP: u32 = 1;
/// Horizontal back porch, in pixel clocks
pub const HBP: u32 = 1;
/// Vertical sync pulse width, in lines
pub const VSYNC: u32 = 1;
/// Vertical front porch, in lines
pub const VFP: u32 = 50;
/// Vertical back porch, in lines
pub const VBP: u32 = 12;

/// Default number of DSI data lanes
pub const DEFAULT_LANES: u8 = 2;

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Logical display orientation
///
/// The HX8379 can only flip its scan direction, so the four orientations map
/// to the four combinations of horizontal and vertical flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Native orientation
    #[default]
    Normal,
    /// Rotated 90 degrees
    Rotated90,
    /// Rotated 180 degrees
    Rotated180,
    /// Rotated 270 degrees
    Rotated270,
}

/// Panel configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Number of DSI data lanes
    ///
    /// Not validated; must be within what the host supports.
    pub lanes: u8,
    /// Pixel format on the link
    pub pixel_format: PixelFormat,
    /// DSI virtual channel of the panel
    pub channel: u8,
}

impl Config {
    /// Link parameters used to attach the panel to the DSI host
    ///
    /// The panel runs in burst video mode with commands sent in low-power mode.
    /// It needs one extra active line on top of its height.
    pub fn dsi_device(&self) -> DsiDevice {
        DsiDevice {
            data_lanes: self.lanes,
            pixel_format: self.pixel_format,
            mode_flags: ModeFlags::BURST_VIDEO_LPM,
            timings: VideoTimings {
                hactive: u32::from(self.dimensions.width),
                hbp: HBP,
                hfp: HFP,
                hsync: HSYNC,
                vactive: u32::from(self.dimensions.height) + 1,
                vbp: VBP,
                vfp: VFP,
                vsync: VSYNC,
            },
        }
    }
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```rust
/// use hx8379::{Builder, Dimensions, PixelFormat};
///
/// let dims = match Dimensions::new(480, 800) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .lanes(2)
///     .pixel_format(PixelFormat::Rgb888)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dsi_device().timings.vactive, 801);
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    lanes: u8,
    pixel_format: PixelFormat,
    channel: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            lanes: DEFAULT_LANES,
            pixel_format: PixelFormat::Rgb888,
            channel: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the number of DSI data lanes
    pub fn lanes(mut self, lanes: u8) -> Self {
        self.lanes = lanes;
        self
    }

    /// Set the pixel format
    pub fn pixel_format(mut self, format: PixelFormat) -> Self {
        self.pixel_format = format;
        self
    }

    /// Set the DSI virtual channel
    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            lanes: self.lanes,
            pixel_format: self.pixel_format,
            channel: self.channel,
        })
    }
}
