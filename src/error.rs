//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and panel operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Bring-up and runtime control errors
//!
//! Every bring-up stage is fail-fast: the first error aborts the sequence and is
//! returned with the underlying transport or GPIO error untouched.
//!
//! ## Example
//!
//! ```
//! use hx8379::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Zero-sized panel
//! let result = Dimensions::new(480, 0);
//! assert!(result.is_err());
//! ```

use core::convert::Infallible;
use core::fmt::Debug;

use crate::color::PixelFormat;

/// Bring-up stage or control path in which a transmission failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Vendor command pipeline (power, timing, GIP, gamma, VCOM)
    Init,
    /// Bank-switched digital gamma LUT programming
    Lut,
    /// Sleep exit and display on
    Activation,
    /// Runtime control after bring-up
    Control,
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Lut => "LUT",
            Self::Activation => "activation",
            Self::Control => "control",
        };
        f.write_str(name)
    }
}

/// A discrete control line of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Panel reset
    Reset,
    /// Backlight enable
    Backlight,
}

/// Operation the driver does not support in its current configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Blanking without a backlight line
    Blanking,
    /// Changing to a different pixel format
    PixelFormat(PixelFormat),
    /// Rotation by a number of degrees that has no flip mapping
    Orientation(u16),
    /// Pixel data writes; frames go through the DSI host's own transfer path
    Write,
}

/// Errors that can occur when driving the panel
///
/// Generic over the DSI host error (`E`), the reset line error (`RE`) and the
/// backlight line error (`BE`) so callers can match on the hardware error.
#[derive(Debug)]
pub enum Error<E, RE = Infallible, BE = Infallible> {
    /// A configured control line failed its readiness check
    DeviceNotReady(Line),
    /// Configuring or driving the reset line failed
    ResetLine(RE),
    /// Configuring or driving the backlight line failed
    BacklightLine(BE),
    /// The DSI host rejected the link parameters
    AttachFailed(E),
    /// A command block or DCS command could not be sent
    TransmitFailed {
        /// Stage the transmission belonged to
        stage: Stage,
        /// Command byte of the failed block
        command: u8,
        /// Error returned by the DSI host
        source: E,
    },
    /// Operation not supported by this driver or configuration
    Unsupported(Operation),
}

impl<E, RE, BE> Error<E, RE, BE> {
    /// Whether the error came from one of the GPIO lines
    pub fn is_gpio_failure(&self) -> bool {
        matches!(self, Self::ResetLine(_) | Self::BacklightLine(_))
    }
}

impl<E: Debug, RE: Debug, BE: Debug> core::fmt::Display for Error<E, RE, BE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DeviceNotReady(line) => write!(f, "{line:?} GPIO device is not ready"),
            Self::ResetLine(e) => write!(f, "Reset line error: {e:?}"),
            Self::BacklightLine(e) => write!(f, "Backlight line error: {e:?}"),
            Self::AttachFailed(e) => write!(f, "Could not attach to MIPI-DSI host: {e:?}"),
            Self::TransmitFailed {
                stage,
                command,
                source,
            } => write!(
                f,
                "Failed to send command 0x{command:02X} during {stage}: {source:?}"
            ),
            Self::Unsupported(op) => write!(f, "Unsupported operation: {op:?}"),
        }
    }
}

impl<E: Debug, RE: Debug, BE: Debug> core::error::Error for Error<E, RE, BE> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// Both width and height must be non-zero.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (width and height must be non-zero)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
