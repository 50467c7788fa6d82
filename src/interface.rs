//! Hardware interface abstraction
//!
//! This module provides the traits the driver uses to reach the hardware:
//!
//! - [`DsiHost`]: the MIPI-DSI host controller that attaches the panel and
//!   transmits command blocks
//! - [`ControlLine`]: a discrete GPIO line (reset, backlight)
//!
//! Delays use [`embedded_hal::delay::DelayNs`].
//!
//! [`OutputLine`] adapts any embedded-hal [`OutputPin`] into a [`ControlLine`],
//! and [`NoLine`] stands in for a line the board does not wire.
//!
//! ## Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use hx8379::{ControlLine, LineState, OutputLine};
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // RESX holds the panel in reset while low, so the running state is high
//! let mut reset = OutputLine::new(MockPin);
//! assert!(reset.is_ready());
//! let _ = reset.configure(LineState::Inactive);
//! let _ = reset.set(LineState::Active);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

use crate::color::PixelFormat;

type InterfaceResult<T, E> = core::result::Result<T, E>;

bitflags::bitflags! {
    /// DSI peripheral mode flags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModeFlags: u32 {
        /// Video mode
        const VIDEO = 1 << 0;
        /// Burst video mode
        const VIDEO_BURST = 1 << 1;
        /// Video mode with sync pulses
        const VIDEO_SYNC_PULSE = 1 << 2;
        /// Send commands in low-power mode
        const LPM = 1 << 11;

        /// Burst video with low-power commands
        const BURST_VIDEO_LPM =
            Self::VIDEO.bits() |
            Self::VIDEO_BURST.bits() |
            Self::LPM.bits();
    }
}

/// Video timings in pixel clocks (horizontal) and lines (vertical)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoTimings {
    /// Active width
    pub hactive: u32,
    /// Horizontal back porch
    pub hbp: u32,
    /// Horizontal front porch
    pub hfp: u32,
    /// Horizontal sync pulse width
    pub hsync: u32,
    /// Active height
    pub vactive: u32,
    /// Vertical back porch
    pub vbp: u32,
    /// Vertical front porch
    pub vfp: u32,
    /// Vertical sync pulse width
    pub vsync: u32,
}

/// Link parameters handed to the DSI host on attach
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DsiDevice {
    /// Number of data lanes
    pub data_lanes: u8,
    /// Pixel format
    pub pixel_format: PixelFormat,
    /// Mode flags
    pub mode_flags: ModeFlags,
    /// Video timings
    pub timings: VideoTimings,
}

/// Trait for the MIPI-DSI host controller
///
/// Every call is one complete transmission: the host must not interleave
/// another block's bytes within a single `generic_write`.
pub trait DsiHost {
    /// Error type for host operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Attach a peripheral on `channel` with the given link parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot support the requested link.
    fn attach(&mut self, channel: u8, device: &DsiDevice) -> InterfaceResult<(), Self::Error>;

    /// Send a generic write
    ///
    /// `data[0]` is the command byte and the rest are its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transmission fails.
    fn generic_write(&mut self, channel: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a MIPI DCS command with optional parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the transmission fails.
    fn dcs_write(
        &mut self,
        channel: u8,
        command: u8,
        params: &[u8],
    ) -> InterfaceResult<(), Self::Error>;
}

impl<T: DsiHost + ?Sized> DsiHost for &mut T {
    type Error = T::Error;

    fn attach(&mut self, channel: u8, device: &DsiDevice) -> InterfaceResult<(), Self::Error> {
        T::attach(self, channel, device)
    }

    fn generic_write(&mut self, channel: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        T::generic_write(self, channel, data)
    }

    fn dcs_write(
        &mut self,
        channel: u8,
        command: u8,
        params: &[u8],
    ) -> InterfaceResult<(), Self::Error> {
        T::dcs_write(self, channel, command, params)
    }
}

/// Logical state of a control line
///
/// Polarity is handled by the line implementation, so `Active` means "reset
/// released" or "backlight on" regardless of wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineState {
    /// Line deasserted
    Inactive,
    /// Line asserted
    Active,
}

/// Trait for a discrete GPIO control line
pub trait ControlLine {
    /// Error type for line operations
    type Error: Debug;

    /// Whether the GPIO controller behind this line is ready for use
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Configure the line as an output with the given initial state
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be configured.
    fn configure(&mut self, initial: LineState) -> InterfaceResult<(), Self::Error>;

    /// Drive the line to `state`
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be driven.
    fn set(&mut self, state: LineState) -> InterfaceResult<(), Self::Error>;
}

/// [`ControlLine`] over an embedded-hal output pin
///
/// embedded-hal pins are outputs once constructed, so configuring the line only
/// drives its initial state.
pub struct OutputLine<P> {
    pin: P,
    active_high: bool,
}

impl<P: OutputPin> OutputLine<P> {
    /// Create an active-high line
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_high: true,
        }
    }

    /// Create an active-low line
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_high: false,
        }
    }

    /// Whether the line is active high
    pub fn is_active_high(&self) -> bool {
        self.active_high
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ControlLine for OutputLine<P> {
    type Error = P::Error;

    fn configure(&mut self, initial: LineState) -> InterfaceResult<(), Self::Error> {
        self.set(initial)
    }

    fn set(&mut self, state: LineState) -> InterfaceResult<(), Self::Error> {
        if (state == LineState::Active) == self.active_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

/// Marker for a control line that is not connected
///
/// Never driven: the display skips every step involving an absent line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLine;

impl ControlLine for NoLine {
    type Error = Infallible;

    fn configure(&mut self, _initial: LineState) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    fn set(&mut self, _state: LineState) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}
