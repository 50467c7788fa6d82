//! HX8379 MIPI-DSI LCD Driver
//!
//! A driver for the Himax HX8379 LCD controller found on 480x800 MIPI-DSI panels.
//!
//! The driver brings the panel up (reset, DSI attach, vendor initialization,
//! digital gamma LUT programming, sleep exit) and exposes the runtime controls
//! a display subsystem needs. Pixel data is streamed by the DSI host in video
//! mode and never passes through this driver.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support for delays and GPIO lines
//! - `embedded-graphics` size reporting (with `graphics` feature)
//! - Fail-fast bring-up: the first failed transmission aborts and is returned
//! - Orientation (scan flip), blanking via backlight, tearing effect control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use hx8379::{Builder, Dimensions, Display, DsiDevice, DsiHost, OutputLine, PixelFormat};
//!
//! # struct MockHost;
//! # impl DsiHost for MockHost {
//! #     type Error = Infallible;
//! #     fn attach(&mut self, _channel: u8, _device: &DsiDevice) -> Result<(), Self::Error> { Ok(()) }
//! #     fn generic_write(&mut self, _channel: u8, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn dcs_write(&mut self, _channel: u8, _command: u8, _params: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let host = MockHost;
//! # let rst = MockPin;
//! # let bl = MockPin;
//! # let mut delay = MockDelay;
//! let dims = match Dimensions::new(480, 800) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .dimensions(dims)
//!     .lanes(2)
//!     .pixel_format(PixelFormat::Rgb888)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(host, config)
//!     .with_reset(OutputLine::new(rst))
//!     .with_backlight(OutputLine::new(bl));
//! let _ = display.bring_up(&mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel formats
pub mod color;
/// HX8379 command definitions
pub mod command;
/// Panel configuration types and builder
pub mod config;
/// Bring-up sequencer and runtime control
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Orientation to scan-direction mapping
pub mod orientation;
/// Bring-up plan
pub mod sequence;
/// Fixed command blocks
pub mod tables;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::PixelFormat;
pub use config::{Builder, Config, Dimensions, Orientation};
pub use display::{BufferDescriptor, Capabilities, Display, TearingEffect};
pub use error::{BuilderError, Error, Line, Operation, Stage};
pub use interface::{
    ControlLine, DsiDevice, DsiHost, LineState, ModeFlags, NoLine, OutputLine, VideoTimings,
};
