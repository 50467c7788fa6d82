//! Panel bring-up and runtime control

use embedded_hal::delay::DelayNs;

use crate::color::PixelFormat;
use crate::command::{EXIT_SLEEP_MODE, SET_DISPLAY_ON, SET_TEAR_OFF};
use crate::config::{Config, Dimensions, Orientation};
use crate::error::{Error, Line, Operation, Stage};
use crate::interface::{ControlLine, DsiHost, LineState, NoLine};
use crate::orientation::address_mode;
use crate::sequence::{
    DISPLAY_ON_MS, INIT_SEQUENCE, LUT_SEQUENCE, RESET_PULSE_MS, RESET_SETTLE_MS, SLEEP_OUT_MS,
    Step, transmission_count,
};
use crate::tables::TEAR_CONFIG;

type DisplayError<H, RST, BL> = Error<
    <H as DsiHost>::Error,
    <RST as ControlLine>::Error,
    <BL as ControlLine>::Error,
>;
type DisplayResult<H, RST, BL> = core::result::Result<(), DisplayError<H, RST, BL>>;

/// Capabilities reported to the display subsystem
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Horizontal resolution in pixels
    pub x_resolution: u16,
    /// Vertical resolution in pixels
    pub y_resolution: u16,
    /// The only pixel format the panel accepts
    pub supported_pixel_format: PixelFormat,
    /// Pixel format in use
    pub current_pixel_format: PixelFormat,
    /// Always [`Orientation::Normal`]; see [`Display::capabilities`]
    pub current_orientation: Orientation,
}

/// Layout of a pixel buffer passed to [`Display::write`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferDescriptor {
    /// Buffer size in bytes
    pub buf_size: usize,
    /// Width of the written area in pixels
    pub width: u16,
    /// Height of the written area in pixels
    pub height: u16,
    /// Pixels per buffer row
    pub pitch: u16,
}

/// Tearing effect output mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TearingEffect {
    /// No tearing effect signal
    #[default]
    Off,
    /// Signal during vertical blanking
    Vblank,
}

/// HX8379 panel driver
///
/// Owns the DSI host handle, the optional reset and backlight lines and the
/// panel configuration. Create one per physical panel with [`Display::new`],
/// attach lines with [`Display::with_reset`] and [`Display::with_backlight`],
/// then call [`Display::bring_up`].
///
/// All operations take `&mut self`, so the single-caller requirement of the
/// DSI channel is enforced by the borrow checker.
pub struct Display<H, RST = NoLine, BL = NoLine>
where
    H: DsiHost,
    RST: ControlLine,
    BL: ControlLine,
{
    /// DSI host
    host: H,
    /// Reset line, if wired
    reset: Option<RST>,
    /// Backlight enable line, if wired
    backlight: Option<BL>,
    /// Panel configuration
    config: Config,
}

impl<H> Display<H>
where
    H: DsiHost,
{
    /// Create a new Display without reset or backlight lines
    pub fn new(host: H, config: Config) -> Self {
        Self {
            host,
            reset: None,
            backlight: None,
            config,
        }
    }
}

impl<H, RST, BL> Display<H, RST, BL>
where
    H: DsiHost,
    RST: ControlLine,
    BL: ControlLine,
{
    /// Use `reset` as the panel reset line
    pub fn with_reset<R: ControlLine>(self, reset: R) -> Display<H, R, BL> {
        Display {
            host: self.host,
            reset: Some(reset),
            backlight: self.backlight,
            config: self.config,
        }
    }

    /// Use `backlight` as the backlight enable line
    pub fn with_backlight<B: ControlLine>(self, backlight: B) -> Display<H, RST, B> {
        Display {
            host: self.host,
            reset: self.reset,
            backlight: Some(backlight),
            config: self.config,
        }
    }

    /// Bring the panel from power-off to displaying
    ///
    /// Runs, in order: reset pulse (if a reset line is wired), attach to the
    /// DSI host, the vendor command pipeline, the digital gamma LUT banks,
    /// sleep exit and display on, then enables the backlight (if wired).
    ///
    /// Blocks for at least 372ms of mandated delays. The first failure aborts
    /// the sequence and is returned unchanged apart from the stage it happened
    /// in. After a failure the panel state is undefined; bring-up must be
    /// restarted from the beginning.
    pub fn bring_up<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<H, RST, BL> {
        log::debug!(
            "Bringing up HX8379 {}x{} on channel {}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.channel
        );
        self.pulse_reset(delay)?;
        self.attach()?;
        self.run(Stage::Init, INIT_SEQUENCE, delay)?;
        self.run(Stage::Lut, LUT_SEQUENCE, delay)?;
        self.activate(delay)?;
        log::debug!("HX8379 is on");
        Ok(())
    }

    /// Pulse the reset line: inactive, 11ms, active, 120ms
    fn pulse_reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<H, RST, BL> {
        let Some(reset) = self.reset.as_mut() else {
            return Ok(());
        };
        if !reset.is_ready() {
            log::error!("Reset GPIO device is not ready");
            return Err(Error::DeviceNotReady(Line::Reset));
        }
        reset.configure(LineState::Inactive).map_err(|e| {
            log::error!("Reset display failed: {e:?}");
            Error::ResetLine(e)
        })?;
        delay.delay_ms(RESET_PULSE_MS);
        reset.set(LineState::Active).map_err(|e| {
            log::error!("Enable display failed: {e:?}");
            Error::ResetLine(e)
        })?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    fn attach(&mut self) -> DisplayResult<H, RST, BL> {
        let device = self.config.dsi_device();
        self.host
            .attach(self.config.channel, &device)
            .map_err(|e| {
                log::error!("Could not attach to MIPI-DSI host: {e:?}");
                Error::AttachFailed(e)
            })
    }

    /// Execute a plan, stopping at the first failed transmission
    fn run<D: DelayNs>(
        &mut self,
        stage: Stage,
        steps: &[Step],
        delay: &mut D,
    ) -> DisplayResult<H, RST, BL> {
        log::debug!(
            "HX8379 {stage} stage: {} transmissions",
            transmission_count(steps)
        );
        steps.iter().try_for_each(|step| match *step {
            Step::Write(block) => self.generic_write(stage, block),
            Step::SelectBank(bank) => self.generic_write(stage, &bank.select_command()),
            Step::DelayMs(ms) => {
                delay.delay_ms(ms);
                Ok(())
            }
        })
    }

    fn activate<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<H, RST, BL> {
        self.dcs_write(Stage::Activation, EXIT_SLEEP_MODE)?;
        delay.delay_ms(SLEEP_OUT_MS);
        self.dcs_write(Stage::Activation, SET_DISPLAY_ON)?;
        delay.delay_ms(DISPLAY_ON_MS);

        if let Some(backlight) = self.backlight.as_mut() {
            backlight.configure(LineState::Active).map_err(|e| {
                log::error!("Could not configure backlight GPIO: {e:?}");
                Error::BacklightLine(e)
            })?;
        }
        Ok(())
    }

    /// Turn blanking on or off
    ///
    /// Blanking only switches the backlight; the panel keeps scanning. Panels
    /// without a backlight line cannot blank.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported(Operation::Blanking)` if no backlight line
    /// is configured.
    pub fn set_blanking(&mut self, on: bool) -> DisplayResult<H, RST, BL> {
        let Some(backlight) = self.backlight.as_mut() else {
            return Err(Error::Unsupported(Operation::Blanking));
        };
        let state = if on {
            LineState::Inactive
        } else {
            LineState::Active
        };
        backlight.set(state).map_err(Error::BacklightLine)
    }

    /// Request a pixel format
    ///
    /// The format is fixed when the panel attaches, so only the configured
    /// format is accepted. Nothing is transmitted.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported(Operation::PixelFormat(_))` for any other
    /// format.
    pub fn set_pixel_format(&mut self, format: PixelFormat) -> DisplayResult<H, RST, BL> {
        if format == self.config.pixel_format {
            return Ok(());
        }
        log::warn!("Pixel format change to {format} not implemented");
        Err(Error::Unsupported(Operation::PixelFormat(format)))
    }

    /// Flip the scan direction to match `orientation`
    ///
    /// This only mirrors the image on X and/or Y, it does not rotate the frame.
    pub fn set_orientation(&mut self, orientation: Orientation) -> DisplayResult<H, RST, BL> {
        self.generic_write(Stage::Control, &address_mode(orientation))
    }

    /// Set the orientation from a rotation in degrees
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported(Operation::Orientation(degrees))` without
    /// transmitting anything unless `degrees` is 0, 90, 180 or 270.
    pub fn set_orientation_degrees(&mut self, degrees: u16) -> DisplayResult<H, RST, BL> {
        let orientation = Orientation::from_degrees(degrees)
            .ok_or(Error::Unsupported(Operation::Orientation(degrees)))?;
        self.set_orientation(orientation)
    }

    /// Enable or disable the tearing effect output
    pub fn set_tearing_effect(&mut self, mode: TearingEffect) -> DisplayResult<H, RST, BL> {
        match mode {
            TearingEffect::Off => self.dcs_write(Stage::Control, SET_TEAR_OFF),
            TearingEffect::Vblank => self.generic_write(Stage::Control, &TEAR_CONFIG),
        }
    }

    /// Report panel capabilities
    ///
    /// The orientation is not tracked: it is always reported as
    /// [`Orientation::Normal`], even after [`Display::set_orientation`].
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            x_resolution: self.config.dimensions.width,
            y_resolution: self.config.dimensions.height,
            supported_pixel_format: self.config.pixel_format,
            current_pixel_format: self.config.pixel_format,
            current_orientation: Orientation::Normal,
        }
    }

    /// Write pixel data
    ///
    /// Not supported: in video mode the DSI host streams frames from its own
    /// framebuffer, so pixel data never passes through this driver.
    ///
    /// # Errors
    ///
    /// Always returns `Error::Unsupported(Operation::Write)`.
    pub fn write(
        &mut self,
        _x: u16,
        _y: u16,
        _descriptor: &BufferDescriptor,
        _buf: &[u8],
    ) -> DisplayResult<H, RST, BL> {
        log::warn!("Write not supported, use the DSI host's framebuffer");
        Err(Error::Unsupported(Operation::Write))
    }

    /// Send a command block as a generic write
    fn generic_write(&mut self, stage: Stage, block: &[u8]) -> DisplayResult<H, RST, BL> {
        self.host
            .generic_write(self.config.channel, block)
            .map_err(|source| {
                let command = block.first().copied().unwrap_or_default();
                log::error!("Failed to send command 0x{command:02X} during {stage}: {source:?}");
                Error::TransmitFailed {
                    stage,
                    command,
                    source,
                }
            })
    }

    /// Send a DCS command without parameters
    fn dcs_write(&mut self, stage: Stage, command: u8) -> DisplayResult<H, RST, BL> {
        self.host
            .dcs_write(self.config.channel, command, &[])
            .map_err(|source| {
                log::error!("Failed to send DCS 0x{command:02X} during {stage}: {source:?}");
                Error::TransmitFailed {
                    stage,
                    command,
                    source,
                }
            })
    }

    /// Get panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get the configured pixel format
    pub fn pixel_format(&self) -> PixelFormat {
        self.config.pixel_format
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the DSI host and control lines
    pub fn release(self) -> (H, Option<RST>, Option<BL>) {
        (self.host, self.reset, self.backlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::interface::{DsiDevice, ModeFlags, VideoTimings};
    use crate::tables::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Attach(u8, DsiDevice),
        Generic(u8, Vec<u8>),
        Dcs(u8, u8),
        Configure(Line, LineState),
        Set(Line, LineState),
        Delay(u32),
    }

    impl Event {
        fn is_transmission(&self) -> bool {
            matches!(self, Self::Generic(..) | Self::Dcs(..))
        }
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct MockError;

    struct MockHost {
        log: Log,
        fail_attach: bool,
        fail_at: Option<usize>,
        sent: usize,
    }

    impl MockHost {
        fn new(log: &Log) -> Self {
            Self {
                log: Rc::clone(log),
                fail_attach: false,
                fail_at: None,
                sent: 0,
            }
        }

        fn transmit(&mut self, event: Event) -> Result<(), MockError> {
            self.log.borrow_mut().push(event);
            self.sent += 1;
            if self.fail_at == Some(self.sent) {
                return Err(MockError);
            }
            Ok(())
        }
    }

    impl DsiHost for MockHost {
        type Error = MockError;

        fn attach(&mut self, channel: u8, device: &DsiDevice) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Attach(channel, *device));
            if self.fail_attach {
                return Err(MockError);
            }
            Ok(())
        }

        fn generic_write(&mut self, channel: u8, data: &[u8]) -> Result<(), Self::Error> {
            self.transmit(Event::Generic(channel, data.to_vec()))
        }

        fn dcs_write(&mut self, channel: u8, command: u8, params: &[u8]) -> Result<(), Self::Error> {
            assert!(params.is_empty());
            self.transmit(Event::Dcs(channel, command))
        }
    }

    struct MockLine {
        line: Line,
        log: Log,
        ready: bool,
        fail_configure: bool,
        fail_set: bool,
    }

    impl MockLine {
        fn new(line: Line, log: &Log) -> Self {
            Self {
                line,
                log: Rc::clone(log),
                ready: true,
                fail_configure: false,
                fail_set: false,
            }
        }
    }

    impl ControlLine for MockLine {
        type Error = MockError;

        fn is_ready(&mut self) -> bool {
            self.ready
        }

        fn configure(&mut self, initial: LineState) -> Result<(), Self::Error> {
            if self.fail_configure {
                return Err(MockError);
            }
            self.log
                .borrow_mut()
                .push(Event::Configure(self.line, initial));
            Ok(())
        }

        fn set(&mut self, state: LineState) -> Result<(), Self::Error> {
            if self.fail_set {
                return Err(MockError);
            }
            self.log.borrow_mut().push(Event::Set(self.line, state));
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    /// Generic and DCS transmissions in a full bring-up
    const TRANSMISSIONS: usize = 21;

    fn test_config() -> Config {
        Builder::new()
            .dimensions(Dimensions::new(480, 800).unwrap())
            .lanes(2)
            .pixel_format(PixelFormat::Rgb888)
            .build()
            .unwrap()
    }

    fn test_display(log: &Log) -> Display<MockHost, MockLine, MockLine> {
        Display::new(MockHost::new(log), test_config())
            .with_reset(MockLine::new(Line::Reset, log))
            .with_backlight(MockLine::new(Line::Backlight, log))
    }

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn transmissions(log: &Log) -> Vec<Event> {
        log.borrow()
            .iter()
            .filter(|event| event.is_transmission())
            .cloned()
            .collect()
    }

    #[test]
    fn test_bring_up_end_to_end() {
        let log = new_log();
        let mut display = test_display(&log);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        assert!(display.bring_up(&mut delay).is_ok());

        let mut expected = vec![
            Event::Configure(Line::Reset, LineState::Inactive),
            Event::Delay(11),
            Event::Set(Line::Reset, LineState::Active),
            Event::Delay(120),
            Event::Attach(
                0,
                DsiDevice {
                    data_lanes: 2,
                    pixel_format: PixelFormat::Rgb888,
                    mode_flags: ModeFlags::VIDEO | ModeFlags::VIDEO_BURST | ModeFlags::LPM,
                    timings: VideoTimings {
                        hactive: 480,
                        hbp: 1,
                        hfp: 1,
                        hsync: 2,
                        vactive: 801,
                        vbp: 12,
                        vfp: 50,
                        vsync: 1,
                    },
                },
            ),
        ];
        let init: [&[u8]; 11] = [
            &ENABLE_EXTENSION,
            &POWER_CONFIG,
            &LINE_CONFIG,
            &CYCLE_CONFIG,
            &VENDOR_FIXUP_C7,
            &PANEL_CONFIG,
            &VENDOR_FIXUP_D2,
            &GIP0_CONFIG,
            &GIP1_CONFIG,
            &GIP2_CONFIG,
            &GAMMA_CONFIG,
        ];
        expected.extend(init.iter().map(|block| Event::Generic(0, block.to_vec())));
        expected.push(Event::Delay(1));
        expected.push(Event::Generic(0, VCOM_CONFIG.to_vec()));
        let lut: [&[u8]; 7] = [
            &[0xBD, 0x02],
            &BANK2_LUT,
            &[0xBD, 0x00],
            &[0xBD, 0x01],
            &BANK1_LUT,
            &[0xBD, 0x00],
            &BANK0_LUT,
        ];
        expected.extend(lut.iter().map(|block| Event::Generic(0, block.to_vec())));
        expected.extend([
            Event::Dcs(0, 0x11),
            Event::Delay(120),
            Event::Dcs(0, 0x29),
            Event::Delay(120),
            Event::Configure(Line::Backlight, LineState::Active),
        ]);

        assert_eq!(*log.borrow(), expected);
        assert_eq!(transmissions(&log).len(), TRANSMISSIONS);
    }

    #[test]
    fn test_bring_up_total_delay() {
        let log = new_log();
        let mut display = test_display(&log);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };
        display.bring_up(&mut delay).unwrap();

        let total: u32 = log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Delay(ms) => Some(*ms),
                _ => None,
            })
            .sum();
        assert_eq!(total, 372);
    }

    #[test]
    fn test_bring_up_without_reset_line_skips_reset() {
        let log = new_log();
        let mut display = Display::new(MockHost::new(&log), test_config());
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        assert!(display.bring_up(&mut delay).is_ok());

        let events = log.borrow();
        assert!(matches!(events[0], Event::Attach(0, _)));
        assert!(!events.iter().any(|event| matches!(
            event,
            Event::Configure(..) | Event::Set(..) | Event::Delay(11)
        )));
        assert_eq!(events.last(), Some(&Event::Delay(120)));
    }

    #[test]
    fn test_bring_up_fails_at_every_transmission() {
        for n in 1..=TRANSMISSIONS {
            let log = new_log();
            let mut display = test_display(&log);
            display.host.fail_at = Some(n);
            let mut delay = MockDelay {
                log: Rc::clone(&log),
            };

            let result = display.bring_up(&mut delay);

            let expected_stage = match n {
                1..=12 => Stage::Init,
                13..=19 => Stage::Lut,
                _ => Stage::Activation,
            };
            let sent = transmissions(&log);
            let expected_command = match sent.last() {
                Some(Event::Generic(_, block)) => block[0],
                Some(Event::Dcs(_, command)) => *command,
                _ => unreachable!(),
            };
            assert!(
                matches!(
                    result,
                    Err(Error::TransmitFailed { stage, command, source: MockError })
                        if stage == expected_stage && command == expected_command
                ),
                "transmission {n}"
            );
            assert_eq!(sent.len(), n, "transmission {n}");
            assert!(
                !log.borrow()
                    .iter()
                    .any(|event| matches!(event, Event::Configure(Line::Backlight, _))),
                "transmission {n}"
            );
        }
    }

    #[test]
    fn test_bring_up_reset_not_ready() {
        let log = new_log();
        let mut reset = MockLine::new(Line::Reset, &log);
        reset.ready = false;
        let mut display = Display::new(MockHost::new(&log), test_config()).with_reset(reset);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        let result = display.bring_up(&mut delay);
        assert!(matches!(result, Err(Error::DeviceNotReady(Line::Reset))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bring_up_reset_configure_failure() {
        let log = new_log();
        let mut reset = MockLine::new(Line::Reset, &log);
        reset.fail_configure = true;
        let mut display = Display::new(MockHost::new(&log), test_config()).with_reset(reset);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        let result = display.bring_up(&mut delay);
        assert!(matches!(result, Err(Error::ResetLine(MockError))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bring_up_reset_set_failure() {
        let log = new_log();
        let mut reset = MockLine::new(Line::Reset, &log);
        reset.fail_set = true;
        let mut display = Display::new(MockHost::new(&log), test_config()).with_reset(reset);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        let result = display.bring_up(&mut delay);
        assert!(matches!(result, Err(Error::ResetLine(MockError))));
        assert_eq!(
            *log.borrow(),
            [
                Event::Configure(Line::Reset, LineState::Inactive),
                Event::Delay(11),
            ]
        );
        assert!(!log
            .borrow()
            .iter()
            .any(|event| matches!(event, Event::Attach(..))));
    }

    #[test]
    fn test_bring_up_attach_failure() {
        let log = new_log();
        let mut display = test_display(&log);
        display.host.fail_attach = true;
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        let result = display.bring_up(&mut delay);
        assert!(matches!(result, Err(Error::AttachFailed(MockError))));
        assert!(transmissions(&log).is_empty());
    }

    #[test]
    fn test_bring_up_backlight_failure() {
        let log = new_log();
        let mut backlight = MockLine::new(Line::Backlight, &log);
        backlight.fail_configure = true;
        let mut display = Display::new(MockHost::new(&log), test_config()).with_backlight(backlight);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        let result = display.bring_up(&mut delay);
        assert!(matches!(result, Err(Error::BacklightLine(MockError))));
        assert_eq!(transmissions(&log).len(), TRANSMISSIONS);
    }

    #[test]
    fn test_bring_up_uses_configured_channel() {
        let log = new_log();
        let config = Builder::new()
            .dimensions(Dimensions::new(480, 800).unwrap())
            .channel(3)
            .build()
            .unwrap();
        let mut display = Display::new(MockHost::new(&log), config);
        let mut delay = MockDelay {
            log: Rc::clone(&log),
        };

        display.bring_up(&mut delay).unwrap();
        assert!(log.borrow().iter().all(|event| match event {
            Event::Attach(channel, _) | Event::Generic(channel, _) | Event::Dcs(channel, _) =>
                *channel == 3,
            _ => true,
        }));
    }

    #[test]
    fn test_set_orientation_flags() {
        for (orientation, flags) in [
            (Orientation::Normal, 0b10),
            (Orientation::Rotated90, 0b01),
            (Orientation::Rotated180, 0b00),
            (Orientation::Rotated270, 0b11),
        ] {
            let log = new_log();
            let mut display = test_display(&log);
            display.set_orientation(orientation).unwrap();
            assert_eq!(*log.borrow(), [Event::Generic(0, vec![0x36, flags])]);
        }
    }

    #[test]
    fn test_set_orientation_degrees() {
        let log = new_log();
        let mut display = test_display(&log);

        display.set_orientation_degrees(270).unwrap();
        assert_eq!(*log.borrow(), [Event::Generic(0, vec![0x36, 0b11])]);

        let result = display.set_orientation_degrees(45);
        assert!(matches!(
            result,
            Err(Error::Unsupported(Operation::Orientation(45)))
        ));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_set_orientation_propagates_transport_error() {
        let log = new_log();
        let mut display = test_display(&log);
        display.host.fail_at = Some(1);

        let result = display.set_orientation(Orientation::Rotated180);
        assert!(matches!(
            result,
            Err(Error::TransmitFailed {
                stage: Stage::Control,
                command: 0x36,
                source: MockError
            })
        ));
    }

    #[test]
    fn test_set_pixel_format() {
        let log = new_log();
        let mut display = test_display(&log);

        assert!(display.set_pixel_format(PixelFormat::Rgb888).is_ok());
        assert!(display.set_pixel_format(PixelFormat::Rgb888).is_ok());
        for format in [
            PixelFormat::Rgb666,
            PixelFormat::Rgb666Packed,
            PixelFormat::Rgb565,
        ] {
            let result = display.set_pixel_format(format);
            assert!(matches!(
                result,
                Err(Error::Unsupported(Operation::PixelFormat(f))) if f == format
            ));
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_capabilities_ignore_orientation_changes() {
        let log = new_log();
        let mut display = test_display(&log);
        display.set_orientation(Orientation::Rotated90).unwrap();

        assert_eq!(
            display.capabilities(),
            Capabilities {
                x_resolution: 480,
                y_resolution: 800,
                supported_pixel_format: PixelFormat::Rgb888,
                current_pixel_format: PixelFormat::Rgb888,
                current_orientation: Orientation::Normal,
            }
        );
    }

    #[test]
    fn test_set_blanking_toggles_backlight() {
        let log = new_log();
        let mut display = test_display(&log);

        display.set_blanking(true).unwrap();
        display.set_blanking(false).unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Event::Set(Line::Backlight, LineState::Inactive),
                Event::Set(Line::Backlight, LineState::Active),
            ]
        );
    }

    #[test]
    fn test_set_blanking_without_backlight_is_unsupported() {
        let log = new_log();
        let mut display = Display::new(MockHost::new(&log), test_config());

        let result = display.set_blanking(true);
        assert!(matches!(
            result,
            Err(Error::Unsupported(Operation::Blanking))
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_blanking_propagates_line_error() {
        let log = new_log();
        let mut backlight = MockLine::new(Line::Backlight, &log);
        backlight.fail_set = true;
        let mut display = Display::new(MockHost::new(&log), test_config()).with_backlight(backlight);

        let result = display.set_blanking(true);
        assert!(matches!(result, Err(Error::BacklightLine(MockError))));
        assert!(log.borrow().is_empty());
        assert!(transmissions(&log).is_empty());
    }

    #[test]
    fn test_write_is_unsupported() {
        let log = new_log();
        let mut display = test_display(&log);
        let buf = [0u8; 12];
        let descriptor = BufferDescriptor {
            buf_size: buf.len(),
            width: 2,
            height: 2,
            pitch: 2,
        };

        let result = display.write(0, 0, &descriptor, &buf);
        assert!(matches!(result, Err(Error::Unsupported(Operation::Write))));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_set_tearing_effect() {
        let log = new_log();
        let mut display = test_display(&log);

        display.set_tearing_effect(TearingEffect::Vblank).unwrap();
        display.set_tearing_effect(TearingEffect::Off).unwrap();
        assert_eq!(
            *log.borrow(),
            [Event::Generic(0, vec![0x35, 0x00]), Event::Dcs(0, 0x34)]
        );
    }

    #[test]
    fn test_release_returns_parts() {
        let log = new_log();
        let display = test_display(&log);
        let (host, reset, backlight) = display.release();
        assert_eq!(host.sent, 0);
        assert!(reset.is_some());
        assert!(backlight.is_some());
    }
}
