//! Bring-up plan
//!
//! The vendor initialization is fixed data: two ordered lists of [`Step`]s that
//! the display executes one by one, stopping at the first failed transmission.
//!
//! - [`INIT_SEQUENCE`]: power, timing, gate-in-panel, gamma and VCOM setup
//! - [`LUT_SEQUENCE`]: the bank-switched digital gamma LUT writes
//!
//! ## Example
//!
//! ```
//! use hx8379::sequence::{Bank, Step, LUT_SEQUENCE};
//!
//! assert_eq!(LUT_SEQUENCE[0], Step::SelectBank(Bank::Two));
//! assert_eq!(Bank::Two.select_command(), [0xBD, 0x02]);
//! ```

use crate::command::SETBANK;
use crate::tables::*;

/// Low pulse held on the reset line before releasing it, in milliseconds
pub const RESET_PULSE_MS: u32 = 11;

/// Wait after releasing reset, in milliseconds
pub const RESET_SETTLE_MS: u32 = 120;

/// Wait between the gamma and VCOM blocks, in milliseconds
///
/// Not in the datasheet, but without it the panel stops responding to further
/// commands.
pub const VCOM_SETTLE_MS: u32 = 1;

/// Wait after exiting sleep mode, in milliseconds (datasheet minimum)
pub const SLEEP_OUT_MS: u32 = 120;

/// Wait after turning the display on, in milliseconds
pub const DISPLAY_ON_MS: u32 = 120;

/// Digital gamma LUT register bank
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bank {
    /// Red table and DGC enable
    Zero = 0x00,
    /// Green table
    One = 0x01,
    /// Blue table
    Two = 0x02,
}

impl Bank {
    /// Command block selecting this bank
    pub const fn select_command(self) -> [u8; 2] {
        [SETBANK, self as u8]
    }
}

/// One step of the bring-up plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Send a complete command block as one generic write
    Write(&'static [u8]),
    /// Select a LUT bank; must directly precede that bank's table write
    SelectBank(Bank),
    /// Wait before the next step
    DelayMs(u32),
}

impl Step {
    /// Command byte this step transmits, if any
    pub fn command(&self) -> Option<u8> {
        match self {
            Self::Write(block) => block.first().copied(),
            Self::SelectBank(_) => Some(SETBANK),
            Self::DelayMs(_) => None,
        }
    }
}

/// Vendor command pipeline, sent right after attaching to the host
pub const INIT_SEQUENCE: &[Step] = &[
    Step::Write(&ENABLE_EXTENSION),
    Step::Write(&POWER_CONFIG),
    Step::Write(&LINE_CONFIG),
    Step::Write(&CYCLE_CONFIG),
    Step::Write(&VENDOR_FIXUP_C7),
    Step::Write(&PANEL_CONFIG),
    Step::Write(&VENDOR_FIXUP_D2),
    Step::Write(&GIP0_CONFIG),
    Step::Write(&GIP1_CONFIG),
    Step::Write(&GIP2_CONFIG),
    Step::Write(&GAMMA_CONFIG),
    Step::DelayMs(VCOM_SETTLE_MS),
    Step::Write(&VCOM_CONFIG),
];

/// Digital gamma LUT programming
///
/// Bank 0 is selected twice: once to leave bank 2 before entering bank 1, and
/// once before the final red table, whose enable bit must land last.
pub const LUT_SEQUENCE: &[Step] = &[
    Step::SelectBank(Bank::Two),
    Step::Write(&BANK2_LUT),
    Step::SelectBank(Bank::Zero),
    Step::SelectBank(Bank::One),
    Step::Write(&BANK1_LUT),
    Step::SelectBank(Bank::Zero),
    Step::Write(&BANK0_LUT),
];

/// Number of transmissions in a plan
pub fn transmission_count(steps: &[Step]) -> usize {
    steps.iter().filter(|step| step.command().is_some()).count()
}
