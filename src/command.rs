//! HX8379 command definitions
//!
//! This module defines the command bytes and parameter bit fields used to
//! configure the HX8379 controller. Vendor commands are sent as DSI generic
//! writes where byte 0 is the command and the remaining bytes are parameters.
//! Standard MIPI DCS commands (sleep, display on/off, tearing) are sent through
//! [`DsiHost::dcs_write`](crate::interface::DsiHost::dcs_write).
//!
//! Most vendor commands are locked until [`SETEXTC`] is written with the magic
//! bytes [`EXTC1_MAGIC`], [`EXTC2_MAGIC`], [`EXTC3_MAGIC`].
//!
//! ## Example
//!
//! ```rust
//! use hx8379::command;
//!
//! // Tearing effect on, signalled during vertical blanking
//! let block = [command::SET_TEAR_ON, command::TEAR_VBLANK];
//! assert_eq!(block, [0x35, 0x00]);
//! ```

// MIPI DCS commands

/// Exit sleep mode (0x11)
///
/// The panel needs 120ms after this command before it accepts display on.
pub const EXIT_SLEEP_MODE: u8 = 0x11;

/// Display on (0x29)
pub const SET_DISPLAY_ON: u8 = 0x29;

/// Tearing effect line off (0x34)
pub const SET_TEAR_OFF: u8 = 0x34;

/// Tearing effect line on (0x35)
///
/// Requires 1 byte: [`TEAR_VBLANK`] to signal V-blanking only.
pub const SET_TEAR_ON: u8 = 0x35;

/// Tearing effect signalled on V-blanking only
pub const TEAR_VBLANK: u8 = 0x00;

/// Set address mode (0x36)
///
/// Controls the scan direction of the driver. Requires 1 byte:
/// - Bit 0: vertical flip
/// - Bit 1: horizontal flip
pub const SET_ADDRESS_MODE: u8 = 0x36;

/// Flip the image vertically
pub const FLIP_VERTICAL: u8 = 1 << 0;

/// Flip the image horizontally
pub const FLIP_HORIZONTAL: u8 = 1 << 1;

// Extended command set

/// Enable extended commands (0xB9)
///
/// Requires 3 magic bytes: 0xFF, 0x83, 0x79
pub const SETEXTC: u8 = 0xB9;
/// First extension unlock byte
pub const EXTC1_MAGIC: u8 = 0xFF;
/// Second extension unlock byte
pub const EXTC2_MAGIC: u8 = 0x83;
/// Third extension unlock byte
pub const EXTC3_MAGIC: u8 = 0x79;

// Power (0xB1), 16 parameter bytes

/// Set power (0xB1)
///
/// Voltage and current targets for the analog stage.
pub const SETPOWER: u8 = 0xB1;
/// Source op-amp current 2.0uA
pub const POWER_AP_2_0UA: u8 = 0x04;
/// Enable op-amp fast mode
pub const POWER_APF_EN: u8 = 0x40;
/// VRHP 5.8V
pub const POWER_VRHP_5_8V: u8 = 0x1C;
/// VRHN -5.8V
pub const POWER_VRHN_5_8V: u8 = 0x1C;
/// Positive booster 6.45V
pub const POWER_BTP_6_45V: u8 = 0x17;
/// Clamp VSP
pub const POWER_EN_VSP_CLAMP: u8 = 0x20;
/// Negative booster 6.45V
pub const POWER_BTN_6_45V: u8 = 0x17;
/// VSP pump ratio x2.5
pub const POWER_XDK_X2_5: u8 = 0x40;
/// VSN pump ratio x3
pub const POWER_XDKN_X3: u8 = 0x80;
/// Clamp VSN
pub const POWER_EN_VSN_CLAMP: u8 = 0x10;
/// VCL -3.1V
pub const POWER_VCLS_3_1V: u8 = 0xC0;
/// Power mode tuning
pub const POWER_PMTU: u8 = 0x10;
/// VGH = 3 * VSP - VSN
pub const POWER_VGH_RATIO_3VSPVSN: u8 = 0xC0;
/// VGH clamp 13.2V
pub const POWER_VGHS_13_2V: u8 = 0x22;
/// VGL = VSN - VSP
pub const POWER_VGL_RATIO_1VSNVSP: u8 = 0x40;
/// VGL clamp -11.2V
pub const POWER_VGLS_11_2V: u8 = 0x18;
/// Enable negative reference
pub const POWER_EN_NVREF: u8 = 0x80;
/// VGH 17.6V
pub const POWER_VGH_17_6V: u8 = 0x38;
/// VGL -17.6V
pub const POWER_VGL_17_6V: u8 = 0x38;
/// VCL clock reset on HSYNC
pub const POWER_CLK_OPT5_VCL_HSYNC_RST: u8 = 0x80;
/// Pump clock FS0 = osc / 8
pub const POWER_FS0_DIV_8: u8 = 0x02;
/// Pump clock FS1 = osc / 160
pub const POWER_FS1_DIV_160: u8 = 0x40;
/// Pump clock FS2 = osc / 160
pub const POWER_FS2_DIV_160: u8 = 0x04;
/// Pump clock FS3 = osc / 128
pub const POWER_FS3_DIV_128: u8 = 0x30;
/// Pump clock FS4 = osc / 128
pub const POWER_FS4_DIV_128: u8 = 0x03;
/// Pump clock FS5 = osc / 128
pub const POWER_FS5_DIV_128: u8 = 0x30;

// Display line setup (0xB2)

/// Set display related register (0xB2)
pub const SETDISP: u8 = 0xB2;
/// Zig-zag source scan, left to right
pub const DISP_ZZ_LR: u8 = 0x80;
/// 480 source lines
pub const DISP_NL_480: u8 = 0x14;
/// Back porch 14 lines
pub const DISP_BP_14: u8 = 0x0C;
/// Front porch 50 lines
pub const DISP_FP_50: u8 = 0x30;
/// Source amplifier 4 units
pub const DISP_SAP_4: u8 = 0x20;
/// 160 clocks per line
pub const DISP_RTN_160: u8 = 0x50;

// Display cycle (0xB4), values in TCON clocks

/// Set display waveform cycle (0xB4)
pub const SETCYC: u8 = 0xB4;
/// Source on at 1
pub const CYC_SPON_1: u8 = 0x01;
/// Source off at 170
pub const CYC_SPOFF_170: u8 = 0xAA;
/// Column on at 1
pub const CYC_CON_1: u8 = 0x01;
/// Column off at 175
pub const CYC_COFF_175: u8 = 0xAF;
/// Column 1 on at 1
pub const CYC_CON1_1: u8 = 0x01;
/// Column 1 off at 175
pub const CYC_COFF1_175: u8 = 0xAF;
/// First equalize on at 64
pub const CYC_EQON1_64: u8 = 0x10;
/// Second equalize on at 936
pub const CYC_EQON2_936: u8 = 0xEA;
/// Source on at 112
pub const CYC_SON_112: u8 = 0x1C;
/// Source off at 936
pub const CYC_SOFF_936: u8 = 0xEA;

// Panel (0xCC)

/// Set panel related register (0xCC)
pub const SETPANEL: u8 = 0xCC;
/// BGR color filter order
pub const PANEL_BGR: u8 = 1 << 0;
/// Reverse source output
pub const PANEL_REV: u8 = 1 << 1;
/// Reverse gate scan
pub const PANEL_GS: u8 = 1 << 2;
/// Reverse source scan
pub const PANEL_SS: u8 = 1 << 3;

// Gate-in-panel timing

/// Set GIP option 0 (0xD3)
pub const SETGIP0: u8 = 0xD3;
/// Equalize delay of 56 clocks
pub const GIP0_EQ_DELAY_56: u8 = 0x07;
/// Set GIP option 1, forward scan clock mapping (0xD5)
pub const SETGIP1: u8 = 0xD5;
/// Set GIP option 2, GS mode clock mapping (0xD6)
pub const SETGIP2: u8 = 0xD6;

// Gamma and VCOM

/// Set gamma curve (0xE0)
pub const SETGAMMA: u8 = 0xE0;

/// Set VCOM voltage (0xB6)
pub const SETVCOM: u8 = 0xB6;
/// Forward VCOM -0.74V
pub const VCOM_F_0_74V: u8 = 0x2C;
/// Backward VCOM -0.74V
pub const VCOM_B_0_74V: u8 = 0x92;

// Digital gamma LUT

/// Select register bank (0xBD)
///
/// Requires 1 byte: bank number 0, 1 or 2.
pub const SETBANK: u8 = 0xBD;

/// Set digital gamma curve LUT (0xC1)
///
/// Bank 0 carries the red table (plus the enable bit),
/// bank 1 the green table and bank 2 the blue table.
pub const SETDGCLUT: u8 = 0xC1;

/// Enable the digital gamma curve function (first bank 0 parameter)
pub const DGC_EN: u8 = 0x01;
