//! Fixed command blocks sent during bring-up
//!
//! Each table is a complete command block: the command byte followed by its
//! parameters, sent in a single generic write. Values come from the panel
//! vendor's reference initialization for the 480x800 module; tune them only
//! against a new panel revision.

use crate::command::*;

/// Unlock the extended command set
pub const ENABLE_EXTENSION: [u8; 4] = [SETEXTC, EXTC1_MAGIC, EXTC2_MAGIC, EXTC3_MAGIC];

/// Address mode for [`Orientation::Normal`](crate::Orientation::Normal)
///
/// This module scans mirrored on X, so the native orientation needs a
/// horizontal flip.
pub const NORMAL_ADDRESS_MODE: [u8; 2] = [SET_ADDRESS_MODE, FLIP_HORIZONTAL];

/// Voltage and current targets
pub const POWER_CONFIG: [u8; 17] = [
    SETPOWER,
    POWER_APF_EN | POWER_AP_2_0UA,                // 0x44
    POWER_VRHP_5_8V,                              // 0x1C
    POWER_VRHN_5_8V,                              // 0x1C
    POWER_EN_VSP_CLAMP | POWER_BTP_6_45V,         // 0x37
    POWER_XDK_X2_5 | POWER_BTN_6_45V,             // 0x57
    POWER_XDKN_X3 | POWER_EN_VSN_CLAMP,           // 0x90
    POWER_VCLS_3_1V | POWER_PMTU,                 // 0xD0
    POWER_VGH_RATIO_3VSPVSN | POWER_VGHS_13_2V,   // 0xE2
    POWER_VGL_RATIO_1VSNVSP | POWER_VGLS_11_2V,   // 0x58
    POWER_EN_NVREF,                               // 0x80
    POWER_VGH_17_6V,                              // 0x38
    POWER_VGL_17_6V,                              // 0x38
    POWER_CLK_OPT5_VCL_HSYNC_RST,                 // 0x80
    POWER_FS5_DIV_128 | POWER_FS4_DIV_128,        // 0x33
    POWER_FS3_DIV_128 | POWER_FS2_DIV_160,        // 0x34
    POWER_FS1_DIV_160 | POWER_FS0_DIV_8,          // 0x42
];

/// Display line count and front/back porch
pub const LINE_CONFIG: [u8; 10] = [
    SETDISP,
    DISP_ZZ_LR,
    DISP_NL_480,
    DISP_BP_14,
    DISP_FP_50,
    DISP_SAP_4,
    DISP_RTN_160,
    0x11,
    0x42,
    0x1D,
];

/// Display cycle counts, in TCON clocks
pub const CYCLE_CONFIG: [u8; 11] = [
    SETCYC,
    CYC_SPON_1,
    CYC_SPOFF_170,
    CYC_CON_1,
    CYC_COFF_175,
    CYC_CON1_1,
    CYC_COFF1_175,
    CYC_EQON1_64,
    CYC_EQON2_936,
    CYC_SON_112,
    CYC_SOFF_936,
];

/// Undocumented vendor block, required after the cycle setup
pub const VENDOR_FIXUP_C7: [u8; 5] = [0xC7, 0x00, 0x00, 0x00, 0xC0];

/// Panel related register: reversed source output
pub const PANEL_CONFIG: [u8; 2] = [SETPANEL, PANEL_REV];

/// Undocumented vendor block, required after the panel setup
pub const VENDOR_FIXUP_D2: [u8; 2] = [0xD2, 0x77];

/// Gate-in-panel group delays
pub const GIP0_CONFIG: [u8; 38] = [
    SETGIP0,
    0x00,
    GIP0_EQ_DELAY_56,
    0x00, 0x00, 0x00,
    0x08, // USER_GIP_GATE
    0x08, // USER_GIP_GATE1
    0x32, 0x10,
    0x01, // SHR0
    0x00, 0x01, 0x03, 0x72, 0x03, 0x72, 0x00, 0x08,
    0x00, 0x08, 0x33, 0x33, 0x05, 0x05, 0x37, 0x05,
    0x05, 0x37, 0x0A, 0x00, 0x00, 0x00, 0x0A, 0x00,
    0x01, 0x00, 0x0E,
];

/// Gate-in-panel clock selection, forward scan
pub const GIP1_CONFIG: [u8; 35] = [
    SETGIP1,
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x19, 0x19, 0x18, 0x18, 0x18, 0x18, 0x19, 0x19,
    0x01, 0x00, 0x03, 0x02, 0x05, 0x04, 0x07, 0x06,
    0x23, 0x22, 0x21, 0x20, 0x18, 0x18, 0x18, 0x18,
    0x00, 0x00,
];

/// Gate-in-panel clock selection, GS mode
pub const GIP2_CONFIG: [u8; 33] = [
    SETGIP2,
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x19, 0x19, 0x18, 0x18, 0x19, 0x19, 0x18, 0x18,
    0x06, 0x07, 0x04, 0x05, 0x02, 0x03, 0x00, 0x01,
    0x20, 0x21, 0x22, 0x23, 0x18, 0x18, 0x18, 0x18,
];

/// Analog gamma curve, positive polarity then negative polarity
///
/// Each half is VR0..VR5, PR0..PR1, PK0..PK12.
pub const GAMMA_CONFIG: [u8; 43] = [
    SETGAMMA,
    // positive
    0x00, 0x16, 0x1B, 0x30, 0x36, 0x3F, // VRP0-5
    0x24, 0x40, // PRP0-1
    0x09, 0x0D, 0x0F, 0x18, 0x0E, 0x11, 0x12, 0x11, 0x14, 0x07, 0x12, 0x13, 0x18, // PKP0-12
    // negative
    0x00, 0x17, 0x1C, 0x30, 0x36, 0x3F, // VRN0-5
    0x24, 0x40, // PRN0-1
    0x09, 0x0C, 0x0F, 0x18, 0x0E, 0x11, 0x14, 0x11, 0x12, 0x07, 0x12, 0x14, 0x18, // PKN0-12
];

/// VCOM voltage, forward and backward scan
pub const VCOM_CONFIG: [u8; 4] = [SETVCOM, VCOM_F_0_74V, VCOM_B_0_74V, 0x00];

/// Tearing effect on during V-blanking
pub const TEAR_CONFIG: [u8; 2] = [SET_TEAR_ON, TEAR_VBLANK];

/// Blue digital gamma LUT, written after selecting bank 2
///
/// 33 entries of bits [9:2], then 9 bytes packing bits [1:0] four entries per byte.
pub const BANK2_LUT: [u8; 43] = [
    SETDGCLUT,
    0x00, 0x09, 0x0F, 0x18, 0x21, 0x2A, 0x34, 0x3C, // B_GAMMA0-7
    0x45, 0x4C, 0x56, 0x5E, 0x66, 0x6E, 0x76, 0x7E, // B_GAMMA8-15
    0x87, 0x8E, 0x95, 0x9D, 0xA6, 0xAF, 0xB7, 0xBD, // B_GAMMA16-23
    0xC5, 0xCE, 0xD5, 0xDF, 0xE7, 0xEE, 0xF4, 0xFA, // B_GAMMA24-31
    0xFF, // B_GAMMA32
    0x0C, 0x31, 0x83, 0x3C, 0x5B, 0x56, 0x1E, 0x5A, 0xFF, // low bits
];

/// Green digital gamma LUT, written after selecting bank 1
pub const BANK1_LUT: [u8; 43] = [
    SETDGCLUT,
    0x00, 0x08, 0x0F, 0x16, 0x1F, 0x28, 0x31, 0x39, // G_GAMMA0-7
    0x41, 0x48, 0x51, 0x59, 0x60, 0x68, 0x70, 0x78, // G_GAMMA8-15
    0x7F, 0x87, 0x8D, 0x94, 0x9C, 0xA3, 0xAB, 0xB3, // G_GAMMA16-23
    0xB9, 0xC1, 0xC8, 0xD0, 0xD8, 0xE0, 0xE8, 0xEE, // G_GAMMA24-31
    0xF5, // G_GAMMA32
    0x3B, 0x1A, 0xB6, 0xA0, 0x07, 0x45, 0xC5, 0x37, 0x00, // low bits
];

/// Red digital gamma LUT, written after the final bank 0 select
///
/// Leads with [`DGC_EN`], which turns the whole digital gamma function on.
pub const BANK0_LUT: [u8; 44] = [
    SETDGCLUT,
    DGC_EN,
    0x00, 0x07, 0x0F, 0x16, 0x1F, 0x27, 0x30, 0x38, // R_GAMMA0-7
    0x40, 0x47, 0x4E, 0x56, 0x5D, 0x65, 0x6D, 0x74, // R_GAMMA8-15
    0x7D, 0x84, 0x8A, 0x90, 0x99, 0xA1, 0xA9, 0xB0, // R_GAMMA16-23
    0xB6, 0xBD, 0xC4, 0xCD, 0xD4, 0xDD, 0xE5, 0xEC, // R_GAMMA24-31
    0xF3, // R_GAMMA32
    0x36, 0x07, 0x1C, 0xC0, 0x1B, 0x01, 0xF1, 0x34, 0x00, // low bits
];
