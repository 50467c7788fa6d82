//! embedded-graphics integration
//!
//! Frames reach the panel through the DSI host's framebuffer, so the driver
//! does not implement `DrawTarget`. It does report its size, which lets a
//! framebuffer-backed `DrawTarget` on the host side size itself from the panel.

use embedded_graphics_core::geometry::{OriginDimensions, Size};

use crate::display::Display;
use crate::interface::{ControlLine, DsiHost};

impl<H, RST, BL> OriginDimensions for Display<H, RST, BL>
where
    H: DsiHost,
    RST: ControlLine,
    BL: ControlLine,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}
