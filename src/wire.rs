//! Bus glue for the 7-bit strip protocol
//!
//! Each pixel travels as three bytes in green, red, blue order with the high
//! bit set as a framing marker. A run of zero bytes latches the frame.

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::color::{CHANNEL_MAX, Rgb};
use crate::strip::{RenderSink, latch_len};

/// High bit set on every color byte
pub const FRAME_BIT: u8 = 0x80;

/// Encode one pixel as it goes on the wire
pub const fn encode_pixel(color: Rgb) -> [u8; 3] {
    [color.g | FRAME_BIT, color.r | FRAME_BIT, color.b | FRAME_BIT]
}

/// Byte-at-a-time bus, usually a blocking SPI transfer
pub trait ByteBus {
    fn transfer(&mut self, byte: u8);
}

impl<F: FnMut(u8)> ByteBus for F {
    fn transfer(&mut self, byte: u8) {
        self(byte);
    }
}

/// Render sink speaking the 7-bit protocol over a [`ByteBus`]
#[derive(Debug)]
pub struct SpiSink<B: ByteBus> {
    bus: B,
}

impl<B: ByteBus> SpiSink<B> {
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B: ByteBus> RenderSink for SpiSink<B> {
    fn draw_pixel(&mut self, color: Rgb) {
        for byte in encode_pixel(color) {
            self.bus.transfer(byte);
        }
    }

    fn issue_latch(&mut self, pixels: usize) {
        for _ in 0..latch_len(pixels) {
            self.bus.transfer(0);
        }
    }
}

/// Stretch a 7-bit channel over the full 8-bit range
#[inline]
pub const fn widen_channel(value: u8) -> u8 {
    let value = value & CHANNEL_MAX;
    (value << 1) | (value >> 6)
}

/// Stretch a 7-bit color over the full 8-bit range
pub const fn widen(color: Rgb) -> Rgb {
    Rgb {
        r: widen_channel(color.r),
        g: widen_channel(color.g),
        b: widen_channel(color.b),
    }
}

/// Render sink feeding a [`SmartLedsWrite`] driver
///
/// Pixels are buffered until the latch and then written as one frame,
/// widened to 8-bit channels. Pixels beyond `N` are dropped.
pub struct BufferedSink<W, const N: usize>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    writer: W,
    frame: Vec<Rgb, N>,
    error: Option<W::Error>,
}

impl<W, const N: usize> BufferedSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            frame: Vec::new(),
            error: None,
        }
    }

    /// Take the error of the most recent failed write, if any
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> RenderSink for BufferedSink<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn draw_pixel(&mut self, color: Rgb) {
        let _ = self.frame.push(widen(color));
    }

    fn issue_latch(&mut self, _pixels: usize) {
        if let Err(error) = self.writer.write(self.frame.iter().copied()) {
            self.error = Some(error);
        }
        self.frame.clear();
    }
}
