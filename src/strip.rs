//! Strip of a fixed length on top of a [`RenderSink`]

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, CHANNEL_MAX, Rgb};
use crate::error::ConfigError;

/// Number of zero bytes in the end-of-frame latch for `pixels` pixels
pub const fn latch_len(pixels: usize) -> usize {
    pixels.div_ceil(32) * 8
}

/// Receiver of rendered pixels
///
/// Implement this trait to support different buses. Pixels arrive in strip
/// order and a frame is committed by the latch.
pub trait RenderSink {
    /// Emit one pixel
    fn draw_pixel(&mut self, color: Rgb);

    /// Commit the frame of `pixels` pixels drawn since the previous latch
    fn issue_latch(&mut self, pixels: usize);

    /// Draw every pixel in one color and latch
    fn draw_solid(&mut self, color: Rgb, pixels: usize) {
        for _ in 0..pixels {
            self.draw_pixel(color);
        }
        self.issue_latch(pixels);
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw_pixel(&mut self, color: Rgb) {
        (**self).draw_pixel(color);
    }

    fn issue_latch(&mut self, pixels: usize) {
        (**self).issue_latch(pixels);
    }

    fn draw_solid(&mut self, color: Rgb, pixels: usize) {
        (**self).draw_solid(color, pixels);
    }
}

#[inline]
const fn to_wire_range(color: Rgb) -> Rgb {
    Rgb {
        r: color.r & CHANNEL_MAX,
        g: color.g & CHANNEL_MAX,
        b: color.b & CHANNEL_MAX,
    }
}

/// A render sink bound to a fixed pixel count
///
/// Every color handed to the sink is cut down to 7 bits per channel.
#[derive(Debug)]
pub struct Strip<S: RenderSink> {
    sink: S,
    pixels: usize,
}

impl<S: RenderSink> Strip<S> {
    /// Create a strip of `pixels` pixels
    ///
    /// Fails with [`ConfigError::NoPixels`] for an empty strip.
    pub fn new(sink: S, pixels: usize) -> Result<Self, ConfigError> {
        if pixels == 0 {
            return Err(ConfigError::NoPixels);
        }
        Ok(Self { sink, pixels })
    }

    /// Number of pixels on the strip
    pub const fn pixels(&self) -> usize {
        self.pixels
    }

    /// Emit one pixel without latching
    pub fn draw_pixel(&mut self, color: Rgb) {
        self.sink.draw_pixel(to_wire_range(color));
    }

    /// Commit the current frame
    pub fn latch(&mut self) {
        self.sink.issue_latch(self.pixels);
    }

    /// Fill the strip with one color
    pub fn draw_solid(&mut self, color: Rgb) {
        self.sink.draw_solid(to_wire_range(color), self.pixels);
    }

    /// Draw `frame` pixel by pixel and latch
    ///
    /// The frame is expected to hold exactly [`Self::pixels`] colors.
    pub fn draw_frame(&mut self, frame: &[Rgb]) {
        self.draw_iter(frame.iter().copied());
    }

    /// Draw the colors yielded by `colors` and latch
    pub fn draw_iter<I: IntoIterator<Item = Rgb>>(&mut self, colors: I) {
        for color in colors {
            self.draw_pixel(color);
        }
        self.latch();
    }

    /// Reset the bus and blank the strip
    pub fn clear(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Strip.clear] blanking {} pixels", self.pixels);

        self.latch();
        self.draw_solid(BLACK);
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the underlying sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}
