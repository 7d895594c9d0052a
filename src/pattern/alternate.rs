//! Alternating pixels
//!
//! Even and odd pixels show colors A and B, swapping places every `speed`
//! milliseconds.

use embassy_time::Duration;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{Rgb, expand};
use crate::strip::RenderSink;

#[derive(Debug, Clone, Default)]
pub struct AlternatePattern {
    /// When set, odd pixels take color A
    swapped: bool,
}

impl AlternatePattern {
    pub const fn new() -> Self {
        Self { swapped: false }
    }
}

impl Pattern for AlternatePattern {
    fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        initial: bool,
        a: Rgb,
        b: Rgb,
        speed: u32,
    ) -> Duration {
        if initial {
            self.reset();
        }

        let a = expand(a, ctx.rng);
        let b = expand(b, ctx.rng);
        let swapped = self.swapped;
        let pixels = ctx.pixels();
        ctx.strip.draw_iter(
            (0..pixels).map(|index| if (index % 2 == 1) == swapped { a } else { b }),
        );

        self.swapped = !self.swapped;

        Duration::from_millis(u64::from(speed))
    }

    fn reset(&mut self) {
        self.swapped = false;
    }
}
