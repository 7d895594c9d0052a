//! Pulse between two colors
//!
//! A counter walks from 0 to 127 and back. The strip shows the mix of the
//! left and right colors at `counter / 127`. Whenever the counter hits a
//! bound, the color on that end is picked again, so sentinel colors get a
//! new random value once per sweep.

use embassy_time::Duration;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{BLACK, Rgb, expand, mix_colors};
use crate::strip::RenderSink;

/// Steps in one sweep from left to right
pub const PULSE_STEPS: u8 = 0x7F;

#[derive(Debug, Clone)]
pub struct PulsePattern {
    left: Rgb,
    right: Rgb,
    rising: bool,
    step: u8,
}

impl Default for PulsePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PulsePattern {
    pub const fn new() -> Self {
        Self {
            left: BLACK,
            right: BLACK,
            rising: true,
            step: 0,
        }
    }

    /// Current position of the sweep, `0..=127`
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// True while the sweep moves towards the right color
    pub const fn is_rising(&self) -> bool {
        self.rising
    }
}

impl Pattern for PulsePattern {
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

        if self.step >= PULSE_STEPS {
            self.rising = false;
            self.left = expand(a, ctx.rng);
        }
        if self.step == 0 {
            self.rising = true;
            self.right = expand(b, ctx.rng);
        }

        let ratio = f32::from(self.step) / f32::from(PULSE_STEPS);
        ctx.strip.draw_solid(mix_colors(self.left, self.right, ratio));

        if self.rising {
            self.step += 1;
        } else {
            self.step -= 1;
        }

        Duration::from_millis(u64::from(speed / u32::from(PULSE_STEPS)))
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
