//! Flicker
//!
//! Imitates a lamp with a loose connection. A weight takes a bounded random
//! walk over `0..=speed` and the lamp is on while the weight sits in the upper
//! half. Larger speeds flicker less often; 20 to 100 looks most natural.
//!
//! The strip is redrawn when the lamp flips, and once more on the initial
//! tick so the previous pattern does not linger until the first flip.

use embassy_time::Duration;
use rand::Rng;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{BLACK, Rgb, expand};
use crate::strip::RenderSink;

/// Fixed frame interval
pub const FLICKER_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct FlickerPattern {
    on: Rgb,
    off: Rgb,
    lit: bool,
    weight: i64,
}

impl Default for FlickerPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl FlickerPattern {
    pub const fn new() -> Self {
        Self {
            on: BLACK,
            off: BLACK,
            lit: false,
            weight: 0,
        }
    }

    /// Current position of the random walk
    pub const fn weight(&self) -> i64 {
        self.weight
    }

    /// Color shown while lit
    pub const fn on_color(&self) -> Rgb {
        self.on
    }

    /// Color shown while dark
    pub const fn off_color(&self) -> Rgb {
        self.off
    }

    /// Whether the strip currently shows the "on" color
    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}

impl Pattern for FlickerPattern {
    fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        initial: bool,
        a: Rgb,
        b: Rgb,
        speed: u32,
    ) -> Duration {
        let ceiling = i64::from(speed);
        let threshold = ceiling / 2;

        if initial {
            self.on = expand(a, ctx.rng);
            self.off = expand(b, ctx.rng);
            self.lit = false;
            self.weight = threshold;
        }

        self.weight += ctx.rng.gen_range(-1..=1);

        if self.weight < 0 {
            self.weight = 0;
            self.on = expand(a, ctx.rng);
        }
        if self.weight > ceiling {
            self.weight = ceiling;
            self.off = expand(b, ctx.rng);
        }

        let lit = self.weight >= threshold;
        if initial || lit != self.lit {
            self.lit = lit;
            ctx.strip.draw_solid(if lit { self.on } else { self.off });
        }

        FLICKER_INTERVAL
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
