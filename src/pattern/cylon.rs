//! Scanning eye
//!
//! One bright pixel flanked by two softened edge pixels sweeps back and forth
//! over a background. The sweep takes roughly `speed` milliseconds per round
//! trip and lingers at both ends.

use embassy_time::Duration;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{BLACK, Rgb, expand, mix_colors};
use crate::strip::RenderSink;

/// Share of the background in the edge pixels
const EDGE_RATIO: f32 = 0.95;

/// Delay multiplier on the frame where the eye turns around
const BOUNCE_SLOWDOWN: u64 = 3;

#[derive(Debug, Clone)]
pub struct CylonPattern {
    forward: bool,
    eye: usize,
    center: Rgb,
    edge: Rgb,
    background: Rgb,
}

impl Default for CylonPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl CylonPattern {
    pub const fn new() -> Self {
        Self {
            forward: true,
            eye: 0,
            center: BLACK,
            edge: BLACK,
            background: BLACK,
        }
    }

    /// Pixel index the eye will be drawn at on the next frame
    pub const fn eye(&self) -> usize {
        self.eye
    }

    fn color_at(&self, index: usize) -> Rgb {
        if index == self.eye {
            self.center
        } else if index + 1 == self.eye || index == self.eye + 1 {
            self.edge
        } else {
            self.background
        }
    }
}

impl Pattern for CylonPattern {
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
            self.center = expand(a, ctx.rng);
            self.background = expand(b, ctx.rng);
            self.edge = mix_colors(self.center, self.background, EDGE_RATIO);
        }

        let pixels = ctx.pixels();
        let last = pixels.saturating_sub(1);
        let mut delay = u64::from(speed) / (pixels as u64 * 2).max(1);

        if self.eye >= last {
            self.forward = false;
            delay *= BOUNCE_SLOWDOWN;
        } else if self.eye == 0 {
            self.forward = true;
            delay *= BOUNCE_SLOWDOWN;
        }

        let this = &*self;
        ctx.strip.draw_iter((0..pixels).map(|index| this.color_at(index)));

        // A single pixel strip has nowhere to move.
        if last > 0 {
            if self.forward {
                self.eye += 1;
            } else {
                self.eye -= 1;
            }
        }

        Duration::from_millis(delay)
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
